use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{FeedError, ListingFeed};

/// Reads the job listing from a running listing service over HTTP.
pub struct HttpListingFeed {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpListingFeed {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn jobs_url(&self) -> String {
        format!("{}/jobs", self.base_url)
    }
}

#[async_trait]
impl ListingFeed for HttpListingFeed {
    async fn fetch_listing(&self) -> Result<serde_json::Value, FeedError> {
        let response = self
            .client
            .get(self.jobs_url())
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(FeedError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| FeedError::InvalidBody(e.to_string()))
    }
}
