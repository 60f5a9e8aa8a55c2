use async_trait::async_trait;

/// Source of the raw listing document the board loads from.
#[async_trait]
pub trait ListingFeed: Send + Sync {
    async fn fetch_listing(&self) -> Result<serde_json::Value, FeedError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("server responded {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid body: {0}")]
    InvalidBody(String),
}
