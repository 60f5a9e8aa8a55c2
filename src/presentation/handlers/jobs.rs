use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

pub const LIST_JOBS_ERROR: &str = "Failed to fetch jobs";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /jobs`: every posting, newest first. Storage errors are logged and
/// answered with a generic message.
#[tracing::instrument(skip(state))]
pub async fn list_jobs_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.listing_service.list_jobs().await {
        Ok(postings) => (StatusCode::OK, Json(postings)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch jobs");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: LIST_JOBS_ERROR.to_string(),
                }),
            )
                .into_response()
        }
    }
}
