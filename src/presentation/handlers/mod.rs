mod health;
mod jobs;

pub use health::health_handler;
pub use jobs::{ErrorResponse, LIST_JOBS_ERROR, list_jobs_handler};
