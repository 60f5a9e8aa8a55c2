use std::sync::Arc;

use crate::application::ports::{JobPostingRepository, RepositoryError};
use crate::domain::JobPosting;

pub struct ListingService {
    repository: Arc<dyn JobPostingRepository>,
}

impl ListingService {
    pub fn new(repository: Arc<dyn JobPostingRepository>) -> Self {
        Self { repository }
    }

    /// All postings, newest first. No filtering or paging happens here.
    pub async fn list_jobs(&self) -> Result<Vec<JobPosting>, ListingError> {
        let postings = self.repository.list_newest_first().await?;
        tracing::debug!(count = postings.len(), "Listed job postings");
        Ok(postings)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("storage: {0}")]
    Storage(#[from] RepositoryError),
}
