use async_trait::async_trait;

use crate::domain::JobPosting;

use super::RepositoryError;

/// Read access to stored job postings.
#[async_trait]
pub trait JobPostingRepository: Send + Sync {
    /// Every posting, descending by id.
    async fn list_newest_first(&self) -> Result<Vec<JobPosting>, RepositoryError>;
}
