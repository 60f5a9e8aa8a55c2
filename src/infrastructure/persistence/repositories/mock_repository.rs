use std::sync::Mutex;

use crate::application::ports::{JobPostingRepository, RepositoryError};
use crate::domain::JobPosting;

/// In-memory repository. Serves its postings newest first.
#[derive(Default)]
pub struct MockJobPostingRepository {
    postings: Mutex<Vec<JobPosting>>,
}

impl MockJobPostingRepository {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self {
            postings: Mutex::new(postings),
        }
    }

    pub fn insert(&self, posting: JobPosting) {
        if let Ok(mut postings) = self.postings.lock() {
            postings.push(posting);
        }
    }
}

#[async_trait::async_trait]
impl JobPostingRepository for MockJobPostingRepository {
    async fn list_newest_first(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        let postings = self
            .postings
            .lock()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let mut listed = postings.clone();
        listed.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(listed)
    }
}

/// Repository whose every read fails, for exercising error paths.
pub struct FailingJobPostingRepository;

#[async_trait::async_trait]
impl JobPostingRepository for FailingJobPostingRepository {
    async fn list_newest_first(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        Err(RepositoryError::QueryFailed(
            "relation \"job\" does not exist".to_string(),
        ))
    }
}
