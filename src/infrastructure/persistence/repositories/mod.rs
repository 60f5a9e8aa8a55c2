mod mock_repository;
mod pg_job_posting_repository;

pub use mock_repository::{FailingJobPostingRepository, MockJobPostingRepository};
pub use pg_job_posting_repository::PgJobPostingRepository;
