mod pg_pool;
mod repositories;

pub use repositories::FailingJobPostingRepository;
pub use repositories::MockJobPostingRepository;
pub use repositories::PgJobPostingRepository;

pub use pg_pool::{create_pool, run_migrations};
