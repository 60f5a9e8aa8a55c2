mod job_posting_repository;
mod listing_feed;
mod repository_error;

pub use job_posting_repository::JobPostingRepository;
pub use listing_feed::{FeedError, ListingFeed};
pub use repository_error::RepositoryError;
