mod job_posting;
mod job_type;
mod local_key;

pub use job_posting::{JUST_POSTED, JobPosting};
pub use job_type::JobType;
pub use local_key::{LocalKey, PostingOrigin};
