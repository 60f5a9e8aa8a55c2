mod create_job_form;
mod job_board;
mod listing_service;
mod posting_filters;

pub use create_job_form::{CreateJobForm, FormError, JobDraft};
pub use job_board::{JobBoard, ListingStatus};
pub use listing_service::{ListingError, ListingService};
pub use posting_filters::{
    DEFAULT_SALARY_CEILING, DEFAULT_SALARY_FLOOR, PostingFilters, SalaryBounds,
};
