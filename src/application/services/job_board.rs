use crate::application::ports::{FeedError, ListingFeed};
use crate::domain::JobPosting;

use super::{CreateJobForm, FormError, PostingFilters, SalaryBounds};

/// What the last fetch produced, so callers can tell an empty board from a
/// failed one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListingStatus {
    #[default]
    NotLoaded,
    Loaded,
    Malformed,
    Failed(String),
}

/// Client-side view of the job board: fetched postings, filters and the
/// create form.
#[derive(Debug, Clone, Default)]
pub struct JobBoard {
    jobs: Vec<JobPosting>,
    pub filters: PostingFilters,
    pub form: CreateJobForm,
    status: ListingStatus,
}

impl JobBoard {
    pub fn new(bounds: SalaryBounds) -> Self {
        Self {
            jobs: Vec::new(),
            filters: PostingFilters::new(bounds),
            form: CreateJobForm::default(),
            status: ListingStatus::NotLoaded,
        }
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    /// Fetches the listing once and replaces the board's postings.
    pub async fn load(&mut self, feed: &dyn ListingFeed) -> &ListingStatus {
        let result = feed.fetch_listing().await;
        self.apply_fetch(result)
    }

    pub fn apply_fetch(&mut self, result: Result<serde_json::Value, FeedError>) -> &ListingStatus {
        match result {
            Ok(value @ serde_json::Value::Array(_)) => {
                match serde_json::from_value::<Vec<JobPosting>>(value) {
                    Ok(jobs) => {
                        tracing::debug!(count = jobs.len(), "Loaded job listing");
                        self.jobs = jobs;
                        self.status = ListingStatus::Loaded;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Listing entries are not job postings");
                        self.jobs.clear();
                        self.status = ListingStatus::Malformed;
                    }
                }
            }
            Ok(_) => {
                tracing::warn!("Listing response is not a sequence");
                self.jobs.clear();
                self.status = ListingStatus::Malformed;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching jobs");
                self.jobs.clear();
                self.status = ListingStatus::Failed(e.to_string());
            }
        }
        &self.status
    }

    /// Postings that pass the current filters, in fetch order.
    pub fn visible(&self) -> Vec<&JobPosting> {
        self.filters.apply(&self.jobs)
    }

    pub fn reset_filters(&mut self) {
        self.filters = PostingFilters::new(self.filters.bounds());
    }

    /// Turns the open draft into a local posting at the front of the board.
    /// Nothing is sent to the listing service.
    pub fn submit_form(&mut self) -> Result<&JobPosting, FormError> {
        let draft = self.form.submit()?;
        let id = self.jobs.len() as i64 + 1;
        self.jobs.insert(0, draft.into_posting(id));
        tracing::debug!(id, "Added local job posting");
        Ok(&self.jobs[0])
    }

    pub fn pending_jobs(&self) -> impl Iterator<Item = &JobPosting> {
        self.jobs.iter().filter(|j| j.is_pending())
    }
}
