use std::sync::Arc;

use jobboard::application::services::{ListingError, ListingService};
use jobboard::infrastructure::persistence::{
    FailingJobPostingRepository, MockJobPostingRepository,
};

use crate::helpers::sample_postings;

#[tokio::test]
async fn given_stored_postings_when_listing_then_newest_first() {
    let mut stored = sample_postings();
    stored.reverse();
    let service = ListingService::new(Arc::new(MockJobPostingRepository::new(stored)));

    let listed = service.list_jobs().await.unwrap();

    let ids: Vec<i64> = listed.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
}

#[tokio::test]
async fn given_empty_storage_when_listing_then_empty() {
    let service = ListingService::new(Arc::new(MockJobPostingRepository::default()));

    assert!(service.list_jobs().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_failing_storage_when_listing_then_storage_error() {
    let service = ListingService::new(Arc::new(FailingJobPostingRepository));

    let result = service.list_jobs().await;

    assert!(matches!(result, Err(ListingError::Storage(_))));
}
