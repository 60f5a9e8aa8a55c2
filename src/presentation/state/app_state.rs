use std::sync::Arc;

use crate::application::ports::JobPostingRepository;
use crate::application::services::ListingService;

#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<ListingService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn JobPostingRepository>) -> Self {
        Self {
            listing_service: Arc::new(ListingService::new(repository)),
        }
    }
}
