use crate::application::services::{JobBoard, SalaryBounds};
use crate::infrastructure::http::HttpListingFeed;
use crate::presentation::config::ListingSettings;

/// Builds job boards wired to a listing service from configuration.
pub struct BoardClient {
    feed: HttpListingFeed,
    bounds: SalaryBounds,
}

impl BoardClient {
    pub fn from_settings(settings: &ListingSettings) -> Self {
        Self {
            feed: HttpListingFeed::new(settings.service_url.as_str()),
            bounds: settings.salary_bounds(),
        }
    }

    pub fn feed(&self) -> &HttpListingFeed {
        &self.feed
    }

    /// An empty board using the configured salary bounds.
    pub fn new_board(&self) -> JobBoard {
        JobBoard::new(self.bounds)
    }

    /// A board after its one fetch from the listing service.
    pub async fn open_board(&self) -> JobBoard {
        let mut board = self.new_board();
        board.load(&self.feed).await;
        board
    }
}
