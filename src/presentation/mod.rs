pub mod client;
pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use client::BoardClient;
pub use config::{Environment, ListingSettings, Settings};
pub use router::create_router;
pub use state::AppState;
