mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{DatabaseSettings, ListingSettings, LoggingSettings, ServerSettings, Settings};
