use anyhow::Context;

use jobboard::application::services::ListingStatus;
use jobboard::infrastructure::observability::{TracingConfig, init_tracing};
use jobboard::presentation::{BoardClient, Environment, ListingSettings};

/// Loads the board from the configured listing service and prints what the
/// default filters show.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let listing = ListingSettings::load(environment).context("Failed to load listing settings")?;

    init_tracing(&TracingConfig::new(environment.as_str(), "warn", false));

    let client = BoardClient::from_settings(&listing);
    let board = client.open_board().await;

    match board.status() {
        ListingStatus::Loaded => {}
        ListingStatus::Malformed => println!("Listing response was not a list of jobs"),
        ListingStatus::Failed(reason) => println!("Could not load jobs: {reason}"),
        ListingStatus::NotLoaded => println!("Jobs were not loaded"),
    }

    for job in board.visible() {
        println!(
            "#{} {} | {} | {} | {}",
            job.id,
            job.title,
            job.company,
            job.location,
            job.job_type.map(|t| t.as_str()).unwrap_or("-"),
        );
    }

    Ok(())
}
