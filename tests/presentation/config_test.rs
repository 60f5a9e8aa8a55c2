use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use jobboard::application::services::{ListingStatus, SalaryBounds};
use jobboard::infrastructure::persistence::MockJobPostingRepository;
use jobboard::presentation::{BoardClient, Environment, ListingSettings, Settings};

use crate::helpers::{sample_postings, spawn_server};

fn settings_dir(file: Option<&str>) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("jobboard-settings-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    if let Some(contents) = file {
        std::fs::write(dir.join("appsettings.test.toml"), contents).unwrap();
    }
    dir
}

fn variables(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn listing(service_url: &str, floor: f64, ceiling: f64) -> ListingSettings {
    ListingSettings {
        service_url: service_url.to_string(),
        salary_floor: floor,
        salary_ceiling: ceiling,
    }
}

#[test]
fn given_environment_names_when_parsed_then_accepts_known_values() {
    assert_eq!(
        Environment::try_from("LOCAL".to_string()),
        Ok(Environment::Local)
    );
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_displayed_then_matches_settings_file_suffix() {
    assert_eq!(Environment::Test.to_string(), "test");
}

#[test]
fn given_only_database_url_when_loading_then_defaults_fill_the_rest() {
    let dir = settings_dir(None);

    let settings = Settings::load_from(
        &dir,
        Environment::Test,
        variables(&[("APP_DATABASE__URL", "postgres://localhost/jobs")]),
    )
    .unwrap();

    assert_eq!(settings.database.url, "postgres://localhost/jobs");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.database.max_connections, 10);
    assert!(settings.database.run_migrations);
    assert_eq!(settings.listing.service_url, "http://127.0.0.1:3000");
    assert_eq!(settings.listing.salary_bounds(), SalaryBounds::default());
}

#[test]
fn given_missing_database_url_when_loading_then_fails() {
    let dir = settings_dir(None);

    assert!(Settings::load_from(&dir, Environment::Test, variables(&[])).is_err());
}

#[test]
fn given_settings_file_when_loading_then_file_overrides_defaults() {
    let dir = settings_dir(Some(
        r#"
        [server]
        port = 8080

        [database]
        url = "postgres://file/jobs"

        [listing]
        salary_ceiling = 250000
        "#,
    ));

    let settings = Settings::load_from(&dir, Environment::Test, variables(&[])).unwrap();

    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.database.url, "postgres://file/jobs");
    assert_eq!(settings.listing.salary_ceiling, 250_000.0);
    assert_eq!(settings.listing.salary_floor, 0.0);
}

#[test]
fn given_app_variable_when_loading_then_it_wins_over_file() {
    let dir = settings_dir(Some(
        r#"
        [listing]
        salary_ceiling = 250000
        "#,
    ));

    let listing = ListingSettings::load_from(
        &dir,
        Environment::Test,
        variables(&[
            ("APP_LISTING__SALARY_CEILING", "900000"),
            ("APP_LISTING__SERVICE_URL", "http://jobs.internal:8080"),
        ]),
    )
    .unwrap();

    assert_eq!(listing.salary_ceiling, 900_000.0);
    assert_eq!(listing.service_url, "http://jobs.internal:8080");
}

#[test]
fn given_listing_settings_when_converted_then_bounds_match() {
    let listing = listing("http://localhost:3000", 1_000.0, 250_000.0);

    assert_eq!(
        listing.salary_bounds(),
        SalaryBounds::new(1_000.0, 250_000.0)
    );
}

#[test]
fn given_configured_bounds_when_client_builds_board_then_filters_span_them() {
    let client = BoardClient::from_settings(&listing("http://localhost:3000/", 10_000.0, 1_000_000.0));

    let board = client.new_board();

    assert_eq!(board.filters.salary, (10_000.0, 1_000_000.0));
    assert!(board.filters.is_noop());
    assert_eq!(client.feed().jobs_url(), "http://localhost:3000/jobs");
}

#[tokio::test]
async fn given_configured_service_when_opening_board_then_listing_is_loaded() {
    let base_url = spawn_server(Arc::new(MockJobPostingRepository::new(sample_postings()))).await;
    let client = BoardClient::from_settings(&listing(&base_url, 0.0, 100_000.0));

    let mut board = client.open_board().await;

    assert_eq!(board.status(), &ListingStatus::Loaded);
    assert_eq!(board.jobs().len(), 4);
    assert!(board.filters.is_noop());

    // Ceiling is the configured 100k, so lowering below it starts filtering.
    board.filters.salary = (0.0, 40_000.0);
    let ids: Vec<i64> = board.visible().iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![2, 1]);
}
