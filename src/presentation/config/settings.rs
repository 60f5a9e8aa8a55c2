use std::collections::HashMap;
use std::path::Path;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_SALARY_CEILING, DEFAULT_SALARY_FLOOR, SalaryBounds};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
    pub listing: ListingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

/// Client side of the board: where the listing lives and the salary range
/// the filter spans when nothing is selected.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingSettings {
    pub service_url: String,
    pub salary_floor: f64,
    pub salary_ceiling: f64,
}

impl Settings {
    /// Layers defaults, the optional `appsettings.{env}` file and `APP_*`
    /// variables (`APP_DATABASE__URL`, `APP_SERVER__PORT`, ...).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), environment, None)
    }

    /// Like [`Settings::load`], reading the settings file from `dir`. When
    /// `variables` is given it replaces the process environment.
    pub fn load_from(
        dir: &Path,
        environment: Environment,
        variables: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        build_config(dir, environment, variables)?.try_deserialize()
    }
}

impl ListingSettings {
    /// Loads only the `listing` section, so clients need no database url.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), environment, None)
    }

    pub fn load_from(
        dir: &Path,
        environment: Environment,
        variables: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        build_config(dir, environment, variables)?.get("listing")
    }

    pub fn salary_bounds(&self) -> SalaryBounds {
        SalaryBounds::new(self.salary_floor, self.salary_ceiling)
    }
}

fn build_config(
    dir: &Path,
    environment: Environment,
    variables: Option<HashMap<String, String>>,
) -> Result<Config, ConfigError> {
    let file = dir.join(format!("appsettings.{}", environment.as_str()));

    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000_i64)?
        .set_default("database.max_connections", 10_i64)?
        .set_default("database.run_migrations", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.enable_json", false)?
        .set_default("listing.service_url", "http://127.0.0.1:3000")?
        .set_default("listing.salary_floor", DEFAULT_SALARY_FLOOR)?
        .set_default("listing.salary_ceiling", DEFAULT_SALARY_CEILING)?
        .add_source(File::with_name(&file.to_string_lossy()).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(variables),
        )
        .build()
}
