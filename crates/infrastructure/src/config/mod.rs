//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: PostGIS connection pool settings
//! - `query`: search radius defaults and limits
//! - `telemetry`: log filter and output format
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml` in the working directory, `TRANSITGEO_*` environment
//! variables (nested keys separated by `__`, e.g. `TRANSITGEO_SERVER__PORT`),
//! and finally `DATABASE_URL`.

mod database;
mod query;
mod server;
mod telemetry;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use database::{DEFAULT_DATABASE_URL, DatabaseConfig};
pub use query::QueryConfig;
pub use server::ServerConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "TRANSITGEO";

/// Conventional variable selecting the data store; wins over everything else
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Application environment (development or production)
///
/// Controls whether internal error details reach API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - error details exposed
    #[default]
    Development,
    /// Production environment - error details hidden
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Errors raised while loading or checking configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Search radius defaults and limits
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `config.toml`, and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let env = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        Self::load_from(
            Some("config"),
            env,
            std::env::var(DATABASE_URL_VAR).ok(),
        )
    }

    /// Load configuration from explicit sources
    ///
    /// `file` is a path without extension; a missing file is not an error.
    pub fn load_from(
        file: Option<&str>,
        env: config::Environment,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            // Start with defaults
            .set_default("database.url", DEFAULT_DATABASE_URL)?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        let config = builder
            .add_source(env)
            .set_override_option("database.url", database_url)?
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.default_radius_m > self.query.max_radius_m {
            return Err(ConfigError::Invalid(format!(
                "query.default_radius_m ({}) exceeds query.max_radius_m ({})",
                self.query.default_radius_m, self.query.max_radius_m
            )));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Invalid(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }
        Ok(())
    }

    /// Whether error details may be shown to API clients
    #[must_use]
    pub const fn expose_internal_errors(&self) -> bool {
        matches!(self.environment, Environment::Development)
    }
}
