//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports against PostgreSQL/PostGIS with sqlx,
//! and provides configuration loading and tracing setup.

pub mod config;
pub mod persistence;
pub mod telemetry;

pub use config::{
    AppConfig, ConfigError, DatabaseConfig, Environment, LogFormat, QueryConfig, ServerConfig,
    TelemetryConfig,
};
pub use persistence::{
    PoolError, PostgisDatabaseHealth, PostgisParkAndRideRepository, PostgisParkingRepository,
    PostgisStationRepository, create_pool,
};
pub use telemetry::{TelemetryError, init_tracing};
