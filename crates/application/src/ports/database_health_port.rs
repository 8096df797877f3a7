//! Spatial store health port
//!
//! Lets readiness checks probe the PostGIS store without knowing about pools
//! or drivers.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::error::ApplicationError;

/// Health snapshot of the spatial store
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatabaseHealth {
    /// Whether the store answered the probe query
    pub reachable: bool,
    /// Spatial extension version, e.g. `3.4 USE_GEOS=1 USE_PROJ=1 USE_STATS=1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postgis_version: Option<String>,
    /// Open connections in the pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_size: Option<u32>,
    /// Idle connections in the pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_connections: Option<u32>,
    /// Round trip of the probe in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

impl DatabaseHealth {
    /// Reachable store with a known spatial extension version
    #[must_use]
    pub fn reachable(postgis_version: impl Into<String>) -> Self {
        Self {
            reachable: true,
            postgis_version: Some(postgis_version.into()),
            ..Self::default()
        }
    }

    /// Unreachable store
    #[must_use]
    pub fn unreachable() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_pool(mut self, size: u32, idle: u32) -> Self {
        self.pool_size = Some(size);
        self.idle_connections = Some(idle);
        self
    }

    #[must_use]
    pub const fn with_response_time(mut self, ms: u64) -> Self {
        self.response_time_ms = Some(ms);
        self
    }
}

/// Port for probing the spatial store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DatabaseHealthPort: Send + Sync {
    /// Run the probe and report details; errors mean the store is unreachable
    async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError>;
}
