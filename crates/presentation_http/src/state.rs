//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ParkAndRideService, ParkingService, StationService, ports::DatabaseHealthPort,
};
use infrastructure::QueryConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Station lookups and proximity searches
    pub station_service: Arc<StationService>,
    /// Public parking proximity searches
    pub parking_service: Arc<ParkingService>,
    /// Park-and-ride proximity searches
    pub park_and_ride_service: Arc<ParkAndRideService>,
    /// Spatial store health, used by the readiness probe
    pub database_health: Arc<dyn DatabaseHealthPort>,
    /// Search radius defaults and limits
    pub query: QueryConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}
