//! Station query service
//!
//! Use cases for single-station lookup and proximity searches around a
//! point or a route.

use std::{fmt, sync::Arc};

use domain::{
    Coordinates, DomainError, LocatedStation, NearbyStation, Route, SearchRadius, Station,
    StationId,
};
use tracing::{debug, info, instrument};

use crate::{error::ApplicationError, ports::StationRepository};

/// Service for train station queries
pub struct StationService {
    repository: Arc<dyn StationRepository>,
}

impl fmt::Debug for StationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StationService").finish_non_exhaustive()
    }
}

impl StationService {
    /// Create a new station service
    pub fn new(repository: Arc<dyn StationRepository>) -> Self {
        Self { repository }
    }

    /// Get a station by ID
    ///
    /// Returns `ApplicationError::NotFound` when no station has this ID.
    #[instrument(skip(self), fields(station_id = %id))]
    pub async fn get_station(&self, id: &StationId) -> Result<Station, ApplicationError> {
        debug!("Looking up station");
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            ApplicationError::NotFound(DomainError::not_found("Station", id.as_str()).to_string())
        })
    }

    /// Stations within `radius` of a route, nearest first
    #[instrument(skip(self, route), fields(points = route.len(), radius = %radius))]
    pub async fn near_route(
        &self,
        route: &Route,
        radius: SearchRadius,
    ) -> Result<Vec<NearbyStation>, ApplicationError> {
        let stations = self.repository.find_near_route(route, radius).await?;
        info!(count = stations.len(), "Stations near route");
        Ok(stations)
    }

    /// Stations within `radius` of a point, nearest first
    #[instrument(skip(self), fields(location = %location, radius = %radius))]
    pub async fn near_location(
        &self,
        location: Coordinates,
        radius: SearchRadius,
    ) -> Result<Vec<LocatedStation>, ApplicationError> {
        let stations = self.repository.find_near_location(location, radius).await?;
        info!(count = stations.len(), "Stations near location");
        Ok(stations)
    }
}
