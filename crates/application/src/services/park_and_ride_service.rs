//! Park-and-ride query service

use std::{fmt, sync::Arc};

use domain::{ParkAndRideZone, Route, SearchRadius};
use tracing::{info, instrument};

use crate::{error::ApplicationError, ports::ParkAndRideRepository};

/// Service for park-and-ride zone queries along a route
pub struct ParkAndRideService {
    repository: Arc<dyn ParkAndRideRepository>,
}

impl fmt::Debug for ParkAndRideService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkAndRideService").finish_non_exhaustive()
    }
}

impl ParkAndRideService {
    /// Create a new park-and-ride service
    pub fn new(repository: Arc<dyn ParkAndRideRepository>) -> Self {
        Self { repository }
    }

    /// Zones within `radius` of a route, nearest first
    #[instrument(skip(self, route), fields(points = route.len(), radius = %radius))]
    pub async fn near_route(
        &self,
        route: &Route,
        radius: SearchRadius,
    ) -> Result<Vec<ParkAndRideZone>, ApplicationError> {
        let zones = self.repository.find_near_route(route, radius).await?;
        info!(count = zones.len(), "Park-and-ride zones near route");
        Ok(zones)
    }
}
