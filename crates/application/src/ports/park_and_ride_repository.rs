//! Park-and-ride repository port

use async_trait::async_trait;
use domain::{ParkAndRideZone, Route, SearchRadius};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Read access to `osm_park_and_ride` joined with `train_station`
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ParkAndRideRepository: Send + Sync {
    /// Zones within `radius` metres of a route, nearest first
    ///
    /// Zones whose nearest-station reference does not resolve are excluded.
    async fn find_near_route(
        &self,
        route: &Route,
        radius: SearchRadius,
    ) -> Result<Vec<ParkAndRideZone>, ApplicationError>;
}
