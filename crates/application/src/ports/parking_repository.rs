//! Public parking repository port

use async_trait::async_trait;
use domain::{Coordinates, ParkingArea, SearchRadius};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Read access to the `osm_public_parking` relation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ParkingRepository: Send + Sync {
    /// Parking polygons within `radius` metres of a point, nearest first
    async fn find_near_location(
        &self,
        location: Coordinates,
        radius: SearchRadius,
    ) -> Result<Vec<ParkingArea>, ApplicationError>;
}
