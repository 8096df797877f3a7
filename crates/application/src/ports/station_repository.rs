//! Train station repository port

use async_trait::async_trait;
use domain::{Coordinates, LocatedStation, NearbyStation, Route, SearchRadius, Station, StationId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Read access to the `train_station` relation
///
/// "Near" lookups return every station whose geographic distance to the
/// anchor is at most `radius`, ordered by ascending distance.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Look up a single station by its identifier
    async fn find_by_id(&self, id: &StationId) -> Result<Option<Station>, ApplicationError>;

    /// Stations within `radius` metres of a route
    async fn find_near_route(
        &self,
        route: &Route,
        radius: SearchRadius,
    ) -> Result<Vec<NearbyStation>, ApplicationError>;

    /// Stations within `radius` metres of a point, with their stored positions
    async fn find_near_location(
        &self,
        location: Coordinates,
        radius: SearchRadius,
    ) -> Result<Vec<LocatedStation>, ApplicationError>;
}
