//! Parking query service

use std::{fmt, sync::Arc};

use domain::{Coordinates, ParkingArea, SearchRadius};
use tracing::{info, instrument};

use crate::{error::ApplicationError, ports::ParkingRepository};

/// Service for public parking queries
pub struct ParkingService {
    repository: Arc<dyn ParkingRepository>,
}

impl fmt::Debug for ParkingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingService").finish_non_exhaustive()
    }
}

impl ParkingService {
    /// Create a new parking service
    pub fn new(repository: Arc<dyn ParkingRepository>) -> Self {
        Self { repository }
    }

    /// Parking areas within `radius` of a point, nearest first
    ///
    /// An empty result is not an error.
    #[instrument(skip(self), fields(location = %location, radius = %radius))]
    pub async fn near_location(
        &self,
        location: Coordinates,
        radius: SearchRadius,
    ) -> Result<Vec<ParkingArea>, ApplicationError> {
        let areas = self.repository.find_near_location(location, radius).await?;
        info!(count = areas.len(), "Parking areas near location");
        Ok(areas)
    }
}

#[cfg(test)]
mod tests {
    use domain::Tags;

    use super::*;
    use crate::ports::MockParkingRepository;

    fn area(id: i32, distance_m: f64) -> ParkingArea {
        ParkingArea {
            id,
            name: Some("Station Car Park".to_string()),
            tags: Tags::parse(r#""amenity"=>"parking","fee"=>NULL"#),
            boundary_wkt: "MULTIPOLYGON(((0 0,1 0,1 1,0 0)))".to_string(),
            centroid: Coordinates::new(-37.8, 144.9).unwrap(),
            distance_m,
        }
    }

    #[tokio::test]
    async fn returns_repository_results_in_order() {
        let mut repo = MockParkingRepository::new();
        repo.expect_find_near_location()
            .times(1)
            .returning(|_, _| Ok(vec![area(3, 0.0), area(1, 42.0)]));

        let service = ParkingService::new(Arc::new(repo));
        let areas = service
            .near_location(
                Coordinates::new(-37.8, 144.9).unwrap(),
                SearchRadius::default(),
            )
            .await
            .unwrap();

        let ids: Vec<i32> = areas.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(areas[0].tags.get("fee"), Some(None));
    }

    #[tokio::test]
    async fn empty_result_is_empty_list() {
        let mut repo = MockParkingRepository::new();
        repo.expect_find_near_location().returning(|_, _| Ok(vec![]));

        let service = ParkingService::new(Arc::new(repo));
        let areas = service
            .near_location(
                Coordinates::new(-37.8, 144.9).unwrap(),
                SearchRadius::new(0).unwrap(),
            )
            .await
            .unwrap();

        assert!(areas.is_empty());
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let mut repo = MockParkingRepository::new();
        repo.expect_find_near_location()
            .returning(|_, _| Err(ApplicationError::DatabaseUnavailable("pool".to_string())));

        let service = ParkingService::new(Arc::new(repo));
        let err = service
            .near_location(
                Coordinates::new(-37.8, 144.9).unwrap(),
                SearchRadius::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::DatabaseUnavailable(_)));
    }
}
