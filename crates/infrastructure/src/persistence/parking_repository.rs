//! PostGIS public parking adapter

use application::{error::ApplicationError, ports::ParkingRepository};
use async_trait::async_trait;
use domain::{Coordinates, GDA2020_SRID, ParkingArea, SearchRadius};
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::{
    error::{map_row_error, map_sqlx_error},
    rows::ParkingAreaRow,
};

const TABLE: &str = "osm_public_parking";

/// Parking polygons near a point. Distance is measured from the polygon,
/// not its centroid. `$1` longitude, `$2` latitude, `$3` SRID, `$4` radius
const SELECT_NEAR_LOCATION: &str = r"
SELECT p.id,
       p.name,
       p.other_tags,
       ST_AsText(p.geom) AS boundary_wkt,
       ST_Y(c.centroid) AS centroid_lat,
       ST_X(c.centroid) AS centroid_long,
       ST_Distance(p.geom::geography, ST_SetSRID(ST_MakePoint($1, $2), $3)::geography) AS distance_m
FROM osm_public_parking p
CROSS JOIN LATERAL (SELECT ST_Transform(ST_Centroid(p.geom), $3) AS centroid) c
WHERE ST_DWithin(p.geom::geography, ST_SetSRID(ST_MakePoint($1, $2), $3)::geography, $4)
ORDER BY distance_m ASC, p.id ASC
";

/// Parking repository backed by the `osm_public_parking` table
#[derive(Debug, Clone)]
pub struct PostgisParkingRepository {
    pool: PgPool,
}

impl PostgisParkingRepository {
    /// Create a repository over a shared pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParkingRepository for PostgisParkingRepository {
    #[instrument(skip(self), fields(radius_m = radius.meters()))]
    async fn find_near_location(
        &self,
        location: Coordinates,
        radius: SearchRadius,
    ) -> Result<Vec<ParkingArea>, ApplicationError> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;

        let rows: Vec<ParkingAreaRow> = sqlx::query_as(SELECT_NEAR_LOCATION)
            .bind(location.longitude())
            .bind(location.latitude())
            .bind(GDA2020_SRID)
            .bind(radius.as_f64())
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        debug!(rows = rows.len(), "Fetched parking areas near location");

        rows.into_iter()
            .map(ParkingArea::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| map_row_error(TABLE, &e))
    }
}
