//! PostGIS park-and-ride adapter

use application::{error::ApplicationError, ports::ParkAndRideRepository};
use async_trait::async_trait;
use domain::{GDA2020_SRID, ParkAndRideZone, Route, SearchRadius};
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::{
    error::{map_row_error, map_sqlx_error},
    rows::ParkAndRideRow,
};

const TABLE: &str = "osm_park_and_ride";

/// Zones near a route, inner-joined to their nearest station so zones
/// with a dangling station reference drop out. `$1` route WKT, `$2` SRID,
/// `$3` radius in metres
const SELECT_NEAR_ROUTE: &str = r"
SELECT z.id,
       z.zone_name,
       s.id AS nearest_station_id,
       s.name AS nearest_station_name,
       z.other_tags,
       ST_AsText(z.geom) AS boundary_wkt,
       ST_Y(c.centroid) AS centroid_lat,
       ST_X(c.centroid) AS centroid_long,
       ST_Distance(z.geom::geography, ST_GeomFromText($1, $2)::geography) AS distance_m
FROM osm_park_and_ride z
INNER JOIN train_station s ON z.nearest_ts_id = s.id
CROSS JOIN LATERAL (SELECT ST_Transform(ST_Centroid(z.geom), $2) AS centroid) c
WHERE ST_DWithin(z.geom::geography, ST_GeomFromText($1, $2)::geography, $3)
ORDER BY distance_m ASC, z.id ASC
";

/// Park-and-ride repository backed by `osm_park_and_ride` and `train_station`
#[derive(Debug, Clone)]
pub struct PostgisParkAndRideRepository {
    pool: PgPool,
}

impl PostgisParkAndRideRepository {
    /// Create a repository over a shared pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParkAndRideRepository for PostgisParkAndRideRepository {
    #[instrument(skip(self, route), fields(points = route.len(), radius_m = radius.meters()))]
    async fn find_near_route(
        &self,
        route: &Route,
        radius: SearchRadius,
    ) -> Result<Vec<ParkAndRideZone>, ApplicationError> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;

        let rows: Vec<ParkAndRideRow> = sqlx::query_as(SELECT_NEAR_ROUTE)
            .bind(route.to_wkt())
            .bind(GDA2020_SRID)
            .bind(radius.as_f64())
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        debug!(rows = rows.len(), "Fetched park-and-ride zones near route");

        rows.into_iter()
            .map(ParkAndRideZone::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| map_row_error(TABLE, &e))
    }
}
