//! PostGIS train station adapter

use application::{error::ApplicationError, ports::StationRepository};
use async_trait::async_trait;
use domain::{
    Coordinates, GDA2020_SRID, LocatedStation, NearbyStation, Route, SearchRadius, Station,
    StationId,
};
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::{
    error::{map_row_error, map_sqlx_error},
    rows::{LocatedStationRow, NearbyStationRow, StationRow},
};

const TABLE: &str = "train_station";

const SELECT_BY_ID: &str = r"
SELECT s.id,
       s.name,
       ST_AsText(s.geom) AS geom_wkt,
       s.whlchr_accss AS wheelchair_accessible
FROM train_station s
WHERE s.id = $1
";

/// Stations near a route. `$1` route WKT, `$2` SRID, `$3` radius in metres
const SELECT_NEAR_ROUTE: &str = r"
SELECT s.id,
       s.name,
       ST_Distance(s.geom::geography, ST_GeomFromText($1, $2)::geography) AS distance_m
FROM train_station s
WHERE ST_DWithin(s.geom::geography, ST_GeomFromText($1, $2)::geography, $3)
ORDER BY distance_m ASC, s.id ASC
";

/// Stations near a point. `$1` longitude, `$2` latitude, `$3` SRID, `$4` radius in metres
const SELECT_NEAR_LOCATION: &str = r"
SELECT s.id,
       s.name,
       ST_Y(s.geom) AS latitude,
       ST_X(s.geom) AS longitude,
       ST_Distance(s.geom::geography, ST_SetSRID(ST_MakePoint($1, $2), $3)::geography) AS distance_m
FROM train_station s
WHERE ST_DWithin(s.geom::geography, ST_SetSRID(ST_MakePoint($1, $2), $3)::geography, $4)
ORDER BY distance_m ASC, s.id ASC
";

/// Station repository backed by the `train_station` table
#[derive(Debug, Clone)]
pub struct PostgisStationRepository {
    pool: PgPool,
}

impl PostgisStationRepository {
    /// Create a repository over a shared pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StationRepository for PostgisStationRepository {
    #[instrument(skip(self), fields(station_id = %id))]
    async fn find_by_id(&self, id: &StationId) -> Result<Option<Station>, ApplicationError> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;

        let row: Option<StationRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_str())
            .fetch_optional(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Station::from))
    }

    #[instrument(skip(self, route), fields(points = route.len(), radius_m = radius.meters()))]
    async fn find_near_route(
        &self,
        route: &Route,
        radius: SearchRadius,
    ) -> Result<Vec<NearbyStation>, ApplicationError> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;

        let rows: Vec<NearbyStationRow> = sqlx::query_as(SELECT_NEAR_ROUTE)
            .bind(route.to_wkt())
            .bind(GDA2020_SRID)
            .bind(radius.as_f64())
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        debug!(rows = rows.len(), "Fetched stations near route");

        Ok(rows.into_iter().map(NearbyStation::from).collect())
    }

    #[instrument(skip(self), fields(radius_m = radius.meters()))]
    async fn find_near_location(
        &self,
        location: Coordinates,
        radius: SearchRadius,
    ) -> Result<Vec<LocatedStation>, ApplicationError> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;

        let rows: Vec<LocatedStationRow> = sqlx::query_as(SELECT_NEAR_LOCATION)
            .bind(location.longitude())
            .bind(location.latitude())
            .bind(GDA2020_SRID)
            .bind(radius.as_f64())
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        debug!(rows = rows.len(), "Fetched stations near location");

        rows.into_iter()
            .map(LocatedStation::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| map_row_error(TABLE, &e))
    }
}
