//! Park-and-ride handlers

use axum::{Json, extract::State};
use domain::{ParkAndRideZone, Tags};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::common::{LatLong, NearRouteRequest, require_route, resolve_radius};
use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Park-and-ride zone near a route
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParkAndRideZoneResponse {
    pub id: i32,
    pub zone_name: Option<String>,
    pub nearest_train_station_name: Option<String>,
    /// OpenStreetMap tags; `null` values were stored as NULL
    #[schema(value_type = Object)]
    pub other_tags: Tags,
    /// Zone boundary as WKT
    pub nearest_station_multipolygon: String,
    /// Zone centroid
    pub nearest_station_centroid: LatLong,
    /// Distance from the zone polygon to the route in metres
    pub distance_meters: f64,
}

impl From<ParkAndRideZone> for ParkAndRideZoneResponse {
    fn from(zone: ParkAndRideZone) -> Self {
        Self {
            id: zone.id,
            zone_name: zone.zone_name,
            nearest_train_station_name: zone.nearest_station_name,
            other_tags: zone.tags,
            nearest_station_multipolygon: zone.boundary_wkt,
            nearest_station_centroid: zone.centroid.into(),
            distance_meters: zone.distance_m,
        }
    }
}

/// Park-and-ride zones near a route, nearest first
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParkAndRideResponse {
    pub park_and_ride: Vec<ParkAndRideZoneResponse>,
}

/// Park-and-ride zones within range of a route
///
/// POST /park_ride
#[utoipa::path(
    post,
    path = "/park_ride",
    tag = "park_and_ride",
    request_body = NearRouteRequest,
    responses(
        (status = 200, description = "Zones ordered by distance", body = ParkAndRideResponse),
        (status = 400, description = "Malformed route or radius", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(points = request.coordinates.len()))]
pub async fn near_route(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<NearRouteRequest>,
) -> Result<Json<ParkAndRideResponse>, ApiError> {
    let radius = resolve_radius(request.maxdistance, &state.query)?;
    let route = require_route(&request.coordinates)?;

    let zones = state
        .park_and_ride_service
        .near_route(&route, radius)
        .await?;

    Ok(Json(ParkAndRideResponse {
        park_and_ride: zones.into_iter().map(Into::into).collect(),
    }))
}
