//! Train station handlers

use axum::{
    Json,
    extract::{Path, State},
};
use domain::{LocatedStation, NearbyStation, Station, StationId};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::common::{
    LatLong, NearLocationRequest, NearRouteRequest, require_coordinates, require_route,
    resolve_radius,
};
use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Single station record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "19843",
    "name": "Flinders Street",
    "geom": "POINT(144.9671 -37.8183)",
    "wheelchair_accessible": true
}))]
pub struct StationResponse {
    pub id: String,
    pub name: Option<String>,
    /// Point geometry as WKT
    pub geom: Option<String>,
    pub wheelchair_accessible: bool,
}

impl From<Station> for StationResponse {
    fn from(s: Station) -> Self {
        Self {
            id: s.id.into_inner(),
            name: s.name,
            geom: s.geometry_wkt,
            wheelchair_accessible: s.wheelchair_accessible,
        }
    }
}

/// Station near a route
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NearbyStationResponse {
    pub id: String,
    pub name: Option<String>,
    /// Distance to the route in metres
    pub distance_m: f64,
}

impl From<NearbyStation> for NearbyStationResponse {
    fn from(s: NearbyStation) -> Self {
        Self {
            id: s.id.into_inner(),
            name: s.name,
            distance_m: s.distance_m,
        }
    }
}

/// Station near a point, with its stored position
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocatedStationResponse {
    pub id: String,
    pub name: Option<String>,
    pub location: LatLong,
    /// Distance to the point in metres
    pub distance_m: f64,
}

impl From<LocatedStation> for LocatedStationResponse {
    fn from(s: LocatedStation) -> Self {
        Self {
            id: s.id.into_inner(),
            name: s.name,
            location: s.location.into(),
            distance_m: s.distance_m,
        }
    }
}

/// Stations near a route, nearest first
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StationsNearRouteResponse {
    pub stations: Vec<NearbyStationResponse>,
}

/// Stations near a point, nearest first
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StationsNearLocationResponse {
    pub stations: Vec<LocatedStationResponse>,
}

/// Get a station by ID
///
/// GET /stations/{station_id}
#[utoipa::path(
    get,
    path = "/stations/{station_id}",
    tag = "stations",
    params(
        ("station_id" = String, Path, description = "Station identifier")
    ),
    responses(
        (status = 200, description = "Station record", body = StationResponse),
        (status = 404, description = "Unknown station", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_station(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
) -> Result<Json<StationResponse>, ApiError> {
    let id = StationId::new(station_id);
    let station = state.station_service.get_station(&id).await?;
    Ok(Json(station.into()))
}

/// Stations within range of a route
///
/// POST /stations/near_route
#[utoipa::path(
    post,
    path = "/stations/near_route",
    tag = "stations",
    request_body = NearRouteRequest,
    responses(
        (status = 200, description = "Stations ordered by distance", body = StationsNearRouteResponse),
        (status = 400, description = "Malformed route or radius", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(points = request.coordinates.len()))]
pub async fn near_route(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<NearRouteRequest>,
) -> Result<Json<StationsNearRouteResponse>, ApiError> {
    let radius = resolve_radius(request.maxdistance, &state.query)?;
    let route = require_route(&request.coordinates)?;

    let stations = state.station_service.near_route(&route, radius).await?;

    Ok(Json(StationsNearRouteResponse {
        stations: stations.into_iter().map(Into::into).collect(),
    }))
}

/// Stations within range of a point
///
/// POST /stations/near_location
#[utoipa::path(
    post,
    path = "/stations/near_location",
    tag = "stations",
    request_body = NearLocationRequest,
    responses(
        (status = 200, description = "Stations ordered by distance", body = StationsNearLocationResponse),
        (status = 400, description = "Missing or invalid coordinates", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn near_location(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<NearLocationRequest>,
) -> Result<Json<StationsNearLocationResponse>, ApiError> {
    let location = require_coordinates(request.coordinates)?;
    let radius = resolve_radius(request.maxdistance, &state.query)?;

    let stations = state
        .station_service
        .near_location(location, radius)
        .await?;

    Ok(Json(StationsNearLocationResponse {
        stations: stations.into_iter().map(Into::into).collect(),
    }))
}
