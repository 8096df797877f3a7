//! Public parking handlers

use axum::{Json, extract::State};
use domain::{ParkingArea, Tags};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::common::{LatLong, NearLocationRequest, require_coordinates, resolve_radius};
use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Public parking area near a point
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 10,
    "name": "Car Park A",
    "other_tags": {"amenity": "parking", "fee": "yes"},
    "parking_area_multipolygon": "MULTIPOLYGON(((144.9597 -37.8173,144.9603 -37.8173,144.9603 -37.8167,144.9597 -37.8173)))",
    "parking_area_centroid": {"lat": -37.817, "long": 144.96},
    "distance_meters": 0.0
}))]
pub struct ParkingAreaResponse {
    pub id: i32,
    pub name: Option<String>,
    /// OpenStreetMap tags; `null` values were stored as NULL
    #[schema(value_type = Object)]
    pub other_tags: Tags,
    /// Polygon boundary as WKT
    pub parking_area_multipolygon: String,
    pub parking_area_centroid: LatLong,
    /// Distance from the polygon to the point in metres
    pub distance_meters: f64,
}

impl From<ParkingArea> for ParkingAreaResponse {
    fn from(area: ParkingArea) -> Self {
        Self {
            id: area.id,
            name: area.name,
            other_tags: area.tags,
            parking_area_multipolygon: area.boundary_wkt,
            parking_area_centroid: area.centroid.into(),
            distance_meters: area.distance_m,
        }
    }
}

/// Parking areas within range of a point
///
/// POST /parking/near_location
///
/// The response is a bare array; an empty result is an empty array.
#[utoipa::path(
    post,
    path = "/parking/near_location",
    tag = "parking",
    request_body = NearLocationRequest,
    responses(
        (status = 200, description = "Parking areas ordered by distance", body = Vec<ParkingAreaResponse>),
        (status = 400, description = "Missing or invalid coordinates", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn near_location(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<NearLocationRequest>,
) -> Result<Json<Vec<ParkingAreaResponse>>, ApiError> {
    let location = require_coordinates(request.coordinates)?;
    let radius = resolve_radius(request.maxdistance, &state.query)?;

    let areas = state
        .parking_service
        .near_location(location, radius)
        .await?;

    Ok(Json(areas.into_iter().map(Into::into).collect()))
}
