//! Request and response pieces shared by the proximity endpoints

use domain::{Coordinates, Route, SearchRadius};
use infrastructure::QueryConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::ApiError;

/// `{lat, long}` pair as it appears in responses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"lat": -37.8183, "long": 144.9671}))]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl From<Coordinates> for LatLong {
    fn from(c: Coordinates) -> Self {
        Self {
            lat: c.latitude(),
            long: c.longitude(),
        }
    }
}

/// `{lat, long}` as submitted; either half may be missing
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct LatLongInput {
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

/// Body of the point searches
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({"maxdistance": 500, "coordinates": {"lat": -37.8183, "long": 144.9671}}))]
pub struct NearLocationRequest {
    /// Search radius in metres
    #[validate(range(min = 0, message = "must not be negative"))]
    #[serde(default)]
    pub maxdistance: Option<i64>,
    #[serde(default)]
    pub coordinates: Option<LatLongInput>,
}

/// Body of the route searches
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({"maxdistance": 500, "coordinates": [[144.9525, -37.8184], [144.9671, -37.8183]]}))]
pub struct NearRouteRequest {
    /// Search radius in metres
    #[validate(range(min = 0, message = "must not be negative"))]
    #[serde(default)]
    pub maxdistance: Option<i64>,
    /// Route vertices as `[longitude, latitude]` pairs
    #[validate(length(min = 2, message = "a route needs at least two points"))]
    pub coordinates: Vec<Vec<f64>>,
}

/// Radius from the request, defaulted and capped by configuration
pub fn resolve_radius(requested: Option<i64>, query: &QueryConfig) -> Result<SearchRadius, ApiError> {
    let meters = requested.unwrap_or_else(|| i64::from(query.default_radius_m));
    Ok(SearchRadius::with_limit(meters, query.max_radius_m)?)
}

/// Point from the request; absent coordinates fail before any query runs
pub fn require_coordinates(input: Option<LatLongInput>) -> Result<Coordinates, ApiError> {
    let Some(LatLongInput {
        lat: Some(lat),
        long: Some(long),
    }) = input
    else {
        return Err(ApiError::BadRequest("Missing coordinates".to_string()));
    };
    Ok(Coordinates::new(lat, long)?)
}

/// Route from `[lon, lat]` pairs
pub fn require_route(pairs: &[Vec<f64>]) -> Result<Route, ApiError> {
    Ok(Route::from_lon_lat_pairs(pairs)?)
}
