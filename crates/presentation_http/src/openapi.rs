//! OpenAPI documentation module
//!
//! Serves the OpenAPI 3 document at `/api-docs/openapi.json` and Swagger UI
//! at `/swagger-ui`.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation for TransitGeo
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TransitGeo API",
        description = "Read-only proximity queries over train stations, park-and-ride zones and public parking",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "stations", description = "Train station lookup and proximity search"),
        (name = "parking", description = "Public parking near a point"),
        (name = "park_and_ride", description = "Park-and-ride zones near a route")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::stations::get_station,
        handlers::stations::near_route,
        handlers::stations::near_location,
        handlers::parking::near_location,
        handlers::park_ride::near_route,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::DatabaseStatus,
            handlers::common::LatLong,
            handlers::common::LatLongInput,
            handlers::common::NearLocationRequest,
            handlers::common::NearRouteRequest,
            handlers::stations::StationResponse,
            handlers::stations::NearbyStationResponse,
            handlers::stations::LocatedStationResponse,
            handlers::stations::StationsNearRouteResponse,
            handlers::stations::StationsNearLocationResponse,
            handlers::parking::ParkingAreaResponse,
            handlers::park_ride::ParkAndRideZoneResponse,
            handlers::park_ride::ParkAndRideResponse,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in [
            "/health",
            "/ready",
            "/stations/{station_id}",
            "/stations/near_route",
            "/stations/near_location",
            "/parking/near_location",
            "/park_ride",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }

    #[test]
    fn openapi_has_all_tags() {
        let doc = ApiDoc::openapi();
        let tags: Vec<&str> = doc
            .tags
            .as_ref()
            .map(|t| t.iter().map(|tag| tag.name.as_str()).collect())
            .unwrap_or_default();
        assert!(tags.contains(&"stations"));
        assert!(tags.contains(&"parking"));
        assert!(tags.contains(&"park_and_ride"));
    }

    #[test]
    fn openapi_serializes() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("TransitGeo API"));
        assert!(json.contains("ParkingAreaResponse"));
    }
}
