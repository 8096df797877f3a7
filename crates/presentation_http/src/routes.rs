//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, middleware::RequestIdLayer, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Stations
        .route("/stations/{station_id}", get(handlers::stations::get_station))
        .route("/stations/near_route", post(handlers::stations::near_route))
        .route(
            "/stations/near_location",
            post(handlers::stations::near_location),
        )
        // Parking
        .route(
            "/parking/near_location",
            post(handlers::parking::near_location),
        )
        .route("/park_ride", post(handlers::park_ride::near_route))
        // API docs
        .merge(openapi::create_openapi_routes())
        .layer(RequestIdLayer::new())
        // Attach state
        .with_state(state)
}
