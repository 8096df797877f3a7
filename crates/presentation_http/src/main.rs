//! TransitGeo HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{ParkAndRideService, ParkingService, StationService};
use infrastructure::{
    AppConfig, PostgisDatabaseHealth, PostgisParkAndRideRepository, PostgisParkingRepository,
    PostgisStationRepository, create_pool, init_tracing,
};
use presentation_http::{routes, server, set_expose_internal_errors, state::AppState};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.telemetry)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "TransitGeo starting"
    );
    info!(
        host = %config.server.host,
        port = %config.server.port,
        database = ?config.database,
        default_radius_m = config.query.default_radius_m,
        max_radius_m = config.query.max_radius_m,
        "Configuration loaded"
    );

    set_expose_internal_errors(config.expose_internal_errors());

    // One pool for the whole process; each request borrows a connection
    let pool = create_pool(&config.database).await?;

    let state = AppState {
        station_service: Arc::new(StationService::new(Arc::new(
            PostgisStationRepository::new(pool.clone()),
        ))),
        parking_service: Arc::new(ParkingService::new(Arc::new(
            PostgisParkingRepository::new(pool.clone()),
        ))),
        park_and_ride_service: Arc::new(ParkAndRideService::new(Arc::new(
            PostgisParkAndRideRepository::new(pool.clone()),
        ))),
        database_health: Arc::new(PostgisDatabaseHealth::new(pool.clone())),
        query: config.query.clone(),
    };

    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    // First added = innermost
    let app = routes::create_router(state)
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);
    info!("API docs: http://{}/swagger-ui", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));
    server::serve(listener, app, server::shutdown_signal(), shutdown_timeout).await?;

    pool.close().await;
    info!("Server shutdown complete");

    Ok(())
}
