//! Integration tests for HTTP handlers
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use application::{
    ParkAndRideService, ParkingService, StationService,
    error::ApplicationError,
    ports::{
        DatabaseHealth, DatabaseHealthPort, ParkAndRideRepository, ParkingRepository,
        StationRepository,
    },
};
use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use domain::{
    Coordinates, LocatedStation, NearbyStation, ParkAndRideZone, ParkingArea, Route, SearchRadius,
    Station, StationId, Tags,
};
use infrastructure::QueryConfig;
use mockall::mock;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::json;

mock! {
    Stations {}

    #[async_trait]
    impl StationRepository for Stations {
        async fn find_by_id(&self, id: &StationId) -> Result<Option<Station>, ApplicationError>;
        async fn find_near_route(
            &self,
            route: &Route,
            radius: SearchRadius,
        ) -> Result<Vec<NearbyStation>, ApplicationError>;
        async fn find_near_location(
            &self,
            location: Coordinates,
            radius: SearchRadius,
        ) -> Result<Vec<LocatedStation>, ApplicationError>;
    }
}

mock! {
    Parking {}

    #[async_trait]
    impl ParkingRepository for Parking {
        async fn find_near_location(
            &self,
            location: Coordinates,
            radius: SearchRadius,
        ) -> Result<Vec<ParkingArea>, ApplicationError>;
    }
}

mock! {
    ParkRide {}

    #[async_trait]
    impl ParkAndRideRepository for ParkRide {
        async fn find_near_route(
            &self,
            route: &Route,
            radius: SearchRadius,
        ) -> Result<Vec<ParkAndRideZone>, ApplicationError>;
    }
}

mock! {
    Health {}

    #[async_trait]
    impl DatabaseHealthPort for Health {
        async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError>;
    }
}

/// Mocks without expectations panic when called
struct Ports {
    stations: MockStations,
    parking: MockParking,
    park_ride: MockParkRide,
    health: MockHealth,
}

impl Ports {
    fn new() -> Self {
        Self {
            stations: MockStations::new(),
            parking: MockParking::new(),
            park_ride: MockParkRide::new(),
            health: MockHealth::new(),
        }
    }

    fn server(self) -> TestServer {
        let state = AppState {
            station_service: Arc::new(StationService::new(Arc::new(self.stations))),
            parking_service: Arc::new(ParkingService::new(Arc::new(self.parking))),
            park_and_ride_service: Arc::new(ParkAndRideService::new(Arc::new(self.park_ride))),
            database_health: Arc::new(self.health),
            query: QueryConfig::default(),
        };
        TestServer::new(create_router(state)).expect("Failed to create test server")
    }
}

fn point(lat: f64, long: f64) -> Coordinates {
    Coordinates::new(lat, long).unwrap()
}

fn city_route() -> serde_json::Value {
    json!([[144.9525, -37.8184], [144.9671, -37.8183]])
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = Ports::new().server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn ready_reports_postgis_version() {
    let mut ports = Ports::new();
    ports
        .health
        .expect_check_health()
        .returning(|| Ok(DatabaseHealth::reachable("PostGIS 3.4").with_pool(2, 1)));
    let server = ports.server();

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["database"]["postgis_version"], "PostGIS 3.4");
    assert_eq!(body["database"]["pool_size"], 2);
}

#[tokio::test]
async fn ready_unavailable_when_store_down() {
    let mut ports = Ports::new();
    ports.health.expect_check_health().returning(|| {
        Err(ApplicationError::DatabaseUnavailable(
            "Timed out acquiring a connection".to_string(),
        ))
    });
    let server = ports.server();

    let response = server.get("/ready").await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], false);
    assert_eq!(body["database"]["reachable"], false);
}

// ============ Station Lookup Tests ============

#[tokio::test]
async fn get_station_found() {
    let mut ports = Ports::new();
    ports
        .stations
        .expect_find_by_id()
        .withf(|id| id.as_str() == "19843")
        .times(1)
        .returning(|id| {
            Ok(Some(Station {
                id: id.clone(),
                name: Some("Flinders Street".to_string()),
                geometry_wkt: Some("POINT(144.9671 -37.8183)".to_string()),
                wheelchair_accessible: true,
            }))
        });
    let server = ports.server();

    let response = server.get("/stations/19843").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!({
            "id": "19843",
            "name": "Flinders Street",
            "geom": "POINT(144.9671 -37.8183)",
            "wheelchair_accessible": true
        })
    );
}

#[tokio::test]
async fn get_station_unknown_is_not_found() {
    let mut ports = Ports::new();
    ports.stations.expect_find_by_id().returning(|_| Ok(None));
    let server = ports.server();

    let response = server.get("/stations/NOPE").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Not found");
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn get_station_blank_id_is_not_found() {
    let mut ports = Ports::new();
    ports
        .stations
        .expect_find_by_id()
        .withf(|id| id.as_str() == " ")
        .times(1)
        .returning(|_| Ok(None));
    let server = ports.server();

    let response = server.get("/stations/%20").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn get_station_store_failure_is_internal_error() {
    let mut ports = Ports::new();
    ports.stations.expect_find_by_id().returning(|_| {
        Err(ApplicationError::Database(
            "relation \"train_station\" does not exist".to_string(),
        ))
    });
    let server = ports.server();

    let response = server.get("/stations/19843").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "internal_error");
}

// ============ Stations Near Route Tests ============

#[tokio::test]
async fn stations_near_route_uses_default_radius() {
    let mut ports = Ports::new();
    ports
        .stations
        .expect_find_near_route()
        .withf(|route, radius| route.len() == 2 && radius.meters() == 500)
        .times(1)
        .returning(|_, _| {
            Ok(vec![
                NearbyStation {
                    id: StationId::new("SSS"),
                    name: Some("Southern Cross".to_string()),
                    distance_m: 0.0,
                },
                NearbyStation {
                    id: StationId::new("FSS"),
                    name: Some("Flinders Street".to_string()),
                    distance_m: 11.5,
                },
            ])
        });
    let server = ports.server();

    let response = server
        .post("/stations/near_route")
        .json(&json!({"coordinates": city_route()}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!({"stations": [
            {"id": "SSS", "name": "Southern Cross", "distance_m": 0.0},
            {"id": "FSS", "name": "Flinders Street", "distance_m": 11.5}
        ]})
    );
}

#[tokio::test]
async fn stations_near_route_passes_requested_radius() {
    let mut ports = Ports::new();
    ports
        .stations
        .expect_find_near_route()
        .withf(|_, radius| radius.meters() == 1200)
        .times(1)
        .returning(|_, _| Ok(Vec::new()));
    let server = ports.server();

    let response = server
        .post("/stations/near_route")
        .json(&json!({"maxdistance": 1200, "coordinates": city_route()}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({"stations": []}));
}

#[tokio::test]
async fn stations_near_route_rejects_single_point() {
    let server = Ports::new().server();

    let response = server
        .post("/stations/near_route")
        .json(&json!({"coordinates": [[144.9525, -37.8184]]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "validation_error");
}

#[tokio::test]
async fn stations_near_route_rejects_malformed_pair() {
    let server = Ports::new().server();

    let response = server
        .post("/stations/near_route")
        .json(&json!({"coordinates": [[144.9525], [144.9671, -37.8183]]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn stations_near_route_rejects_radius_above_limit() {
    let server = Ports::new().server();

    let response = server
        .post("/stations/near_route")
        .json(&json!({"maxdistance": 50_001, "coordinates": city_route()}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stations_near_route_rejects_negative_radius() {
    let server = Ports::new().server();

    let response = server
        .post("/stations/near_route")
        .json(&json!({"maxdistance": -5, "coordinates": city_route()}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_validation_error() {
    let server = Ports::new().server();

    let response = server
        .post("/stations/near_route")
        .content_type("application/json")
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "validation_error");
}

// ============ Stations Near Location Tests ============

#[tokio::test]
async fn stations_near_location_returns_stored_positions() {
    let mut ports = Ports::new();
    ports
        .stations
        .expect_find_near_location()
        .withf(|location, radius| {
            (location.latitude() + 37.8185).abs() < 1e-9
                && (location.longitude() - 144.9671).abs() < 1e-9
                && radius.meters() == 100
        })
        .times(1)
        .returning(|_, _| {
            Ok(vec![LocatedStation {
                id: StationId::new("FSS"),
                name: Some("Flinders Street".to_string()),
                location: point(-37.8183, 144.9671),
                distance_m: 22.2,
            }])
        });
    let server = ports.server();

    let response = server
        .post("/stations/near_location")
        .json(&json!({"maxdistance": 100, "coordinates": {"lat": -37.8185, "long": 144.9671}}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!({"stations": [{
            "id": "FSS",
            "name": "Flinders Street",
            "location": {"lat": -37.8183, "long": 144.9671},
            "distance_m": 22.2
        }]})
    );
}

#[tokio::test]
async fn stations_near_location_missing_coordinates_never_queries() {
    let server = Ports::new().server();

    for body in [
        json!({}),
        json!({"maxdistance": 100}),
        json!({"coordinates": {"lat": -37.8}}),
        json!({"coordinates": {"long": 144.9}}),
        json!({"coordinates": {}}),
    ] {
        let response = server.post("/stations/near_location").json(&body).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{body}");
        let error: serde_json::Value = response.json();
        assert_eq!(error["error"], "Missing coordinates");
    }
}

#[tokio::test]
async fn stations_near_location_out_of_range_point_rejected() {
    let server = Ports::new().server();

    let response = server
        .post("/stations/near_location")
        .json(&json!({"coordinates": {"lat": -137.8, "long": 144.9}}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

// ============ Parking Tests ============

fn car_park() -> ParkingArea {
    ParkingArea {
        id: 10,
        name: Some("Car Park A".to_string()),
        tags: Tags::parse(r#""amenity"=>"parking", "fee"=>NULL"#),
        boundary_wkt: "MULTIPOLYGON(((144.9597 -37.8173,144.9603 -37.8173,144.9603 -37.8167,144.9597 -37.8173)))"
            .to_string(),
        centroid: point(-37.817, 144.96),
        distance_m: 0.0,
    }
}

#[tokio::test]
async fn parking_near_location_returns_bare_array() {
    let mut ports = Ports::new();
    ports
        .parking
        .expect_find_near_location()
        .times(1)
        .returning(|_, _| Ok(vec![car_park()]));
    let server = ports.server();

    let response = server
        .post("/parking/near_location")
        .json(&json!({"coordinates": {"lat": -37.817, "long": 144.96}}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!([{
            "id": 10,
            "name": "Car Park A",
            "other_tags": {"amenity": "parking", "fee": null},
            "parking_area_multipolygon": "MULTIPOLYGON(((144.9597 -37.8173,144.9603 -37.8173,144.9603 -37.8167,144.9597 -37.8173)))",
            "parking_area_centroid": {"lat": -37.817, "long": 144.96},
            "distance_meters": 0.0
        }])
    );
}

#[tokio::test]
async fn parking_empty_result_is_empty_array() {
    let mut ports = Ports::new();
    ports
        .parking
        .expect_find_near_location()
        .returning(|_, _| Ok(Vec::new()));
    let server = ports.server();

    let response = server
        .post("/parking/near_location")
        .json(&json!({"maxdistance": 0, "coordinates": {"lat": -37.817, "long": 144.96}}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn parking_missing_coordinates_never_queries() {
    let server = Ports::new().server();

    let response = server
        .post("/parking/near_location")
        .json(&json!({"maxdistance": 100, "coordinates": {"lat": -37.8}}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Missing coordinates");
    assert_eq!(body["code"], "bad_request");
}

// ============ Park-and-Ride Tests ============

#[tokio::test]
async fn park_ride_wraps_results() {
    let mut ports = Ports::new();
    ports
        .park_ride
        .expect_find_near_route()
        .withf(|route, radius| route.len() == 2 && radius.meters() == 250)
        .times(1)
        .returning(|_, _| {
            Ok(vec![ParkAndRideZone {
                id: 1,
                zone_name: Some("City".to_string()),
                nearest_station_id: StationId::new("FSS"),
                nearest_station_name: Some("Flinders Street".to_string()),
                tags: Tags::parse(r#""capacity"=>"120""#),
                boundary_wkt: "MULTIPOLYGON(((0 0,1 0,1 1,0 0)))".to_string(),
                centroid: point(-37.8183, 144.9671),
                distance_m: 4.5,
            }])
        });
    let server = ports.server();

    let response = server
        .post("/park_ride")
        .json(&json!({"maxdistance": 250, "coordinates": city_route()}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!({"park_and_ride": [{
            "id": 1,
            "zone_name": "City",
            "nearest_train_station_name": "Flinders Street",
            "other_tags": {"capacity": "120"},
            "nearest_station_multipolygon": "MULTIPOLYGON(((0 0,1 0,1 1,0 0)))",
            "nearest_station_centroid": {"lat": -37.8183, "long": 144.9671},
            "distance_meters": 4.5
        }]})
    );
}

#[tokio::test]
async fn park_ride_pool_timeout_is_service_unavailable() {
    let mut ports = Ports::new();
    ports.park_ride.expect_find_near_route().returning(|_, _| {
        Err(ApplicationError::DatabaseUnavailable(
            "Timed out acquiring a connection".to_string(),
        ))
    });
    let server = ports.server();

    let response = server
        .post("/park_ride")
        .json(&json!({"coordinates": city_route()}))
        .await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "service_unavailable");
}

// ============ Cross-cutting Tests ============

#[tokio::test]
async fn request_id_generated_when_absent() {
    let server = Ports::new().server();

    let response = server.get("/health").await;

    let id = response
        .headers()
        .get("x-request-id")
        .expect("request id header");
    assert!(uuid_like(id.to_str().unwrap()));
}

#[tokio::test]
async fn request_id_echoed_when_supplied() {
    let server = Ports::new().server();

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("client-trace-7"),
        )
        .await;

    assert_eq!(response.headers()["x-request-id"], "client-trace-7");
}

#[tokio::test]
async fn openapi_document_served() {
    let server = Ports::new().server();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/park_ride"].is_object());
    assert!(body["paths"]["/stations/{station_id}"].is_object());
}

fn uuid_like(s: &str) -> bool {
    s.len() == 36 && s.chars().filter(|c| *c == '-').count() == 4
}
