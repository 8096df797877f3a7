//! Row structs returned by the spatial queries and their mapping into
//! domain entities.
//!
//! Geometry columns never reach Rust as binary values: queries project
//! them through `ST_AsText`, `ST_X` and `ST_Y`.

use domain::{
    Coordinates, DomainError, LocatedStation, NearbyStation, ParkAndRideZone, ParkingArea,
    Station, StationId, Tags,
};

/// `train_station` row for single-station lookup
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StationRow {
    pub id: String,
    pub name: Option<String>,
    pub geom_wkt: Option<String>,
    pub wheelchair_accessible: Option<bool>,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Self {
            id: StationId::new(row.id),
            name: row.name,
            geometry_wkt: row.geom_wkt,
            wheelchair_accessible: row.wheelchair_accessible.unwrap_or(false),
        }
    }
}

/// Station within range of a route
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NearbyStationRow {
    pub id: String,
    pub name: Option<String>,
    pub distance_m: f64,
}

impl From<NearbyStationRow> for NearbyStation {
    fn from(row: NearbyStationRow) -> Self {
        Self {
            id: StationId::new(row.id),
            name: row.name,
            distance_m: row.distance_m,
        }
    }
}

/// Station within range of a point, with its stored position
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LocatedStationRow {
    pub id: String,
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_m: f64,
}

impl TryFrom<LocatedStationRow> for LocatedStation {
    type Error = DomainError;

    fn try_from(row: LocatedStationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: StationId::new(row.id),
            name: row.name,
            location: Coordinates::new(row.latitude, row.longitude)?,
            distance_m: row.distance_m,
        })
    }
}

/// `osm_public_parking` row with centroid and distance
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParkingAreaRow {
    pub id: i32,
    pub name: Option<String>,
    pub other_tags: Option<String>,
    pub boundary_wkt: String,
    pub centroid_lat: f64,
    pub centroid_long: f64,
    pub distance_m: f64,
}

impl TryFrom<ParkingAreaRow> for ParkingArea {
    type Error = DomainError;

    fn try_from(row: ParkingAreaRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            tags: Tags::parse_opt(row.other_tags.as_deref()),
            boundary_wkt: row.boundary_wkt,
            centroid: Coordinates::new(row.centroid_lat, row.centroid_long)?,
            distance_m: row.distance_m,
        })
    }
}

/// `osm_park_and_ride` row joined to its nearest station
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParkAndRideRow {
    pub id: i32,
    pub zone_name: Option<String>,
    pub nearest_station_id: String,
    pub nearest_station_name: Option<String>,
    pub other_tags: Option<String>,
    pub boundary_wkt: String,
    pub centroid_lat: f64,
    pub centroid_long: f64,
    pub distance_m: f64,
}

impl TryFrom<ParkAndRideRow> for ParkAndRideZone {
    type Error = DomainError;

    fn try_from(row: ParkAndRideRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            zone_name: row.zone_name,
            nearest_station_id: StationId::new(row.nearest_station_id),
            nearest_station_name: row.nearest_station_name,
            tags: Tags::parse_opt(row.other_tags.as_deref()),
            boundary_wkt: row.boundary_wkt,
            centroid: Coordinates::new(row.centroid_lat, row.centroid_long)?,
            distance_m: row.distance_m,
        })
    }
}
