//! Park-and-ride zone entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinates, StationId, Tags};

/// A park-and-ride zone found near a route, joined to its nearest station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkAndRideZone {
    pub id: i32,
    pub zone_name: Option<String>,
    /// Station the zone serves; always resolves to an existing station
    pub nearest_station_id: StationId,
    pub nearest_station_name: Option<String>,
    /// OpenStreetMap tags
    pub tags: Tags,
    /// Zone multipolygon as well-known text
    pub boundary_wkt: String,
    /// Zone centroid in the GDA2020 frame
    pub centroid: Coordinates,
    /// Geographic distance from the zone polygon to the route, in metres
    pub distance_m: f64,
}
