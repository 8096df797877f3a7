//! Public parking area entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinates, Tags};

/// A public parking polygon found near a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingArea {
    pub id: i32,
    pub name: Option<String>,
    /// OpenStreetMap tags
    pub tags: Tags,
    /// Boundary multipolygon as well-known text
    pub boundary_wkt: String,
    /// Polygon centroid in the GDA2020 frame
    pub centroid: Coordinates,
    /// Geographic distance from the polygon (not the centroid) to the anchor, in metres
    pub distance_m: f64,
}
