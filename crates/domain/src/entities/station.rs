//! Train station entities

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinates, StationId};

/// A train station as stored in the data set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station identifier
    pub id: StationId,
    /// Display name
    pub name: Option<String>,
    /// Point geometry as well-known text
    pub geometry_wkt: Option<String>,
    /// Whether the station is wheelchair accessible
    pub wheelchair_accessible: bool,
}

/// A station found near a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyStation {
    pub id: StationId,
    pub name: Option<String>,
    /// Geographic distance to the search anchor in metres
    pub distance_m: f64,
}

/// A station found near a point, with its stored position decoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedStation {
    pub id: StationId,
    pub name: Option<String>,
    /// Position read back from the stored geometry
    pub location: Coordinates,
    /// Geographic distance to the search anchor in metres
    pub distance_m: f64,
}
