//! Route (polyline) value object

use geo_types::{Coord, LineString};
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

use super::Coordinates;
use crate::DomainError;

/// An ordered polyline of at least two positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    points: Vec<Coordinates>,
}

impl Route {
    /// Minimum number of positions a line geometry needs
    pub const MIN_POINTS: usize = 2;

    /// Build a route from already validated positions
    pub fn new(points: Vec<Coordinates>) -> Result<Self, DomainError> {
        if points.len() < Self::MIN_POINTS {
            return Err(DomainError::InvalidRoute(format!(
                "a route needs at least {} points, got {}",
                Self::MIN_POINTS,
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// Build a route from `[[lon, lat], ...]` pairs
    ///
    /// Every pair must contain exactly two finite, in-range numbers.
    pub fn from_lon_lat_pairs<P: AsRef<[f64]>>(pairs: &[P]) -> Result<Self, DomainError> {
        let points = pairs
            .iter()
            .enumerate()
            .map(|(index, pair)| {
                Coordinates::from_lon_lat(pair.as_ref()).map_err(|e| {
                    DomainError::InvalidRoute(format!("point {index}: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(points)
    }

    /// Number of positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a route holds at least two points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Line geometry in `x = longitude, y = latitude` axis order
    #[must_use]
    pub fn to_line_string(&self) -> LineString<f64> {
        self.points
            .iter()
            .map(|p| Coord {
                x: p.longitude(),
                y: p.latitude(),
            })
            .collect()
    }

    /// Well-known text of the line, bound as the route parameter of spatial queries
    #[must_use]
    pub fn to_wkt(&self) -> String {
        self.to_line_string().wkt_string()
    }
}
