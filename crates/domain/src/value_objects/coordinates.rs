//! Geographic coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// A geographic position in the shared GDA2020 frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl Coordinates {
    /// Create new coordinates with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either value is not finite,
    /// latitude is not in [-90, 90] or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::InvalidCoordinates(
                "latitude and longitude must be finite numbers".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCoordinates(format!(
                "latitude {latitude} must be -90 to 90"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates(format!(
                "longitude {longitude} must be -180 to 180"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create coordinates from a `[longitude, latitude]` pair (GeoJSON axis order)
    pub fn from_lon_lat(pair: &[f64]) -> Result<Self, DomainError> {
        match pair {
            [longitude, latitude] => Self::new(*latitude, *longitude),
            _ => Err(DomainError::InvalidCoordinates(format!(
                "expected [longitude, latitude], got {} values",
                pair.len()
            ))),
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
