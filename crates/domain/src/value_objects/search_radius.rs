//! Search radius value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Distance in metres on the ellipsoid within which entities are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SearchRadius(u32);

impl SearchRadius {
    /// Radius used when a request omits `maxdistance`
    pub const DEFAULT_METERS: u32 = 500;

    /// Create a radius from a client-supplied value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRadius` for negative values or values
    /// that do not fit in `u32`
    pub fn new(meters: i64) -> Result<Self, DomainError> {
        u32::try_from(meters).map(Self).map_err(|_| {
            DomainError::InvalidRadius(format!("{meters} must be between 0 and {}", u32::MAX))
        })
    }

    /// Create a radius and enforce an upper bound
    pub fn with_limit(meters: i64, max_meters: u32) -> Result<Self, DomainError> {
        let radius = Self::new(meters)?;
        if radius.0 > max_meters {
            return Err(DomainError::InvalidRadius(format!(
                "{meters} exceeds the maximum of {max_meters} metres"
            )));
        }
        Ok(radius)
    }

    /// Radius in metres
    #[must_use]
    pub const fn meters(&self) -> u32 {
        self.0
    }

    /// Radius as a float, the type spatial predicates expect
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self(Self::DEFAULT_METERS)
    }
}

impl fmt::Display for SearchRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}
