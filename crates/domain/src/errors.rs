//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude/longitude outside the valid range or not finite
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Route geometry could not be built from the supplied points
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Search radius is negative or above the configured maximum
    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
