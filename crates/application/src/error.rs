//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Requested entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Spatial store could not be reached (pool exhausted, closed, timed out)
    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    /// Spatial store rejected or failed the query
    #[error("Database error: {0}")]
    Database(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
