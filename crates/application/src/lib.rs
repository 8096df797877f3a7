//! Application layer - Use cases and orchestration
//!
//! Contains the query use cases for stations, parking areas and
//! park-and-ride zones, plus the port definitions the infrastructure
//! layer implements against the spatial store.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
