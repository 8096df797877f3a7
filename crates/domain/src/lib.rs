//! Domain layer for TransitGeo
//!
//! Contains the entities, value objects and domain errors for the transit
//! geospatial query service. This layer has no I/O and defines the
//! ubiquitous language: stations, parking areas, park-and-ride zones,
//! routes, coordinates and search radii.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

/// Spatial reference identifier shared by every stored geometry (EPSG:7844, GDA2020)
pub const GDA2020_SRID: i32 = 7844;
