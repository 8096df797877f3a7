//! Persistence module
//!
//! Read-only PostGIS adapters for stations, public parking and
//! park-and-ride zones, sharing one sqlx connection pool.

mod database_health;
pub mod error;
mod park_and_ride_repository;
mod parking_repository;
mod pool;
pub mod rows;
mod station_repository;

pub use database_health::PostgisDatabaseHealth;
pub use error::map_sqlx_error;
pub use park_and_ride_repository::PostgisParkAndRideRepository;
pub use parking_repository::PostgisParkingRepository;
pub use pool::{PoolError, connect_options, create_pool, pool_options};
pub use station_repository::PostgisStationRepository;
