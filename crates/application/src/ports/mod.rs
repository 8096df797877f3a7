//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod database_health_port;
mod park_and_ride_repository;
mod parking_repository;
mod station_repository;

#[cfg(test)]
pub use database_health_port::MockDatabaseHealthPort;
pub use database_health_port::{DatabaseHealth, DatabaseHealthPort};
#[cfg(test)]
pub use park_and_ride_repository::MockParkAndRideRepository;
pub use park_and_ride_repository::ParkAndRideRepository;
#[cfg(test)]
pub use parking_repository::MockParkingRepository;
pub use parking_repository::ParkingRepository;
#[cfg(test)]
pub use station_repository::MockStationRepository;
pub use station_repository::StationRepository;
