//! Application services - Use case implementations

mod park_and_ride_service;
mod parking_service;
mod station_service;

pub use park_and_ride_service::ParkAndRideService;
pub use parking_service::ParkingService;
pub use station_service::StationService;
