//! Domain entities - Read models for the stored transit data

mod park_and_ride;
mod parking_area;
mod station;

pub use park_and_ride::ParkAndRideZone;
pub use parking_area::ParkingArea;
pub use station::{LocatedStation, NearbyStation, Station};
