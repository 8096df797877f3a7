//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod route;
mod search_radius;
mod station_id;
mod tags;

pub use coordinates::Coordinates;
pub use route::Route;
pub use search_radius::SearchRadius;
pub use station_id::StationId;
pub use tags::Tags;
