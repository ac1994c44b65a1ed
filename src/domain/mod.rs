// Domain layer - map data and pure geometry
pub mod error;
pub mod geometry;
pub mod mission;
pub mod route;
pub mod zone;
