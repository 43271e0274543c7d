pub mod coordinate;
pub mod geometry;
pub mod pitch;
pub mod snapshot;
pub mod tuning;
