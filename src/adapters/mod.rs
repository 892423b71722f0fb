//! In-process implementations of the input ports.

pub mod geocoding;
pub mod sensors;

pub use geocoding::gazetteer::{Gazetteer, GazetteerEntry};
pub use sensors::fixed_position::FixedPositionSensor;
