use serde::Serialize;

use crate::core::data::coordinate::Coordinate;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct CameraState {
    pub center: Coordinate,
    pub zoom: u8,
}

impl CameraState {
    #[must_use]
    pub const fn new(center: Coordinate, zoom: u8) -> Self {
        Self { center, zoom }
    }
}
