//! Camera controller.
//!
//! Owns the view center and zoom. Every move snaps to the configured focus
//! zoom regardless of how far the user had zoomed in or out before.

use crate::core::data::camera_state::CameraState;
use crate::core::data::coordinate::{Coordinate, InvalidCoordinate};

pub const DEFAULT_FOCUS_ZOOM: u8 = 14;

#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    state: CameraState,
    focus_zoom: u8,
}

impl CameraController {
    #[must_use]
    pub fn new(initial: CameraState, focus_zoom: u8) -> Self {
        Self {
            state: initial,
            focus_zoom,
        }
    }

    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    #[must_use]
    pub fn focus_zoom(&self) -> u8 {
        self.focus_zoom
    }

    /// Centers on `coordinate` at the focus zoom.
    ///
    /// Out-of-range input is rejected before anything changes.
    pub fn move_to(&mut self, coordinate: Coordinate) -> Result<CameraState, InvalidCoordinate> {
        let center = coordinate.validate()?;

        self.state = CameraState {
            center,
            zoom: self.focus_zoom,
        };

        Ok(self.state)
    }
}
