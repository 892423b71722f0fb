use futures::FutureExt;
use futures::future::{BoxFuture, ready};

use crate::core::data::coordinate::Coordinate;
use crate::input::ports::geolocation::{GeolocationSensor, SensorError};

/// Sensor reporting a configured position, or `Unavailable` when there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPositionSensor {
    position: Option<Coordinate>,
}

impl FixedPositionSensor {
    pub fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }
}

impl GeolocationSensor for FixedPositionSensor {
    fn current_position(&self) -> BoxFuture<'_, Result<Coordinate, SensorError>> {
        ready(self.position.ok_or(SensorError::Unavailable)).boxed()
    }
}
