use futures::future::BoxFuture;
use thiserror::Error;

use crate::core::data::coordinate::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SensorError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("position request timed out")]
    Timeout,
}

pub trait GeolocationSensor: Send + Sync {
    fn current_position(&self) -> BoxFuture<'_, Result<Coordinate, SensorError>>;
}
