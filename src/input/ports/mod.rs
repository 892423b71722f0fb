//! Collaborators the input adapters depend on but do not implement.

pub mod geocoder;
pub mod geolocation;

pub use geocoder::{Geocoder, SearchBias, ServiceError, Suggestion};
pub use geolocation::{GeolocationSensor, SensorError};
