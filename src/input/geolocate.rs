use std::future::Future;
use std::sync::Arc;

use log::debug;

use crate::controllers::map::MapStore;
use crate::core::data::camera_state::CameraState;
use crate::input::ports::geolocation::GeolocationSensor;

/// "Locate me" button. Failures are swallowed; the camera just stays put.
pub struct GeolocateAdapter<S: GeolocationSensor> {
    sensor: Arc<S>,
    map: MapStore,
}

impl<S: GeolocationSensor> GeolocateAdapter<S> {
    pub fn new(sensor: Arc<S>, map: MapStore) -> Self {
        Self { sensor, map }
    }

    pub fn locate(&self) -> impl Future<Output = Option<CameraState>> + '_ {
        async move {
            let position = match self.sensor.current_position().await {
                Ok(position) => position,
                Err(err) => {
                    debug!("geolocation unavailable: {}", err);
                    return None;
                }
            };

            match self.map.move_to(position) {
                Ok(camera) => Some(camera),
                Err(err) => {
                    debug!("ignoring device position: {}", err);
                    None
                }
            }
        }
    }
}
