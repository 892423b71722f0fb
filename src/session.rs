//! Composition root.
//!
//! `MapSession` owns the map store and wires the three input adapters to it.
//! The presentation layer reads snapshots and forwards user events through
//! the adapters; it never mutates camera or markers directly.

use std::sync::Arc;

use log::debug;

use crate::adapters::{FixedPositionSensor, Gazetteer};
use crate::config::{ConfigError, MapConfig};
use crate::controllers::map::{MapPresenterPort, MapSnapshot, MapStore};
use crate::core::data::marker::MarkerId;
use crate::input::ports::geocoder::Geocoder;
use crate::input::ports::geolocation::GeolocationSensor;
use crate::input::{GeolocateAdapter, MapClickAdapter, SearchAdapter};

pub struct MapSession<G: Geocoder, S: GeolocationSensor> {
    map: MapStore,
    search: SearchAdapter<G>,
    geolocate: GeolocateAdapter<S>,
    map_click: MapClickAdapter,
}

impl<G: Geocoder, S: GeolocationSensor> MapSession<G, S> {
    pub fn new(
        config: &MapConfig,
        geocoder: Arc<G>,
        sensor: Arc<S>,
        presenter_port: Arc<dyn MapPresenterPort>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let map = MapStore::new(config.initial_camera, config.focus_zoom, presenter_port);
        debug!(
            "map session opened at {} zoom {}",
            config.initial_camera.center, config.initial_camera.zoom
        );

        Ok(Self {
            search: SearchAdapter::new(geocoder, map.clone(), config.search_bias),
            geolocate: GeolocateAdapter::new(sensor, map.clone()),
            map_click: MapClickAdapter::new(map.clone()),
            map,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> MapSnapshot {
        self.map.snapshot()
    }

    pub fn map(&self) -> &MapStore {
        &self.map
    }

    pub fn search(&self) -> &SearchAdapter<G> {
        &self.search
    }

    pub fn geolocate(&self) -> &GeolocateAdapter<S> {
        &self.geolocate
    }

    pub fn map_click(&self) -> &MapClickAdapter {
        &self.map_click
    }

    /// A rendered marker was clicked.
    pub fn activate_marker(&self, id: MarkerId) {
        self.map.select(id);
    }

    /// The detail overlay was closed.
    pub fn dismiss_detail(&self) {
        self.map.clear_selection();
    }
}

impl MapSession<Gazetteer, FixedPositionSensor> {
    /// Session backed by the in-memory gazetteer and the configured device position.
    pub fn offline(
        config: &MapConfig,
        presenter_port: Arc<dyn MapPresenterPort>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            config,
            Arc::new(Gazetteer::default()),
            Arc::new(FixedPositionSensor::new(config.device_position)),
            presenter_port,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    use crate::controllers::map::{MapEvent, MockPresenterPort};
    use crate::core::camera::DEFAULT_FOCUS_ZOOM;
    use crate::core::data::camera_state::CameraState;
    use crate::core::data::coordinate::Coordinate;
    use crate::input::ports::geolocation::SensorError;
    use crate::input::search::{COPENHAGEN, FakeGeocoder, MALMO};
    use crate::input::{SearchOutcome, StubSensor};

    fn create_session(
        sensor: StubSensor,
    ) -> (MapSession<FakeGeocoder, StubSensor>, Arc<MockPresenterPort>) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let geocoder = FakeGeocoder::with_places(&[("Copenhagen", COPENHAGEN), ("Malmö", MALMO)]);
        let session = MapSession::new(
            &MapConfig::default(),
            Arc::new(geocoder),
            Arc::new(sensor),
            Arc::clone(&presenter_port) as Arc<dyn MapPresenterPort>,
        )
        .unwrap();

        (session, presenter_port)
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = MapConfig::default();
        config.initial_camera.center = Coordinate::new(0.0, 190.0);

        let result = MapSession::offline(&config, Arc::new(MockPresenterPort::default()));

        assert!(matches!(result, Err(ConfigError::InitialCenter(_))));
    }

    #[test]
    fn test_place_select_and_dismiss_marker() {
        let (session, _presenter_port) = create_session(StubSensor(Err(SensorError::Timeout)));
        let at = Coordinate::new(55.9, 12.3);

        let id = session.map_click().on_click(at);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.markers.len(), 1);
        assert_eq!(snapshot.markers[0].coordinate(), at);

        session.activate_marker(id);
        assert_eq!(session.snapshot().selected.map(|marker| marker.id()), Some(id));

        session.dismiss_detail();
        assert!(session.snapshot().selected.is_none());
    }

    #[test]
    fn test_inputs_share_one_camera() {
        let here = Coordinate::new(55.7, 12.4);
        let (session, presenter_port) = create_session(StubSensor(Ok(here)));

        block_on(session.search().select_suggestion("Copenhagen"));
        assert_eq!(session.snapshot().camera.center, COPENHAGEN);

        block_on(session.geolocate().locate());
        assert_eq!(session.snapshot().camera, CameraState::new(here, DEFAULT_FOCUS_ZOOM));

        session.map_click().on_click(MALMO);
        assert_eq!(session.snapshot().camera.center, here);

        let events = presenter_port.take_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[2], MapEvent::MarkersChanged(_)));
    }

    #[test]
    fn test_selection_survives_search_and_new_markers() {
        let (session, _presenter_port) = create_session(StubSensor(Err(SensorError::Unavailable)));
        let id = session.map_click().on_click(Coordinate::new(1.0, 1.0));
        session.activate_marker(id);

        session.map_click().on_click(Coordinate::new(2.0, 2.0));
        let outcome = block_on(session.search().select_suggestion("Malmö"));

        assert!(matches!(outcome, SearchOutcome::Moved(_)));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.selected.map(|marker| marker.id()), Some(id));
        assert_eq!(snapshot.markers.len(), 2);
    }
}
