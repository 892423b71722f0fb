use crate::controllers::map::MapStore;
use crate::core::data::coordinate::Coordinate;
use crate::core::data::marker::MarkerId;

/// Drops a marker wherever the map is clicked. The camera does not follow.
#[derive(Clone)]
pub struct MapClickAdapter {
    map: MapStore,
}

impl MapClickAdapter {
    pub fn new(map: MapStore) -> Self {
        Self { map }
    }

    pub fn on_click(&self, coordinate: Coordinate) -> MarkerId {
        self.map.add_marker(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::map::{INITIAL_CAMERA, create_store};

    #[test]
    fn test_click_places_marker_and_keeps_camera() {
        let (store, _presenter_port) = create_store();
        let adapter = MapClickAdapter::new(store.clone());

        let id = adapter.on_click(Coordinate::new(55.9, 12.3));

        let markers = store.markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id(), id);
        assert_eq!(markers[0].coordinate(), Coordinate::new(55.9, 12.3));
        assert_eq!(store.camera(), INITIAL_CAMERA);
    }

    #[test]
    fn test_every_click_appends() {
        let (store, _presenter_port) = create_store();
        let adapter = MapClickAdapter::new(store.clone());

        for i in 0..5 {
            adapter.on_click(Coordinate::new(f64::from(i), 0.0));
        }

        let lats: Vec<f64> = store.markers().iter().map(|marker| marker.lat).collect();
        assert_eq!(lats, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
