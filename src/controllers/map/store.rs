use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::controllers::map::data::snapshot::MapSnapshot;
use crate::controllers::map::events::map_event::MapEvent;
use crate::controllers::map::ports::presenter::MapPresenterPort;
use crate::core::camera::CameraController;
use crate::core::data::camera_state::CameraState;
use crate::core::data::coordinate::{Coordinate, InvalidCoordinate};
use crate::core::data::marker::{Marker, MarkerId};
use crate::core::data::marker_list::MarkerList;
use crate::core::marker_store::MarkerStore;

struct MapState {
    camera: CameraController,
    markers: MarkerStore,
}

struct SharedState {
    state: Mutex<MapState>,
    // Held from mutation until the presenter returns, so the renderer sees
    // changes in the order they were applied.
    presentation: Mutex<()>,
    presenter_port: Arc<dyn MapPresenterPort>,
}

/// State container for the camera and the marker collection.
///
/// Clones share the same state, so each input adapter can hold its own handle.
/// The renderer is told about every change exactly once and in mutation
/// order. Reads never wait on the renderer; a presenter may read the store
/// but must not mutate it from `present`.
#[derive(Clone)]
pub struct MapStore {
    shared: Arc<SharedState>,
}

impl MapStore {
    pub fn new(
        initial_camera: CameraState,
        focus_zoom: u8,
        presenter_port: Arc<dyn MapPresenterPort>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            state: Mutex::new(MapState {
                camera: CameraController::new(initial_camera, focus_zoom),
                markers: MarkerStore::new(),
            }),
            presentation: Mutex::new(()),
            presenter_port,
        });

        Self { shared }
    }

    pub fn move_to(&self, coordinate: Coordinate) -> Result<CameraState, InvalidCoordinate> {
        let _presenting = self.begin_presentation();
        let camera = self.lock().camera.move_to(coordinate)?;

        debug!("camera moved to {} at zoom {}", camera.center, camera.zoom);
        self.shared
            .presenter_port
            .present(MapEvent::CameraMoved(camera));

        Ok(camera)
    }

    pub fn add_marker(&self, coordinate: Coordinate) -> MarkerId {
        let _presenting = self.begin_presentation();
        let (id, markers) = {
            let mut guard = self.lock();
            let id = guard.markers.add(coordinate);
            (id, guard.markers.list())
        };

        debug!("marker {} placed, {} total", id, markers.len());
        self.shared
            .presenter_port
            .present(MapEvent::MarkersChanged(markers));

        id
    }

    pub fn select(&self, id: MarkerId) {
        let _presenting = self.begin_presentation();
        let selected = {
            let mut guard = self.lock();
            if !guard.markers.select(id) {
                None
            } else {
                guard.markers.selected().cloned()
            }
        };

        match selected {
            Some(marker) => {
                debug!("marker {} selected", id);
                self.shared
                    .presenter_port
                    .present(MapEvent::SelectionChanged(Some(marker)));
            }
            None => debug!("ignoring selection of unknown marker {}", id),
        }
    }

    pub fn clear_selection(&self) {
        let _presenting = self.begin_presentation();
        let had_selection = {
            let mut guard = self.lock();
            let had_selection = guard.markers.selected().is_some();
            guard.markers.clear();
            had_selection
        };

        if had_selection {
            self.shared
                .presenter_port
                .present(MapEvent::SelectionChanged(None));
        }
    }

    #[must_use]
    pub fn camera(&self) -> CameraState {
        self.lock().camera.state()
    }

    #[must_use]
    pub fn markers(&self) -> MarkerList {
        self.lock().markers.list()
    }

    #[must_use]
    pub fn selected(&self) -> Option<Marker> {
        self.lock().markers.selected().cloned()
    }

    #[must_use]
    pub fn snapshot(&self) -> MapSnapshot {
        let guard = self.lock();

        MapSnapshot {
            camera: guard.camera.state(),
            markers: guard.markers.list(),
            selected: guard.markers.selected().cloned(),
        }
    }

    fn begin_presentation(&self) -> MutexGuard<'_, ()> {
        self.shared
            .presentation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, MapState> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
