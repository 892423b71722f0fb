use log::info;

use crate::controllers::map::{MapEvent, MapPresenterPort};

/// Renderer that narrates view changes to the log instead of drawing them.
#[derive(Debug, Default)]
pub struct LogPresenter;

impl LogPresenter {
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn describe(event: &MapEvent) -> String {
        match event {
            MapEvent::CameraMoved(camera) => {
                format!("pan to {} at zoom {}", camera.center, camera.zoom)
            }
            MapEvent::MarkersChanged(markers) => match markers.last() {
                Some(latest) => format!(
                    "{} marker(s), latest at {}",
                    markers.len(),
                    latest.coordinate()
                ),
                None => "no markers".to_string(),
            },
            MapEvent::SelectionChanged(Some(marker)) => {
                let detail = marker.detail();
                format!("{}: {}", detail.title, detail.location)
            }
            MapEvent::SelectionChanged(None) => "detail closed".to_string(),
        }
    }
}

impl MapPresenterPort for LogPresenter {
    fn present(&self, event: MapEvent) {
        info!("{}", Self::describe(&event));
    }
}
