use crate::controllers::map::events::map_event::MapEvent;

/// Rendering surface fed by the map store.
pub trait MapPresenterPort: Send + Sync {
    fn present(&self, event: MapEvent);
}
