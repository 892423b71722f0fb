//! Map store: the single owner of camera and marker state.
//!
//! # Architecture
//!
//! - **Input**: adapters call `move_to` / `add_marker`; rendered markers call
//!   `select`, the detail view calls `clear_selection`
//! - **Output**: `MapPresenterPort` receives one `MapEvent` per change
//! - **Core**: `CameraController` and `MarkerStore` from `core/` hold the rules

pub mod data;
pub mod events;
pub mod ports;
mod store;

pub use data::snapshot::MapSnapshot;
pub use events::map_event::MapEvent;
pub use ports::presenter::MapPresenterPort;
pub use store::MapStore;

#[cfg(test)]
pub(crate) use store::tests::{GatedPresenter, INITIAL_CAMERA, MockPresenterPort, create_store};
