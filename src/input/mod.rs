//! Input adapters: search box, locate button and map clicks.
//!
//! Each adapter turns one external input source into `MapStore::move_to`
//! or `MapStore::add_marker` calls. None of them know about each other.

pub mod geolocate;
pub mod map_click;
pub mod ports;
pub mod search;

pub use geolocate::GeolocateAdapter;
pub use map_click::MapClickAdapter;
pub use search::{SearchAdapter, SearchError, SearchOutcome, SearchPhase};

#[cfg(test)]
pub(crate) use geolocate::tests::StubSensor;
