pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod session;

pub use crate::config::{ConfigError, MapConfig};
pub use crate::controllers::map::{MapEvent, MapPresenterPort, MapSnapshot, MapStore};
pub use crate::core::data::camera_state::CameraState;
pub use crate::core::data::coordinate::{Coordinate, InvalidCoordinate};
pub use crate::core::data::marker::{Marker, MarkerDetail, MarkerId};
pub use crate::core::data::marker_list::MarkerList;
pub use crate::presenters::logging::presenter::LogPresenter;
pub use crate::session::MapSession;
pub use crate::adapters::{FixedPositionSensor, Gazetteer, GazetteerEntry};
pub use crate::input::ports::{
    Geocoder, GeolocationSensor, SearchBias, SensorError, ServiceError, Suggestion,
};
pub use crate::input::{SearchError, SearchOutcome, SearchPhase};
