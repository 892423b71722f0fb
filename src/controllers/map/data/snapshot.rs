use serde::Serialize;

use crate::core::data::camera_state::CameraState;
use crate::core::data::marker::Marker;
use crate::core::data::marker_list::MarkerList;

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSnapshot {
    pub camera: CameraState,
    pub markers: MarkerList,
    pub selected: Option<Marker>,
}
