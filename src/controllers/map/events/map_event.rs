use crate::core::data::camera_state::CameraState;
use crate::core::data::marker::Marker;
use crate::core::data::marker_list::MarkerList;

#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Pan/zoom the viewport to this camera.
    CameraMoved(CameraState),
    /// Full marker collection after a placement.
    MarkersChanged(MarkerList),
    /// Detail overlay target; `None` closes it.
    SelectionChanged(Option<Marker>),
}
