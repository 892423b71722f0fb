pub mod camera_state;
pub mod coordinate;
pub mod marker;
pub mod marker_list;
