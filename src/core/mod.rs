pub mod actions;
pub mod camera;
pub mod data;
pub mod marker_store;
