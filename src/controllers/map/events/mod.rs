pub mod map_event;
