//! Port definitions for the map store.
//!
//! The renderer consumes view changes through `MapPresenterPort`; it never
//! reaches into the store directly.

pub mod presenter;
