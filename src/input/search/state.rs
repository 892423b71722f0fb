use thiserror::Error;

use crate::core::data::coordinate::{Coordinate, InvalidCoordinate};
use crate::input::ports::geocoder::{ServiceError, Suggestion};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("geocoding failed: {0}")]
    Service(#[from] ServiceError),
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    /// A suggestion lookup or a resolution is in flight.
    Querying,
    Resolved(Coordinate),
    Failed(SearchError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct SearchState {
    pub text: String,
    pub suggestions: Vec<Suggestion>,
    pub phase: SearchPhase,
    /// Sequence number of the suggestion lookup still in flight.
    pub pending_lookup: Option<u64>,
    /// Sequence number of the pick still being resolved.
    pub pending_resolve: Option<u64>,
}

impl SearchState {
    /// Moves to `done` unless the other request stream is still running.
    pub fn settle(&mut self, done: SearchPhase) {
        self.phase = if self.pending_lookup.is_some() || self.pending_resolve.is_some() {
            SearchPhase::Querying
        } else {
            done
        };
    }
}
