use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use crate::controllers::map::MapStore;
use crate::core::actions::cancellation::{CancelToken, RequestSequence};
use crate::core::data::camera_state::CameraState;
use crate::core::data::coordinate::Coordinate;
use crate::input::ports::geocoder::{Geocoder, SearchBias, ServiceError, Suggestion};
use crate::input::search::state::{SearchError, SearchPhase, SearchState};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Moved(CameraState),
    Failed(SearchError),
    /// A later pick was issued before this one resolved; nothing was applied.
    Superseded,
}

/// Free-text search box feeding the camera.
///
/// Suggestion lookups and suggestion resolutions each carry a ticket from
/// their own `RequestSequence`. A response is applied only while its ticket
/// is still the latest, so late answers to abandoned requests are dropped.
pub struct SearchAdapter<G: Geocoder> {
    geocoder: Arc<G>,
    map: MapStore,
    bias: SearchBias,
    state: Mutex<SearchState>,
    suggest_sequence: RequestSequence,
    resolve_sequence: RequestSequence,
}

impl<G: Geocoder> SearchAdapter<G> {
    pub fn new(geocoder: Arc<G>, map: MapStore, bias: SearchBias) -> Self {
        Self {
            geocoder,
            map,
            bias,
            state: Mutex::new(SearchState::default()),
            suggest_sequence: RequestSequence::new(),
            resolve_sequence: RequestSequence::new(),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.lock().text.clone()
    }

    #[must_use]
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.lock().suggestions.clone()
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.lock().phase.clone()
    }

    #[must_use]
    pub fn bias(&self) -> SearchBias {
        self.bias
    }

    /// Records a keystroke and looks up suggestions for the new text.
    ///
    /// The request is numbered when this is called, not when the future is
    /// first polled.
    pub fn input_changed(&self, text: impl Into<String>) -> impl Future<Output = ()> + '_ {
        let text = text.into();

        let (ticket, query) = {
            let mut state = self.lock();
            let ticket = self.suggest_sequence.issue();
            state.text.clone_from(&text);

            if text.is_empty() {
                state.suggestions.clear();
                state.pending_lookup = None;
                state.settle(SearchPhase::Idle);
                (ticket, None)
            } else {
                state.pending_lookup = Some(ticket.seq());
                state.phase = SearchPhase::Querying;
                (ticket, Some(text))
            }
        };

        async move {
            let Some(query) = query else {
                return;
            };

            let result = self.geocoder.suggest(&query, &self.bias).await;

            let mut state = self.lock();
            if ticket.is_cancelled() {
                debug!("dropping stale suggestions #{} for {:?}", ticket.seq(), query);
                return;
            }

            match result {
                Ok(suggestions) => {
                    debug!("{} suggestions for {:?}", suggestions.len(), query);
                    state.suggestions = suggestions;
                }
                Err(err) => {
                    debug!("no suggestions for {:?}: {}", query, err);
                    state.suggestions.clear();
                }
            }
            state.pending_lookup = None;
            state.settle(SearchPhase::Idle);
        }
    }

    /// Picks a suggestion and pans the camera to it. Never places a marker.
    ///
    /// The text box shows `description` and the suggestion list is closed
    /// right away, before resolution starts.
    pub fn select_suggestion(
        &self,
        description: impl Into<String>,
    ) -> impl Future<Output = SearchOutcome> + '_ {
        let description = description.into();

        let ticket = {
            let mut state = self.lock();
            let ticket = self.resolve_sequence.issue();
            // Any suggestion lookup still in flight belongs to the old text.
            self.suggest_sequence.issue();

            state.text.clone_from(&description);
            state.suggestions.clear();
            state.pending_lookup = None;
            state.pending_resolve = Some(ticket.seq());
            state.phase = SearchPhase::Querying;
            ticket
        };

        async move {
            let result = self.resolve(&description).await;

            // Held through the camera move: no newer pick can be issued
            // between the staleness check and the move it guards.
            let mut state = self.lock();
            if ticket.is_cancelled() {
                debug!(
                    "dropping stale resolution #{} for {:?}",
                    ticket.seq(),
                    description
                );
                return SearchOutcome::Superseded;
            }
            state.pending_resolve = None;

            let moved = result.and_then(|coordinate| {
                self.map
                    .move_to(coordinate)
                    .map(|camera| (coordinate, camera))
                    .map_err(SearchError::from)
            });

            match moved {
                Ok((coordinate, camera)) => {
                    state.settle(SearchPhase::Resolved(coordinate));
                    SearchOutcome::Moved(camera)
                }
                Err(err) => {
                    warn!("search for {:?} failed: {}", description, err);
                    state.settle(SearchPhase::Failed(err.clone()));
                    SearchOutcome::Failed(err)
                }
            }
        }
    }

    /// Empties the box and abandons every pending request.
    pub fn reset(&self) {
        let mut state = self.lock();
        self.suggest_sequence.issue();
        self.resolve_sequence.issue();
        *state = SearchState::default();
    }

    async fn resolve(&self, description: &str) -> Result<Coordinate, SearchError> {
        let places = self.geocoder.geocode(description).await?;
        let place = places.first().ok_or(ServiceError::ZeroResults)?;
        let coordinate = self.geocoder.to_coordinate(place).await?;

        Ok(coordinate)
    }

    fn lock(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
