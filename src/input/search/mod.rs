mod adapter;
pub mod state;

pub use adapter::{SearchAdapter, SearchOutcome};
pub use state::{SearchError, SearchPhase};

#[cfg(test)]
pub(crate) use adapter::tests::{COPENHAGEN, FakeGeocoder, MALMO};
