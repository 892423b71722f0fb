use futures::future::BoxFuture;
use thiserror::Error;

use crate::core::data::coordinate::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("no results")]
    ZeroResults,
    #[error("query limit exceeded")]
    OverQueryLimit,
    #[error("request denied")]
    RequestDenied,
    #[error("invalid request")]
    InvalidRequest,
    #[error("geocoding service unavailable: {0}")]
    Unavailable(String),
}

/// Region that suggestions are biased towards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SearchBias {
    pub center: Coordinate,
    pub radius_m: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub description: String,
}

/// Address autocomplete and geocoding backend.
///
/// Resolving a picked suggestion takes two calls: `geocode` turns the
/// description into backend-specific places, `to_coordinate` extracts the
/// position of one of them.
pub trait Geocoder: Send + Sync {
    type Place: Send + Sync;

    fn suggest<'a>(
        &'a self,
        text: &'a str,
        bias: &'a SearchBias,
    ) -> BoxFuture<'a, Result<Vec<Suggestion>, ServiceError>>;

    fn geocode<'a>(
        &'a self,
        description: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Self::Place>, ServiceError>>;

    fn to_coordinate<'a>(
        &'a self,
        place: &'a Self::Place,
    ) -> BoxFuture<'a, Result<Coordinate, ServiceError>>;
}
