use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::data::coordinate::Coordinate;

/// Lookup key for a placed marker.
///
/// Derived from the marker's position, so two markers placed on exactly the
/// same spot share an id.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct MarkerId {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinate> for MarkerId {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.lat,
            lng: coordinate.lng,
        }
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub created_at: DateTime<Utc>,
}

/// Text shown in the detail overlay of a selected marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerDetail {
    pub title: String,
    pub location: String,
}

impl Marker {
    #[must_use]
    pub fn new(coordinate: Coordinate, created_at: DateTime<Utc>) -> Self {
        Self {
            lat: coordinate.lat,
            lng: coordinate.lng,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> MarkerId {
        MarkerId {
            lat: self.lat,
            lng: self.lng,
        }
    }

    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    #[must_use]
    pub fn detail(&self) -> MarkerDetail {
        MarkerDetail {
            title: "Room allocated".to_string(),
            location: format!("At location lat:{} + lng:{}", self.lat, self.lng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_ignores_creation_time() {
        let at = Coordinate::new(55.9, 12.3);
        let first = Marker::new(at, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let second = Marker::new(at, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        assert_ne!(first, second);
        assert_eq!(first.id(), second.id());
        assert_eq!(first.id(), MarkerId::from(at));
    }

    #[test]
    fn test_detail_lists_both_axes() {
        let marker = Marker::new(Coordinate::new(55.9, 12.3), Utc::now());
        let detail = marker.detail();

        assert_eq!(detail.title, "Room allocated");
        assert_eq!(detail.location, "At location lat:55.9 + lng:12.3");
    }
}
