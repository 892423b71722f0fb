use serde::Serialize;
use thiserror::Error;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
#[error("coordinate out of range: lat {lat}, lng {lng}")]
pub struct InvalidCoordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A point on the globe in decimal degrees.
///
/// Plain value type; range checks happen where a coordinate drives the
/// camera, not at construction.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.lat)
            && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.lng)
    }

    pub fn validate(self) -> Result<Self, InvalidCoordinate> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(InvalidCoordinate {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }

    /// Great-circle distance in metres (haversine).
    #[must_use]
    pub fn distance_m(&self, other: &Coordinate) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_lat = lat2 - lat1;
        let d_lng = (other.lng - self.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().asin()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}
