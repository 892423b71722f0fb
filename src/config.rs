//! Session configuration.
//!
//! Defaults describe the view the map opens on. Each value can be
//! overridden through an environment variable; unparsable overrides are
//! ignored in favour of the default.

use thiserror::Error;

use crate::core::camera::DEFAULT_FOCUS_ZOOM;
use crate::core::data::camera_state::CameraState;
use crate::core::data::coordinate::{Coordinate, InvalidCoordinate};
use crate::input::ports::geocoder::SearchBias;

pub const DEFAULT_CENTER: Coordinate = Coordinate::new(55.929180, 12.308100);
pub const DEFAULT_INITIAL_ZOOM: u8 = 8;
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 200 * 1000;
pub const MAX_ZOOM: u8 = 22;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid initial center: {0}")]
    InitialCenter(InvalidCoordinate),
    #[error("invalid search bias center: {0}")]
    SearchCenter(InvalidCoordinate),
    #[error("search radius must be positive")]
    ZeroSearchRadius,
    #[error("zoom {zoom} exceeds maximum of {max}")]
    ZoomOutOfRange { zoom: u8, max: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub initial_camera: CameraState,
    pub focus_zoom: u8,
    pub search_bias: SearchBias,
    /// Position reported by the built-in sensor; `None` means unavailable.
    pub device_position: Option<Coordinate>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_camera: CameraState::new(DEFAULT_CENTER, DEFAULT_INITIAL_ZOOM),
            focus_zoom: DEFAULT_FOCUS_ZOOM,
            search_bias: SearchBias {
                center: DEFAULT_CENTER,
                radius_m: DEFAULT_SEARCH_RADIUS_M,
            },
            device_position: None,
        }
    }
}

impl MapConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source. `from_env` reads the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|value| value.trim().parse().ok());

        let center = Coordinate::new(
            parsed("MAP_INITIAL_LAT").unwrap_or(defaults.initial_camera.center.lat),
            parsed("MAP_INITIAL_LNG").unwrap_or(defaults.initial_camera.center.lng),
        );
        let zoom = lookup("MAP_INITIAL_ZOOM")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(defaults.initial_camera.zoom);
        let focus_zoom = lookup("MAP_FOCUS_ZOOM")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(defaults.focus_zoom);
        let radius_m = lookup("MAP_SEARCH_RADIUS_M")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(defaults.search_bias.radius_m);
        let device_position = lookup("MAP_DEVICE_POSITION")
            .and_then(|value| parse_coordinate(&value))
            .or(defaults.device_position);

        Self {
            initial_camera: CameraState::new(center, zoom),
            focus_zoom,
            search_bias: SearchBias { center, radius_m },
            device_position,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_camera
            .center
            .validate()
            .map_err(ConfigError::InitialCenter)?;
        self.search_bias
            .center
            .validate()
            .map_err(ConfigError::SearchCenter)?;

        if self.search_bias.radius_m == 0 {
            return Err(ConfigError::ZeroSearchRadius);
        }

        for zoom in [self.initial_camera.zoom, self.focus_zoom] {
            if zoom > MAX_ZOOM {
                return Err(ConfigError::ZoomOutOfRange {
                    zoom,
                    max: MAX_ZOOM,
                });
            }
        }

        Ok(())
    }
}

/// Parses `"lat,lng"`.
#[must_use]
pub fn parse_coordinate(value: &str) -> Option<Coordinate> {
    let (lat, lng) = value.split_once(',')?;
    Some(Coordinate::new(
        lat.trim().parse().ok()?,
        lng.trim().parse().ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_opening_view() {
        let config = MapConfig::default();

        assert_eq!(config.initial_camera.center, DEFAULT_CENTER);
        assert_eq!(config.initial_camera.zoom, 8);
        assert_eq!(config.focus_zoom, 14);
        assert_eq!(config.search_bias.center, DEFAULT_CENTER);
        assert_eq!(config.search_bias.radius_m, 200_000);
        assert!(config.device_position.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = MapConfig::from_lookup(lookup(&[
            ("MAP_INITIAL_LAT", "48.85"),
            ("MAP_INITIAL_LNG", "2.35"),
            ("MAP_INITIAL_ZOOM", "5"),
            ("MAP_FOCUS_ZOOM", "16"),
            ("MAP_SEARCH_RADIUS_M", "5000"),
            ("MAP_DEVICE_POSITION", "55.7, 12.4"),
        ]));

        assert_eq!(
            config.initial_camera,
            CameraState::new(Coordinate::new(48.85, 2.35), 5)
        );
        assert_eq!(config.focus_zoom, 16);
        assert_eq!(config.search_bias.center, Coordinate::new(48.85, 2.35));
        assert_eq!(config.search_bias.radius_m, 5000);
        assert_eq!(config.device_position, Some(Coordinate::new(55.7, 12.4)));
    }

    #[test]
    fn test_garbage_values_fall_back_to_defaults() {
        let config = MapConfig::from_lookup(lookup(&[
            ("MAP_INITIAL_LAT", "north"),
            ("MAP_FOCUS_ZOOM", "-1"),
            ("MAP_DEVICE_POSITION", "55.7"),
        ]));

        assert_eq!(config, MapConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = MapConfig::default();
        config.initial_camera.center.lat = 95.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialCenter(_))
        ));

        let mut config = MapConfig::default();
        config.search_bias.radius_m = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroSearchRadius));

        let mut config = MapConfig::default();
        config.focus_zoom = 30;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZoomOutOfRange { zoom: 30, max: MAX_ZOOM })
        );
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("1.5,-2"), Some(Coordinate::new(1.5, -2.0)));
        assert_eq!(parse_coordinate("1.5"), None);
        assert_eq!(parse_coordinate("a,b"), None);
    }
}
