use futures::FutureExt;
use futures::future::{BoxFuture, ready};

use crate::core::data::coordinate::Coordinate;
use crate::input::ports::geocoder::{Geocoder, SearchBias, ServiceError, Suggestion};

const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerEntry {
    pub id: String,
    pub description: String,
    pub coordinate: Coordinate,
}

impl GazetteerEntry {
    pub fn new(id: &str, description: &str, coordinate: Coordinate) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            coordinate,
        }
    }
}

/// In-memory place table answering geocoding requests without a network.
///
/// Matching is case-insensitive on any word of the description. Places
/// inside the bias radius are listed before places outside it, nearest first.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
}

impl Gazetteer {
    pub fn new(entries: Vec<GazetteerEntry>) -> Self {
        Self { entries }
    }

    fn matches(&self, text: &str, bias: &SearchBias) -> Vec<&GazetteerEntry> {
        let needle = text.trim().to_lowercase();

        let mut found: Vec<(bool, f64, &GazetteerEntry)> = self
            .entries
            .iter()
            .filter(|entry| {
                entry
                    .description
                    .to_lowercase()
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .any(|word| word.starts_with(&needle))
                    || entry.description.to_lowercase().starts_with(&needle)
            })
            .map(|entry| {
                let distance = bias.center.distance_m(&entry.coordinate);
                (distance > f64::from(bias.radius_m), distance, entry)
            })
            .collect();

        found.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
        found
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, _, entry)| entry)
            .collect()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::new(vec![
            GazetteerEntry::new("cph", "Copenhagen, Denmark", Coordinate::new(55.6761, 12.5683)),
            GazetteerEntry::new("hil", "Hillerød, Denmark", Coordinate::new(55.9267, 12.3109)),
            GazetteerEntry::new("hel", "Helsingør, Denmark", Coordinate::new(56.0361, 12.6136)),
            GazetteerEntry::new("ros", "Roskilde, Denmark", Coordinate::new(55.6419, 12.0878)),
            GazetteerEntry::new("mmx", "Malmö, Sweden", Coordinate::new(55.6050, 13.0038)),
            GazetteerEntry::new("aar", "Aarhus, Denmark", Coordinate::new(56.1629, 10.2039)),
            GazetteerEntry::new("ode", "Odense, Denmark", Coordinate::new(55.4038, 10.4024)),
            GazetteerEntry::new("sto", "Stockholm, Sweden", Coordinate::new(59.3293, 18.0686)),
            GazetteerEntry::new("osl", "Oslo, Norway", Coordinate::new(59.9139, 10.7522)),
            GazetteerEntry::new("ber", "Berlin, Germany", Coordinate::new(52.5200, 13.4050)),
        ])
    }
}

impl Geocoder for Gazetteer {
    type Place = GazetteerEntry;

    fn suggest<'a>(
        &'a self,
        text: &'a str,
        bias: &'a SearchBias,
    ) -> BoxFuture<'a, Result<Vec<Suggestion>, ServiceError>> {
        if text.trim().is_empty() {
            return ready(Err(ServiceError::InvalidRequest)).boxed();
        }

        let suggestions: Vec<Suggestion> = self
            .matches(text, bias)
            .into_iter()
            .map(|entry| Suggestion {
                id: entry.id.clone(),
                description: entry.description.clone(),
            })
            .collect();

        let result = if suggestions.is_empty() {
            Err(ServiceError::ZeroResults)
        } else {
            Ok(suggestions)
        };
        ready(result).boxed()
    }

    fn geocode<'a>(
        &'a self,
        description: &'a str,
    ) -> BoxFuture<'a, Result<Vec<GazetteerEntry>, ServiceError>> {
        let wanted = description.trim();
        let places: Vec<GazetteerEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.description.eq_ignore_ascii_case(wanted))
            .cloned()
            .collect();

        ready(Ok(places)).boxed()
    }

    fn to_coordinate<'a>(
        &'a self,
        place: &'a GazetteerEntry,
    ) -> BoxFuture<'a, Result<Coordinate, ServiceError>> {
        ready(Ok(place.coordinate)).boxed()
    }
}
