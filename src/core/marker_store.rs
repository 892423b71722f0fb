//! Append-only marker collection with a single optional selection.

use std::sync::Arc;

use chrono::Utc;

use crate::core::data::coordinate::Coordinate;
use crate::core::data::marker::{Marker, MarkerId};
use crate::core::data::marker_list::{CHUNK_LEN, Iter, MarkerList, chunked_get};

#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    // Full chunks, shared with every outstanding `MarkerList`.
    sealed: Arc<Vec<Arc<[Marker]>>>,
    tail: Vec<Marker>,
    // Placement index; valid because nothing is ever removed.
    selected: Option<usize>,
}

impl MarkerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a marker stamped with the current time.
    pub fn add(&mut self, coordinate: Coordinate) -> MarkerId {
        self.push(Marker::new(coordinate, Utc::now()))
    }

    fn push(&mut self, marker: Marker) -> MarkerId {
        let id = marker.id();
        self.tail.push(marker);

        if self.tail.len() == CHUNK_LEN {
            let chunk: Arc<[Marker]> = std::mem::take(&mut self.tail).into();
            // Lists still holding the old chunk vector keep it; only the
            // chunk pointers are copied.
            Arc::make_mut(&mut self.sealed).push(chunk);
        }

        id
    }

    /// Selects the earliest marker carrying `id`. Unknown ids are ignored.
    pub fn select(&mut self, id: MarkerId) -> bool {
        match self.iter().position(|marker| marker.id() == id) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Marker> {
        self.selected
            .and_then(|index| chunked_get(&self.sealed, &self.tail, index))
    }

    #[must_use]
    pub fn list(&self) -> MarkerList {
        MarkerList::from_parts(Arc::clone(&self.sealed), Arc::from(self.tail.as_slice()))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.sealed, &self.tail)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sealed.len() * CHUNK_LEN + self.tail.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_preserves_placement_order() {
        let mut store = MarkerStore::new();
        let points = [
            Coordinate::new(55.9, 12.3),
            Coordinate::new(-33.9, 151.2),
            Coordinate::new(40.7, -74.0),
            Coordinate::new(55.9, 12.3),
        ];

        for point in points {
            store.add(point);
        }

        let listed: Vec<Coordinate> = store.list().iter().map(Marker::coordinate).collect();
        assert_eq!(listed, points);
    }

    #[test]
    fn test_list_is_a_stable_snapshot() {
        let mut store = MarkerStore::new();
        store.add(Coordinate::new(1.0, 1.0));

        let snapshot = store.list();
        store.add(Coordinate::new(2.0, 2.0));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.iter().count(), snapshot.iter().count());
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_select_then_clear() {
        let mut store = MarkerStore::new();
        let id = store.add(Coordinate::new(55.9, 12.3));

        assert!(store.select(id));
        assert_eq!(store.selected().map(Marker::id), Some(id));

        store.clear();
        assert!(store.selected().is_none());

        store.clear();
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_select_unknown_id_keeps_current_selection() {
        let mut store = MarkerStore::new();
        let id = store.add(Coordinate::new(10.0, 20.0));
        store.select(id);

        let missing = MarkerId::from(Coordinate::new(-10.0, -20.0));
        assert!(!store.select(missing));
        assert_eq!(store.selected().map(Marker::id), Some(id));

        let mut empty = MarkerStore::new();
        assert!(!empty.select(missing));
        assert!(empty.selected().is_none());
    }

    #[test]
    fn test_new_placements_do_not_clear_selection() {
        let mut store = MarkerStore::new();
        let id = store.add(Coordinate::new(10.0, 20.0));
        store.select(id);

        store.add(Coordinate::new(30.0, 40.0));

        assert_eq!(store.selected().map(Marker::id), Some(id));
    }

    #[test]
    fn test_duplicate_coordinates_resolve_to_first_marker() {
        let mut store = MarkerStore::new();
        let at = Coordinate::new(55.9, 12.3);
        let first = store.add(at);
        let second = store.add(at);

        assert_eq!(first, second);
        assert_eq!(store.len(), 2);

        store.select(second);
        let selected = store.selected().unwrap();
        assert_eq!(selected.created_at, store.list()[0].created_at);
    }

    #[test]
    fn test_order_survives_chunk_boundaries() {
        let mut store = MarkerStore::new();
        let count = CHUNK_LEN * 2 + 5;

        for i in 0..count {
            store.add(Coordinate::new(0.0, i as f64 * 0.01));
        }

        let list = store.list();
        assert_eq!(list.len(), count);
        assert_eq!(store.len(), count);
        let lngs: Vec<f64> = list.iter().map(|marker| marker.lng).collect();
        let expected: Vec<f64> = (0..count).map(|i| i as f64 * 0.01).collect();
        assert_eq!(lngs, expected);
        assert_eq!(list[CHUNK_LEN].lng, CHUNK_LEN as f64 * 0.01);
        assert_eq!(list.last().map(|marker| marker.lng), expected.last().copied());
        assert!(list.get(count).is_none());
    }

    #[test]
    fn test_retained_list_does_not_copy_sealed_chunks() {
        let mut store = MarkerStore::new();
        for i in 0..(CHUNK_LEN * 2 + 2) {
            store.add(Coordinate::new(1.0, i as f64));
        }
        let retained = store.list();

        for i in 0..(CHUNK_LEN * 3) {
            store.add(Coordinate::new(2.0, i as f64));
        }
        let latest = store.list();

        assert_eq!(retained.len(), CHUNK_LEN * 2 + 2);
        assert_eq!(latest.len(), CHUNK_LEN * 5 + 2);
        for (old, new) in retained.sealed_chunks().iter().zip(latest.sealed_chunks()) {
            assert!(Arc::ptr_eq(old, new));
        }
    }

    #[test]
    fn test_selection_in_sealed_chunk() {
        let mut store = MarkerStore::new();
        let target = Coordinate::new(42.0, 42.0);
        store.add(target);
        for i in 0..CHUNK_LEN {
            store.add(Coordinate::new(0.0, i as f64));
        }

        assert!(store.select(MarkerId::from(target)));
        assert_eq!(store.selected().map(Marker::coordinate), Some(target));
    }
}
