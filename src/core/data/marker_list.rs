use std::ops::Index;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::core::data::marker::Marker;

/// Markers per sealed chunk.
pub(crate) const CHUNK_LEN: usize = 64;

/// Point-in-time view of the marker collection in placement order.
///
/// Markers live in fixed-size shared chunks plus a short tail, so taking a
/// list copies at most `CHUNK_LEN - 1` markers, and holding on to one never
/// forces the store to copy the chunks already sealed. Later placements do
/// not show up in an existing list, so iterating it any number of times
/// yields the same sequence.
#[derive(Debug, Clone, Default)]
pub struct MarkerList {
    sealed: Arc<Vec<Arc<[Marker]>>>,
    tail: Arc<[Marker]>,
}

impl MarkerList {
    pub(crate) fn from_parts(sealed: Arc<Vec<Arc<[Marker]>>>, tail: Arc<[Marker]>) -> Self {
        Self { sealed, tail }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sealed.len() * CHUNK_LEN + self.tail.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Marker> {
        chunked_get(&self.sealed, &self.tail, index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Marker> {
        self.tail
            .last()
            .or_else(|| self.sealed.last().and_then(|chunk| chunk.last()))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.sealed, &self.tail)
    }

    #[cfg(test)]
    pub(crate) fn sealed_chunks(&self) -> &[Arc<[Marker]>] {
        &self.sealed
    }
}

pub(crate) fn chunked_get<'a>(
    sealed: &'a [Arc<[Marker]>],
    tail: &'a [Marker],
    index: usize,
) -> Option<&'a Marker> {
    match sealed.get(index / CHUNK_LEN) {
        Some(chunk) => chunk.get(index % CHUNK_LEN),
        None => tail.get(index - sealed.len() * CHUNK_LEN),
    }
}

/// Iterator over markers in placement order.
pub struct Iter<'a> {
    chunks: std::slice::Iter<'a, Arc<[Marker]>>,
    tail: &'a [Marker],
    current: std::slice::Iter<'a, Marker>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(sealed: &'a [Arc<[Marker]>], tail: &'a [Marker]) -> Self {
        Self {
            chunks: sealed.iter(),
            tail,
            current: Default::default(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Marker;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(marker) = self.current.next() {
                return Some(marker);
            }

            match self.chunks.next() {
                Some(chunk) => self.current = chunk.iter(),
                None => {
                    let tail = std::mem::take(&mut self.tail);
                    if tail.is_empty() {
                        return None;
                    }
                    self.current = tail.iter();
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a MarkerList {
    type Item = &'a Marker;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for MarkerList {
    type Output = Marker;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(marker) => marker,
            None => panic!("marker index {} out of range for {} markers", index, self.len()),
        }
    }
}

impl PartialEq for MarkerList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Serialize for MarkerList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
