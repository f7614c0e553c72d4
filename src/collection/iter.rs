//! Iterators over the split arrays.
//!
//! Each cursor advances two slice iterators in lockstep and zips their items
//! into an entry proxy (or a whole [`Object`] for the by-value iterator).
//! The parallel-array invariant guarantees both sides run out together.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use super::entry::{EntryMut, EntryRef};
use crate::object::Object;

/// Read-only iterator over a [`Collection`](super::Collection), yielding
/// [`EntryRef`] proxies.
#[derive(Debug, Clone)]
pub struct Iter<'a, V, M> {
    points: slice::Iter<'a, V>,
    annotations: slice::Iter<'a, M>,
}

impl<'a, V, M> Iter<'a, V, M> {
    pub(crate) fn new(points: &'a [V], annotations: &'a [M]) -> Self {
        Self {
            points: points.iter(),
            annotations: annotations.iter(),
        }
    }
}

impl<'a, V, M> Iterator for Iter<'a, V, M> {
    type Item = EntryRef<'a, V, M>;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.points.next()?;
        let meta = self.annotations.next()?;
        Some(EntryRef::new(point, meta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let point = self.points.nth(n)?;
        let meta = self.annotations.nth(n)?;
        Some(EntryRef::new(point, meta))
    }
}

impl<V, M> DoubleEndedIterator for Iter<'_, V, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let point = self.points.next_back()?;
        let meta = self.annotations.next_back()?;
        Some(EntryRef::new(point, meta))
    }
}

impl<V, M> ExactSizeIterator for Iter<'_, V, M> {
    fn len(&self) -> usize {
        self.points.len()
    }
}

impl<V, M> FusedIterator for Iter<'_, V, M> {}

/// Mutable iterator over a [`Collection`](super::Collection), yielding
/// [`EntryMut`] proxies.
#[derive(Debug)]
pub struct IterMut<'a, V, M> {
    points: slice::IterMut<'a, V>,
    annotations: slice::IterMut<'a, M>,
}

impl<'a, V, M> IterMut<'a, V, M> {
    pub(crate) fn new(points: &'a mut [V], annotations: &'a mut [M]) -> Self {
        Self {
            points: points.iter_mut(),
            annotations: annotations.iter_mut(),
        }
    }
}

impl<'a, V, M> Iterator for IterMut<'a, V, M> {
    type Item = EntryMut<'a, V, M>;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.points.next()?;
        let meta = self.annotations.next()?;
        Some(EntryMut::new(point, meta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let point = self.points.nth(n)?;
        let meta = self.annotations.nth(n)?;
        Some(EntryMut::new(point, meta))
    }
}

impl<V, M> DoubleEndedIterator for IterMut<'_, V, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let point = self.points.next_back()?;
        let meta = self.annotations.next_back()?;
        Some(EntryMut::new(point, meta))
    }
}

impl<V, M> ExactSizeIterator for IterMut<'_, V, M> {
    fn len(&self) -> usize {
        self.points.len()
    }
}

impl<V, M> FusedIterator for IterMut<'_, V, M> {}

/// By-value iterator over a consumed [`Collection`](super::Collection),
/// yielding recombined [`Object`] values.
#[derive(Debug)]
pub struct IntoIter<V, M> {
    points: vec::IntoIter<V>,
    annotations: vec::IntoIter<M>,
}

impl<V, M> IntoIter<V, M> {
    pub(crate) fn new(points: Vec<V>, annotations: Vec<M>) -> Self {
        Self {
            points: points.into_iter(),
            annotations: annotations.into_iter(),
        }
    }
}

impl<V, M> Iterator for IntoIter<V, M> {
    type Item = Object<V, M>;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.points.next()?;
        let meta = self.annotations.next()?;
        Some(Object::new(point, meta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl<V, M> DoubleEndedIterator for IntoIter<V, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let point = self.points.next_back()?;
        let meta = self.annotations.next_back()?;
        Some(Object::new(point, meta))
    }
}

impl<V, M> ExactSizeIterator for IntoIter<V, M> {
    fn len(&self) -> usize {
        self.points.len()
    }
}

impl<V, M> FusedIterator for IntoIter<V, M> {}
