//! Struct-of-arrays storage for annotated points.
//!
//! [`Collection`] keeps the point of every entity in one contiguous array and
//! the annotation in another. Geometric passes that only touch the points run
//! over [`Collection::points_mut`] and never pull annotation memory into
//! cache, while [`Collection::iter`] and the entry proxies still present
//! ordinary per-element access to whole [`Object`] values.

mod entry;
mod iter;

pub use entry::{swap_entries, EntryMut, EntryRef};
pub use iter::{IntoIter, Iter, IterMut};

use serde::Serialize;

use crate::error::{GeomError, GeomResult};
use crate::object::Object;

/// Container for annotated points with cache-friendly split storage.
///
/// Invariant: `points.len() == annotations.len()` at all times; index `i` in
/// one array belongs to the same logical entity as index `i` in the other.
/// No constructor or method can leave the two arrays at different lengths.
///
/// `Deserialize` is intentionally not derived: a malformed input could
/// materialize a length-mismatched container. Rebuild one from parts via
/// [`Collection::try_from_parts`] instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Collection<V, M> {
    points: Vec<V>,
    annotations: Vec<M>,
}

impl<V, M> Collection<V, M> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Create a collection of `len` default-constructed entities, to be
    /// filled in place through [`Collection::get_mut`] or
    /// [`Collection::iter_mut`].
    pub fn with_len(len: usize) -> Self
    where
        V: Default,
        M: Default,
    {
        Self {
            points: std::iter::repeat_with(V::default).take(len).collect(),
            annotations: std::iter::repeat_with(M::default).take(len).collect(),
        }
    }

    /// Assemble a collection from two pre-split arrays.
    ///
    /// This is the one constructor whose input can violate the parallel-array
    /// invariant, so it is the one fallible constructor: on a length mismatch
    /// no collection is observable.
    pub fn try_from_parts(points: Vec<V>, annotations: Vec<M>) -> GeomResult<Self> {
        if points.len() != annotations.len() {
            return Err(GeomError::LengthMismatch {
                points: points.len(),
                annotations: annotations.len(),
            });
        }
        Ok(Self {
            points,
            annotations,
        })
    }

    /// Take the two arrays back out of the collection.
    pub fn into_parts(self) -> (Vec<V>, Vec<M>) {
        (self.points, self.annotations)
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Check if no entities are stored.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// The raw point array.
    ///
    /// This is the designed fast path for bulk geometric work: a pass over
    /// this slice touches zero annotation memory.
    pub fn points(&self) -> &[V] {
        &self.points
    }

    /// Mutable access to the raw point array.
    pub fn points_mut(&mut self) -> &mut [V] {
        &mut self.points
    }

    /// Read-only proxy for the entity at `index`, or `None` out of range.
    pub fn get(&self, index: usize) -> Option<EntryRef<'_, V, M>> {
        Some(EntryRef::new(
            self.points.get(index)?,
            self.annotations.get(index)?,
        ))
    }

    /// Mutable proxy for the entity at `index`, or `None` out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<EntryMut<'_, V, M>> {
        // Both lookups hit the same index, so either both succeed or both fail.
        let point = self.points.get_mut(index)?;
        let meta = self.annotations.get_mut(index)?;
        Some(EntryMut::new(point, meta))
    }

    /// Mutable proxies for two distinct positions at once, for algorithms
    /// that reorder entities by swapping proxies rather than copying values.
    ///
    /// Returns `None` if either index is out of range or if `i == j`.
    pub fn get_pair_mut(
        &mut self,
        i: usize,
        j: usize,
    ) -> Option<(EntryMut<'_, V, M>, EntryMut<'_, V, M>)> {
        if i == j || i >= self.len() || j >= self.len() {
            return None;
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let (points_lo, points_hi) = self.points.split_at_mut(hi);
        let (annotations_lo, annotations_hi) = self.annotations.split_at_mut(hi);
        let first = EntryMut::new(&mut points_lo[lo], &mut annotations_lo[lo]);
        let second = EntryMut::new(&mut points_hi[0], &mut annotations_hi[0]);
        if i < j {
            Some((first, second))
        } else {
            Some((second, first))
        }
    }

    /// Swap the entities at positions `i` and `j` in both arrays.
    ///
    /// Panics if either index is out of range, like `slice::swap`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.points.swap(i, j);
        self.annotations.swap(i, j);
    }

    /// Checked variant of [`Collection::swap`].
    pub fn try_swap(&mut self, i: usize, j: usize) -> GeomResult<()> {
        let len = self.len();
        for index in [i, j] {
            if index >= len {
                return Err(GeomError::IndexOutOfBounds { index, len });
            }
        }
        self.swap(i, j);
        Ok(())
    }

    /// Iterate read-only proxies over all entities.
    pub fn iter(&self) -> Iter<'_, V, M> {
        Iter::new(&self.points, &self.annotations)
    }

    /// Iterate mutable proxies over all entities.
    pub fn iter_mut(&mut self) -> IterMut<'_, V, M> {
        IterMut::new(&mut self.points, &mut self.annotations)
    }

    /// Get memory statistics
    pub fn memory_stats(&self) -> CollectionStats {
        let points_size = self.points.len() * std::mem::size_of::<V>();
        let annotations_size = self.annotations.len() * std::mem::size_of::<M>();

        CollectionStats {
            entity_count: self.len(),
            points_size,
            annotations_size,
            total_size: points_size + annotations_size,
        }
    }
}

impl<V, M> FromIterator<Object<V, M>> for Collection<V, M> {
    /// Build a collection from a sequence of entities, decomposing each one
    /// into the two arrays in input order.
    fn from_iter<I: IntoIterator<Item = Object<V, M>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut points = Vec::with_capacity(lower);
        let mut annotations = Vec::with_capacity(lower);
        for object in iter {
            points.push(object.point);
            annotations.push(object.meta);
        }
        Self {
            points,
            annotations,
        }
    }
}

impl<V, M, const N: usize> From<[Object<V, M>; N]> for Collection<V, M> {
    fn from(objects: [Object<V, M>; N]) -> Self {
        objects.into_iter().collect()
    }
}

impl<V, M> From<Vec<Object<V, M>>> for Collection<V, M> {
    fn from(objects: Vec<Object<V, M>>) -> Self {
        objects.into_iter().collect()
    }
}

impl<'a, V, M> IntoIterator for &'a Collection<V, M> {
    type Item = EntryRef<'a, V, M>;
    type IntoIter = Iter<'a, V, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, M> IntoIterator for &'a mut Collection<V, M> {
    type Item = EntryMut<'a, V, M>;
    type IntoIter = IterMut<'a, V, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V, M> IntoIterator for Collection<V, M> {
    type Item = Object<V, M>;
    type IntoIter = IntoIter<V, M>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.points, self.annotations)
    }
}

/// Byte sizes of the two arrays of a [`Collection`].
#[derive(Debug, Clone)]
pub struct CollectionStats {
    pub entity_count: usize,
    pub points_size: usize,
    pub annotations_size: usize,
    pub total_size: usize,
}

impl std::fmt::Display for CollectionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Collection: {} entities, {} bytes total (points: {}, annotations: {})",
            self.entity_count, self.total_size, self.points_size, self.annotations_size
        )
    }
}
