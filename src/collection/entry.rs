//! Proxy references over the split arrays.
//!
//! A [`Collection`](super::Collection) never stores a whole
//! [`Object`](crate::Object), so element access cannot hand out `&Object`.
//! The entry proxies stand in for that missing reference: each one borrows
//! the point and the annotation at a single position and presents them as if
//! they were one element. Copying a proxy copies the borrow, never the data.

use std::mem;

use crate::object::Object;

/// Read-only proxy for the entity at one position of a collection.
#[derive(Debug, Clone, Copy)]
pub struct EntryRef<'a, V, M> {
    point: &'a V,
    meta: &'a M,
}

impl<'a, V, M> EntryRef<'a, V, M> {
    pub(crate) fn new(point: &'a V, meta: &'a M) -> Self {
        Self { point, meta }
    }

    /// The geometric part.
    pub fn point(&self) -> &V {
        self.point
    }

    /// The annotation part.
    pub fn meta(&self) -> &M {
        self.meta
    }

    /// Synthesize the combined entity value by copying both parts.
    pub fn to_object(&self) -> Object<V, M>
    where
        V: Clone,
        M: Clone,
    {
        Object::new(self.point.clone(), self.meta.clone())
    }
}

impl<V: PartialEq, M: PartialEq> PartialEq for EntryRef<'_, V, M> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point && self.meta == other.meta
    }
}

impl<V: PartialEq, M: PartialEq> PartialEq<Object<V, M>> for EntryRef<'_, V, M> {
    fn eq(&self, other: &Object<V, M>) -> bool {
        *self.point == other.point && *self.meta == other.meta
    }
}

/// Mutable proxy for the entity at one position of a collection.
///
/// Writing through the proxy is a two-array scatter: [`EntryMut::set`] places
/// the point part and the annotation part into their respective arrays.
pub struct EntryMut<'a, V, M> {
    point: &'a mut V,
    meta: &'a mut M,
}

impl<'a, V, M> EntryMut<'a, V, M> {
    pub(crate) fn new(point: &'a mut V, meta: &'a mut M) -> Self {
        Self { point, meta }
    }

    /// The geometric part.
    pub fn point(&self) -> &V {
        self.point
    }

    /// Mutable access to the geometric part.
    pub fn point_mut(&mut self) -> &mut V {
        self.point
    }

    /// The annotation part.
    pub fn meta(&self) -> &M {
        self.meta
    }

    /// Mutable access to the annotation part.
    pub fn meta_mut(&mut self) -> &mut M {
        self.meta
    }

    /// Synthesize the combined entity value by copying both parts.
    pub fn get(&self) -> Object<V, M>
    where
        V: Clone,
        M: Clone,
    {
        Object::new(self.point.clone(), self.meta.clone())
    }

    /// Decompose `value` and write its parts into the two arrays.
    pub fn set(&mut self, value: Object<V, M>) {
        *self.point = value.point;
        *self.meta = value.meta;
    }

    /// Exchange points and annotations pairwise with another proxy.
    ///
    /// The two proxies may be bound to positions in the same collection (via
    /// [`get_pair_mut`](super::Collection::get_pair_mut) or `iter_mut`) or in
    /// different collections. Reordering algorithms that swap positions
    /// instead of copying values go through here.
    pub fn swap_with(&mut self, other: &mut EntryMut<'_, V, M>) {
        mem::swap(self.point, other.point);
        mem::swap(self.meta, other.meta);
    }

    /// Downgrade to a read-only proxy bound to the same position.
    pub fn as_ref(&self) -> EntryRef<'_, V, M> {
        EntryRef::new(self.point, self.meta)
    }
}

/// Free-function spelling of [`EntryMut::swap_with`].
pub fn swap_entries<V, M>(a: &mut EntryMut<'_, V, M>, b: &mut EntryMut<'_, V, M>) {
    a.swap_with(b);
}

impl<V: PartialEq, M: PartialEq> PartialEq for EntryMut<'_, V, M> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point && self.meta == other.meta
    }
}

impl<V: PartialEq, M: PartialEq> PartialEq<Object<V, M>> for EntryMut<'_, V, M> {
    fn eq(&self, other: &Object<V, M>) -> bool {
        *self.point == other.point && *self.meta == other.meta
    }
}
