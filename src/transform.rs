//! Transform functors over points and collections of points.
//!
//! A [`Transformer`] wraps a point-to-point function so the same callable can
//! be applied to a single point, to a whole [`Object`](crate::Object) (the
//! annotation rides along untouched), or in bulk over the raw point slice a
//! [`Collection`](crate::Collection) exposes through
//! [`points_mut`](crate::Collection::points_mut). The bulk passes are the
//! reason the collection splits its storage: they stream over contiguous
//! point memory only.

use rayon::prelude::*;

use crate::config::{Transformd, Transformf, Vector3d, Vector3f};
use crate::object::Object;

/// A reusable geometric transform wrapping a point-to-point function.
#[derive(Debug, Clone, Copy)]
pub struct Transformer<F> {
    f: F,
}

impl<F> Transformer<F> {
    /// Wrap an arbitrary point function.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Transform a single point.
    pub fn apply<V>(&self, v: V) -> V
    where
        F: Fn(V) -> V,
    {
        (self.f)(v)
    }

    /// Transform the point of an entity, leaving its annotation unchanged.
    pub fn apply_object<V, M>(&self, object: Object<V, M>) -> Object<V, M>
    where
        F: Fn(V) -> V,
    {
        Object::new((self.f)(object.point), object.meta)
    }

    /// Transform every point of a slice in place.
    pub fn apply_points<V>(&self, points: &mut [V])
    where
        F: Fn(V) -> V,
        V: Copy,
    {
        for point in points.iter_mut() {
            *point = (self.f)(*point);
        }
    }

    /// Transform every point of a slice in place, in parallel over rayon's
    /// thread pool. Worth it for large point clouds only.
    pub fn apply_points_par<V>(&self, points: &mut [V])
    where
        F: Fn(V) -> V + Sync,
        V: Copy + Send + Sync,
    {
        points.par_iter_mut().for_each(|point| *point = (self.f)(*point));
    }
}

/// Wrap a single-precision affine matrix into a point transformer.
pub fn transform(m: Transformf) -> Transformer<impl Fn(Vector3f) -> Vector3f + Copy> {
    Transformer::new(move |v| m.transform_point3(v))
}

/// Wrap a double-precision affine matrix into a point transformer.
pub fn transform_d(m: Transformd) -> Transformer<impl Fn(Vector3d) -> Vector3d + Copy> {
    Transformer::new(move |v| m.transform_point3(v))
}

/// Wrap an arbitrary point function into a transformer.
pub fn transform_fn<F>(f: F) -> Transformer<F> {
    Transformer::new(f)
}
