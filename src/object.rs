//! The combined entity value: a geometric point plus its annotation.

use serde::{Deserialize, Serialize};

/// A geometric point paired with a piece of metadata.
///
/// `Object` is what callers construct and what iteration hands back, but a
/// [`Collection`](crate::Collection) never stores one as a single value: on
/// insertion it is decomposed into the point array and the annotation array,
/// and it is synthesized again on read.
///
/// The annotation is held by composition as an explicit field; two objects
/// compare equal iff both the points and the annotations compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Object<V, M> {
    /// Geometric position (Vector3f, Vector2d, ...)
    pub point: V,
    /// Metadata attached to the point
    pub meta: M,
}

impl<V, M> Object<V, M> {
    /// Combine a point and an annotation into one entity value.
    pub fn new(point: V, meta: M) -> Self {
        Self { point, meta }
    }

    /// Split the entity back into its two parts.
    pub fn into_parts(self) -> (V, M) {
        (self.point, self.meta)
    }
}

impl<V, M> From<(V, M)> for Object<V, M> {
    fn from((point, meta): (V, M)) -> Self {
        Self { point, meta }
    }
}
