//! Cache-friendly storage for annotated geometric points.
//!
//! [`Collection`] stores entities in a struct-of-arrays layout: one
//! contiguous array of points, one of annotations. Bulk geometric passes run
//! over [`Collection::points_mut`] without ever touching annotation memory,
//! while iteration and the entry proxies still present whole [`Object`]
//! values per element.
//!
//! The numeric kernel is glam, selected through the aliases in [`config`];
//! the container itself is generic over any vector type with value semantics
//! and equality.

pub mod benchmarks;
pub mod collection;
pub mod config;
pub mod error;
pub mod object;
pub mod transform;

pub use collection::{swap_entries, Collection, CollectionStats, EntryMut, EntryRef};
pub use config::{Transformd, Transformf, Vector2d, Vector2f, Vector3d, Vector3f};
pub use error::{GeomError, GeomResult};
pub use object::Object;
pub use transform::{transform, transform_d, transform_fn, Transformer};
