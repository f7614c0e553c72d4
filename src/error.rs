//! Error types for collection construction and checked access.
//!
//! The hot paths (slice access, iteration, unchecked swap) never allocate an
//! error; only the operations that could observe a broken parallel-array
//! invariant are fallible.

use thiserror::Error;

/// Errors produced by `Collection` construction and checked access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// The two parallel arrays were handed over with different lengths
    #[error("parallel array length mismatch: {points} points vs {annotations} annotations")]
    LengthMismatch { points: usize, annotations: usize },

    /// A checked index was outside `[0, len)`
    #[error("index {index} out of bounds for collection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result alias for collection operations
pub type GeomResult<T> = Result<T, GeomError>;
