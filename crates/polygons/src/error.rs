//! Error type shared by polygons and collections.

/// Contract violations surfaced by constructors, comparisons and positional access.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum PolygonError {
    /// Out-of-domain constructor input (edge count below 3, negative or non-finite radius).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    /// Comparison against an operand that is not a `RegularPolygon`.
    #[error("type mismatch: only compare {expected} instances")]
    TypeMismatch { expected: &'static str },
    /// Positional access outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl PolygonError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
