use thiserror::Error;

/// Errors returned by vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operands of a binary operation have a different number of elements.
    #[error("dimension mismatch: left operand has {left} elements, right operand has {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// An operand does not have the dimension the operation is defined for (eg. a non-3D operand of
    /// the cross product).
    #[error("invalid dimension: expected {expected} elements, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    /// A zero-length vector was passed to an operation that divides by the vector's length.
    #[error("degenerate vector: operation requires non-zero length")]
    DegenerateVector,
}

/// Result type returned by fallible vector operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn dimension_mismatch(left: usize, right: usize) -> Self {
        log::trace!("dimension mismatch between {left}-element and {right}-element vectors");
        Self::DimensionMismatch { left, right }
    }

    pub(crate) fn invalid_dimension(expected: usize, actual: usize) -> Self {
        log::trace!("expected a {expected}-element vector, got {actual} elements");
        Self::InvalidDimension { expected, actual }
    }

    pub(crate) fn degenerate(dim: usize) -> Self {
        log::trace!("{dim}-element vector has zero length");
        Self::DegenerateVector
    }
}
