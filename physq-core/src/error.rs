//! Error type shared by every fallible operation in the crate.

use crate::dimension::Dimension;

/// Result alias for dimension-checked operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure of a dimension-checked operation.
///
/// All variants are plain data: they are cheap to copy, compare, and carry the offending dimensions so callers can
/// report them without re-deriving anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Operands of an operation that requires identical dimensions differ.
    #[error("cannot {op} quantities of dimension {lhs} and {rhs}")]
    DimensionMismatch {
        /// Operation that rejected the operands (`"add"`, `"subtract"`, …).
        op: &'static str,
        /// Dimension of the left-hand (or expected) operand.
        lhs: Dimension,
        /// Dimension of the right-hand (or actual) operand.
        rhs: Dimension,
    },

    /// A dimension could not be halved because one of its exponents is odd.
    #[error("cannot take square root of dimension {dim}: odd exponent")]
    OddExponent {
        /// The dimension that was asked to be halved.
        dim: Dimension,
    },

    /// A vector operation needs a non-zero length.
    #[error("cannot {op} a zero vector")]
    ZeroVector {
        /// Operation that rejected the vector (`"normalize"`, …).
        op: &'static str,
    },
}

impl Error {
    pub(crate) fn mismatch(op: &'static str, lhs: Dimension, rhs: Dimension) -> Self {
        log::debug!("dimension mismatch in {op}: {lhs} vs {rhs}");
        Error::DimensionMismatch { op, lhs, rhs }
    }

    pub(crate) fn odd_exponent(dim: Dimension) -> Self {
        log::debug!("odd exponent in {dim}, square root undefined");
        Error::OddExponent { dim }
    }

    pub(crate) fn zero_vector(op: &'static str) -> Self {
        log::debug!("zero vector passed to {op}");
        Error::ZeroVector { op }
    }
}
