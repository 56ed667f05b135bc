//! Errors raised by the matrix kernel.

use std::fmt;

use somos_integers::ArithmeticError;
use thiserror::Error;

/// Which index list an out-of-range index came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// A row index.
    Row,
    /// A column index.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors that can occur while building or evaluating a matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Input rows do not all have the same length.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A selection index points outside the source matrix.
    #[error("{axis} index {index} out of range for dimension {bound}")]
    IndexOutOfRange {
        /// Which index list it came from.
        axis: Axis,
        /// The offending index.
        index: usize,
        /// The source dimension along that axis.
        bound: usize,
    },

    /// A square matrix was required.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A minor larger than the matrix was requested.
    #[error("minor size {size} exceeds matrix dimension {bound}")]
    MinorTooLarge {
        /// Requested minor size.
        size: usize,
        /// Smaller matrix dimension.
        bound: usize,
    },

    /// Scalar arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
