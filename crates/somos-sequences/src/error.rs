//! Errors raised by the sequence engine.

use somos_integers::ArithmeticError;
use somos_linalg::MatrixError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a sequence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A recurrence of order zero.
    #[error("recurrence order must be positive")]
    ZeroOrder,

    /// The number of initial values does not match the order `k`.
    #[error("Somos-{expected} recurrence needs {expected} initial values, got {found}")]
    InitialValueCount {
        /// The order `k`.
        expected: usize,
        /// Number of initial values supplied.
        found: usize,
    },

    /// The number of coefficients is not `k / 2`.
    #[error("incorrect number of coefficients: expected {expected}, got {found}")]
    CoefficientCount {
        /// `k / 2`.
        expected: usize,
        /// Number of coefficients supplied.
        found: usize,
    },

    /// A matrix kind outside `{0, 1}`.
    #[error("invalid matrix kind {0}")]
    InvalidMatrixKind(i64),

    /// A matrix kind that passes validation but has no entry rule.
    #[error("matrix kind {0} has no entry rule")]
    UndefinedMatrixKind(i64),

    /// The recurrence produced zero, which would poison later divisions.
    #[error("zero element in sequence at index {index}")]
    ZeroTerm {
        /// Index of the zero term.
        index: i64,
    },

    /// A derived index does not fit in 64 bits.
    #[error("sequence index overflow while evaluating index {index}")]
    IndexOverflow {
        /// The index that was requested.
        index: i64,
    },

    /// Scalar arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// Matrix construction or evaluation failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
