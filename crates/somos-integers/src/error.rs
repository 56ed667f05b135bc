//! Error types for exact arithmetic.

use thiserror::Error;

/// Failures of exact scalar arithmetic.
///
/// Shared by every scalar in the workspace: rationals, complex values and
/// tropical values all report through this type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division by an additive identity (a zero rational, a zero complex
    /// value, or the tropical `-inf`).
    #[error("division by zero")]
    DivisionByZero,

    /// A fixed-width value left its representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

/// Failures when parsing the textual form of an integer or rational.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// One side of the fraction is not a base-10 integer.
    #[error("invalid integer literal `{0}`")]
    InvalidInteger(String),

    /// The denominator parsed to zero.
    #[error("zero denominator")]
    ZeroDenominator,
}
