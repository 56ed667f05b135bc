//! # somos-integers
//!
//! Arbitrary precision integer and exact rational arithmetic.
//!
//! This crate provides:
//! - Arbitrary precision integers (`Integer`), backed by `dashu`
//! - Exact rationals (`Rational`) kept in lowest terms with a positive
//!   denominator after every operation
//!
//! Nothing here ever touches floating point.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::{ArithmeticError, ParseRationalError};
pub use integer::Integer;
pub use rational::Rational;
