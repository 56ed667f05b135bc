//! # somos-rings
//!
//! Algebraic structures for the exact matrix kernel.
//!
//! This crate provides:
//! - Abstract traits: `Semiring`, `Ring`, `Field`
//! - Implementations for arbitrary precision integers and rationals
//! - `Complex<F>`: complex numbers over any ring, a field over a field
//! - `Tropical<V>`: the max-plus semiring with overflow detection
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Semiring            Tropical<V>
//!  └── Ring           Integer
//!       └── Field     Rational, Complex<Rational>
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod integers;
pub mod rationals;
pub mod traits;
pub mod tropical;

#[cfg(test)]
mod proptests;

pub use complex::Complex;
pub use traits::{Field, Ring, Semiring};
pub use tropical::{Tropical, TropicalValue};
