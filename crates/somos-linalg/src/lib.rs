//! # somos-linalg
//!
//! Exact dense linear algebra over generic scalars.
//!
//! This crate provides:
//! - Dense row-major matrices with submatrix extraction by index lists
//! - Leibniz determinants (semiring split sums, ring determinant)
//! - Gaussian determinant and rank over fields
//! - Random search for non-singular minors
//!
//! ## Algorithm Selection
//!
//! - Minors up to about 8x8: [`Matrix::lazy_determinant`], division free
//! - Anything larger, or when only singularity matters:
//!   [`Matrix::gauss_determinant`] and [`Matrix::gauss_rank`]
//! - Semirings without subtraction: [`Matrix::permutation_sums`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod matrix;
pub mod minor_search;

mod determinant;
mod elimination;

pub use determinant::{inversions, next_permutation};
pub use error::{Axis, MatrixError};
pub use matrix::Matrix;
pub use minor_search::{IndexSampler, Minor, MinorSearch, MinorSearchConfig, RandomSampler};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
