//! # somos-sequences
//!
//! Memoized Somos-k recurrences over exact fields.
//!
//! This crate provides:
//! - The [`Sequence`] capability: a term at any signed 64-bit index
//! - [`SomosSequence`]: forward and backward memoized Somos-k recurrences
//! - [`DualSomosSequence`]: a linear recurrence driven by a companion
//!   Somos sequence
//! - Views: [`ShiftedSomosSequence`] (`base[p·n + k]`) and
//!   [`IndexScaledSequence`] (`n · base[n]`)
//! - Hankel-style matrices `s[m + n] · s[m − n]` and their rank

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod hankel;

mod cache;
mod dual;
mod scaled;
mod sequence;
mod shifted;
mod somos;

#[cfg(test)]
mod proptests;

pub use dual::{DualSomosSequence, DEFAULT_BACKWARD_ANCHOR};
pub use error::SequenceError;
pub use hankel::{hankel_matrix, hankel_rank, MatrixKind};
pub use scaled::IndexScaledSequence;
pub use sequence::Sequence;
pub use shifted::ShiftedSomosSequence;
pub use somos::SomosSequence;
