//! # Somos
//!
//! An exact-arithmetic laboratory for Somos recurrences.
//!
//! Terms of Somos-k sequences are computed exactly over the rationals (or any
//! other exact field), arranged into Hankel-style matrices and probed with
//! determinants and ranks.
//!
//! ## Features
//!
//! - **Exact Scalars**: reduced rationals over arbitrary precision integers
//! - **Algebraic Wrappers**: complex numbers over any field, max-plus tropical
//!   values
//! - **Matrix Kernel**: Leibniz and Gaussian determinants, Gaussian rank,
//!   minor extraction and random minor search
//! - **Recurrence Engine**: memoized Somos, dual, shifted and index-scaled
//!   sequences, evaluable at negative indices
//!
//! ## Quick Start
//!
//! ```rust
//! use somos::prelude::*;
//!
//! let mut s4 = somos::experiment::somos4().unwrap();
//! assert_eq!(s4.term(8).unwrap(), Rational::from(59));
//!
//! let rank = hankel_rank(&mut s4, 6, MatrixKind::SumDifference).unwrap();
//! assert_eq!(rank, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use somos_integers as integers;
pub use somos_linalg as linalg;
pub use somos_rings as rings;
pub use somos_sequences as sequences;

pub mod experiment;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use somos_integers::{Integer, Rational};
    pub use somos_linalg::{Matrix, MatrixError, MinorSearch, MinorSearchConfig};
    pub use somos_rings::{Complex, Field, Ring, Semiring, Tropical};
    pub use somos_sequences::{
        hankel_matrix, hankel_rank, DualSomosSequence, IndexScaledSequence, MatrixKind, Sequence,
        SequenceError, ShiftedSomosSequence, SomosSequence,
    };
}
