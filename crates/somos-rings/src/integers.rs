//! The ring of integers.
//!
//! Arbitrary precision integers form a ring but not a field, so integer
//! matrices get Leibniz determinants but no Gaussian rank.

use crate::traits::{Ring, Semiring};
use somos_integers::Integer;

impl Semiring for Integer {
    fn zero() -> Self {
        <Integer as num_traits::Zero>::zero()
    }

    fn one() -> Self {
        <Integer as num_traits::One>::one()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }
}

impl Ring for Integer {}
