//! The field of rational numbers.

use crate::traits::{Field, Ring, Semiring};
use somos_integers::{ArithmeticError, Rational};

impl Semiring for Rational {
    fn zero() -> Self {
        <Rational as num_traits::Zero>::zero()
    }

    fn one() -> Self {
        <Rational as num_traits::One>::one()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }
}

impl Ring for Rational {}

impl Field for Rational {
    fn inv(&self) -> Option<Self> {
        self.checked_recip().ok()
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Rational::checked_div(self, rhs)
    }
}
