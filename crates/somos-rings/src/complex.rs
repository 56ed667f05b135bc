//! Complex numbers over an arbitrary ring.
//!
//! `Complex<F>` is a ring whenever `F` is, and a field whenever `F` is a
//! field (every exact field in this workspace is a subfield of the reals, so
//! `re² + im²` vanishes only at zero). Over [`Rational`](somos_integers::Rational)
//! this gives exact Gaussian rationals.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use somos_integers::ArithmeticError;

use crate::traits::{Field, Ring, Semiring};

/// A complex number `re + im·i` with components in `F`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Complex<F> {
    re: F,
    im: F,
}

impl<F: Ring> Complex<F> {
    /// Creates `re + im·i`.
    #[must_use]
    pub fn new(re: F, im: F) -> Self {
        Self { re, im }
    }

    /// Creates a real value; the imaginary part is zero.
    #[must_use]
    pub fn real(re: F) -> Self {
        Self { re, im: F::zero() }
    }

    /// Creates `re + im·i` from a pair of machine integers.
    #[must_use]
    pub fn from_pair((re, im): (i64, i64)) -> Self
    where
        F: From<i64>,
    {
        Self::new(F::from(re), F::from(im))
    }

    /// Returns the real part.
    #[must_use]
    pub fn re(&self) -> &F {
        &self.re
    }

    /// Returns the imaginary part.
    #[must_use]
    pub fn im(&self) -> &F {
        &self.im
    }

    /// Returns `re - im·i`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re.clone(), -self.im.clone())
    }

    /// Returns `re² + im²`, i.e. `self · conj(self)`.
    #[must_use]
    pub fn norm(&self) -> F {
        self.re.clone() * self.re.clone() + self.im.clone() * self.im.clone()
    }

    /// Returns true if the imaginary part is zero.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }
}

impl<F: Field> Complex<F> {
    /// Divides both components by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `scalar` is zero.
    pub fn checked_div_scalar(&self, scalar: &F) -> Result<Self, ArithmeticError> {
        Ok(Self::new(
            self.re.checked_div(scalar)?,
            self.im.checked_div(scalar)?,
        ))
    }

    fn div_ref(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        (self.clone() * rhs.conjugate()).checked_div_scalar(&rhs.norm())
    }
}

impl<F: Ring> Semiring for Complex<F> {
    fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    fn one() -> Self {
        Self::new(F::one(), F::zero())
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }
}

impl<F: Ring> Ring for Complex<F> {}

impl<F: Field> Field for Complex<F> {
    fn inv(&self) -> Option<Self> {
        Self::one().div_ref(self).ok()
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_ref(rhs)
    }
}

impl<F: Ring> Add for Complex<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<F: Ring> Sub for Complex<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<F: Ring> Mul for Complex<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let re = self.re.clone() * rhs.re.clone() - self.im.clone() * rhs.im.clone();
        let im = self.re * rhs.im + self.im * rhs.re;
        Self::new(re, im)
    }
}

/// Multiplies by the conjugate and divides by the real norm.
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl<F: Field> Div for Complex<F> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.div_ref(&rhs) {
            Ok(q) => q,
            Err(err) => panic!("complex division failed: {err}"),
        }
    }
}

impl<F: Ring> Neg for Complex<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl<F: Ring> AddAssign for Complex<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl<F: Ring> SubAssign for Complex<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl<F: Ring> MulAssign for Complex<F> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl<F: Field> DivAssign for Complex<F> {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

/// Compares against a real integer: equal iff the imaginary part is zero and
/// the real part equals `other`.
impl<F: Ring + PartialEq<i64>> PartialEq<i64> for Complex<F> {
    fn eq(&self, other: &i64) -> bool {
        self.re == *other && self.im.is_zero()
    }
}

impl<F: Ring + fmt::Display> fmt::Display for Complex<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_zero() {
            write!(f, "{}", self.re)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use somos_integers::Rational;

    type Gq = Complex<Rational>;

    fn gq(re: (i64, i64), im: (i64, i64)) -> Gq {
        Complex::new(Rational::from(re), Rational::from(im))
    }

    #[test]
    fn test_multiplication() {
        // (1 + 2i)(3 - i) = 3 - i + 6i - 2i² = 5 + 5i
        let a = Gq::from_pair((1, 2));
        let b = Gq::from_pair((3, -1));
        assert_eq!(a * b, Gq::from_pair((5, 5)));
    }

    #[test]
    fn test_i_squared() {
        let i = Gq::from_pair((0, 1));
        assert_eq!(i.clone() * i, -Gq::one());
    }

    #[test]
    fn test_division_by_conjugate() {
        // (1 + i) / (1 - i) = i
        let a = Gq::from_pair((1, 1));
        let b = Gq::from_pair((1, -1));
        assert_eq!(a.clone() / b.clone(), Gq::from_pair((0, 1)));
        // Quotient times divisor recovers the dividend.
        let q = gq((2, 3), (-1, 5)) / gq((7, 2), (1, 4));
        assert_eq!(q * gq((7, 2), (1, 4)), gq((2, 3), (-1, 5)));
    }

    #[test]
    fn test_division_by_zero() {
        let a = Gq::from_pair((1, 1));
        assert_eq!(
            Field::checked_div(&a, &Gq::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(Gq::zero().inv(), None);
    }

    #[test]
    fn test_integer_comparison() {
        assert!(Gq::from_pair((4, 0)) == 4_i64);
        assert!(Gq::from_pair((4, 1)) != 4_i64);
        assert!(Gq::real(Rational::from_i64(1, 2)) != 1_i64);
    }

    #[test]
    fn test_display() {
        assert_eq!(Gq::from_pair((3, 0)).to_string(), "3");
        assert_eq!(gq((1, 2), (-3, 1)).to_string(), "1/2 + -3i");
    }
}
