//! Algebraic structure traits.
//!
//! The matrix kernel is generic over its scalar. What a routine may do with
//! a scalar is decided by which of these traits it asks for:
//!
//! - [`Semiring`]: addition and multiplication with identities. Enough for the
//!   split permutation sums of the Leibniz expansion, and the only structure
//!   tropical values have.
//! - [`Ring`]: adds subtraction. Required for an actual determinant.
//! - [`Field`]: adds division. Required for Gaussian elimination.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use somos_integers::ArithmeticError;

/// A set with addition and multiplication.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - `zero()` is absorbing for multiplication
pub trait Semiring: Clone + PartialEq + Debug + Add<Output = Self> + Mul<Output = Self> {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Multiplies, reporting failure instead of panicking.
    ///
    /// Exact scalars cannot fail here; fixed-width carriers override this to
    /// report overflow.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the product is not representable.
    fn checked_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Ok(self.clone() * rhs.clone())
    }
}

/// A semiring in which every element has an additive inverse.
pub trait Ring: Semiring + Sub<Output = Self> + Neg<Output = Self> {}

/// A ring where every non-zero element has a multiplicative inverse.
///
/// The `/` operator may panic on a zero divisor; [`Field::checked_div`] is
/// the fallible form.
pub trait Field: Ring + Div<Output = Self> {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.clone() / rhs.clone())
    }
}
