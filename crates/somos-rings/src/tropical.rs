//! The max-plus tropical semiring.
//!
//! Tropical addition is `max`, tropical multiplication is ordinary addition
//! and tropical division is ordinary subtraction. The additive identity is
//! `-inf`, represented by a flag rather than a sentinel value so that every
//! finite value of the carrier stays usable. There is no additive inverse, so
//! `Tropical` implements [`Semiring`] but not `Ring`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul};

use num_traits::{CheckedAdd, CheckedSub, Zero};
use somos_integers::ArithmeticError;

use crate::traits::Semiring;

/// Carrier types for tropical values: fixed-width, ordered, with checked
/// addition and subtraction.
pub trait TropicalValue: Copy + Ord + fmt::Debug + CheckedAdd + CheckedSub + Zero {}

impl<T> TropicalValue for T where T: Copy + Ord + fmt::Debug + CheckedAdd + CheckedSub + Zero {}

/// An element of the max-plus semiring over `V`.
#[derive(Clone, Copy, Debug)]
pub struct Tropical<V> {
    value: V,
    neg_inf: bool,
}

impl<V: TropicalValue> Tropical<V> {
    /// Creates a finite tropical value.
    #[must_use]
    pub fn finite(value: V) -> Self {
        Self {
            value,
            neg_inf: false,
        }
    }

    /// Returns the tropical zero, `-inf`.
    #[must_use]
    pub fn neg_inf() -> Self {
        Self {
            value: <V as Zero>::zero(),
            neg_inf: true,
        }
    }

    /// Returns the finite value, or `None` for `-inf`.
    #[must_use]
    pub fn value(&self) -> Option<V> {
        (!self.neg_inf).then_some(self.value)
    }

    /// Returns true for `-inf`.
    #[must_use]
    pub fn is_neg_inf(&self) -> bool {
        self.neg_inf
    }

    /// Tropical product: the sum of the values.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the sum leaves the range of `V`.
    pub fn checked_product(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if self.neg_inf || rhs.neg_inf {
            return Ok(Self::neg_inf());
        }
        self.value
            .checked_add(&rhs.value)
            .map(Self::finite)
            .ok_or_else(|| {
                ArithmeticError::Overflow(format!(
                    "tropical product {:?} + {:?}",
                    self.value, rhs.value
                ))
            })
    }

    /// Tropical quotient: the difference of the values.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is `-inf`, and
    /// [`ArithmeticError::Overflow`] if the difference leaves the range of `V`.
    pub fn checked_quotient(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.neg_inf {
            return Err(ArithmeticError::DivisionByZero);
        }
        if self.neg_inf {
            return Ok(Self::neg_inf());
        }
        self.value
            .checked_sub(&rhs.value)
            .map(Self::finite)
            .ok_or_else(|| {
                ArithmeticError::Overflow(format!(
                    "tropical quotient {:?} - {:?}",
                    self.value, rhs.value
                ))
            })
    }
}

impl<V: TropicalValue> PartialEq for Tropical<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.neg_inf, other.neg_inf) {
            (true, true) => true,
            (false, false) => self.value == other.value,
            _ => false,
        }
    }
}

impl<V: TropicalValue> Eq for Tropical<V> {}

impl<V: TropicalValue> PartialOrd for Tropical<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `-inf` sorts below every finite value.
impl<V: TropicalValue> Ord for Tropical<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.neg_inf, other.neg_inf) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.value.cmp(&other.value),
        }
    }
}

impl<V: TropicalValue> Semiring for Tropical<V> {
    fn zero() -> Self {
        Self::neg_inf()
    }

    fn one() -> Self {
        Self::finite(<V as Zero>::zero())
    }

    fn is_zero(&self) -> bool {
        self.neg_inf
    }

    fn is_one(&self) -> bool {
        !self.neg_inf && self.value.is_zero()
    }

    fn checked_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_product(rhs)
    }
}

impl<V: TropicalValue> Add for Tropical<V> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        std::cmp::max(self, rhs)
    }
}

/// # Panics
///
/// Panics on overflow; use [`Tropical::checked_product`] to get the error.
impl<V: TropicalValue> Mul for Tropical<V> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.checked_product(&rhs) {
            Ok(p) => p,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics when dividing by `-inf` or on overflow; use
/// [`Tropical::checked_quotient`] to get the error.
impl<V: TropicalValue> Div for Tropical<V> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_quotient(&rhs) {
            Ok(q) => q,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<V: TropicalValue + fmt::Display> fmt::Display for Tropical<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.neg_inf {
            write!(f, "-inf")
        } else {
            write!(f, "{}", self.value)
        }
    }
}
