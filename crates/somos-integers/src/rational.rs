//! Exact rational numbers.
//!
//! A `Rational` is a pair of arbitrary precision integers. The pair is kept
//! canonical at all times: the denominator is strictly positive and shares no
//! factor with the numerator, so zero is always `0/1`. Because the form is
//! canonical, structural equality and hashing coincide with numeric equality.
//!
//! Every arithmetic operator accepts a `Rational`, an `i64`, an `Integer`, or
//! an `(i64, i64)` / `(Integer, Integer)` numerator-denominator pair on the
//! right-hand side.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{ArithmeticError, ParseRationalError};
use crate::Integer;

/// An exact rational number in lowest terms.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a rational from numerator and denominator, reducing it.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        Self::reduced(numerator, denominator)
    }

    /// Creates a rational from numerator and denominator, reducing it.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn try_new(numerator: Integer, denominator: Integer) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    // Callers guarantee a non-zero denominator.
    fn reduced(numerator: Integer, denominator: Integer) -> Self {
        let mut r = Self {
            numerator,
            denominator,
        };
        r.simplify();
        r
    }

    /// Brings the pair into canonical form.
    ///
    /// A negative denominator flips the sign of both parts, then both parts
    /// are divided by `gcd(|numerator|, denominator)`. Every constructor and
    /// operator already calls this, so on a live value it is a no-op.
    pub fn simplify(&mut self) {
        if self.denominator.is_negative() {
            self.numerator = -&self.numerator;
            self.denominator = -&self.denominator;
        }
        let gcd = self.numerator.gcd(&self.denominator);
        if !gcd.is_one() && !gcd.is_zero() {
            self.numerator = &self.numerator / &gcd;
            self.denominator = &self.denominator / &gcd;
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.numerator.clone())
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] for zero.
    pub fn checked_recip(&self) -> Result<Self, ArithmeticError> {
        Self::one().checked_div(self)
    }

    /// Computes self^exp. Powers of a reduced fraction stay reduced.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self {
            numerator: self.numerator.pow(exp),
            denominator: self.denominator.pow(exp),
        }
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        // Scaling by d/gcd instead of the full product keeps intermediates small.
        let gcd = self.denominator.gcd(&rhs.denominator);
        let c1 = &rhs.denominator / &gcd;
        let c2 = &self.denominator / &gcd;
        let numerator = &self.numerator * &c1 + &rhs.numerator * &c2;
        Self::reduced(numerator, &self.denominator * &c1)
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        self.add_ref(&-rhs)
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        Self::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    /// Divides by `rhs` via cross-multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.numerator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    fn div_ref(&self, rhs: &Self) -> Self {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(err) => panic!("rational division failed: {err}"),
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross terms preserve order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.is_integer() && self.numerator == Integer::new(*other)
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&Rational::from(*other)))
    }
}

impl PartialEq<Integer> for Rational {
    fn eq(&self, other: &Integer) -> bool {
        self.is_integer() && &self.numerator == other
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((num, den)) => {
                let numerator: Integer = num.parse()?;
                let denominator: Integer = den.parse()?;
                Self::try_new(numerator, denominator).map_err(|_| ParseRationalError::ZeroDenominator)
            }
            None => Ok(Self::from_integer(s.parse()?)),
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

macro_rules! rational_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $core:ident) => {
        impl $Op<&Rational> for &Rational {
            type Output = Rational;

            fn $op(self, rhs: &Rational) -> Rational {
                self.$core(rhs)
            }
        }

        impl $Op<Rational> for &Rational {
            type Output = Rational;

            fn $op(self, rhs: Rational) -> Rational {
                self.$core(&rhs)
            }
        }

        impl $Op<&Rational> for Rational {
            type Output = Rational;

            fn $op(self, rhs: &Rational) -> Rational {
                self.$core(rhs)
            }
        }

        impl $Op<Rational> for Rational {
            type Output = Rational;

            fn $op(self, rhs: Rational) -> Rational {
                self.$core(&rhs)
            }
        }

        impl $OpAssign<&Rational> for Rational {
            fn $op_assign(&mut self, rhs: &Rational) {
                *self = self.$core(rhs);
            }
        }

        impl $OpAssign<Rational> for Rational {
            fn $op_assign(&mut self, rhs: Rational) {
                *self = self.$core(&rhs);
            }
        }
    };
}

// Non-rational operands are normalized through `From` first.
macro_rules! rational_mixed_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $core:ident; $($T:ty),+) => {$(
        impl $Op<$T> for Rational {
            type Output = Rational;

            fn $op(self, rhs: $T) -> Rational {
                self.$core(&Rational::from(rhs))
            }
        }

        impl $Op<$T> for &Rational {
            type Output = Rational;

            fn $op(self, rhs: $T) -> Rational {
                self.$core(&Rational::from(rhs))
            }
        }

        impl $OpAssign<$T> for Rational {
            fn $op_assign(&mut self, rhs: $T) {
                *self = self.$core(&Rational::from(rhs));
            }
        }
    )+};
}

rational_binop!(Add, add, AddAssign, add_assign, add_ref);
rational_binop!(Sub, sub, SubAssign, sub_assign, sub_ref);
rational_binop!(Mul, mul, MulAssign, mul_assign, mul_ref);
// Division panics on a zero divisor, like integer division; use
// `Rational::checked_div` to get the error instead.
rational_binop!(Div, div, DivAssign, div_assign, div_ref);

rational_mixed_binop!(Add, add, AddAssign, add_assign, add_ref; i64, Integer, (i64, i64), (Integer, Integer));
rational_mixed_binop!(Sub, sub, SubAssign, sub_assign, sub_ref; i64, Integer, (i64, i64), (Integer, Integer));
rational_mixed_binop!(Mul, mul, MulAssign, mul_assign, mul_ref; i64, Integer, (i64, i64), (Integer, Integer));
rational_mixed_binop!(Div, div, DivAssign, div_assign, div_ref; i64, Integer, (i64, i64), (Integer, Integer));

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

/// `(numerator, denominator)`.
///
/// # Panics
///
/// Panics if the denominator is zero.
impl From<(i64, i64)> for Rational {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::from_i64(numerator, denominator)
    }
}

/// `(numerator, denominator)`.
///
/// # Panics
///
/// Panics if the denominator is zero.
impl From<(Integer, Integer)> for Rational {
    fn from((numerator, denominator): (Integer, Integer)) -> Self {
        Self::new(numerator, denominator)
    }
}
