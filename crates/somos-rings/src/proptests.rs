//! Property-based tests for the scalar wrappers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use somos_integers::Rational;

    use crate::{Complex, Field, Semiring, Tropical};

    type T = Tropical<i64>;
    type Gq = Complex<Rational>;

    fn finite() -> impl Strategy<Value = T> {
        (-1_000_000i64..1_000_000i64).prop_map(T::finite)
    }

    fn gaussian() -> impl Strategy<Value = Gq> {
        (-50i64..50, 1i64..20, -50i64..50, 1i64..20).prop_map(|(a, b, c, d)| {
            Complex::new(Rational::from_i64(a, b), Rational::from_i64(c, d))
        })
    }

    proptest! {
        #[test]
        fn tropical_zero_is_additive_identity(x in finite()) {
            prop_assert_eq!(T::zero() + x, x);
            prop_assert_eq!(x + T::zero(), x);
        }

        #[test]
        fn tropical_one_is_multiplicative_identity(x in finite()) {
            prop_assert_eq!(T::one() * x, x);
            prop_assert_eq!(x * T::one(), x);
        }

        #[test]
        fn tropical_zero_absorbs(x in finite()) {
            prop_assert_eq!(x * T::zero(), T::zero());
            prop_assert_eq!(T::zero() * x, T::zero());
        }

        #[test]
        fn tropical_distributive(a in finite(), b in finite(), c in finite()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn tropical_division_inverts_multiplication(a in finite(), b in finite()) {
            prop_assert_eq!((a * b) / b, a);
        }

        #[test]
        fn complex_division_inverts_multiplication(a in gaussian(), b in gaussian()) {
            prop_assume!(!b.is_zero());
            let q = a.checked_div(&b).unwrap();
            prop_assert_eq!(q * b, a);
        }

        #[test]
        fn complex_norm_is_multiplicative(a in gaussian(), b in gaussian()) {
            prop_assert_eq!((a.clone() * b.clone()).norm(), a.norm() * b.norm());
        }
    }
}
