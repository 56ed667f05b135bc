//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn is_canonical(r: &Rational) -> bool {
        r.denominator().is_positive() && r.numerator().gcd(r.denominator()).is_one()
    }

    proptest! {
        #[test]
        fn simplify_is_idempotent_and_canonical(n in small_int(), d in non_zero_int()) {
            let mut r = Rational::from_i64(n, d);
            prop_assert!(is_canonical(&r));
            let before = r.clone();
            r.simplify();
            prop_assert_eq!(&r, &before);
            prop_assert!(is_canonical(&r));
        }

        #[test]
        fn operations_stay_canonical(a in rational(), b in non_zero_rational()) {
            prop_assert!(is_canonical(&(&a + &b)));
            prop_assert!(is_canonical(&(&a - &b)));
            prop_assert!(is_canonical(&(&a * &b)));
            prop_assert!(is_canonical(&(&a / &b)));
        }

        #[test]
        fn division_inverts_multiplication(a in rational(), b in non_zero_rational()) {
            let q = a.checked_div(&b).unwrap();
            prop_assert_eq!(q * &b, a);
        }

        #[test]
        fn subtraction_inverts_addition(a in rational(), b in rational()) {
            prop_assert_eq!((&a + &b) - &b, a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c
            );
        }

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_identities(a in rational()) {
            prop_assert_eq!(&a + &Rational::zero(), a.clone());
            prop_assert_eq!(&a * &Rational::one(), a.clone());
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn ordering_matches_subtraction_sign(a in rational(), b in rational()) {
            let diff = &a - &b;
            prop_assert_eq!(a.cmp(&b), diff.signum().cmp(&0));
        }

        #[test]
        fn display_round_trips(a in rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
        }

        #[test]
        fn integer_division_identity(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = &a / &b;
            let r = &a % &b;
            prop_assert_eq!(q * &b + r, a);
        }

        #[test]
        fn integer_gcd_divides_both(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }
    }
}
