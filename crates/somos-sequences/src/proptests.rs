//! Property-based tests for the recurrence engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use somos_integers::Rational;

    use crate::{Sequence, SomosSequence};

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (prop_oneof![(-9i64..=-1i64), (1i64..=9i64)], 1i64..=5i64)
            .prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn somos4() -> impl Strategy<Value = SomosSequence<Rational>> {
        (
            prop::collection::vec(non_zero_rational(), 2),
            prop::collection::vec(non_zero_rational(), 4),
        )
            .prop_map(|(coefs, initial)| SomosSequence::new(4, coefs, initial).unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn terms_satisfy_recurrence_both_ways(mut s in somos4()) {
            let window = s.terms(-6..12);
            prop_assume!(window.is_ok());
            let window = window.unwrap();
            let c = s.coefs().to_vec();
            // window[t] is s[t - 6]; check every index whose whole stencil
            // lies inside the window.
            for t in 4..window.len() {
                let lhs = window[t].clone() * window[t - 4].clone();
                let rhs = c[0].clone() * window[t - 1].clone() * window[t - 3].clone()
                    + c[1].clone() * window[t - 2].clone() * window[t - 2].clone();
                prop_assert_eq!(lhs, rhs);
            }
        }

        #[test]
        fn lookup_order_does_not_matter(
            s in somos4(),
            order in prop::collection::vec(-8i64..14, 1..20),
        ) {
            // One sequence answers the lookups in the given order; each answer
            // is compared with a fresh copy that has never been extended.
            let mut scattered = s.clone();
            for &index in &order {
                prop_assert_eq!(scattered.term(index), s.clone().term(index));
            }
        }
    }
}
