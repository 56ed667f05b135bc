//! Property-based tests for determinants and rank.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use somos_integers::Rational;
    use somos_rings::Semiring;

    use crate::Matrix;

    /// Square rational matrices up to 6x6 with small entries. Low-rank inputs
    /// are common because the entry range is narrow.
    fn square_matrix() -> impl Strategy<Value = Matrix<Rational>> {
        (1usize..=6).prop_flat_map(|n| {
            prop::collection::vec((-2i64..=2, 1i64..=3), n * n).prop_map(move |cells| {
                let mut cells = cells.into_iter();
                Matrix::from_fn(n, n, |_, _| {
                    let (num, den) = cells.next().unwrap_or((0, 1));
                    Rational::from_i64(num, den)
                })
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn singular_iff_rank_deficient(m in square_matrix()) {
            let n = m.num_rows();
            let det = m.lazy_determinant().unwrap();
            let rank = m.gauss_rank().unwrap();
            prop_assert!(rank <= n);
            prop_assert_eq!(det.is_zero(), rank < n);
        }

        #[test]
        fn leibniz_matches_elimination(m in square_matrix()) {
            prop_assert_eq!(m.lazy_determinant(), m.gauss_determinant());
        }

        #[test]
        fn row_swap_negates_determinant(m in square_matrix()) {
            prop_assume!(m.num_rows() >= 2);
            let mut swapped = m.clone();
            swapped.swap_rows(0, 1);
            let det = m.gauss_determinant().unwrap();
            prop_assert_eq!(swapped.gauss_determinant().unwrap(), -det);
        }

        #[test]
        fn rank_is_transpose_invariant(m in square_matrix()) {
            prop_assert_eq!(m.gauss_rank(), m.transpose().gauss_rank());
        }
    }
}
