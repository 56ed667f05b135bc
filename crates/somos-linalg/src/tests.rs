//! Integration tests for somos-linalg.

#[cfg(test)]
mod integration_tests {
    use crate::matrix::Matrix;
    use crate::minor_search::{MinorSearch, MinorSearchConfig};
    use somos_integers::Rational;
    use somos_rings::Semiring;

    fn q(v: i64) -> Rational {
        Rational::from(v)
    }

    /// Every `n x n` matrix with entries drawn from `values`.
    fn all_matrices(n: usize, values: &[i64]) -> Vec<Matrix<Rational>> {
        let cells = n * n;
        let total = values.len().pow(u32::try_from(cells).unwrap());
        (0..total)
            .map(|mut code| {
                Matrix::from_fn(n, n, |_, _| {
                    let v = values[code % values.len()];
                    code /= values.len();
                    q(v)
                })
            })
            .collect()
    }

    #[test]
    fn test_leibniz_and_gauss_agree_exhaustively() {
        for m in all_matrices(2, &[-1, 0, 1, 2]) {
            assert_eq!(m.lazy_determinant(), m.gauss_determinant(), "{m}");
        }
        for m in all_matrices(3, &[0, 1]) {
            assert_eq!(m.lazy_determinant(), m.gauss_determinant(), "{m}");
        }
    }

    #[test]
    fn test_singular_iff_rank_deficient_exhaustively() {
        for m in all_matrices(2, &[-1, 0, 1]) {
            let singular = m.lazy_determinant().unwrap().is_zero();
            assert_eq!(singular, m.gauss_rank().unwrap() < 2, "{m}");
        }
        for m in all_matrices(3, &[0, 1]) {
            let singular = m.lazy_determinant().unwrap().is_zero();
            assert_eq!(singular, m.gauss_rank().unwrap() < 3, "{m}");
        }
    }

    #[test]
    fn test_determinant_is_multiplicative() {
        let a = Matrix::from_rows(vec![
            vec![q(1), q(2), q(0)],
            vec![q(-1), q(3), q(1)],
            vec![q(2), q(0), q(4)],
        ])
        .unwrap();
        let b = Matrix::from_rows(vec![
            vec![q(0), q(1), q(1)],
            vec![q(5), q(-2), q(0)],
            vec![q(1), q(1), q(3)],
        ])
        .unwrap();
        let ab = a.mm(&b);
        let expected = a.lazy_determinant().unwrap() * b.lazy_determinant().unwrap();
        assert_eq!(ab.lazy_determinant(), Ok(expected));
    }

    #[test]
    fn test_transpose_preserves_determinant_and_rank() {
        let m = Matrix::from_fn(4, 4, |r, c| {
            let diagonal = if r == c { q(1) } else { q(0) };
            Rational::from_i64(r as i64 + 1, c as i64 + 2) + diagonal
        });
        let t = m.transpose();
        assert_eq!(m.lazy_determinant(), t.lazy_determinant());
        assert_eq!(m.gauss_rank(), t.gauss_rank());
    }

    #[test]
    fn test_found_minor_matches_source() {
        // A 6x6 matrix whose only non-singular 3x3 minors avoid the zero rows.
        let m = Matrix::from_fn(6, 6, |r, c| {
            if r % 2 == 0 {
                q(((r * 7 + c * c * 3) % 11) as i64)
            } else {
                q(0)
            }
        });
        let config = MinorSearchConfig {
            minor_size: 3,
            max_attempts: Some(5000),
            seed: 42,
        };
        let minors: Vec<_> = MinorSearch::new(&m, &config)
            .unwrap()
            .take(3)
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(!minors.is_empty());
        for minor in minors {
            assert_eq!(minor.rows, vec![0, 2, 4]);
            assert!(!minor.determinant.is_zero());
            assert_eq!(minor.matrix, m.submatrix(&minor.rows, &minor.cols).unwrap());
            assert_eq!(minor.matrix.gauss_rank(), Ok(3));
        }
    }
}
