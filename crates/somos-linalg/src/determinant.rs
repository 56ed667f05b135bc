//! Determinants.
//!
//! Two algorithms with very different requirements:
//!
//! - [`Matrix::lazy_determinant`] expands over all `n!` permutations
//!   (Leibniz). It never divides, so it only needs a ring, and the split
//!   even/odd sums it is built on only need a semiring. `O(n · n!)`: a
//!   cross-check for small minors, not a workhorse.
//! - [`Matrix::gauss_determinant`] eliminates in `O(n³)` and needs a field.

use somos_integers::Integer;
use somos_rings::{Field, Ring, Semiring};
use tracing::debug;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Rearranges `perm` into the next permutation in lexicographic order.
///
/// Returns `false` (and leaves `perm` sorted ascending) when `perm` was the
/// last permutation.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    let Some(pivot) = perm.windows(2).rposition(|w| w[0] < w[1]) else {
        perm.reverse();
        return false;
    };
    let successor = perm
        .iter()
        .rposition(|&x| x > perm[pivot])
        .unwrap_or(pivot + 1);
    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    true
}

/// Counts out-of-order pairs.
#[must_use]
pub fn inversions(perm: &[usize]) -> usize {
    let mut count = 0;
    for u in 0..perm.len() {
        for j in u + 1..perm.len() {
            if perm[u] > perm[j] {
                count += 1;
            }
        }
    }
    count
}

impl<F: Semiring> Matrix<F> {
    /// Sums the permutation products of the Leibniz expansion, split by
    /// parity: `(Σ even, Σ odd)`.
    ///
    /// The permutation counter is an arbitrary precision integer since `n!`
    /// outgrows any machine word past `n = 20`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix and
    /// [`MatrixError::Arithmetic`] if a product fails (tropical overflow).
    #[tracing::instrument(level = "debug", skip(self), fields(n = self.num_rows()))]
    pub fn permutation_sums(&self) -> Result<(F, F), MatrixError> {
        let n = self.require_square()?;
        let total = Integer::factorial(n as u64);
        debug!(permutations = %total, "starting Leibniz expansion");

        let mut perm: Vec<usize> = (0..n).collect();
        let mut even = F::zero();
        let mut odd = F::zero();
        let mut counter = Integer::new(0);
        while counter < total {
            let mut product = F::one();
            for (row, &col) in perm.iter().enumerate() {
                product = product.checked_mul(&self[(row, col)])?;
            }

            if inversions(&perm) % 2 == 0 {
                even = even + product;
            } else {
                odd = odd + product;
            }
            next_permutation(&mut perm);
            counter.increment();
        }

        Ok((even, odd))
    }
}

impl<F: Ring> Matrix<F> {
    /// Computes the determinant by Leibniz expansion: `Σ even − Σ odd`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn lazy_determinant(&self) -> Result<F, MatrixError> {
        let (even, odd) = self.permutation_sums()?;
        Ok(even - odd)
    }
}

impl<F: Field> Matrix<F> {
    /// Computes the determinant by Gaussian elimination.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    #[tracing::instrument(level = "debug", skip(self), fields(n = self.num_rows()))]
    pub fn gauss_determinant(&self) -> Result<F, MatrixError> {
        let n = self.require_square()?;
        let mut m = self.clone();
        let mut det = F::one();

        for col in 0..n {
            let Some(pivot_row) = (col..n).find(|&r| !m[(r, col)].is_zero()) else {
                return Ok(F::zero());
            };
            if pivot_row != col {
                m.swap_rows(col, pivot_row);
                det = -det;
            }

            let pivot = m[(col, col)].clone();
            for row in col + 1..n {
                if m[(row, col)].is_zero() {
                    continue;
                }
                let factor = m[(row, col)].checked_div(&pivot)?;
                for k in col..n {
                    let delta = factor.clone() * m[(col, k)].clone();
                    m[(row, k)] = m[(row, k)].clone() - delta;
                }
            }
            det = det * pivot;
        }

        Ok(det)
    }
}
