//! Gaussian elimination over a field.

use somos_rings::Field;
use tracing::trace;

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl<F: Field> Matrix<F> {
    /// Reduces a copy of the matrix to row echelon form.
    ///
    /// Pivots are not normalized, so the entries stay exactly as elimination
    /// leaves them. Returns the reduced matrix and the number of pivots found.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Arithmetic`] if a pivot division fails, which
    /// cannot happen for a lawful field since pivots are non-zero.
    pub fn row_echelon(&self) -> Result<(Self, usize), MatrixError> {
        let mut m = self.clone();
        let mut pivot_row = 0;
        let mut pivot_col = 0;

        while pivot_row < m.num_rows() && pivot_col < m.num_cols() {
            let Some(found) = (pivot_row..m.num_rows()).find(|&r| !m[(r, pivot_col)].is_zero())
            else {
                // No pivot in this column
                pivot_col += 1;
                continue;
            };

            if found != pivot_row {
                m.swap_rows(pivot_row, found);
            }

            let pivot = m[(pivot_row, pivot_col)].clone();
            for row in pivot_row + 1..m.num_rows() {
                if m[(row, pivot_col)].is_zero() {
                    continue;
                }
                let factor = m[(row, pivot_col)].checked_div(&pivot)?;
                for col in pivot_col..m.num_cols() {
                    let delta = factor.clone() * m[(pivot_row, col)].clone();
                    m[(row, col)] = m[(row, col)].clone() - delta;
                }
            }

            trace!(pivot_row, pivot_col, "eliminated column");
            pivot_row += 1;
            pivot_col += 1;
        }

        Ok((m, pivot_row))
    }

    /// Computes the rank by Gaussian elimination: the number of rows of the
    /// echelon form that are not entirely zero.
    ///
    /// # Errors
    ///
    /// See [`Matrix::row_echelon`].
    pub fn gauss_rank(&self) -> Result<usize, MatrixError> {
        let (echelon, _) = self.row_echelon()?;
        Ok(echelon
            .rows()
            .filter(|row| row.iter().any(|v| !v.is_zero()))
            .count())
    }
}
