//! Dense matrix storage and construction.
//!
//! Matrices are small (the experiments stay well under a hundred rows) and
//! their entries are exact scalars, so storage is a single row-major `Vec`.

use std::fmt;
use std::ops::{Index, IndexMut};

use somos_rings::Semiring;

use crate::error::{Axis, MatrixError};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<F> {
    /// Matrix entries in row-major order.
    data: Vec<F>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

fn check_indices(indices: &[usize], bound: usize, axis: Axis) -> Result<(), MatrixError> {
    match indices.iter().find(|&&index| index >= bound) {
        Some(&index) => Err(MatrixError::IndexOutOfRange { axis, index, bound }),
        None => Ok(()),
    }
}

impl<F: Clone> Matrix<F> {
    /// Creates a matrix from a grid of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRows`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != num_cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: num_cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates the sub-grid of `grid` picked out by `rows` and `cols`.
    ///
    /// Entry `(i, j)` of the result is `grid[rows[i]][cols[j]]`. The index
    /// lists need be neither sorted nor distinct: their order fixes the
    /// order of the result, and a repeated index repeats a row or column.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if an index falls outside
    /// the grid.
    pub fn from_rows_selecting(
        grid: &[Vec<F>],
        rows: &[usize],
        cols: &[usize],
    ) -> Result<Self, MatrixError> {
        check_indices(rows, grid.len(), Axis::Row)?;
        let mut data = Vec::with_capacity(rows.len() * cols.len());
        for &r in rows {
            let source = &grid[r];
            check_indices(cols, source.len(), Axis::Column)?;
            data.extend(cols.iter().map(|&c| source[c].clone()));
        }
        Ok(Self {
            data,
            num_rows: rows.len(),
            num_cols: cols.len(),
        })
    }

    /// Extracts the submatrix picked out by `rows` and `cols`.
    ///
    /// Same selection rules as [`Matrix::from_rows_selecting`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if an index falls outside
    /// the matrix.
    pub fn submatrix(&self, rows: &[usize], cols: &[usize]) -> Result<Self, MatrixError> {
        check_indices(rows, self.num_rows, Axis::Row)?;
        check_indices(cols, self.num_cols, Axis::Column)?;
        Ok(Self::from_fn(rows.len(), cols.len(), |i, j| {
            self[(rows[i], cols[j])].clone()
        }))
    }

    /// Creates a matrix whose entry `(i, j)` is `f(i, j)`, filled row by row.
    pub fn from_fn(num_rows: usize, num_cols: usize, mut f: impl FnMut(usize, usize) -> F) -> Self {
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for i in 0..num_rows {
            for j in 0..num_cols {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Like [`Matrix::from_fn`], stopping at the first failing entry.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_from_fn<E>(
        num_rows: usize,
        num_cols: usize,
        mut f: impl FnMut(usize, usize) -> Result<F, E>,
    ) -> Result<Self, E> {
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for i in 0..num_rows {
            for j in 0..num_cols {
                data.push(f(i, j)?);
            }
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    pub(crate) fn require_square(&self) -> Result<usize, MatrixError> {
        if self.is_square() {
            Ok(self.num_rows)
        } else {
            Err(MatrixError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&F> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[F] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[F]> {
        (0..self.num_rows).map(move |r| self.row(r))
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.num_cols, self.num_rows, |i, j| self[(j, i)].clone())
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }
}

impl<F: Semiring> Matrix<F> {
    /// Creates a matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![F::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { F::one() } else { F::zero() })
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);
        Self::from_fn(self.num_rows, other.num_cols, |i, j| {
            (0..self.num_cols).fold(F::zero(), |acc, k| {
                acc + self[(i, k)].clone() * other[(k, j)].clone()
            })
        })
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|v| v.is_zero())
    }
}

impl<F> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<F> IndexMut<(usize, usize)> for Matrix<F> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

/// Tab-separated entries, rows separated by a blank line.
impl<F: fmt::Display> fmt::Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.num_rows {
            let start = r * self.num_cols;
            for value in &self.data[start..start + self.num_cols] {
                write!(f, "{value}\t")?;
            }
            writeln!(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
