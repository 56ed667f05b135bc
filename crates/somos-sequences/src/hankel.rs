//! Hankel-style matrices built from sequence terms.

use somos_linalg::Matrix;
use somos_rings::{Field, Ring};
use tracing::info;

use crate::error::SequenceError;
use crate::sequence::Sequence;

/// How entries are derived from the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    /// Kind `0`: entry `(m, n)` is `s[m + n] · s[m − n]`.
    SumDifference,
    /// Kind `1`: accepted by validation but without an entry rule; building
    /// it fails with [`SequenceError::UndefinedMatrixKind`].
    Reserved,
}

impl MatrixKind {
    /// The numeric code used on the command line.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            MatrixKind::SumDifference => 0,
            MatrixKind::Reserved => 1,
        }
    }
}

impl TryFrom<i64> for MatrixKind {
    type Error = SequenceError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MatrixKind::SumDifference),
            1 => Ok(MatrixKind::Reserved),
            other => Err(SequenceError::InvalidMatrixKind(other)),
        }
    }
}

/// Builds the `size x size` matrix of `kind` over `seq`.
///
/// The sequence is only borrowed for the duration of the call; terms it
/// memoizes along the way stay in its caches.
///
/// # Errors
///
/// Returns [`SequenceError::UndefinedMatrixKind`] for
/// [`MatrixKind::Reserved`], and any error raised while evaluating terms.
pub fn hankel_matrix<F, S>(seq: &mut S, size: usize, kind: MatrixKind) -> Result<Matrix<F>, SequenceError>
where
    F: Ring,
    S: Sequence<F> + ?Sized,
{
    if kind == MatrixKind::Reserved {
        return Err(SequenceError::UndefinedMatrixKind(kind.code()));
    }
    let signed = |v: usize| i64::try_from(v).map_err(|_| SequenceError::IndexOverflow { index: i64::MAX });
    Matrix::try_from_fn(size, size, |m, n| {
        let (m, n) = (signed(m)?, signed(n)?);
        Ok(seq.term(m + n)? * seq.term(m - n)?)
    })
}

/// Builds the `size x size` matrix of `kind` over `seq` and returns its rank.
///
/// # Errors
///
/// See [`hankel_matrix`].
#[tracing::instrument(level = "info", skip(seq))]
pub fn hankel_rank<F, S>(seq: &mut S, size: usize, kind: MatrixKind) -> Result<usize, SequenceError>
where
    F: Field,
    S: Sequence<F> + ?Sized,
{
    let matrix = hankel_matrix(seq, size, kind)?;
    info!(size, "matrix built, eliminating");
    let rank = matrix.gauss_rank()?;
    info!(size, rank, "rank computed");
    Ok(rank)
}
