//! Random search for non-singular minors.
//!
//! Each attempt samples `minor_size` distinct row indices and `minor_size`
//! distinct column indices, extracts the minor and evaluates its Leibniz
//! determinant. Minors with a non-zero determinant are yielded; singular ones
//! are skipped. Without an attempt ceiling the search never ends on its own,
//! so callers either set [`MinorSearchConfig::max_attempts`] or stop pulling
//! from the iterator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use somos_rings::Ring;
use tracing::{debug, info};

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Attempts between progress reports.
const PROGRESS_INTERVAL: u64 = 1000;

/// Configuration for [`MinorSearch`].
#[derive(Clone, Debug)]
pub struct MinorSearchConfig {
    /// Side length of the sampled minors.
    pub minor_size: usize,
    /// Stop after this many attempts; `None` searches indefinitely.
    pub max_attempts: Option<u64>,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for MinorSearchConfig {
    fn default() -> Self {
        Self {
            minor_size: 3,
            max_attempts: None,
            seed: 42,
        }
    }
}

/// Source of index subsets for the search.
pub trait IndexSampler {
    /// Returns `count` distinct indices from `0..bound`, ascending.
    ///
    /// Callers guarantee `count <= bound`.
    fn sample(&mut self, bound: usize, count: usize) -> Vec<usize>;
}

/// Uniform sampling from a seeded ChaCha stream.
#[derive(Clone, Debug)]
pub struct RandomSampler {
    rng: ChaCha8Rng,
}

impl RandomSampler {
    /// Creates a sampler with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IndexSampler for RandomSampler {
    fn sample(&mut self, bound: usize, count: usize) -> Vec<usize> {
        let mut indices = rand::seq::index::sample(&mut self.rng, bound, count).into_vec();
        indices.sort_unstable();
        indices
    }
}

/// A non-singular minor found by the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minor<F> {
    /// Selected row indices, ascending.
    pub rows: Vec<usize>,
    /// Selected column indices, ascending.
    pub cols: Vec<usize>,
    /// The (non-zero) determinant of the minor.
    pub determinant: F,
    /// The extracted submatrix.
    pub matrix: Matrix<F>,
}

/// Iterator over non-singular minors of a borrowed matrix.
pub struct MinorSearch<'a, F, S = RandomSampler> {
    source: &'a Matrix<F>,
    minor_size: usize,
    max_attempts: Option<u64>,
    attempts: u64,
    sampler: S,
}

impl<'a, F: Ring> MinorSearch<'a, F, RandomSampler> {
    /// Creates a search driven by a [`RandomSampler`] seeded from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::MinorTooLarge`] if the minor size exceeds either
    /// dimension of `source`.
    pub fn new(source: &'a Matrix<F>, config: &MinorSearchConfig) -> Result<Self, MatrixError> {
        Self::with_sampler(source, config, RandomSampler::new(config.seed))
    }
}

impl<'a, F: Ring, S: IndexSampler> MinorSearch<'a, F, S> {
    /// Creates a search driven by an arbitrary sampler. The seed in `config`
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::MinorTooLarge`] if the minor size exceeds either
    /// dimension of `source`.
    pub fn with_sampler(
        source: &'a Matrix<F>,
        config: &MinorSearchConfig,
        sampler: S,
    ) -> Result<Self, MatrixError> {
        let bound = source.num_rows().min(source.num_cols());
        if config.minor_size > bound {
            return Err(MatrixError::MinorTooLarge {
                size: config.minor_size,
                bound,
            });
        }
        Ok(Self {
            source,
            minor_size: config.minor_size,
            max_attempts: config.max_attempts,
            attempts: 0,
            sampler,
        })
    }

    /// Number of minors evaluated so far.
    #[must_use]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    fn exhausted(&self) -> bool {
        self.max_attempts.is_some_and(|max| self.attempts >= max)
    }

    fn attempt(&mut self) -> Result<Option<Minor<F>>, MatrixError> {
        let rows = self.sampler.sample(self.source.num_rows(), self.minor_size);
        let cols = self.sampler.sample(self.source.num_cols(), self.minor_size);
        let matrix = self.source.submatrix(&rows, &cols)?;
        let determinant = matrix.lazy_determinant()?;
        if determinant.is_zero() {
            return Ok(None);
        }
        Ok(Some(Minor {
            rows,
            cols,
            determinant,
            matrix,
        }))
    }
}

impl<F: Ring, S: IndexSampler> Iterator for MinorSearch<'_, F, S> {
    type Item = Result<Minor<F>, MatrixError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted() {
            self.attempts += 1;
            if self.attempts % PROGRESS_INTERVAL == 0 {
                debug!(attempts = self.attempts, "minor search in progress");
            }
            match self.attempt() {
                Ok(None) => {}
                Ok(Some(minor)) => {
                    info!(
                        attempts = self.attempts,
                        rows = ?minor.rows,
                        cols = ?minor.cols,
                        "found non-singular minor"
                    );
                    return Some(Ok(minor));
                }
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}
