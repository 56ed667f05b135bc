//! Somos-k sequences.
//!
//! A Somos-k sequence satisfies the bilinear recurrence
//!
//! ```text
//! s[n] · s[n-k] = Σ_{j=1}^{k/2} c[j-1] · s[n-j] · s[n-k+j]
//! ```
//!
//! The recurrence is symmetric under `n ↦ k - 1 - n`, so negative indices are
//! produced by running the same step over the reversed seed.

use somos_rings::Field;
use tracing::debug;

use crate::cache::{Slot, TermCache};
use crate::error::SequenceError;
use crate::sequence::Sequence;

/// Checks the shape shared by every Somos-k style constructor.
pub(crate) fn validate_shape<F>(
    k: usize,
    coefs: &[F],
    initial: &[F],
) -> Result<(), SequenceError> {
    if k == 0 {
        return Err(SequenceError::ZeroOrder);
    }
    if initial.len() != k {
        return Err(SequenceError::InitialValueCount {
            expected: k,
            found: initial.len(),
        });
    }
    if coefs.len() != k / 2 {
        return Err(SequenceError::CoefficientCount {
            expected: k / 2,
            found: coefs.len(),
        });
    }
    Ok(())
}

/// A memoized Somos-k sequence over a field.
///
/// # Example
///
/// ```
/// use somos_integers::Rational;
/// use somos_sequences::{Sequence, SomosSequence};
///
/// let one = Rational::from(1);
/// let mut s4 = SomosSequence::new(4, vec![one.clone(); 2], vec![one; 4]).unwrap();
/// assert_eq!(s4.term(7).unwrap(), Rational::from(23));
/// ```
#[derive(Clone, Debug)]
pub struct SomosSequence<F> {
    k: usize,
    coefs: Vec<F>,
    cache: TermCache<F>,
}

impl<F: Field> SomosSequence<F> {
    /// Creates a Somos-k sequence from `k / 2` coefficients and the `k`
    /// initial values `s[0..k)`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InitialValueCount`] or
    /// [`SequenceError::CoefficientCount`] if the lengths do not fit `k`, and
    /// [`SequenceError::ZeroOrder`] for `k = 0`.
    pub fn new(k: usize, coefs: Vec<F>, initial: Vec<F>) -> Result<Self, SequenceError> {
        validate_shape(k, &coefs, &initial)?;
        Ok(Self {
            k,
            coefs,
            cache: TermCache::seeded(initial),
        })
    }

    /// Returns the order `k`.
    #[must_use]
    pub fn order(&self) -> usize {
        self.k
    }

    /// Returns the recurrence coefficients.
    #[must_use]
    pub fn coefs(&self) -> &[F] {
        &self.coefs
    }

    /// Number of memoized terms, forward and backward (seed included).
    #[must_use]
    pub fn cached_len(&self) -> (usize, usize) {
        (self.cache.forward.len(), self.cache.backward.len())
    }

    /// One recurrence step past the end of `history`.
    fn step(&self, history: &[F]) -> Result<F, SequenceError> {
        let i = history.len();
        let mut sum = F::zero();
        for (j, coef) in (1..=self.k / 2).zip(&self.coefs) {
            sum = sum + coef.clone() * history[i - j].clone() * history[i - self.k + j].clone();
        }
        Ok(sum.checked_div(&history[i - self.k])?)
    }

    fn extend_to(&mut self, slot: Slot) -> Result<(), SequenceError> {
        match slot {
            Slot::Forward(target) => {
                if target >= self.cache.forward.len() {
                    debug!(from = self.cache.forward.len(), to = target, "extending forward cache");
                }
                while self.cache.forward.len() <= target {
                    let next = self.step(&self.cache.forward)?;
                    if next.is_zero() {
                        let index = i64::try_from(self.cache.forward.len()).unwrap_or(i64::MAX);
                        return Err(SequenceError::ZeroTerm { index });
                    }
                    self.cache.forward.push(next);
                }
            }
            Slot::Backward(target) => {
                if target >= self.cache.backward.len() {
                    debug!(from = self.cache.backward.len(), to = target, "extending backward cache");
                }
                while self.cache.backward.len() <= target {
                    let next = self.step(&self.cache.backward)?;
                    if next.is_zero() {
                        let index = self.cache.backward_index(self.cache.backward.len());
                        return Err(SequenceError::ZeroTerm { index });
                    }
                    self.cache.backward.push(next);
                }
            }
        }
        Ok(())
    }
}

impl<F: Field> Sequence<F> for SomosSequence<F> {
    fn term(&mut self, index: i64) -> Result<F, SequenceError> {
        let slot = self.cache.slot(index)?;
        if let Some(value) = self.cache.get(slot) {
            return Ok(value.clone());
        }
        self.extend_to(slot)?;
        self.cache
            .get(slot)
            .cloned()
            .ok_or(SequenceError::IndexOverflow { index })
    }
}
