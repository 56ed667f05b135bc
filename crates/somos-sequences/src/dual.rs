//! Dual Somos sequences.
//!
//! A dual sequence `f` runs a linearized Somos recurrence whose coefficients
//! come from a companion Somos sequence `c`:
//!
//! ```text
//! f[i] = (Σ_j c_j · (c[i-k+j]·f[i-j] + c[i-j]·f[i-k+j]) − c[i]·f[i-k]) / c[i-k]
//! ```
//!
//! Going backwards the companion is read around `n0 = anchor − i`. The
//! anchor is tied to the experiment the construction comes from (`3` for
//! Somos-4 with the backward cache seeded from `s[0..4)`), so it is a
//! parameter rather than something derived from `k`.
//!
//! Zero terms are expected here and are only logged: the recurrence divides
//! by companion terms, never by its own.

use somos_rings::Field;
use tracing::{debug, warn};

use crate::cache::{Slot, TermCache};
use crate::error::SequenceError;
use crate::sequence::Sequence;
use crate::somos::{validate_shape, SomosSequence};

/// Backward anchor of the Somos-4 experiment.
pub const DEFAULT_BACKWARD_ANCHOR: i64 = 3;

/// A memoized dual Somos sequence owning its companion.
#[derive(Clone, Debug)]
pub struct DualSomosSequence<F> {
    k: usize,
    companion: SomosSequence<F>,
    coefs: Vec<F>,
    backward_anchor: i64,
    cache: TermCache<F>,
}

impl<F: Field> DualSomosSequence<F> {
    /// Creates a dual sequence over `companion` from `k / 2` coefficients and
    /// `k` initial values.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InitialValueCount`] or
    /// [`SequenceError::CoefficientCount`] if the lengths do not fit `k`, and
    /// [`SequenceError::ZeroOrder`] for `k = 0`.
    pub fn new(
        k: usize,
        companion: SomosSequence<F>,
        coefs: Vec<F>,
        initial: Vec<F>,
    ) -> Result<Self, SequenceError> {
        validate_shape(k, &coefs, &initial)?;
        Ok(Self {
            k,
            companion,
            coefs,
            backward_anchor: DEFAULT_BACKWARD_ANCHOR,
            cache: TermCache::seeded(initial),
        })
    }

    /// Replaces the backward anchor. Terms already cached keep the values
    /// computed with the old anchor, so set this before the first lookup.
    #[must_use]
    pub fn with_backward_anchor(mut self, anchor: i64) -> Self {
        self.backward_anchor = anchor;
        self
    }

    /// Returns the backward anchor.
    #[must_use]
    pub fn backward_anchor(&self) -> i64 {
        self.backward_anchor
    }

    /// Returns the companion sequence.
    pub fn companion(&mut self) -> &mut SomosSequence<F> {
        &mut self.companion
    }

    fn forward_step(&mut self) -> Result<F, SequenceError> {
        let k = self.k;
        let i = self.cache.forward.len();
        let at = |offset: usize| signed(i - offset);
        let mut sum = F::zero();
        for (j, coef) in (1..=k / 2).zip(&self.coefs) {
            let cross = self.companion.term(at(k - j))? * self.cache.forward[i - j].clone()
                + self.companion.term(at(j))? * self.cache.forward[i - k + j].clone();
            sum = sum + coef.clone() * cross;
        }
        sum = sum - self.companion.term(signed(i))? * self.cache.forward[i - k].clone();
        Ok(sum.checked_div(&self.companion.term(at(k))?)?)
    }

    fn backward_step(&mut self) -> Result<F, SequenceError> {
        let k = self.k;
        let i = self.cache.backward.len();
        let n0 = self.backward_anchor - signed(i);
        let mut sum = F::zero();
        for (j, coef) in (1..=k / 2).zip(&self.coefs) {
            let cross = self.companion.term(n0 + signed(j))? * self.cache.backward[i - k + j].clone()
                + self.companion.term(n0 + signed(k - j))? * self.cache.backward[i - j].clone();
            sum = sum + coef.clone() * cross;
        }
        sum = sum - self.companion.term(n0)? * self.cache.backward[i - k].clone();
        Ok(sum.checked_div(&self.companion.term(n0 + signed(k))?)?)
    }

    fn extend_to(&mut self, slot: Slot) -> Result<(), SequenceError> {
        match slot {
            Slot::Forward(target) => {
                if target >= self.cache.forward.len() {
                    debug!(from = self.cache.forward.len(), to = target, "extending dual forward cache");
                }
                while self.cache.forward.len() <= target {
                    let next = self.forward_step()?;
                    if next.is_zero() {
                        warn!(index = self.cache.forward.len(), "dual sequence produced a zero term");
                    }
                    self.cache.forward.push(next);
                }
            }
            Slot::Backward(target) => {
                if target >= self.cache.backward.len() {
                    debug!(from = self.cache.backward.len(), to = target, "extending dual backward cache");
                }
                while self.cache.backward.len() <= target {
                    let next = self.backward_step()?;
                    if next.is_zero() {
                        let index = self.cache.backward_index(self.cache.backward.len());
                        warn!(index, "dual sequence produced a zero term");
                    }
                    self.cache.backward.push(next);
                }
            }
        }
        Ok(())
    }
}

/// Cache positions are bounded by an `i64` index, so this never saturates in
/// practice.
fn signed(position: usize) -> i64 {
    i64::try_from(position).unwrap_or(i64::MAX)
}

impl<F: Field> Sequence<F> for DualSomosSequence<F> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use somos_integers::Rational;

    fn q(v: i64) -> Rational {
        Rational::from(v)
    }

    fn somos4() -> SomosSequence<Rational> {
        SomosSequence::new(4, vec![q(1), q(1)], vec![q(1); 4]).unwrap()
    }

    fn dual(initial: [i64; 4]) -> DualSomosSequence<Rational> {
        DualSomosSequence::new(4, somos4(), vec![q(1), q(1)], initial.map(q).to_vec()).unwrap()
    }

    #[test]
    fn test_forward_step_matches_formula() {
        let mut d = dual([1, 0, 0, 0]);
        let mut c = somos4();
        let f: Vec<Rational> = d.terms(0..4).unwrap();
        // i = 4, k = 4
        let expected = (c.term(1).unwrap() * f[3].clone() + c.term(3).unwrap() * f[1].clone()
            + c.term(2).unwrap() * f[2].clone()
            + c.term(2).unwrap() * f[2].clone()
            - c.term(4).unwrap() * f[0].clone())
            / c.term(0).unwrap();
        assert_eq!(d.term(4).unwrap(), expected);
        assert_eq!(d.term(4).unwrap(), q(-2));
    }

    #[test]
    fn test_experiment_forward_terms() {
        // i = 5, k = 4
        let mut d = dual([1, 0, 0, 0]);
        let mut c = somos4();
        let f = d.terms(0..6).unwrap();
        let by_hand = (c.term(2).unwrap() * f[4].clone()
            + c.term(4).unwrap() * f[2].clone()
            + c.term(3).unwrap() * f[3].clone()
            + c.term(3).unwrap() * f[3].clone()
            - c.term(5).unwrap() * f[1].clone())
            / c.term(1).unwrap();
        assert_eq!(f[5], by_hand);
    }

    #[test]
    fn test_backward_step_matches_formula() {
        let mut d = dual([1, 0, 0, 0]);
        let mut c = somos4();
        // Backward slot 4 is index -1, n0 = 3 - 4 = -1. The backward seed is
        // [f3, f2, f1, f0] = [0, 0, 0, 1].
        let b = [q(0), q(0), q(0), q(1)];
        let n0 = -1;
        let expected = (c.term(n0 + 1).unwrap() * b[1].clone()
            + c.term(n0 + 3).unwrap() * b[3].clone()
            + c.term(n0 + 2).unwrap() * b[2].clone()
            + c.term(n0 + 2).unwrap() * b[2].clone()
            - c.term(n0).unwrap() * b[0].clone())
            / c.term(n0 + 4).unwrap();
        assert_eq!(d.term(-1).unwrap(), expected);
    }

    #[test]
    fn test_zero_terms_are_tolerated() {
        // A zero seed keeps the whole dual sequence at zero.
        let mut d = dual([0, 0, 0, 0]);
        let terms = d.terms(-5..10).unwrap();
        assert!(terms.iter().all(|t| *t == q(0)));
    }

    #[test]
    fn test_companion_seed_reproduces_companion() {
        // Seeded with the companion's own seed, the dual sequence reproduces
        // the companion in both directions.
        let mut d = DualSomosSequence::new(4, somos4(), vec![q(1), q(1)], vec![q(1); 4]).unwrap();
        let mut c = somos4();
        for i in -6..10 {
            assert_eq!(d.term(i).unwrap(), c.term(i).unwrap(), "i = {i}");
        }
    }

    #[test]
    fn test_backward_anchor_is_configurable() {
        let mut d = dual([1, 0, 0, 0]);
        assert_eq!(d.backward_anchor(), DEFAULT_BACKWARD_ANCHOR);
        let mut shifted = dual([1, 0, 0, 0]).with_backward_anchor(5);
        assert_eq!(shifted.backward_anchor(), 5);
        // Forward terms do not depend on the anchor.
        assert_eq!(shifted.terms(0..8).unwrap(), d.terms(0..8).unwrap());
    }

    #[test]
    fn test_invalid_shapes() {
        assert_eq!(
            DualSomosSequence::new(4, somos4(), vec![q(1), q(1)], vec![q(1); 2]).err(),
            Some(SequenceError::InitialValueCount {
                expected: 4,
                found: 2
            })
        );
        assert_eq!(
            DualSomosSequence::new(4, somos4(), vec![q(1); 3], vec![q(1); 4]).err(),
            Some(SequenceError::CoefficientCount {
                expected: 2,
                found: 3
            })
        );
    }
}
