//! Index-weighted sequences.

use somos_rings::Ring;

use crate::error::SequenceError;
use crate::sequence::Sequence;

/// The sequence `n ↦ n · base[n]`.
#[derive(Clone, Debug)]
pub struct IndexScaledSequence<S> {
    base: S,
}

impl<S> IndexScaledSequence<S> {
    /// Wraps `base`.
    #[must_use]
    pub fn new(base: S) -> Self {
        Self { base }
    }

    /// Returns the wrapped sequence.
    pub fn into_inner(self) -> S {
        self.base
    }
}

impl<S, F> Sequence<F> for IndexScaledSequence<S>
where
    S: Sequence<F>,
    F: Ring + From<i64>,
{
    fn term(&mut self, index: i64) -> Result<F, SequenceError> {
        Ok(F::from(index) * self.base.term(index)?)
    }
}
