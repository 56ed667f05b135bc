//! Arithmetic-progression views of another sequence.

use crate::error::SequenceError;
use crate::sequence::Sequence;

/// The view `n ↦ base[stride · n + offset]`. Holds no cache of its own; pass
/// `&mut base` to keep the base sequence usable afterwards.
#[derive(Clone, Debug)]
pub struct ShiftedSomosSequence<S> {
    base: S,
    stride: i64,
    offset: i64,
}

impl<S> ShiftedSomosSequence<S> {
    /// Creates the view `base[stride · n + offset]`.
    #[must_use]
    pub fn new(base: S, stride: i64, offset: i64) -> Self {
        Self {
            base,
            stride,
            offset,
        }
    }

    /// Returns the wrapped sequence.
    pub fn into_inner(self) -> S {
        self.base
    }
}

impl<S: Sequence<F>, F> Sequence<F> for ShiftedSomosSequence<S> {
    fn term(&mut self, index: i64) -> Result<F, SequenceError> {
        let shifted = self
            .stride
            .checked_mul(index)
            .and_then(|n| n.checked_add(self.offset))
            .ok_or(SequenceError::IndexOverflow { index })?;
        self.base.term(shifted)
    }
}
