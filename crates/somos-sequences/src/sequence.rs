//! The capability shared by every sequence variant.

use std::ops::Range;

use crate::error::SequenceError;

/// A producer of terms at arbitrary signed indices.
///
/// Evaluation takes `&mut self` because memoizing variants extend their
/// caches on demand.
pub trait Sequence<F> {
    /// Returns the term at `index`.
    ///
    /// # Errors
    ///
    /// Returns whatever the variant's recurrence raises: zero terms, failed
    /// divisions or index overflow.
    fn term(&mut self, index: i64) -> Result<F, SequenceError>;

    /// Collects the terms for every index in `range`, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing term.
    fn terms(&mut self, range: Range<i64>) -> Result<Vec<F>, SequenceError> {
        range.map(|index| self.term(index)).collect()
    }
}

impl<F, S: Sequence<F> + ?Sized> Sequence<F> for &mut S {
    fn term(&mut self, index: i64) -> Result<F, SequenceError> {
        (**self).term(index)
    }
}
