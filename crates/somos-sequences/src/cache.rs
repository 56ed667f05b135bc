//! Two-directional memo shared by the recurrence variants.
//!
//! A Somos-k recurrence seeded with `s[0..k)` is evaluated in two directions.
//! The forward cache holds `s[0], s[1], ...`. The backward cache holds the
//! seed reversed, `s[k-1], ..., s[0]`, and then grows into the negative
//! indices, so backward slot `t` is sequence index `k - 1 - t`.

use crate::error::SequenceError;

/// Where a sequence index lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Forward(usize),
    Backward(usize),
}

/// Append-only forward and backward term caches.
#[derive(Clone, Debug)]
pub(crate) struct TermCache<F> {
    order: usize,
    pub(crate) forward: Vec<F>,
    pub(crate) backward: Vec<F>,
}

impl<F: Clone> TermCache<F> {
    /// Seeds both caches from `initial`, which must hold exactly `order`
    /// values.
    pub(crate) fn seeded(initial: Vec<F>) -> Self {
        let backward = initial.iter().rev().cloned().collect();
        Self {
            order: initial.len(),
            forward: initial,
            backward,
        }
    }

    pub(crate) fn slot(&self, index: i64) -> Result<Slot, SequenceError> {
        if index >= 0 {
            let slot = usize::try_from(index).map_err(|_| SequenceError::IndexOverflow { index })?;
            return Ok(Slot::Forward(slot));
        }
        usize::try_from(index.unsigned_abs())
            .ok()
            .and_then(|magnitude| magnitude.checked_add(self.order - 1))
            .map(Slot::Backward)
            .ok_or(SequenceError::IndexOverflow { index })
    }

    /// Maps a backward slot back to its (signed) sequence index.
    pub(crate) fn backward_index(&self, slot: usize) -> i64 {
        // Slots past i64::MAX are unreachable: they came from an i64 index.
        let order = i64::try_from(self.order).unwrap_or(i64::MAX);
        let slot = i64::try_from(slot).unwrap_or(i64::MAX);
        order - 1 - slot
    }

    /// Returns the cached term for `slot`, if already computed.
    pub(crate) fn get(&self, slot: Slot) -> Option<&F> {
        match slot {
            Slot::Forward(t) => self.forward.get(t),
            Slot::Backward(t) => self.backward.get(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeding_reverses_backward() {
        let cache = TermCache::seeded(vec![10, 11, 12, 13]);
        assert_eq!(cache.forward, vec![10, 11, 12, 13]);
        assert_eq!(cache.backward, vec![13, 12, 11, 10]);
    }

    #[test]
    fn test_slot_mapping() {
        let cache = TermCache::seeded(vec![0; 4]);
        assert_eq!(cache.slot(0), Ok(Slot::Forward(0)));
        assert_eq!(cache.slot(7), Ok(Slot::Forward(7)));
        // s[-1] sits right after the reversed seed.
        assert_eq!(cache.slot(-1), Ok(Slot::Backward(4)));
        assert_eq!(cache.slot(-3), Ok(Slot::Backward(6)));
        assert_eq!(cache.backward_index(4), -1);
        assert_eq!(cache.backward_index(0), 3);
    }

    #[test]
    fn test_cached_lookup() {
        let cache = TermCache::seeded(vec![1, 2, 3]);
        assert_eq!(cache.get(Slot::Forward(2)), Some(&3));
        assert_eq!(cache.get(Slot::Backward(2)), Some(&1));
        assert_eq!(cache.get(Slot::Forward(3)), None);
    }
}
