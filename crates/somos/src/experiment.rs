//! The reference experiment: Somos-4 and its dual over the rationals.

use somos_integers::Rational;
use somos_sequences::{DualSomosSequence, SequenceError, SomosSequence};

/// Side length of the matrix the minor search runs on.
pub const MATRIX_SIZE: usize = 11;

/// Range of indices printed before an experiment starts.
pub const PREVIEW: std::ops::RangeInclusive<i64> = -10..=20;

fn rationals(values: &[i64]) -> Vec<Rational> {
    values.iter().copied().map(Rational::from).collect()
}

/// Builds Somos-4 with unit coefficients and unit seed:
/// 1, 1, 1, 1, 2, 3, 7, 23, ...
///
/// # Errors
///
/// Propagates the shape check of [`SomosSequence::new`].
pub fn somos4() -> Result<SomosSequence<Rational>, SequenceError> {
    SomosSequence::new(4, rationals(&[1, 1]), rationals(&[1, 1, 1, 1]))
}

/// Builds the dual of [`somos4`] seeded with `[1, 0, 0, 0]`.
///
/// # Errors
///
/// Propagates the shape checks of both constructors.
pub fn dual_somos4() -> Result<DualSomosSequence<Rational>, SequenceError> {
    DualSomosSequence::new(4, somos4()?, rationals(&[1, 1]), rationals(&[1, 0, 0, 0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use somos_sequences::Sequence;

    #[test]
    fn test_reference_sequences() {
        let mut s = somos4().unwrap();
        assert_eq!(s.term(9), Ok(Rational::from(314)));
        let mut d = dual_somos4().unwrap();
        assert_eq!(d.term(0), Ok(Rational::from(1)));
        assert_eq!(d.term(4), Ok(Rational::from(-2)));
        assert_eq!(d.term(-1), Ok(Rational::from(1)));
    }

    #[test]
    fn test_reference_dual_backward_terms() {
        let mut d = dual_somos4().unwrap();
        let expected: Vec<Rational> = [472, 108, 22, 10, 3, 1].map(Rational::from).to_vec();
        assert_eq!(d.terms(-6..0), Ok(expected));
        assert_eq!(d.term(-4), Ok(Rational::from(22)));
    }

    #[test]
    fn test_preview_covers_both_directions() {
        let mut d = dual_somos4().unwrap();
        let preview: Vec<Rational> = d.terms(*PREVIEW.start()..*PREVIEW.end() + 1).unwrap();
        assert_eq!(preview.len(), 31);
    }
}
