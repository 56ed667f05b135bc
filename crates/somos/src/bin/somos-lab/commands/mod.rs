pub mod minors;
pub mod rank;
pub mod terms;

use somos::integers::Rational;
use somos::sequences::{Sequence, SequenceError};

/// The reference sequence selected on the command line.
pub fn sequence(dual: bool) -> Result<Box<dyn Sequence<Rational>>, SequenceError> {
    let seq: Box<dyn Sequence<Rational>> = if dual {
        Box::new(somos::experiment::dual_somos4()?)
    } else {
        Box::new(somos::experiment::somos4()?)
    };
    Ok(seq)
}
