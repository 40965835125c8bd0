/*!
# Utilities

Small helpers shared by the generators:
- [`Probability`] validates probabilities of any numeric type,
- [`GeometricJumper`](self::geometric::GeometricJumper) enumerates the successes of a sequence of
  independent Bernoulli trials without simulating every single trial.
*/

use num::{One, Zero};

pub mod geometric;

pub use geometric::*;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities() {
        for p in [0.0, 0.25, 1.0] {
            assert!(p.is_valid_probility());
        }
        for p in [-0.1, 1.01, f64::NAN] {
            assert!(!p.is_valid_probility());
        }
    }
}
