/*
    Constructors, getters, and sign normalization
*/

use tracing::debug;

use super::*;

// Constructors and getters
impl<T: Int> Fraction<T> {
    /// Creates the fraction `numerator / denominator`.
    ///
    /// Fails when `denominator` is zero. Otherwise the sign of a negative
    /// denominator is moved onto the numerator, so `init(4, -16)` is `-4/16`.
    /// The pair is not reduced.
    pub fn init(numerator: T, denominator: T) -> Result<Self, ConstructionError> {
        if denominator.is_zero() {
            debug!(%numerator, "rejected fraction with a zero denominator");
            return Err(ConstructionError::ZeroDenominator);
        }

        let mut frac = Self {
            numerator,
            denominator,
        };
        frac.check_negatives();
        Ok(frac)
    }

    /// Disposes of this `Fraction`.
    ///
    /// Dropping the value does the same; this exists for callers that
    /// pair every `init` with an explicit release.
    pub fn free(self) {}

    /// Returns the numerator of this `Fraction` as stored.
    pub fn numerator(&self) -> T {
        self.numerator
    }

    /// Returns the denominator of this `Fraction` as stored.
    pub fn denominator(&self) -> T {
        self.denominator
    }
}

// Sign normalization
impl<T: Int> Fraction<T> {
    /// Negates both parts when the denominator is negative, leaving the
    /// sign of the fraction, if any, on the numerator.
    ///
    /// Every other operation calls this before reading a fraction.
    /// Applying it twice is the same as applying it once.
    pub fn check_negatives(&mut self) {
        if self.denominator < T::zero() {
            self.numerator = self.numerator.wrapping_neg();
            self.denominator = self.denominator.wrapping_neg();
        }
    }
}
