/*
    Arithmetic
*/

use tracing::warn;

use super::*;

// Binary operations
impl<T: Int> Fraction<T> {
    /// Adds `other` to this `Fraction`, storing the sum in `self`.
    ///
    /// Fractions over the same denominator add their numerators.
    /// Otherwise the sum is taken over the product of the denominators,
    /// without searching for a smaller common one. `other` is left
    /// sign-normalized but otherwise untouched.
    pub fn add(&mut self, other: &mut Self) {
        self.check_negatives();
        other.check_negatives();

        if self.denominator == other.denominator {
            self.numerator = self.numerator.wrapping_add(&other.numerator);
        } else {
            let numerator = self
                .numerator
                .wrapping_mul(&other.denominator)
                .wrapping_add(&other.numerator.wrapping_mul(&self.denominator));
            self.numerator = numerator;
            self.denominator = self.denominator.wrapping_mul(&other.denominator);
        }
    }

    /// Subtracts `other` from this `Fraction`, storing the difference in `self`.
    ///
    /// This negates `other` and then adds it, so `other` is left negated.
    pub fn subtract(&mut self, other: &mut Self) {
        other.negate();
        self.add(other);
    }

    /// Multiplies this `Fraction` by `other`, storing the product in `self`.
    /// `other` is left sign-normalized but otherwise untouched.
    pub fn multiply(&mut self, other: &mut Self) {
        self.check_negatives();
        other.check_negatives();

        self.numerator = self.numerator.wrapping_mul(&other.numerator);
        self.denominator = self.denominator.wrapping_mul(&other.denominator);
    }

    /// Divides this `Fraction` by `other`, storing the quotient in `self`.
    ///
    /// This inverts `other` and then multiplies by it, so `other` is left
    /// inverted.
    pub fn divide(&mut self, other: &mut Self) {
        other.invert();
        self.multiply(other);
    }
}

// Unary operations
impl<T: Int> Fraction<T> {
    /// Swaps the numerator and denominator of this `Fraction`.
    ///
    /// Inverting a zero fraction leaves a zero denominator; no error is
    /// raised and later operations carry the degenerate value along.
    pub fn invert(&mut self) {
        self.check_negatives();
        std::mem::swap(&mut self.numerator, &mut self.denominator);

        if self.denominator.is_zero() {
            warn!(numerator = %self.numerator, "inverted a zero fraction");
        }
    }

    /// Negates this `Fraction` through its numerator.
    pub fn negate(&mut self) {
        self.check_negatives();
        self.numerator = self.numerator.wrapping_neg();
    }
}
