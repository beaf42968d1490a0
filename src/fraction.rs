/*
    Fractions over fixed-width integers
*/

mod arithmetic;
mod convert;
mod number;
mod reduce;

use thiserror::Error;

use crate::Int;

/** A fraction `numerator / denominator` of two fixed-width integers.
 *
 * A `Fraction` is a plain mutable value. Operations write their result
 * into the receiver in place and never reduce it; call
 * [`Fraction::reduce`] for lowest terms.
 *
 * The denominator is non-zero when the fraction is created. Its sign is
 * corrected lazily: every operation first moves a negative denominator's
 * sign onto the numerator (see [`Fraction::check_negatives`]) before
 * reading the fraction, so a fraction observed right after any operation
 * has a positive denominator.
 *
 * Arithmetic is unchecked. Results wrap at the width of `T`, and inverting
 * a zero fraction leaves a zero denominator behind.
 *
 */
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction<T: Int = i32> {
    numerator: T,
    denominator: T,
}

/// The ways constructing a [`Fraction`] can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// The requested denominator was zero.
    #[error("denominator cannot be zero")]
    ZeroDenominator,
}
