/*
    Operations over possibly absent fractions
*/

//! Free-function forms of the [`Fraction`] operations.
//!
//! Every operand is optional. When any operand is `None` the call does
//! nothing: present operands are left exactly as they were and no error
//! is reported. Callers can therefore pass through whatever they hold
//! without guarding first.

use crate::{ConstructionError, Fraction, Int};

/// Creates the fraction `numerator / denominator`.
/// See [`Fraction::init`].
pub fn init<T: Int>(numerator: T, denominator: T) -> Result<Fraction<T>, ConstructionError> {
    Fraction::init(numerator, denominator)
}

/// Disposes of a fraction. Disposing of `None` does nothing.
pub fn free<T: Int>(frac: Option<Fraction<T>>) {
    if let Some(frac) = frac {
        frac.free();
    }
}

/// Adds `b` into `a`. See [`Fraction::add`].
pub fn add<T: Int>(a: Option<&mut Fraction<T>>, b: Option<&mut Fraction<T>>) {
    if let (Some(a), Some(b)) = (a, b) {
        a.add(b);
    }
}

/// Subtracts `b` from `a`, leaving `b` negated. See [`Fraction::subtract`].
pub fn subtract<T: Int>(a: Option<&mut Fraction<T>>, b: Option<&mut Fraction<T>>) {
    if let (Some(a), Some(b)) = (a, b) {
        a.subtract(b);
    }
}

/// Multiplies `a` by `b`. See [`Fraction::multiply`].
pub fn multiply<T: Int>(a: Option<&mut Fraction<T>>, b: Option<&mut Fraction<T>>) {
    if let (Some(a), Some(b)) = (a, b) {
        a.multiply(b);
    }
}

/// Divides `a` by `b`, leaving `b` inverted. See [`Fraction::divide`].
pub fn divide<T: Int>(a: Option<&mut Fraction<T>>, b: Option<&mut Fraction<T>>) {
    if let (Some(a), Some(b)) = (a, b) {
        a.divide(b);
    }
}

/// See [`Fraction::invert`].
pub fn invert<T: Int>(frac: Option<&mut Fraction<T>>) {
    if let Some(frac) = frac {
        frac.invert();
    }
}

/// See [`Fraction::negate`].
pub fn negate<T: Int>(frac: Option<&mut Fraction<T>>) {
    if let Some(frac) = frac {
        frac.negate();
    }
}

/// See [`Fraction::reduce`].
pub fn reduce<T: Int>(frac: Option<&mut Fraction<T>>) {
    if let Some(frac) = frac {
        frac.reduce();
    }
}

/// See [`Fraction::check_negatives`].
pub fn check_negatives<T: Int>(frac: Option<&mut Fraction<T>>) {
    if let Some(frac) = frac {
        frac.check_negatives();
    }
}
