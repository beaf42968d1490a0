/*
    Conversions to and from `Fraction<T>`
*/

use std::fmt;

use super::*;

// Implementing `Display` for `Fraction`
impl<T: Int> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// Implementing `TryFrom<(T, T)>` for `Fraction`
impl<T: Int> TryFrom<(T, T)> for Fraction<T> {
    type Error = ConstructionError;

    fn try_from((numerator, denominator): (T, T)) -> Result<Self, Self::Error> {
        Self::init(numerator, denominator)
    }
}

// Implementing `From<Fraction>` for `(T, T)`
impl<T: Int> From<Fraction<T>> for (T, T) {
    fn from(frac: Fraction<T>) -> Self {
        (frac.numerator, frac.denominator)
    }
}
