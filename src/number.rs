/*
    Defines the integer storage of a fraction
*/

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingNeg};

/// The integer type stored by a [`Fraction`](crate::Fraction).
///
/// Any primitive signed integer qualifies. The width is fixed: sums and
/// products wrap around in two's complement instead of growing, and
/// negating `MIN` yields `MIN`.
pub trait Int:
    PrimInt + Signed + WrappingAdd + WrappingMul + WrappingNeg + Hash + Debug + Display
{
}

impl<T> Int for T where
    T: PrimInt + Signed + WrappingAdd + WrappingMul + WrappingNeg + Hash + Debug + Display
{
}
