/*
    C interface
*/

//! Unmangled C entry points over `Fraction<i32>`, for programs that load
//! this library dynamically.
//!
//! Fractions live on the heap and are handed out as raw pointers. A null
//! pointer is accepted everywhere and makes the call a no-op.
//!
//! # Safety
//! Every non-null pointer passed in must come from [`fraction_init`] and
//! must not have been passed to [`fraction_free`] yet.

use std::os::raw::c_int;
use std::ptr;

use crate::{ops, Fraction};

/// Allocates the fraction `numerator / denominator`.
/// Returns null when `denominator` is zero.
#[no_mangle]
pub extern "C" fn fraction_init(numerator: c_int, denominator: c_int) -> *mut Fraction {
    match Fraction::init(numerator, denominator) {
        Ok(frac) => Box::into_raw(Box::new(frac)),
        Err(_) => ptr::null_mut(),
    }
}

/// Releases a fraction allocated by [`fraction_init`].
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn fraction_free(frac: *mut Fraction) {
    if !frac.is_null() {
        ops::free(Some(*Box::from_raw(frac)));
    }
}

// Runs a binary operation given as its two steps: `prepare` on the
// second operand, then `combine` into the first. When both pointers name
// the same fraction the prepared value is also the accumulator, and
// `combine` reads a copy of it as its second operand.
unsafe fn binary(
    a: *mut Fraction,
    b: *mut Fraction,
    prepare: fn(&mut Fraction),
    combine: fn(&mut Fraction, &mut Fraction),
) {
    if ptr::eq(a, b) {
        if let Some(frac) = a.as_mut() {
            prepare(frac);
            frac.check_negatives();
            let mut other = *frac;
            combine(frac, &mut other);
        }
    } else if let (Some(a), Some(b)) = (a.as_mut(), b.as_mut()) {
        prepare(b);
        combine(a, b);
    }
}

/// Adds `b` into `a`.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn fraction_add(a: *mut Fraction, b: *mut Fraction) {
    binary(a, b, |_| {}, Fraction::add);
}

/// Subtracts `b` from `a`, leaving `b` negated.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn fraction_subtract(a: *mut Fraction, b: *mut Fraction) {
    binary(a, b, Fraction::negate, Fraction::add);
}

/// Multiplies `a` by `b`.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn fraction_multiply(a: *mut Fraction, b: *mut Fraction) {
    binary(a, b, |_| {}, Fraction::multiply);
}

/// Divides `a` by `b`, leaving `b` inverted.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn fraction_divide(a: *mut Fraction, b: *mut Fraction) {
    binary(a, b, Fraction::invert, Fraction::multiply);
}

/// Swaps the numerator and denominator of `frac`.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn fraction_invert(frac: *mut Fraction) {
    ops::invert(frac.as_mut());
}

/// Negates `frac` through its numerator.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn fraction_negate(frac: *mut Fraction) {
    ops::negate(frac.as_mut());
}

/// Reduces `frac` to lowest terms.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn fraction_reduce(frac: *mut Fraction) {
    ops::reduce(frac.as_mut());
}

/// Moves the sign of a negative denominator onto the numerator of `frac`.
///
/// # Safety
/// See the module documentation.
#[no_mangle]
pub unsafe extern "C" fn fraction_check_negatives(frac: *mut Fraction) {
    ops::check_negatives(frac.as_mut());
}
