/*
    Top-level
*/

mod number;

pub mod ffi;
pub mod fraction;
pub mod ops;

pub use fraction::*;
pub use number::*;
