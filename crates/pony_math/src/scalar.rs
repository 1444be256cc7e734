//! Element types accepted by the math types
//!
//! Every vector, matrix and color is generic over its element type. Operations that need a
//! square root, trigonometry or a division with a fractional result are evaluated in the
//! element type's *computational type* and converted back:
//!
//! | Element type | Computational type |
//! |---|---|
//! | `i8`, `i16`, `i32`, `u8`, `u16`, `u32`, `f32` | `f32` |
//! | `i64`, `u64`, `f64` | `f64` |
//!
//! Conversions back to an integer element type follow `as` semantics: the value is truncated
//! toward zero, out-of-range values saturate and NaN becomes zero.

use num_traits::{Float, FloatConst, Num, PrimInt, Unsigned};
use std::fmt::{Debug, Display};

/// Numeric element type of the math types
pub trait Number:
    Copy + Default + PartialEq + PartialOrd + Debug + Display + Num + Send + Sync + 'static
{
    /// Floating type used for magnitudes, angles and interpolation results
    type Computational: Real;

    /// Widen or convert to the computational type
    fn to_computational(self) -> Self::Computational;

    /// Convert back from the computational type (truncating for integers)
    fn from_computational(value: Self::Computational) -> Self;
}

/// Floating point element type
pub trait Real: Number<Computational = Self> + Float + FloatConst {
    /// Convert an `f64` literal into this type
    fn from_f64(value: f64) -> Self;

    /// Tolerance used by the `almost` comparisons when none is given
    #[inline]
    fn default_tolerance() -> Self {
        Self::epsilon() * Self::from_f64(100.0)
    }
}

/// Unsigned integer channel type of the integer colors
pub trait ColorInt: Number + PrimInt + Unsigned {}

macro_rules! impl_number {
    ($computational:ty; $($t:ty),+) => {$(
        impl Number for $t {
            type Computational = $computational;

            #[inline]
            fn to_computational(self) -> $computational {
                self as $computational
            }

            #[inline]
            fn from_computational(value: $computational) -> Self {
                value as $t
            }
        }
    )+};
}

impl_number!(f32; i8, i16, i32, u8, u16, u32, f32);
impl_number!(f64; i64, u64, f64);

impl Real for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl ColorInt for u8 {}
impl ColorInt for u16 {}
impl ColorInt for u32 {}
impl ColorInt for u64 {}

/// Clamp `value` into `[min, max]`; NaN passes through unchanged
#[inline]
pub(crate) fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Smaller of two values (first one on ties or NaN)
#[inline]
pub(crate) fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Larger of two values (first one on ties or NaN)
#[inline]
pub(crate) fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}
