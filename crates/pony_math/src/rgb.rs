//! Floating point RGB color
//!
//! Channels are nominally in `[0, 1]` but are never clamped: out-of-range values are legal and
//! propagate through arithmetic.

use crate::scalar::{ColorInt, Real};
use crate::{RGBInt, RGBA, Vector3};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// Exponent relating linear and gamma-space channels
pub const GAMMA_VALUE: f64 = 2.2;

/// Luminance weights of the r, g and b channels
pub const GRAYSCALE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Color with red, green and blue channels
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
}

impl_color!(RGB, Vector3, 3, r: 0: "R", g: 1: "G", b: 2: "B");

impl<T: Real> RGB<T> {
    /// (1, 0, 0)
    #[inline]
    pub fn red() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// (0, 1, 0)
    #[inline]
    pub fn green() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// (0, 0, 1)
    #[inline]
    pub fn blue() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// (0, 0, 0)
    #[inline]
    pub fn black() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// (1, 1, 1)
    #[inline]
    pub fn white() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    /// (0.5, 0.5, 0.5)
    #[inline]
    pub fn gray() -> Self {
        let half = T::from_f64(0.5);
        Self::new(half, half, half)
    }

    /// (1, 1, 0)
    #[inline]
    pub fn yellow() -> Self {
        Self::new(T::one(), T::one(), T::zero())
    }

    /// (1, 0, 1)
    #[inline]
    pub fn magenta() -> Self {
        Self::new(T::one(), T::zero(), T::one())
    }

    /// (0, 1, 1)
    #[inline]
    pub fn cyan() -> Self {
        Self::new(T::zero(), T::one(), T::one())
    }

    #[inline]
    fn map_rgb(self, f: impl Fn(T) -> T) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// RGBA color with the same channels and the given alpha
    #[inline]
    pub fn with_alpha(self, a: T) -> RGBA<T> {
        RGBA::new(self.r, self.g, self.b, a)
    }

    /// Integer color, each channel `channel * max` truncated toward zero
    pub fn to_int<I>(self) -> RGBInt<I>
    where
        I: ColorInt + AsPrimitive<T>,
        T: AsPrimitive<I>,
    {
        let max: T = I::max_value().as_();
        RGBInt::new((self.r * max).as_(), (self.g * max).as_(), (self.b * max).as_())
    }
}

impl<T: Real> From<RGBA<T>> for RGB<T> {
    /// Drop the alpha channel
    #[inline]
    fn from(color: RGBA<T>) -> Self {
        color.rgb()
    }
}

impl<T, I> From<RGBInt<I>> for RGB<T>
where
    T: Real,
    I: ColorInt + AsPrimitive<T>,
{
    #[inline]
    fn from(color: RGBInt<I>) -> Self {
        color.to_float()
    }
}
