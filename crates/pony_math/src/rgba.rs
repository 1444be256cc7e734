//! Floating point RGBA color

use crate::rgb::{GAMMA_VALUE, GRAYSCALE_WEIGHTS};
use crate::scalar::{ColorInt, Real};
use crate::{RGBAInt, Vector3, Vector4, RGB};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// Color with red, green, blue and alpha channels
///
/// Alpha is carried through arithmetic like any other channel but is left untouched by gamma
/// conversion and ignored by the black/white predicates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
}

impl_color!(RGBA, Vector4, 4, r: 0: "R", g: 1: "G", b: 2: "B", a: 3: "A");

impl<T: Real> RGBA<T> {
    /// (1, 0, 0, 1)
    #[inline]
    pub fn red() -> Self {
        RGB::red().with_alpha(T::one())
    }

    /// (0, 1, 0, 1)
    #[inline]
    pub fn green() -> Self {
        RGB::green().with_alpha(T::one())
    }

    /// (0, 0, 1, 1)
    #[inline]
    pub fn blue() -> Self {
        RGB::blue().with_alpha(T::one())
    }

    /// (0, 0, 0, 1)
    #[inline]
    pub fn black() -> Self {
        RGB::black().with_alpha(T::one())
    }

    /// (1, 1, 1, 1)
    #[inline]
    pub fn white() -> Self {
        RGB::white().with_alpha(T::one())
    }

    /// (0.5, 0.5, 0.5, 1)
    #[inline]
    pub fn gray() -> Self {
        RGB::gray().with_alpha(T::one())
    }

    /// (1, 1, 0, 1)
    #[inline]
    pub fn yellow() -> Self {
        RGB::yellow().with_alpha(T::one())
    }

    /// (1, 0, 1, 1)
    #[inline]
    pub fn magenta() -> Self {
        RGB::magenta().with_alpha(T::one())
    }

    /// (0, 1, 1, 1)
    #[inline]
    pub fn cyan() -> Self {
        RGB::cyan().with_alpha(T::one())
    }

    /// (0, 0, 0, 0)
    #[inline]
    pub fn clear() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    #[inline]
    fn map_rgb(self, f: impl Fn(T) -> T) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    /// The r, g and b channels
    #[inline]
    pub fn rgb(self) -> RGB<T> {
        RGB::new(self.r, self.g, self.b)
    }

    /// Same color with a different alpha
    #[inline]
    pub fn with_alpha(self, a: T) -> Self {
        Self { a, ..self }
    }

    /// Whether alpha is exactly zero
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == T::zero()
    }

    /// Whether alpha is within `tolerance` of zero
    #[inline]
    pub fn is_almost_transparent(self, tolerance: T) -> bool {
        self.a.abs() <= tolerance
    }

    /// Whether alpha is exactly one
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == T::one()
    }

    /// Whether alpha is within `tolerance` of one
    #[inline]
    pub fn is_almost_opaque(self, tolerance: T) -> bool {
        (self.a - T::one()).abs() <= tolerance
    }

    /// Integer color, each channel `channel * max` truncated toward zero
    pub fn to_int<I>(self) -> RGBAInt<I>
    where
        I: ColorInt + AsPrimitive<T>,
        T: AsPrimitive<I>,
    {
        let max: T = I::max_value().as_();
        RGBAInt::new(
            (self.r * max).as_(),
            (self.g * max).as_(),
            (self.b * max).as_(),
            (self.a * max).as_(),
        )
    }
}

impl<T: Real> From<RGB<T>> for RGBA<T> {
    /// Opaque color
    #[inline]
    fn from(color: RGB<T>) -> Self {
        color.with_alpha(T::one())
    }
}

impl<T, I> From<RGBAInt<I>> for RGBA<T>
where
    T: Real,
    I: ColorInt + AsPrimitive<T>,
{
    #[inline]
    fn from(color: RGBAInt<I>) -> Self {
        color.to_float()
    }
}
