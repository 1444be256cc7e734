//! Integer RGBA color

use crate::scalar::{ColorInt, Real};
use crate::{RGBInt, RGBA};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Color with integer red, green, blue and alpha channels
///
/// The palette is opaque: alpha is the channel maximum.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBAInt<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
}

impl_int_color!(RGBAInt, 4, r: 0: "R", g: 1: "G", b: 2: "B", a: 3: "A");

impl<T: ColorInt> RGBAInt<T> {
    #[inline]
    pub fn red() -> Self {
        RGBInt::red().with_alpha(T::max_value())
    }

    #[inline]
    pub fn green() -> Self {
        RGBInt::green().with_alpha(T::max_value())
    }

    #[inline]
    pub fn blue() -> Self {
        RGBInt::blue().with_alpha(T::max_value())
    }

    #[inline]
    pub fn black() -> Self {
        RGBInt::black().with_alpha(T::max_value())
    }

    #[inline]
    pub fn white() -> Self {
        RGBInt::white().with_alpha(T::max_value())
    }

    #[inline]
    pub fn gray() -> Self {
        RGBInt::gray().with_alpha(T::max_value())
    }

    #[inline]
    pub fn yellow() -> Self {
        RGBInt::yellow().with_alpha(T::max_value())
    }

    #[inline]
    pub fn magenta() -> Self {
        RGBInt::magenta().with_alpha(T::max_value())
    }

    #[inline]
    pub fn cyan() -> Self {
        RGBInt::cyan().with_alpha(T::max_value())
    }

    /// (0, 0, 0, 0)
    #[inline]
    pub fn clear() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// The r, g and b channels
    #[inline]
    pub fn rgb(self) -> RGBInt<T> {
        RGBInt::new(self.r, self.g, self.b)
    }

    /// Same color with a different alpha
    #[inline]
    pub fn with_alpha(self, a: T) -> Self {
        Self { a, ..self }
    }

    /// Whether alpha is zero
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == T::zero()
    }

    /// Whether alpha is the channel maximum
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == T::max_value()
    }

    /// Floating color, each channel divided by max
    pub fn to_float<F>(self) -> RGBA<F>
    where
        F: Real,
        T: AsPrimitive<F>,
    {
        let max: F = T::max_value().as_();
        RGBA::new(
            self.r.as_() / max,
            self.g.as_() / max,
            self.b.as_() / max,
            self.a.as_() / max,
        )
    }
}

impl RGBAInt<u8> {
    /// Color from a packed `0xRRGGBBAA` value
    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        Self::new(r, g, b, a)
    }

    /// Packed `0xRRGGBBAA` value
    #[inline]
    pub fn to_packed(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}

impl<F, T> From<RGBA<F>> for RGBAInt<T>
where
    F: Real + AsPrimitive<T>,
    T: ColorInt + AsPrimitive<F>,
{
    #[inline]
    fn from(color: RGBA<F>) -> Self {
        color.to_int()
    }
}
