//! Integer RGB color
//!
//! Channels span `[0, max]` of the unsigned channel type. Integer colors are storage types:
//! convert to [`RGB`] for arithmetic.

use crate::scalar::{ColorInt, Real};
use crate::{RGBAInt, RGB};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Color with integer red, green and blue channels
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBInt<T> {
    pub r: T,
    pub g: T,
    pub b: T,
}

impl_int_color!(RGBInt, 3, r: 0: "R", g: 1: "G", b: 2: "B");

impl<T: ColorInt> RGBInt<T> {
    /// Channel value of a float palette entry, `channel * max` truncated
    #[inline]
    fn scaled(channel: f64) -> T {
        let max = T::max_value().to_computational();
        T::from_computational(max * <T::Computational as Real>::from_f64(channel))
    }

    /// (max, 0, 0)
    #[inline]
    pub fn red() -> Self {
        Self::new(Self::scaled(1.0), Self::scaled(0.0), Self::scaled(0.0))
    }

    /// (0, max, 0)
    #[inline]
    pub fn green() -> Self {
        Self::new(Self::scaled(0.0), Self::scaled(1.0), Self::scaled(0.0))
    }

    /// (0, 0, max)
    #[inline]
    pub fn blue() -> Self {
        Self::new(Self::scaled(0.0), Self::scaled(0.0), Self::scaled(1.0))
    }

    /// (0, 0, 0)
    #[inline]
    pub fn black() -> Self {
        Self::new(Self::scaled(0.0), Self::scaled(0.0), Self::scaled(0.0))
    }

    /// (max, max, max)
    #[inline]
    pub fn white() -> Self {
        Self::new(Self::scaled(1.0), Self::scaled(1.0), Self::scaled(1.0))
    }

    /// Half of max on every channel, truncated
    #[inline]
    pub fn gray() -> Self {
        let half = Self::scaled(0.5);
        Self::new(half, half, half)
    }

    /// (max, max, 0)
    #[inline]
    pub fn yellow() -> Self {
        Self::new(Self::scaled(1.0), Self::scaled(1.0), Self::scaled(0.0))
    }

    /// (max, 0, max)
    #[inline]
    pub fn magenta() -> Self {
        Self::new(Self::scaled(1.0), Self::scaled(0.0), Self::scaled(1.0))
    }

    /// (0, max, max)
    #[inline]
    pub fn cyan() -> Self {
        Self::new(Self::scaled(0.0), Self::scaled(1.0), Self::scaled(1.0))
    }

    /// RGBA color with the same channels and the given alpha
    #[inline]
    pub fn with_alpha(self, a: T) -> RGBAInt<T> {
        RGBAInt::new(self.r, self.g, self.b, a)
    }

    /// Floating color, each channel divided by max
    pub fn to_float<F>(self) -> RGB<F>
    where
        F: Real,
        T: AsPrimitive<F>,
    {
        let max: F = T::max_value().as_();
        RGB::new(self.r.as_() / max, self.g.as_() / max, self.b.as_() / max)
    }
}

impl RGBInt<u8> {
    /// Color from a packed `0xRRGGBB` value; the top byte is ignored
    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        let [_, r, g, b] = packed.to_be_bytes();
        Self::new(r, g, b)
    }

    /// Packed `0xRRGGBB` value
    #[inline]
    pub fn to_packed(self) -> u32 {
        u32::from_be_bytes([0, self.r, self.g, self.b])
    }
}

impl<T: ColorInt> From<RGBInt<T>> for RGBAInt<T> {
    /// Opaque color
    #[inline]
    fn from(color: RGBInt<T>) -> Self {
        color.with_alpha(T::max_value())
    }
}

impl<F, T> From<RGB<F>> for RGBInt<T>
where
    F: Real + AsPrimitive<T>,
    T: ColorInt + AsPrimitive<F>,
{
    #[inline]
    fn from(color: RGB<F>) -> Self {
        color.to_int()
    }
}

impl<T: ColorInt> From<RGBAInt<T>> for RGBInt<T> {
    /// Drop the alpha channel
    #[inline]
    fn from(color: RGBAInt<T>) -> Self {
        color.rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_u8() {
        assert_eq!(RGBInt::<u8>::red(), RGBInt::new(255, 0, 0));
        assert_eq!(RGBInt::<u8>::green(), RGBInt::new(0, 255, 0));
        assert_eq!(RGBInt::<u8>::blue(), RGBInt::new(0, 0, 255));
        assert_eq!(RGBInt::<u8>::black(), RGBInt::new(0, 0, 0));
        assert_eq!(RGBInt::<u8>::white(), RGBInt::new(255, 255, 255));
        assert_eq!(RGBInt::<u8>::gray(), RGBInt::new(127, 127, 127));
        assert_eq!(RGBInt::<u8>::yellow(), RGBInt::new(255, 255, 0));
        assert_eq!(RGBInt::<u8>::magenta(), RGBInt::new(255, 0, 255));
        assert_eq!(RGBInt::<u8>::cyan(), RGBInt::new(0, 255, 255));
    }

    #[test]
    fn test_palette_matches_float_conversion() {
        assert_eq!(RGBInt::<u16>::gray(), RGB::<f32>::gray().to_int());
        assert_eq!(RGBInt::<u16>::white(), RGB::<f32>::white().to_int());
        assert_eq!(RGBInt::<u32>::white(), RGBInt::new(u32::MAX, u32::MAX, u32::MAX));
    }

    #[test]
    fn test_extrema_and_predicates() {
        let color = RGBInt::new(10_u8, 200, 30);
        assert_eq!(color.min(), 10);
        assert_eq!(color.max(), 200);
        assert_eq!(color.min_max(), (10, 200));
        assert!(RGBInt::<u8>::black().is_black());
        assert!(RGBInt::<u16>::white().is_white());
        assert!(!color.is_white());
    }

    #[test]
    fn test_float_round_trip() {
        let color = RGBInt::new(255_u8, 51, 0);
        let float: RGB<f32> = color.to_float();
        assert_eq!(float, RGB::new(1.0, 0.2, 0.0));
        assert_eq!(RGBInt::<u8>::from(float), color);
    }

    #[test]
    fn test_packed() {
        let color = RGBInt::from_packed(0x12AB34);
        assert_eq!(color, RGBInt::new(0x12, 0xAB, 0x34));
        assert_eq!(color.to_packed(), 0x12AB34);
        assert_eq!(RGBInt::from_packed(0xFF00_0000), RGBInt::<u8>::black());
    }

    #[test]
    fn test_alpha_conversions() {
        let color = RGBInt::new(1_u8, 2, 3);
        assert_eq!(RGBAInt::from(color), RGBAInt::new(1, 2, 3, 255));
        assert_eq!(RGBInt::from(RGBAInt::new(1_u8, 2, 3, 0)), color);
        assert_eq!(color[2], 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBInt::new(255_u8, 0, 12).to_string(), "(R: 255, G: 0, B: 12)");
    }
}
