//! 2D Vector type

use crate::scalar::{clamp, partial_max, partial_min, Number, Real};
use bytemuck::{Pod, Zeroable};
use num_traits::{AsPrimitive, Float, One, Zero};
use serde::{Deserialize, Serialize};
use std::array::TryFromSliceError;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// 2D vector with x and y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl_vector!(Vector2, 2, x: 0, y: 1);

impl<T: Number> Vector2<T> {
    /// (1, 0)
    #[inline]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// (0, 1)
    #[inline]
    pub fn up() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Vector with x and y exchanged
    #[inline]
    pub fn swapped(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Signed area of the parallelogram spanned by the two vectors (perp-dot product)
    #[inline]
    pub fn cross(self, other: Self) -> T::Computational {
        self.x.to_computational() * other.y.to_computational()
            - self.y.to_computational() * other.x.to_computational()
    }

    /// Signed angle from `self` to `other` in radians, in `(-π, π]`
    ///
    /// Counterclockwise is positive.
    pub fn angle_signed(self, other: Self) -> T::Computational {
        let angle = self.angle(other);
        if self.cross(other) < T::Computational::zero() {
            -angle
        } else {
            angle
        }
    }

    /// Signed angle from `self` to `other` in degrees
    #[inline]
    pub fn angle_signed_degrees(self, other: Self) -> T::Computational {
        self.angle_signed(other).to_degrees()
    }
}

impl<T: Number + Neg<Output = T>> Vector2<T> {
    /// (-1, 0)
    #[inline]
    pub fn left() -> Self {
        Self::new(-T::one(), T::zero())
    }

    /// (0, -1)
    #[inline]
    pub fn down() -> Self {
        Self::new(T::zero(), -T::one())
    }
}
