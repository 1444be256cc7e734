//! 3D Vector type
//!
//! The engine uses a left-handed coordinate system: x points right, y points up and z points
//! forward. [`Vector3::cross`] is the negated right-handed product.

use crate::scalar::{clamp, partial_max, partial_min, Number, Real};
use crate::Vector2;
use bytemuck::{Pod, Zeroable};
use num_traits::{AsPrimitive, Float, One, Zero};
use serde::{Deserialize, Serialize};
use std::array::TryFromSliceError;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// 3D vector with x, y and z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_vector!(Vector3, 3, x: 0, y: 1, z: 2);

impl<T: Number> Vector3<T> {
    /// (0, 0, 1)
    #[inline]
    pub fn forward() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// (0, 1, 0)
    #[inline]
    pub fn up() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// (1, 0, 0)
    #[inline]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// The x and y components
    #[inline]
    pub fn xy(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Left-handed cross product, `right × up = back`
    ///
    /// Exact for integer components. Parallel or zero vectors give the zero vector.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.z * other.y - self.y * other.z,
            self.x * other.z - self.z * other.x,
            self.y * other.x - self.x * other.y,
        )
    }

    /// Signed angle from `self` to `other` in radians, in `(-π, π]`
    ///
    /// Positive when rotating `self` toward `other` is a positive rotation about `axis`, the
    /// same direction a quaternion created from `axis` rotates.
    pub fn angle_signed(self, other: Self, axis: Self) -> T::Computational {
        let angle = self.angle(other);
        let [a, b, n] = [self, other, axis].map(|v| v.map(T::to_computational));
        let orientation = a.cross(b).dot(n);
        if orientation > T::Computational::zero() {
            -angle
        } else {
            angle
        }
    }

    /// Signed angle from `self` to `other` in degrees
    #[inline]
    pub fn angle_signed_degrees(self, other: Self, axis: Self) -> T::Computational {
        self.angle_signed(other, axis).to_degrees()
    }

    /// Projection of `self` onto the plane with the given `normal`
    #[inline]
    pub fn project_on_plane(self, normal: Self) -> Self {
        self - self.project(normal)
    }
}

impl<T: Number + Neg<Output = T>> Vector3<T> {
    /// (0, 0, -1)
    #[inline]
    pub fn back() -> Self {
        Self::new(T::zero(), T::zero(), -T::one())
    }

    /// (0, -1, 0)
    #[inline]
    pub fn down() -> Self {
        Self::new(T::zero(), -T::one(), T::zero())
    }

    /// (-1, 0, 0)
    #[inline]
    pub fn left() -> Self {
        Self::new(-T::one(), T::zero(), T::zero())
    }
}
