//! 4D Vector type
//!
//! Used for homogeneous coordinates and as the storage layout shared with
//! [`Quaternion`](crate::Quaternion) and [`RGBA`](crate::RGBA).

use crate::scalar::{clamp, partial_max, partial_min, Number, Real};
use crate::{Vector2, Vector3};
use bytemuck::{Pod, Zeroable};
use num_traits::{AsPrimitive, Float, One, Zero};
use serde::{Deserialize, Serialize};
use std::array::TryFromSliceError;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// 4D vector with x, y, z and w components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_vector!(Vector4, 4, x: 0, y: 1, z: 2, w: 3);

impl<T: Number> Vector4<T> {
    /// Extend a 3D vector with a w component
    #[inline]
    pub fn from_xyz(xyz: Vector3<T>, w: T) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    /// The x and y components
    #[inline]
    pub fn xy(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// The x, y and z components
    #[inline]
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Point in homogeneous coordinates (w = 1)
    #[inline]
    pub fn point(xyz: Vector3<T>) -> Self {
        Self::from_xyz(xyz, T::one())
    }

    /// Direction in homogeneous coordinates (w = 0)
    #[inline]
    pub fn direction(xyz: Vector3<T>) -> Self {
        Self::from_xyz(xyz, T::zero())
    }
}

impl<T: Number> From<Vector3<T>> for Vector4<T> {
    /// Extend with w = 0
    #[inline]
    fn from(xyz: Vector3<T>) -> Self {
        Self::direction(xyz)
    }
}
