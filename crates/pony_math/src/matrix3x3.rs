//! 3x3 Matrix type
//!
//! Holds 3D rotations and 2D homogeneous transformations.

use crate::scalar::{Number, Real};
use crate::{Matrix2x2, Vector3};
use bytemuck::{Pod, Zeroable};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// 3x3 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matrix3x3<T> {
    pub columns: [Vector3<T>; 3],
}

impl_matrix!(
    Matrix3x3, Vector3, 3,
    components: [x: 0, y: 1, z: 2],
    accessors: [
        m00: 0 0, m01: 0 1, m02: 0 2,
        m10: 1 0, m11: 1 1, m12: 1 2,
        m20: 2 0, m21: 2 1, m22: 2 2
    ]
);

impl<T: Number> Matrix3x3<T> {
    /// Create from entries in column-major order
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m00: T, m10: T, m20: T,
        m01: T, m11: T, m21: T,
        m02: T, m12: T, m22: T,
    ) -> Self {
        Self::from_columns([
            Vector3::new(m00, m10, m20),
            Vector3::new(m01, m11, m21),
            Vector3::new(m02, m12, m22),
        ])
    }

    /// Upper-left 2x2 block
    #[inline]
    pub fn upper_left(&self) -> Matrix2x2<T> {
        Matrix2x2::new(self.m00(), self.m10(), self.m01(), self.m11())
    }

    /// Determinant by cofactor expansion along the first row
    pub fn determinant(&self) -> T {
        self.m00() * (self.m11() * self.m22() - self.m12() * self.m21())
            - self.m01() * (self.m10() * self.m22() - self.m12() * self.m20())
            + self.m02() * (self.m10() * self.m21() - self.m11() * self.m20())
    }
}

impl<T: Real> Matrix3x3<T> {
    /// Inverse matrix through the adjugate
    ///
    /// A singular matrix divides by a zero determinant and yields non-finite entries.
    pub fn inverse(&self) -> Self {
        let (a00, a01, a02) = (self.m00(), self.m01(), self.m02());
        let (a10, a11, a12) = (self.m10(), self.m11(), self.m12());
        let (a20, a21, a22) = (self.m20(), self.m21(), self.m22());

        let c00 = a11 * a22 - a12 * a21;
        let c01 = a12 * a20 - a10 * a22;
        let c02 = a10 * a21 - a11 * a20;
        let inverse_determinant = T::one() / (a00 * c00 + a01 * c01 + a02 * c02);

        Self::new(
            c00,
            c01,
            c02,
            a02 * a21 - a01 * a22,
            a00 * a22 - a02 * a20,
            a01 * a20 - a00 * a21,
            a01 * a12 - a02 * a11,
            a02 * a10 - a00 * a12,
            a00 * a11 - a01 * a10,
        ) * inverse_determinant
    }
}

impl<T: Number> From<Matrix2x2<T>> for Matrix3x3<T> {
    /// Embed in the upper-left block of an identity matrix
    #[rustfmt::skip]
    fn from(m: Matrix2x2<T>) -> Self {
        let (zero, one) = (T::zero(), T::one());
        Self::new(
            m.m00(), m.m10(), zero,
            m.m01(), m.m11(), zero,
            zero, zero, one,
        )
    }
}
