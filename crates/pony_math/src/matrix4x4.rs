//! 4x4 Matrix type
//!
//! 3D homogeneous transformations. Only the algebra lives here; building projection or view
//! matrices is left to the consumers.

use crate::scalar::{Number, Real};
use crate::{Matrix3x3, Vector4};
use bytemuck::{Pod, Zeroable};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// 4x4 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matrix4x4<T> {
    pub columns: [Vector4<T>; 4],
}

impl_matrix!(
    Matrix4x4, Vector4, 4,
    components: [x: 0, y: 1, z: 2, w: 3],
    accessors: [
        m00: 0 0, m01: 0 1, m02: 0 2, m03: 0 3,
        m10: 1 0, m11: 1 1, m12: 1 2, m13: 1 3,
        m20: 2 0, m21: 2 1, m22: 2 2, m23: 2 3,
        m30: 3 0, m31: 3 1, m32: 3 2, m33: 3 3
    ]
);

/// 2x2 minors shared by the determinant and the inverse
struct Minors<T> {
    upper: [T; 6],
    lower: [T; 6],
}

impl<T: Number> Matrix4x4<T> {
    /// Create from entries in column-major order
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m00: T, m10: T, m20: T, m30: T,
        m01: T, m11: T, m21: T, m31: T,
        m02: T, m12: T, m22: T, m32: T,
        m03: T, m13: T, m23: T, m33: T,
    ) -> Self {
        Self::from_columns([
            Vector4::new(m00, m10, m20, m30),
            Vector4::new(m01, m11, m21, m31),
            Vector4::new(m02, m12, m22, m32),
            Vector4::new(m03, m13, m23, m33),
        ])
    }

    /// Upper-left 3x3 block
    #[inline]
    pub fn upper_left(&self) -> Matrix3x3<T> {
        Matrix3x3::from_columns([
            self.columns[0].xyz(),
            self.columns[1].xyz(),
            self.columns[2].xyz(),
        ])
    }

    /// Minors of the two upper rows and the two lower rows, pairing columns
    /// (0,1) (0,2) (0,3) (1,2) (1,3) (2,3)
    fn minors(&self) -> Minors<T> {
        let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        let mut upper = [T::zero(); 6];
        let mut lower = [T::zero(); 6];
        for (i, &(a, b)) in pairs.iter().enumerate() {
            upper[i] = self.get(0, a) * self.get(1, b) - self.get(0, b) * self.get(1, a);
            lower[i] = self.get(2, a) * self.get(3, b) - self.get(2, b) * self.get(3, a);
        }
        Minors { upper, lower }
    }

    /// Determinant by Laplace expansion over the two upper rows
    pub fn determinant(&self) -> T {
        let Minors { upper: s, lower: c } = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

impl<T: Real> Matrix4x4<T> {
    /// Inverse matrix through the adjugate
    ///
    /// A singular matrix divides by a zero determinant and yields non-finite entries.
    pub fn inverse(&self) -> Self {
        let Minors { upper: s, lower: c } = self.minors();
        let a = |row: usize, column: usize| self.get(row, column);
        let determinant =
            s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        let inverse_determinant = T::one() / determinant;

        let rows = [
            Vector4::new(
                a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
                -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
                a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
                -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
            ),
            Vector4::new(
                -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
                a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
                -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
                a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
            ),
            Vector4::new(
                a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
                -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
                a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
                -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
            ),
            Vector4::new(
                -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
                a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
                -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
                a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
            ),
        ];

        Self::from_rows(rows) * inverse_determinant
    }
}

impl<T: Number> From<Matrix3x3<T>> for Matrix4x4<T> {
    /// Embed in the upper-left block of an identity matrix
    fn from(m: Matrix3x3<T>) -> Self {
        Self::from_columns([
            Vector4::from_xyz(m.columns[0], T::zero()),
            Vector4::from_xyz(m.columns[1], T::zero()),
            Vector4::from_xyz(m.columns[2], T::zero()),
            Vector4::new(T::zero(), T::zero(), T::zero(), T::one()),
        ])
    }
}
