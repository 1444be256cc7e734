//! 2x2 Matrix type

use crate::scalar::{Number, Real};
use crate::Vector2;
use bytemuck::{Pod, Zeroable};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// 2x2 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matrix2x2<T> {
    pub columns: [Vector2<T>; 2],
}

impl_matrix!(
    Matrix2x2, Vector2, 2,
    components: [x: 0, y: 1],
    accessors: [m00: 0 0, m01: 0 1, m10: 1 0, m11: 1 1]
);

impl<T: Number> Matrix2x2<T> {
    /// Create from entries in column-major order
    #[inline]
    pub const fn new(m00: T, m10: T, m01: T, m11: T) -> Self {
        Self::from_columns([Vector2::new(m00, m10), Vector2::new(m01, m11)])
    }

    /// Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self.m00() * self.m11() - self.m01() * self.m10()
    }
}

impl<T: Real> Matrix2x2<T> {
    /// Inverse matrix
    ///
    /// A singular matrix divides by a zero determinant and yields non-finite entries.
    pub fn inverse(&self) -> Self {
        let inverse_determinant = T::one() / self.determinant();
        Self::new(self.m11(), -self.m10(), -self.m01(), self.m00()) * inverse_determinant
    }
}
