//! 2D transformation helpers
//!
//! An RS matrix is a [`Matrix2x2`] holding rotation and scale; a TRS matrix is a homogeneous
//! [`Matrix3x3`] with the RS block in the upper-left corner, the translation in the last column
//! and `(0, 0, 1)` as the bottom row.
//!
//! Scale is applied in the rotated local frame: `rs = rotation * diag(scale)`, so each scale
//! factor stretches one column.
//!
//! The extractors assume the matrix came from these constructors with non-zero scale. A negative
//! scale factor cannot be told apart from a flipped rotation column, so [`extract_scaling`] always
//! returns non-negative factors and the sign ends up in [`extract_rotation_matrix`].

use crate::scalar::Real;
use crate::{Matrix2x2, Matrix3x3, Vector2, Vector3};

/// Counterclockwise rotation by `angle` radians
#[inline]
pub fn rotation_matrix<T: Real>(angle: T) -> Matrix2x2<T> {
    let (sin, cos) = angle.sin_cos();
    Matrix2x2::new(cos, sin, -sin, cos)
}

/// Counterclockwise rotation by `angle` degrees
#[inline]
pub fn rotation_matrix_degrees<T: Real>(angle: T) -> Matrix2x2<T> {
    rotation_matrix(angle.to_radians())
}

/// RS matrix from a rotation matrix and per-column scale
#[inline]
pub fn rs_matrix_from_rotation<T: Real>(rotation: &Matrix2x2<T>, scale: Vector2<T>) -> Matrix2x2<T> {
    *rotation * Matrix2x2::from_diagonal(scale)
}

/// RS matrix from an angle in radians and per-column scale
#[inline]
pub fn rs_matrix<T: Real>(angle: T, scale: Vector2<T>) -> Matrix2x2<T> {
    rs_matrix_from_rotation(&rotation_matrix(angle), scale)
}

#[inline]
pub fn rs_matrix_degrees<T: Real>(angle: T, scale: Vector2<T>) -> Matrix2x2<T> {
    rs_matrix(angle.to_radians(), scale)
}

/// TRS matrix from a translation and an RS matrix
pub fn trs_matrix_from_rs<T: Real>(translation: Vector2<T>, rs: &Matrix2x2<T>) -> Matrix3x3<T> {
    let mut trs = Matrix3x3::from(*rs);
    trs.set_column(2, Vector3::new(translation.x, translation.y, T::one()));
    trs
}

/// TRS matrix from a translation, a rotation matrix and per-column scale
#[inline]
pub fn trs_matrix_from_rotation<T: Real>(
    translation: Vector2<T>,
    rotation: &Matrix2x2<T>,
    scale: Vector2<T>,
) -> Matrix3x3<T> {
    trs_matrix_from_rs(translation, &rs_matrix_from_rotation(rotation, scale))
}

/// TRS matrix from a translation, an angle in radians and per-column scale
#[inline]
pub fn trs_matrix<T: Real>(translation: Vector2<T>, angle: T, scale: Vector2<T>) -> Matrix3x3<T> {
    trs_matrix_from_rs(translation, &rs_matrix(angle, scale))
}

#[inline]
pub fn trs_matrix_degrees<T: Real>(
    translation: Vector2<T>,
    angle: T,
    scale: Vector2<T>,
) -> Matrix3x3<T> {
    trs_matrix(translation, angle.to_radians(), scale)
}

/// Translation column of a TRS matrix
#[inline]
pub fn extract_translation<T: Real>(trs: &Matrix3x3<T>) -> Vector2<T> {
    Vector2::new(trs.m02(), trs.m12())
}

/// RS block of a TRS matrix
#[inline]
pub fn extract_rs_matrix<T: Real>(trs: &Matrix3x3<T>) -> Matrix2x2<T> {
    trs.upper_left()
}

/// Rotation part of an RS matrix: each column divided by its length
pub fn extract_rotation_matrix<T: Real>(rs: &Matrix2x2<T>) -> Matrix2x2<T> {
    let x = rs.column(0);
    let y = rs.column(1);
    Matrix2x2::from_columns([x / x.magnitude(), y / y.magnitude()])
}

/// Rotation angle of an RS matrix in radians, in `(-π, π]`
#[inline]
pub fn extract_angle<T: Real>(rs: &Matrix2x2<T>) -> T {
    let rotation = extract_rotation_matrix(rs);
    rotation.m10().atan2(rotation.m00())
}

#[inline]
pub fn extract_angle_degrees<T: Real>(rs: &Matrix2x2<T>) -> T {
    extract_angle(rs).to_degrees()
}

/// Scale factors of an RS matrix (column lengths, never negative)
#[inline]
pub fn extract_scaling<T: Real>(rs: &Matrix2x2<T>) -> Vector2<T> {
    Vector2::new(rs.column(0).magnitude(), rs.column(1).magnitude())
}

#[inline]
pub fn extract_rotation_matrix_from_trs<T: Real>(trs: &Matrix3x3<T>) -> Matrix2x2<T> {
    extract_rotation_matrix(&extract_rs_matrix(trs))
}

#[inline]
pub fn extract_angle_from_trs<T: Real>(trs: &Matrix3x3<T>) -> T {
    extract_angle(&extract_rs_matrix(trs))
}

#[inline]
pub fn extract_scaling_from_trs<T: Real>(trs: &Matrix3x3<T>) -> Vector2<T> {
    extract_scaling(&extract_rs_matrix(trs))
}

/// Rotate a vector counterclockwise by `angle` radians
#[inline]
pub fn rotate<T: Real>(vector: Vector2<T>, angle: T) -> Vector2<T> {
    rotation_matrix(angle) * vector
}

#[inline]
pub fn rotate_degrees<T: Real>(vector: Vector2<T>, angle: T) -> Vector2<T> {
    rotate(vector, angle.to_radians())
}

/// Apply rotation, scale and translation to a point
#[inline]
pub fn transform_point<T: Real>(trs: &Matrix3x3<T>, point: Vector2<T>) -> Vector2<T> {
    let transformed = *trs * Vector3::new(point.x, point.y, T::one());
    Vector2::new(transformed.x, transformed.y)
}

/// Apply rotation and scale to a direction, ignoring translation
#[inline]
pub fn transform_direction<T: Real>(trs: &Matrix3x3<T>, direction: Vector2<T>) -> Vector2<T> {
    let transformed = *trs * Vector3::new(direction.x, direction.y, T::zero());
    Vector2::new(transformed.x, transformed.y)
}
