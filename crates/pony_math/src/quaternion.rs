//! Quaternion for representing 3D rotations
//!
//! A quaternion `(x, y, z, w)` holds the rotation axis scaled by `sin(θ/2)` in x, y, z and
//! `cos(θ/2)` in w. Unit length is not enforced: interpolation and accumulation may leave a
//! quaternion slightly off the unit sphere, and callers normalize explicitly.
//!
//! Rotations follow the engine's left-handed frame: a positive angle about `forward` turns
//! `right` toward `up`.

use crate::scalar::{clamp, Number, Real};
use crate::{Matrix3x3, Vector3, Vector4};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign, Neg};

/// Rotation quaternion
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Real> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Number> Quaternion<T> {
    /// Create from raw components
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Components as a 4D vector
    #[inline]
    pub fn to_vector4(self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, self.w)
    }

    /// The vector part (x, y, z)
    #[inline]
    pub fn vector(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl<T: Real> Quaternion<T> {
    /// Identity quaternion (no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Rotation of `angle` radians about `axis`
    ///
    /// The axis is expected to be normalized.
    pub fn create_by_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let half = angle * T::from_f64(0.5);
        let (sin, cos) = half.sin_cos();
        let v = axis * sin;
        Self::new(v.x, v.y, v.z, cos)
    }

    /// Rotation of `angle` degrees about `axis`
    #[inline]
    pub fn create_by_axis_angle_degrees(axis: Vector3<T>, angle: T) -> Self {
        Self::create_by_axis_angle(axis, angle.to_radians())
    }

    /// Rotation from Euler angles in radians
    ///
    /// The rotation about z is applied first, then the one about x, then the one about y.
    pub fn create_by_euler(euler: Vector3<T>) -> Self {
        let half = T::from_f64(0.5);
        let (sx, cx) = (euler.x * half).sin_cos();
        let (sy, cy) = (euler.y * half).sin_cos();
        let (sz, cz) = (euler.z * half).sin_cos();

        Self::new(
            cy * sx * cz + sy * cx * sz,
            sy * cx * cz - cy * sx * sz,
            cy * cx * sz - sy * sx * cz,
            cy * cx * cz + sy * sx * sz,
        )
    }

    /// Rotation from Euler angles in degrees
    #[inline]
    pub fn create_by_euler_degrees(euler: Vector3<T>) -> Self {
        Self::create_by_euler(euler.map(|angle| angle.to_radians()))
    }

    /// Shortest-arc rotation turning the direction `from` into the direction `to`
    ///
    /// Neither vector has to be normalized. When they point in opposite directions the
    /// rotation is a half turn about `from × right`, or `from × up` if `from` is along `right`.
    pub fn create_by_direction(from: Vector3<T>, to: Vector3<T>) -> Self {
        let from = from.normalized();
        let to = to.normalized();
        let dot = from.dot(to);
        let tolerance = T::default_tolerance();

        if dot >= T::one() - tolerance {
            return Self::identity();
        }

        if dot <= tolerance - T::one() {
            let mut axis = rotation_cross(from, Vector3::right());
            if axis.is_almost_zero(tolerance) {
                axis = rotation_cross(from, Vector3::up());
            }
            return Self::create_by_axis_angle(axis.normalized(), T::PI());
        }

        let axis = rotation_cross(from, to);
        Self::new(axis.x, axis.y, axis.z, T::one() + dot).normalized()
    }

    /// Rotation described by a pure rotation matrix
    pub fn create_by_rotation_matrix(m: &Matrix3x3<T>) -> Self {
        let one = T::one();
        let two = one + one;
        let trace = m.trace();

        if trace > T::zero() {
            let s = (trace + one).sqrt() * two;
            Self::new(
                (m.m21() - m.m12()) / s,
                (m.m02() - m.m20()) / s,
                (m.m10() - m.m01()) / s,
                s / (two + two),
            )
        } else if m.m00() > m.m11() && m.m00() > m.m22() {
            let s = (one + m.m00() - m.m11() - m.m22()).sqrt() * two;
            Self::new(
                s / (two + two),
                (m.m01() + m.m10()) / s,
                (m.m02() + m.m20()) / s,
                (m.m21() - m.m12()) / s,
            )
        } else if m.m11() > m.m22() {
            let s = (one + m.m11() - m.m00() - m.m22()).sqrt() * two;
            Self::new(
                (m.m01() + m.m10()) / s,
                s / (two + two),
                (m.m12() + m.m21()) / s,
                (m.m02() - m.m20()) / s,
            )
        } else {
            let s = (one + m.m22() - m.m00() - m.m11()).sqrt() * two;
            Self::new(
                (m.m02() + m.m20()) / s,
                (m.m12() + m.m21()) / s,
                s / (two + two),
                (m.m10() - m.m01()) / s,
            )
        }
    }

    /// Squared magnitude
    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.to_vector4().magnitude_squared()
    }

    /// Magnitude
    #[inline]
    pub fn magnitude(self) -> T {
        self.to_vector4().magnitude()
    }

    /// Same magnitude, vector part negated
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, the conjugate divided by the squared magnitude
    ///
    /// The zero quaternion yields non-finite components.
    #[inline]
    pub fn inverse(self) -> Self {
        Self::from(self.conjugate().to_vector4() / self.magnitude_squared())
    }

    /// Unit quaternion with the same direction
    #[inline]
    pub fn normalized(self) -> Self {
        Self::from(self.to_vector4().normalized())
    }

    /// Normalize in place
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Component-wise dot product
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.to_vector4().dot(other.to_vector4())
    }

    /// Smallest rotation angle between two orientations, in radians
    #[inline]
    pub fn angle(self, other: Self) -> T {
        let dot = self.dot(other).abs();
        let two = T::one() + T::one();
        two * dot.min(T::one()).acos()
    }

    /// Smallest rotation angle between two orientations, in degrees
    #[inline]
    pub fn angle_degrees(self, other: Self) -> T {
        self.angle(other).to_degrees()
    }

    /// Component-wise linear interpolation, neither normalized nor shortest-path
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        Self::from(self.to_vector4().lerp(other.to_vector4(), t))
    }

    /// Spherical linear interpolation along the shortest arc
    pub fn slerp(self, other: Self, t: T) -> Self {
        if self == other {
            return self;
        }

        let mut end = other;
        let mut dot = self.dot(other);
        if dot < T::zero() {
            end = -end;
            dot = -dot;
        }

        // Nearly identical: sin(θ) is too close to zero to divide by
        if dot > T::one() - T::from_f64(1e-6) {
            return self.lerp(end, t).normalized();
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let start_weight = ((T::one() - t) * theta).sin() / sin_theta;
        let end_weight = (t * theta).sin() / sin_theta;
        Self::from(self.to_vector4() * start_weight + end.to_vector4() * end_weight)
    }

    /// Whether this is exactly the identity
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::identity()
    }

    /// Whether the squared distance to the identity is within `tolerance`
    #[inline]
    pub fn is_almost_identity(self, tolerance: T) -> bool {
        self.almost_equal_with(Self::identity(), tolerance)
    }

    /// Whether the distance to the identity is within `tolerance`
    #[inline]
    pub fn is_almost_identity_precise(self, tolerance: T) -> bool {
        (self.to_vector4() - Self::identity().to_vector4()).magnitude() <= tolerance
    }

    /// Whether the squared magnitude is exactly one
    #[inline]
    pub fn is_unit(self) -> bool {
        self.magnitude_squared() == T::one()
    }

    /// Whether the squared magnitude is within `tolerance` of one
    #[inline]
    pub fn is_almost_unit(self, tolerance: T) -> bool {
        (self.magnitude_squared() - T::one()).abs() <= tolerance
    }

    /// Whether the magnitude is within `tolerance` of one
    #[inline]
    pub fn is_almost_unit_precise(self, tolerance: T) -> bool {
        (self.magnitude() - T::one()).abs() <= tolerance
    }

    /// Whether no component is infinite or NaN
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_vector4().is_finite()
    }

    /// Approximate equality with the default tolerance
    #[inline]
    pub fn almost_equal(self, other: Self) -> bool {
        self.to_vector4().almost_equal(other.to_vector4())
    }

    /// Approximate equality: the squared distance between components is at most `tolerance`
    #[inline]
    pub fn almost_equal_with(self, other: Self, tolerance: T) -> bool {
        self.to_vector4().almost_equal_with(other.to_vector4(), tolerance)
    }

    /// Equivalent 3x3 rotation matrix (for a unit quaternion)
    pub fn rotation_matrix(self) -> Matrix3x3<T> {
        let Self { x, y, z, w } = self;
        let one = T::one();
        let two = one + one;

        Matrix3x3::from_rows([
            Vector3::new(
                one - two * (y * y + z * z),
                two * (x * y - z * w),
                two * (x * z + y * w),
            ),
            Vector3::new(
                two * (x * y + z * w),
                one - two * (x * x + z * z),
                two * (y * z - x * w),
            ),
            Vector3::new(
                two * (x * z - y * w),
                two * (y * z + x * w),
                one - two * (x * x + y * y),
            ),
        ])
    }

    /// Euler angles in radians, inverse of [`Quaternion::create_by_euler`]
    ///
    /// x lies in `[-π/2, π/2]`, y and z in `(-π, π]`. At gimbal lock (x = ±π/2) y is zero and
    /// the remaining rotation is carried by z.
    pub fn euler(self) -> Vector3<T> {
        let m = self.normalized().rotation_matrix();
        let one = T::one();
        let sin_x = -m.m12();

        if sin_x.abs() >= one - T::from_f64(1e-6) {
            let sign = if sin_x > T::zero() { one } else { -one };
            return Vector3::new(
                sign * T::FRAC_PI_2(),
                T::zero(),
                (sign * m.m20()).atan2(m.m00()),
            );
        }

        Vector3::new(
            clamp(sin_x, -one, one).asin(),
            m.m02().atan2(m.m22()),
            m.m10().atan2(m.m11()),
        )
    }

    /// Euler angles in degrees
    #[inline]
    pub fn euler_degrees(self) -> Vector3<T> {
        self.euler().map(|angle| angle.to_degrees())
    }

    /// Rotation axis and angle in radians
    ///
    /// The angle lies in `[0, 2π]`. The identity has no defined axis and yields NaN components.
    pub fn axis_angle(self) -> (Vector3<T>, T) {
        let q = self.normalized();
        let one = T::one();
        let w = clamp(q.w, -one, one);
        let angle = (one + one) * w.acos();
        let sin_half = (one - w * w).sqrt();
        (q.vector() / sin_half, angle)
    }

    /// Rotation axis and angle in degrees
    #[inline]
    pub fn axis_angle_degrees(self) -> (Vector3<T>, T) {
        let (axis, angle) = self.axis_angle();
        (axis, angle.to_degrees())
    }
}

/// Cross product with the handedness of the Hamilton product, `a × b` such that
/// `(1, 0, 0) × (0, 1, 0) = (0, 0, 1)`
#[inline]
fn rotation_cross<T: Real>(a: Vector3<T>, b: Vector3<T>) -> Vector3<T> {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;

    /// Hamilton product; `a * b` applies `b` first, then `a`
    #[inline]
    fn mul(self, other: Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl<T: Real> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Real> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    /// Rotate a vector
    ///
    /// Equivalent to `q · v · q*`; a non-unit quaternion also scales the result by its
    /// squared magnitude.
    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        let u = self.vector();
        let w = self.w;
        let two = T::one() + T::one();
        v * (w * w - u.dot(u)) + u * (two * u.dot(v)) + rotation_cross(u, v) * (two * w)
    }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;

    /// Negate every component; the rotation stays the same
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Number> Index<usize> for Quaternion<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Quaternion index out of range: {}", index),
        }
    }
}

impl<T: Number> IndexMut<usize> for Quaternion<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Quaternion index out of range: {}", index),
        }
    }
}

impl<T: Number> From<Vector4<T>> for Quaternion<T> {
    #[inline]
    fn from(v: Vector4<T>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl<T: Number> From<Quaternion<T>> for Vector4<T> {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        q.to_vector4()
    }
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

// SAFETY: `#[repr(C)]` struct of four fields of the same type, no padding.
unsafe impl<T: Zeroable> Zeroable for Quaternion<T> {}
// SAFETY: see above.
unsafe impl<T: Pod> Pod for Quaternion<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    /// Same rotation, allowing for the double cover
    fn same_rotation(a: Quaternion<f32>, b: Quaternion<f32>) -> bool {
        a.normalized().dot(b.normalized()).abs() > 0.99999
    }

    #[test]
    fn test_identity() {
        let q = Quaternion::<f32>::identity();
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quaternion::<f32>::default(), q);
        assert!(q.is_identity());
        assert!(q.is_unit());
        let v = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(q * v, v);
    }

    #[test]
    fn test_magnitude_and_inverse() {
        let q = Quaternion::new(4.0_f32, -1.0, 1.0, 2.0);
        assert_eq!(q.magnitude_squared(), 22.0);
        assert!((q.magnitude() - 4.69).abs() < 0.001);

        let inverse = q.inverse();
        assert!((inverse.x + 0.182).abs() < 0.001);
        assert!((inverse.y - 0.045).abs() < 0.001);
        assert!((inverse.z + 0.045).abs() < 0.001);
        assert!((inverse.w - 0.091).abs() < 0.001);
        assert!((q * inverse).almost_equal_with(Quaternion::identity(), 1e-10));
    }

    #[test]
    fn test_zero_inverse_is_not_finite() {
        let zero = Quaternion::new(0.0_f32, 0.0, 0.0, 0.0);
        assert!(!zero.inverse().is_finite());
        assert!(!zero.normalized().is_finite());
    }

    #[test]
    fn test_conjugate_cancels_unit() {
        let q = Quaternion::new(0.3_f32, -0.5, 0.2, 0.7).normalized();
        assert_eq!(q.conjugate(), Quaternion::new(-q.x, -q.y, -q.z, q.w));
        assert!((q * q.conjugate()).is_almost_identity(1e-10));
    }

    #[test]
    fn test_axis_angle_rotation() {
        let q = Quaternion::create_by_axis_angle(Vector3::forward(), FRAC_PI_2);
        assert!(vec_approx_eq(q * Vector3::right(), Vector3::up()));
        assert!(vec_approx_eq(q * Vector3::up(), Vector3::left()));

        let yaw = Quaternion::create_by_axis_angle_degrees(Vector3::up(), 90.0);
        assert!(vec_approx_eq(yaw * Vector3::forward(), Vector3::right()));
    }

    #[test]
    fn test_rotation_agrees_with_signed_angle() {
        let axis = Vector3::<f32>::forward();
        let q = Quaternion::create_by_axis_angle(axis, 0.7);
        let from = Vector3::right();
        let to = q * from;
        assert!(approx_eq(from.angle_signed(to, axis), 0.7));
    }

    #[test]
    fn test_non_unit_rotation_scales() {
        let q = Quaternion::new(0.0_f32, 0.0, 0.0, 2.0);
        assert_eq!(q * Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 8.0, 12.0));
    }

    #[test]
    fn test_composition_order() {
        let first = Quaternion::create_by_axis_angle(Vector3::forward(), FRAC_PI_2);
        let second = Quaternion::create_by_axis_angle(Vector3::up(), FRAC_PI_2);
        let v = Vector3::<f32>::right();
        let composed = second * first;
        assert!(vec_approx_eq(composed * v, second * (first * v)));
        assert!(!vec_approx_eq(composed * v, first * (second * v)));

        let mut accumulated = second;
        accumulated *= first;
        assert_eq!(accumulated, composed);
    }

    #[test]
    fn test_euler_single_axes() {
        let yaw = Quaternion::create_by_euler_degrees(Vector3::new(0.0_f32, 90.0, 0.0));
        assert!(vec_approx_eq(yaw * Vector3::forward(), Vector3::right()));

        let pitch = Quaternion::create_by_euler_degrees(Vector3::new(90.0_f32, 0.0, 0.0));
        assert!(vec_approx_eq(pitch * Vector3::up(), Vector3::forward()));

        let roll = Quaternion::create_by_euler_degrees(Vector3::new(0.0_f32, 0.0, 90.0));
        assert!(vec_approx_eq(roll * Vector3::right(), Vector3::up()));
    }

    #[test]
    fn test_euler_order() {
        let euler = Vector3::new(20.0_f32, 30.0, 40.0);
        let q = Quaternion::create_by_euler_degrees(euler);
        let x = Quaternion::create_by_axis_angle_degrees(Vector3::right(), euler.x);
        let y = Quaternion::create_by_axis_angle_degrees(Vector3::up(), euler.y);
        let z = Quaternion::create_by_axis_angle_degrees(Vector3::forward(), euler.z);
        assert!(same_rotation(q, y * x * z));
    }

    #[test]
    fn test_euler_round_trip() {
        for euler in [
            Vector3::new(30.0_f32, 45.0, 60.0),
            Vector3::new(-80.0, 170.0, -120.0),
            Vector3::new(0.0, -90.0, 0.0),
            Vector3::new(10.0, 0.0, 179.0),
        ] {
            let extracted = Quaternion::create_by_euler_degrees(euler).euler_degrees();
            assert!((extracted.x - euler.x).abs() < 0.01, "{} -> {}", euler, extracted);
            assert!((extracted.y - euler.y).abs() < 0.01, "{} -> {}", euler, extracted);
            assert!((extracted.z - euler.z).abs() < 0.01, "{} -> {}", euler, extracted);
        }
    }

    #[test]
    fn test_euler_canonical_range() {
        // x outside [-90, 90] is folded back and y, z compensate
        let q = Quaternion::create_by_euler_degrees(Vector3::new(120.0_f32, 0.0, 0.0));
        let extracted = q.euler_degrees();
        assert!(approx_eq(extracted.x, 60.0));
        assert!(approx_eq(extracted.y.abs(), 180.0));
        assert!(approx_eq(extracted.z.abs(), 180.0));
        assert!(same_rotation(q, Quaternion::create_by_euler_degrees(extracted)));
    }

    #[test]
    fn test_euler_gimbal_lock() {
        let q = Quaternion::create_by_euler_degrees(Vector3::new(90.0_f32, 30.0, 0.0));
        let extracted = q.euler_degrees();
        assert!(approx_eq(extracted.x, 90.0));
        assert_eq!(extracted.y, 0.0);
        assert!((extracted.z + 30.0).abs() < 0.01);
        assert!(same_rotation(q, Quaternion::create_by_euler_degrees(extracted)));

        let down = Quaternion::create_by_euler_degrees(Vector3::new(-90.0_f32, 30.0, 10.0));
        let extracted = down.euler_degrees();
        assert!(approx_eq(extracted.x, -90.0));
        assert_eq!(extracted.y, 0.0);
        assert!(same_rotation(down, Quaternion::create_by_euler_degrees(extracted)));
    }

    #[test]
    fn test_axis_angle_round_trip() {
        let axis = Vector3::new(1.0_f32, 2.0, -2.0).normalized();
        for angle in [0.1_f32, 1.0, 2.5, 3.0] {
            let (extracted_axis, extracted_angle) =
                Quaternion::create_by_axis_angle(axis, angle).axis_angle();
            assert!(vec_approx_eq(extracted_axis, axis));
            assert!((extracted_angle - angle).abs() < 0.001);
        }

        let (_, degrees) = Quaternion::create_by_axis_angle_degrees(axis, 45.0).axis_angle_degrees();
        assert!((degrees - 45.0).abs() < 0.01);
    }

    #[test]
    fn test_identity_axis_is_undefined() {
        let (axis, angle) = Quaternion::<f32>::identity().axis_angle();
        assert_eq!(angle, 0.0);
        assert!(!axis.is_finite());
    }

    #[test]
    fn test_create_by_direction() {
        let q = Quaternion::create_by_direction(Vector3::right(), Vector3::new(0.0_f32, 5.0, 0.0));
        assert!(vec_approx_eq(q * Vector3::right(), Vector3::up()));
        assert!(approx_eq(q.angle(Quaternion::identity()), FRAC_PI_2));

        let from = Vector3::new(1.0_f32, 2.0, 3.0);
        let to = Vector3::new(-2.0_f32, 0.5, 1.0);
        let q = Quaternion::create_by_direction(from, to);
        assert!(q.is_almost_unit(1e-5));
        assert!(vec_approx_eq(q * from.normalized(), to.normalized()));

        let same = Quaternion::create_by_direction(from, from * 2.0);
        assert!(same.is_identity());
    }

    #[test]
    fn test_create_by_direction_antiparallel() {
        let q = Quaternion::create_by_direction(Vector3::up(), Vector3::<f32>::down());
        assert!(approx_eq(q.angle(Quaternion::identity()), PI));
        assert!(vec_approx_eq(q * Vector3::up(), Vector3::down()));

        let q = Quaternion::create_by_direction(Vector3::right(), Vector3::<f32>::left());
        assert!(q.is_finite());
        assert!(vec_approx_eq(q * Vector3::right(), Vector3::left()));
    }

    #[test]
    fn test_rotation_matrix_matches_rotation() {
        let q = Quaternion::create_by_euler_degrees(Vector3::new(15.0_f32, -40.0, 75.0));
        let m = q.rotation_matrix();
        let v = Vector3::new(0.3, -1.2, 2.0);
        assert!(vec_approx_eq(m * v, q * v));
        assert!(approx_eq(m.determinant(), 1.0));
    }

    #[test]
    fn test_rotation_matrix_round_trip() {
        for q in [
            Quaternion::create_by_euler_degrees(Vector3::new(15.0_f32, -40.0, 75.0)),
            Quaternion::create_by_axis_angle(Vector3::right(), PI),
            Quaternion::create_by_axis_angle(Vector3::up(), PI),
            Quaternion::create_by_axis_angle(Vector3::forward(), PI),
            Quaternion::create_by_axis_angle(Vector3::new(1.0, 1.0, 0.0).normalized(), 3.0),
        ] {
            let back = Quaternion::create_by_rotation_matrix(&q.rotation_matrix());
            assert!(same_rotation(q, back), "{} -> {}", q, back);
        }
    }

    #[test]
    fn test_angle_between() {
        let a = Quaternion::create_by_axis_angle(Vector3::up(), 0.2_f32);
        let b = Quaternion::create_by_axis_angle(Vector3::up(), 1.0_f32);
        assert!(approx_eq(a.angle(b), 0.8));
        assert!(approx_eq(a.angle(-b), 0.8));
        assert!(a.angle_degrees(a) < 0.1);
    }

    #[test]
    fn test_lerp_is_component_wise() {
        let a = Quaternion::new(0.0_f32, 0.0, 0.0, 1.0);
        let b = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, Quaternion::new(0.5, 0.0, 0.0, 0.5));
        assert!(!mid.is_unit());
    }

    #[test]
    fn test_slerp() {
        let a = Quaternion::<f32>::identity();
        let b = Quaternion::create_by_axis_angle(Vector3::forward(), FRAC_PI_2);

        assert_eq!(a.slerp(b, 0.0), a);
        assert!(b.almost_equal(a.slerp(b, 1.0)));
        assert_eq!(b.slerp(b, 0.3), b);

        let half = a.slerp(b, 0.5);
        let expected = Quaternion::create_by_axis_angle(Vector3::forward(), FRAC_PI_2 * 0.5);
        assert!(half.almost_equal_with(expected, 1e-10));
        assert!(half.is_almost_unit(1e-5));
    }

    #[test]
    fn test_slerp_takes_shortest_arc() {
        let a = Quaternion::<f32>::identity();
        let b = -Quaternion::create_by_axis_angle(Vector3::up(), 0.5);
        let end = a.slerp(b, 1.0);
        assert!(end.almost_equal_with(-b, 1e-10));
        let mid = a.slerp(b, 0.5);
        assert!(approx_eq(mid.angle(a), 0.25));
    }

    #[test]
    fn test_slerp_nearly_identical() {
        let a = Quaternion::create_by_axis_angle(Vector3::up(), 0.3_f32);
        let b = Quaternion::create_by_axis_angle(Vector3::up(), 0.3001_f32);
        let mid = a.slerp(b, 0.5);
        assert!(mid.is_finite());
        assert!(mid.is_almost_unit(1e-5));
    }

    #[test]
    fn test_unit_predicates() {
        let q = Quaternion::new(0.0_f32, 0.0, 0.0, 1.001);
        assert!(!q.is_unit());
        assert!(!q.is_almost_unit(0.0015));
        assert!(q.is_almost_unit_precise(0.0015));
        assert!(q.is_almost_unit(0.0025));

        let near = Quaternion::new(0.01_f32, 0.0, 0.0, 1.0);
        assert!(!near.is_identity());
        assert!(near.is_almost_identity(0.0002));
        assert!(!near.is_almost_identity_precise(0.005));
        assert!(near.is_almost_identity_precise(0.02));
    }

    #[test]
    fn test_vector4_layout() {
        let v = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        let q = Quaternion::from(v);
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Vector4::from(q), v);
        assert_eq!(bytemuck::cast::<_, Vector4<f32>>(q), v);
        assert_eq!(q[2], 3.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quaternion::new(0.5_f32, 0.0, -1.0, 2.0).to_string(), "(0.5, 0, -1, 2)");
    }
}
