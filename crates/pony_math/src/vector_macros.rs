//! Shared vector implementation
//!
//! [`Vector2`](crate::Vector2), [`Vector3`](crate::Vector3) and [`Vector4`](crate::Vector4)
//! only differ in their component list, so everything that does not depend on the dimension
//! is generated by [`impl_vector`].

/// Implements construction, algebra, predicates, operators and conversions on a vector type.
///
/// Components are listed as `field: index` pairs in storage order.
macro_rules! impl_vector {
    (@scalar_lhs $name:ident; $($t:ty),+) => {$(
        impl Mul<$name<$t>> for $t {
            type Output = $name<$t>;
            #[inline]
            fn mul(self, vector: $name<$t>) -> $name<$t> {
                vector * self
            }
        }
    )+};

    ($name:ident, $n:literal, $($field:ident : $index:tt),+) => {
        impl<T: Number> $name<T> {
            /// Create a new vector
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Vector with every component set to zero
            #[inline]
            pub fn zero() -> Self {
                Self { $($field: T::zero()),+ }
            }

            /// Vector with every component set to one
            #[inline]
            pub fn one() -> Self {
                Self { $($field: T::one()),+ }
            }

            /// Components in storage order
            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Apply `f` to every component
            #[inline]
            pub fn map<U: Number>(self, f: impl Fn(T) -> U) -> $name<U> {
                $name { $($field: f(self.$field)),+ }
            }

            /// Combine two vectors component by component
            #[inline]
            pub fn combine(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
                Self { $($field: f(self.$field, other.$field)),+ }
            }

            /// Convert every component with `as` semantics
            #[inline]
            pub fn cast<U: Number>(self) -> $name<U>
            where
                T: AsPrimitive<U>,
            {
                self.map(|c| c.as_())
            }

            /// Dot product
            #[inline]
            pub fn dot(self, other: Self) -> T {
                let mut sum = T::zero();
                $(sum = sum + self.$field * other.$field;)+
                sum
            }

            /// Dot product accumulated in the computational type, free of integer overflow
            #[inline]
            pub fn dot_computational(self, other: Self) -> T::Computational {
                let mut sum = T::Computational::zero();
                $(sum = sum + self.$field.to_computational() * other.$field.to_computational();)+
                sum
            }

            /// Squared magnitude, exact for integer components that do not overflow
            #[inline]
            pub fn magnitude_squared(self) -> T {
                self.dot(self)
            }

            /// Squared magnitude in the computational type
            #[inline]
            pub fn magnitude_squared_computational(self) -> T::Computational {
                self.dot_computational(self)
            }

            /// Magnitude (length)
            #[inline]
            pub fn magnitude(self) -> T::Computational {
                self.magnitude_squared_computational().sqrt()
            }

            /// Unit vector with the same direction
            ///
            /// A zero vector divides by zero: floating components become NaN.
            #[inline]
            pub fn normalized(self) -> Self {
                let magnitude = self.magnitude();
                self.map(|c| T::from_computational(c.to_computational() / magnitude))
            }

            /// Normalize in place
            #[inline]
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            /// Smallest component
            pub fn min_component(self) -> T {
                let components = self.to_array();
                components[1..].iter().fold(components[0], |acc, &c| partial_min(acc, c))
            }

            /// Largest component
            pub fn max_component(self) -> T {
                let components = self.to_array();
                components[1..].iter().fold(components[0], |acc, &c| partial_max(acc, c))
            }

            /// Sum of the components
            #[inline]
            pub fn sum(self) -> T {
                let mut sum = T::zero();
                $(sum = sum + self.$field;)+
                sum
            }

            /// Component-wise multiplication
            #[inline]
            pub fn scale(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }

            /// Component-wise minimum
            #[inline]
            pub fn min(self, other: Self) -> Self {
                self.combine(other, partial_min)
            }

            /// Component-wise maximum
            #[inline]
            pub fn max(self, other: Self) -> Self {
                self.combine(other, partial_max)
            }

            /// Clamp each component between the corresponding components of `min` and `max`
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self { $($field: clamp(self.$field, min.$field, max.$field)),+ }
            }

            /// Linear interpolation, `t` is not clamped
            #[inline]
            pub fn lerp(self, other: Self, t: T::Computational) -> Self {
                Self {
                    $($field: {
                        let from = self.$field.to_computational();
                        T::from_computational(from + (other.$field.to_computational() - from) * t)
                    }),+
                }
            }

            /// Projection of `self` onto `target`
            ///
            /// Projecting onto a zero vector yields NaN components.
            pub fn project(self, target: Self) -> Self {
                let factor =
                    self.dot_computational(target) / target.magnitude_squared_computational();
                target.map(|c| T::from_computational(c.to_computational() * factor))
            }

            /// Reflection of `self` off the surface with the given unit `normal`
            #[inline]
            pub fn reflect(self, normal: Self) -> Self {
                let dot = self.dot(normal);
                self - normal * (dot + dot)
            }

            /// Unsigned angle to `other` in radians, in `[0, π]`
            pub fn angle(self, other: Self) -> T::Computational {
                let one = T::Computational::one();
                let cos = self.dot_computational(other) / (self.magnitude() * other.magnitude());
                clamp(cos, -one, one).acos()
            }

            /// Unsigned angle to `other` in degrees
            #[inline]
            pub fn angle_degrees(self, other: Self) -> T::Computational {
                self.angle(other).to_degrees()
            }

            /// Whether every component is exactly zero
            #[inline]
            pub fn is_zero(self) -> bool {
                true $(&& self.$field == T::zero())+
            }

            /// Whether the squared magnitude is within `tolerance` of zero
            #[inline]
            pub fn is_almost_zero(self, tolerance: T::Computational) -> bool {
                self.magnitude_squared_computational() <= tolerance
            }

            /// Whether the squared magnitude is exactly one
            #[inline]
            pub fn is_unit(self) -> bool {
                self.magnitude_squared_computational() == T::Computational::one()
            }

            /// Whether the squared magnitude is within `tolerance` of one
            #[inline]
            pub fn is_almost_unit(self, tolerance: T::Computational) -> bool {
                let one = T::Computational::one();
                (self.magnitude_squared_computational() - one).abs() <= tolerance
            }

            /// Whether no component is infinite or NaN
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.to_computational().is_finite())+
            }

            /// Approximate equality with the default tolerance
            #[inline]
            pub fn almost_equal(self, other: Self) -> bool {
                self.almost_equal_with(other, T::Computational::default_tolerance())
            }

            /// Approximate equality: the squared magnitude of the difference is at most `tolerance`
            pub fn almost_equal_with(self, other: Self, tolerance: T::Computational) -> bool {
                let mut distance = T::Computational::zero();
                $(
                    let difference = self.$field.to_computational() - other.$field.to_computational();
                    distance = distance + difference * difference;
                )+
                distance <= tolerance
            }
        }

        impl<T: Number + Neg<Output = T>> $name<T> {
            /// Vector with every component set to minus one
            #[inline]
            pub fn negative() -> Self {
                Self { $($field: -T::one()),+ }
            }
        }

        impl<T: Number> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match index {
                    $($index => &self.$field,)+
                    _ => panic!(concat!(stringify!($name), " index out of range: {}"), index),
                }
            }
        }

        impl<T: Number> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($index => &mut self.$field,)+
                    _ => panic!(concat!(stringify!($name), " index out of range: {}"), index),
                }
            }
        }

        impl<T: Number> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }
        }

        impl<T: Number> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl<T: Number> Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }
        }

        impl<T: Number> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl<T: Number> Mul for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, other: Self) -> Self {
                self.scale(other)
            }
        }

        impl<T: Number> MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }

        impl<T: Number> Div for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, other: Self) -> Self {
                Self { $($field: self.$field / other.$field),+ }
            }
        }

        impl<T: Number> DivAssign for $name<T> {
            #[inline]
            fn div_assign(&mut self, other: Self) {
                *self = *self / other;
            }
        }

        impl<T: Number> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: T) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl<T: Number> MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, scalar: T) {
                *self = *self * scalar;
            }
        }

        impl<T: Number> Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, scalar: T) -> Self {
                Self { $($field: self.$field / scalar),+ }
            }
        }

        impl<T: Number> DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, scalar: T) {
                *self = *self / scalar;
            }
        }

        impl<T: Number + Neg<Output = T>> Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Number> From<[T; $n]> for $name<T> {
            #[inline]
            fn from(array: [T; $n]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }
        }

        impl<T: Number> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(vector: $name<T>) -> Self {
                vector.to_array()
            }
        }

        impl<T: Number> TryFrom<&[T]> for $name<T> {
            type Error = TryFromSliceError;

            /// Build from a slice holding exactly as many elements as the vector has components
            fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
                <[T; $n]>::try_from(slice).map(Self::from)
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let components = [$(&self.$field),+];
                write!(f, "(")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", component)?;
                }
                write!(f, ")")
            }
        }

        // SAFETY: `#[repr(C)]` struct whose fields all have the same type, so it has no padding.
        unsafe impl<T: Zeroable> Zeroable for $name<T> {}
        // SAFETY: see above; every bit pattern valid for `T` is valid for each field.
        unsafe impl<T: Pod> Pod for $name<T> {}

        impl_vector!(@scalar_lhs $name; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
    };
}
