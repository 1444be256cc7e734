//! Shared color implementation
//!
//! [`RGB`](crate::RGB) and [`RGBA`](crate::RGBA) get their arithmetic from [`impl_color`],
//! [`RGBInt`](crate::RGBInt) and [`RGBAInt`](crate::RGBAInt) their storage helpers from
//! [`impl_int_color`]. The r, g and b channels are always present; alpha handling lives next
//! to each type.

/// Implements channel queries, interpolation, operators and conversions on a floating color.
///
/// Channels are listed as `field: index: "label"` in storage order. The type must provide
/// `map_rgb`, which applies a function to the r, g and b channels and leaves alpha untouched.
macro_rules! impl_color {
    (@scalar_lhs $name:ident; $($t:ty),+) => {$(
        impl Mul<$name<$t>> for $t {
            type Output = $name<$t>;
            #[inline]
            fn mul(self, color: $name<$t>) -> $name<$t> {
                color * self
            }
        }
    )+};

    ($name:ident, $vector:ident, $n:literal, $($field:ident : $index:tt : $label:literal),+) => {
        impl<T: Real> $name<T> {
            /// Create from channel values
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Channels as a vector
            #[inline]
            pub fn to_vector(self) -> $vector<T> {
                $vector::new($(self.$field),+)
            }

            /// Luminance of the r, g and b channels
            #[inline]
            pub fn grayscale(self) -> T {
                let [r, g, b] = GRAYSCALE_WEIGHTS;
                self.r * T::from_f64(r) + self.g * T::from_f64(g) + self.b * T::from_f64(b)
            }

            /// Convert linear channels to gamma space
            #[inline]
            pub fn gamma(self) -> Self {
                let exponent = T::one() / T::from_f64(GAMMA_VALUE);
                self.map_rgb(|c| c.powf(exponent))
            }

            /// Convert gamma-space channels to linear space
            #[inline]
            pub fn linear(self) -> Self {
                let exponent = T::from_f64(GAMMA_VALUE);
                self.map_rgb(|c| c.powf(exponent))
            }

            /// Smallest of the r, g and b channels
            #[inline]
            pub fn min(self) -> T {
                self.r.min(self.g).min(self.b)
            }

            /// Largest of the r, g and b channels
            #[inline]
            pub fn max(self) -> T {
                self.r.max(self.g).max(self.b)
            }

            /// Smallest and largest of the r, g and b channels
            #[inline]
            pub fn min_max(self) -> (T, T) {
                (self.min(), self.max())
            }

            /// Channel-wise minimum
            #[inline]
            pub fn component_min(self, other: Self) -> Self {
                Self::from(self.to_vector().min(other.to_vector()))
            }

            /// Channel-wise maximum
            #[inline]
            pub fn component_max(self, other: Self) -> Self {
                Self::from(self.to_vector().max(other.to_vector()))
            }

            /// Clamp each channel between the corresponding channels of `min` and `max`
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self::from(self.to_vector().clamp(min.to_vector(), max.to_vector()))
            }

            /// Linear interpolation, `t` is not clamped
            #[inline]
            pub fn lerp(self, other: Self, t: T) -> Self {
                Self::from(self.to_vector().lerp(other.to_vector(), t))
            }

            /// Squared Euclidean distance over all channels
            #[inline]
            pub fn distance_squared(self, other: Self) -> T {
                (self.to_vector() - other.to_vector()).magnitude_squared()
            }

            /// Euclidean distance over all channels
            #[inline]
            pub fn distance(self, other: Self) -> T {
                self.distance_squared(other).sqrt()
            }

            /// Whether the r, g and b channels are exactly zero
            #[inline]
            pub fn is_black(self) -> bool {
                self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
            }

            /// Whether the r, g and b channels are exactly one
            #[inline]
            pub fn is_white(self) -> bool {
                self.r == T::one() && self.g == T::one() && self.b == T::one()
            }

            /// Whether the squared distance of the r, g and b channels to black is within
            /// `tolerance`
            #[inline]
            pub fn is_almost_black(self, tolerance: T) -> bool {
                Vector3::new(self.r, self.g, self.b).is_almost_zero(tolerance)
            }

            /// Whether the squared distance of the r, g and b channels to white is within
            /// `tolerance`
            #[inline]
            pub fn is_almost_white(self, tolerance: T) -> bool {
                Vector3::new(self.r, self.g, self.b).almost_equal_with(Vector3::one(), tolerance)
            }

            /// Whether no channel is infinite or NaN
            #[inline]
            pub fn is_finite(self) -> bool {
                self.to_vector().is_finite()
            }

            /// Approximate equality with the default tolerance
            #[inline]
            pub fn almost_equal(self, other: Self) -> bool {
                self.to_vector().almost_equal(other.to_vector())
            }

            /// Approximate equality: the squared distance is at most `tolerance`
            #[inline]
            pub fn almost_equal_with(self, other: Self, tolerance: T) -> bool {
                self.distance_squared(other) <= tolerance
            }
        }

        impl<T: Real> From<$vector<T>> for $name<T> {
            #[inline]
            fn from(vector: $vector<T>) -> Self {
                Self { $($field: vector[$index]),+ }
            }
        }

        impl<T: Real> From<$name<T>> for $vector<T> {
            #[inline]
            fn from(color: $name<T>) -> Self {
                color.to_vector()
            }
        }

        impl<T: Real> From<[T; $n]> for $name<T> {
            #[inline]
            fn from(array: [T; $n]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }
        }

        impl<T: Real> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(color: $name<T>) -> Self {
                [$(color.$field),+]
            }
        }

        impl<T: Real> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }
        }

        impl<T: Real> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl<T: Real> Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }
        }

        impl<T: Real> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl<T: Real> Mul for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, other: Self) -> Self {
                Self { $($field: self.$field * other.$field),+ }
            }
        }

        impl<T: Real> MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }

        impl<T: Real> Div for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, other: Self) -> Self {
                Self { $($field: self.$field / other.$field),+ }
            }
        }

        impl<T: Real> DivAssign for $name<T> {
            #[inline]
            fn div_assign(&mut self, other: Self) {
                *self = *self / other;
            }
        }

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: T) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl<T: Real> MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, scalar: T) {
                *self = *self * scalar;
            }
        }

        impl<T: Real> Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, scalar: T) -> Self {
                Self { $($field: self.$field / scalar),+ }
            }
        }

        impl<T: Real> DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, scalar: T) {
                *self = *self / scalar;
            }
        }

        impl_color_storage!($name, $n, $($field : $index : $label),+);
        impl_color!(@scalar_lhs $name; f32, f64);
    };
}

/// Implements channel indexing, conversions from arrays and integer channel helpers on an
/// integer color.
macro_rules! impl_int_color {
    ($name:ident, $n:literal, $($field:ident : $index:tt : $label:literal),+) => {
        impl<T: ColorInt> $name<T> {
            /// Create from channel values
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Smallest of the r, g and b channels
            #[inline]
            pub fn min(self) -> T {
                self.r.min(self.g).min(self.b)
            }

            /// Largest of the r, g and b channels
            #[inline]
            pub fn max(self) -> T {
                self.r.max(self.g).max(self.b)
            }

            /// Smallest and largest of the r, g and b channels
            #[inline]
            pub fn min_max(self) -> (T, T) {
                (self.min(), self.max())
            }

            /// Whether the r, g and b channels are zero
            #[inline]
            pub fn is_black(self) -> bool {
                self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
            }

            /// Whether the r, g and b channels are at the channel maximum
            #[inline]
            pub fn is_white(self) -> bool {
                let max = T::max_value();
                self.r == max && self.g == max && self.b == max
            }
        }

        impl<T: ColorInt> From<[T; $n]> for $name<T> {
            #[inline]
            fn from(array: [T; $n]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }
        }

        impl<T: ColorInt> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(color: $name<T>) -> Self {
                [$(color.$field),+]
            }
        }

        impl_color_storage!($name, $n, $($field : $index : $label),+);
    };
}

/// Implements indexing, `Display` and `Pod` on any color type.
macro_rules! impl_color_storage {
    ($name:ident, $n:literal, $($field:ident : $index:tt : $label:literal),+) => {
        impl<T> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match index {
                    $($index => &self.$field,)+
                    _ => panic!(concat!(stringify!($name), " index out of range: {}"), index),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($index => &mut self.$field,)+
                    _ => panic!(concat!(stringify!($name), " index out of range: {}"), index),
                }
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let channels = [$(($label, &self.$field)),+];
                write!(f, "(")?;
                for (i, (label, value)) in channels.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", label, value)?;
                }
                write!(f, ")")
            }
        }

        // SAFETY: `#[repr(C)]` struct whose channels all have the same type, so it has no padding.
        unsafe impl<T: Zeroable> Zeroable for $name<T> {}
        // SAFETY: see above.
        unsafe impl<T: Pod> Pod for $name<T> {}
    };
}
