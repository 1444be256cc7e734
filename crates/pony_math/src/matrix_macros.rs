//! Shared square matrix implementation
//!
//! Matrices are stored as an array of column vectors. Everything that does not depend on the
//! size (accessors, transposition, operators, conversions) is generated by [`impl_matrix`];
//! determinant and inverse live next to each type.

/// Implements construction, accessors, operators and conversions on a square matrix type.
///
/// `components` lists the column vector's fields with their index, `accessors` names every
/// `m<row><column>` getter.
macro_rules! impl_matrix {
    (@scalar_lhs $name:ident; $($t:ty),+) => {$(
        impl Mul<$name<$t>> for $t {
            type Output = $name<$t>;
            #[inline]
            fn mul(self, matrix: $name<$t>) -> $name<$t> {
                matrix * self
            }
        }
    )+};

    (
        $name:ident, $vector:ident, $n:literal,
        components: [$($field:ident : $index:tt),+],
        accessors: [$($accessor:ident : $row:tt $column:tt),+]
    ) => {
        impl<T: Number> $name<T> {
            /// Create from column vectors
            #[inline]
            pub const fn from_columns(columns: [$vector<T>; $n]) -> Self {
                Self { columns }
            }

            /// Create from row vectors
            #[inline]
            pub fn from_rows(rows: [$vector<T>; $n]) -> Self {
                Self::from_columns(rows).transpose()
            }

            /// Matrix with every entry set to zero
            #[inline]
            pub fn zero() -> Self {
                Self::from_columns([$vector::zero(); $n])
            }

            /// Identity matrix
            pub fn identity() -> Self {
                let mut matrix = Self::zero();
                for i in 0..$n {
                    matrix.columns[i][i] = T::one();
                }
                matrix
            }

            /// Diagonal matrix with the given diagonal entries
            pub fn from_diagonal(diagonal: $vector<T>) -> Self {
                let mut matrix = Self::zero();
                $(matrix.columns[$index][$index] = diagonal.$field;)+
                matrix
            }

            $(
                #[doc = concat!("Entry at row ", stringify!($row), ", column ", stringify!($column))]
                #[inline]
                pub fn $accessor(&self) -> T {
                    self.columns[$column][$row]
                }
            )+

            /// Entry at (`row`, `column`)
            #[inline]
            pub fn get(&self, row: usize, column: usize) -> T {
                self.columns[column][row]
            }

            /// Set the entry at (`row`, `column`)
            #[inline]
            pub fn set(&mut self, row: usize, column: usize, value: T) {
                self.columns[column][row] = value;
            }

            /// Column vector
            #[inline]
            pub fn column(&self, column: usize) -> $vector<T> {
                self.columns[column]
            }

            /// Replace a column
            #[inline]
            pub fn set_column(&mut self, column: usize, value: $vector<T>) {
                self.columns[column] = value;
            }

            /// Row vector
            #[inline]
            pub fn row(&self, row: usize) -> $vector<T> {
                $vector { $($field: self.columns[$index][row]),+ }
            }

            /// Replace a row
            #[inline]
            pub fn set_row(&mut self, row: usize, value: $vector<T>) {
                $(self.columns[$index][row] = value.$field;)+
            }

            /// Main diagonal
            #[inline]
            pub fn diagonal(&self) -> $vector<T> {
                $vector { $($field: self.columns[$index][$index]),+ }
            }

            /// Sum of the main diagonal
            #[inline]
            pub fn trace(&self) -> T {
                self.diagonal().sum()
            }

            /// Rows become columns
            #[inline]
            pub fn transpose(&self) -> Self {
                Self::from_columns([$(self.row($index)),+])
            }

            /// Apply `f` to every entry
            #[inline]
            pub fn map<U: Number>(&self, f: impl Fn(T) -> U) -> $name<U> {
                $name::from_columns([$(self.columns[$index].map(&f)),+])
            }

            /// Entry-wise multiplication
            #[inline]
            pub fn scale(&self, other: &Self) -> Self {
                Self::from_columns([$(self.columns[$index] * other.columns[$index]),+])
            }

            /// Whether this is exactly the identity matrix
            #[inline]
            pub fn is_identity(&self) -> bool {
                *self == Self::identity()
            }

            /// Whether no entry is infinite or NaN
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.columns.iter().all(|column| column.is_finite())
            }

            /// Approximate equality with the default tolerance
            #[inline]
            pub fn almost_equal(&self, other: &Self) -> bool {
                self.almost_equal_with(other, T::Computational::default_tolerance())
            }

            /// Approximate equality: the sum of squared entry differences is at most `tolerance`
            pub fn almost_equal_with(&self, other: &Self, tolerance: T::Computational) -> bool {
                let mut distance = T::Computational::zero();
                for (a, b) in self.columns.iter().zip(other.columns.iter()) {
                    for i in 0..$n {
                        let difference = a[i].to_computational() - b[i].to_computational();
                        distance = distance + difference * difference;
                    }
                }
                distance <= tolerance
            }
        }

        impl<T: Number> Index<usize> for $name<T> {
            type Output = $vector<T>;

            /// Column vector
            #[inline]
            fn index(&self, column: usize) -> &$vector<T> {
                &self.columns[column]
            }
        }

        impl<T: Number> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, column: usize) -> &mut $vector<T> {
                &mut self.columns[column]
            }
        }

        impl<T: Number> Index<(usize, usize)> for $name<T> {
            type Output = T;

            /// Entry at (row, column)
            #[inline]
            fn index(&self, (row, column): (usize, usize)) -> &T {
                &self.columns[column][row]
            }
        }

        impl<T: Number> IndexMut<(usize, usize)> for $name<T> {
            #[inline]
            fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
                &mut self.columns[column][row]
            }
        }

        impl<T: Number> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self::from_columns([$(self.columns[$index] + other.columns[$index]),+])
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
                Self::from_columns([$(self.columns[$index] - other.columns[$index]),+])
            }
        }

        impl<T: Number> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl<T: Number> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: T) -> Self {
                Self::from_columns([$(self.columns[$index] * scalar),+])
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
                Self::from_columns([$(self.columns[$index] / scalar),+])
            }
        }

        impl<T: Number> DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, scalar: T) {
                *self = *self / scalar;
            }
        }

        impl<T: Number> Mul<$vector<T>> for $name<T> {
            type Output = $vector<T>;

            /// Transform a column vector
            #[inline]
            fn mul(self, vector: $vector<T>) -> $vector<T> {
                let mut result = $vector::zero();
                $(result = result + self.columns[$index] * vector.$field;)+
                result
            }
        }

        impl<T: Number> Mul for $name<T> {
            type Output = Self;

            /// Standard matrix product; `a * b` applies `b` first
            #[inline]
            fn mul(self, other: Self) -> Self {
                Self::from_columns([$(self * other.columns[$index]),+])
            }
        }

        impl<T: Number> MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }

        impl<T: Number + Neg<Output = T>> Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self::from_columns([$(-self.columns[$index]),+])
            }
        }

        impl<T: Number> From<[$vector<T>; $n]> for $name<T> {
            /// Columns in order
            #[inline]
            fn from(columns: [$vector<T>; $n]) -> Self {
                Self::from_columns(columns)
            }
        }

        impl<T: Number> fmt::Display for $name<T> {
            /// Entries in row-major order
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "(")?;
                for row in 0..$n {
                    for column in 0..$n {
                        if row > 0 || column > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.columns[column][row])?;
                    }
                }
                write!(f, ")")
            }
        }

        // SAFETY: `#[repr(C)]` array of `#[repr(C)]` vectors of a single element type, no padding.
        unsafe impl<T: Zeroable> Zeroable for $name<T> {}
        // SAFETY: see above.
        unsafe impl<T: Pod> Pod for $name<T> {}

        impl_matrix!(@scalar_lhs $name; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
    };
}
