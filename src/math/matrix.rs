//! Operations shared by the square matrix types.
//!
//! Matrices store their elements in a flat row-major array and act on column
//! vectors (`M * v`). The flat index is 0-based, the `(row, col)` index is
//! 1-based to match the `aRC` element names.

/// Named element getters, `a11()` through `aNN()`
macro_rules! impl_named_elements {
    ($ty:ident, $($name:ident => $idx:expr),+ $(,)?) => {
        impl<T: $crate::math::Real> $ty<T> {
            $(
                #[inline]
                pub fn $name(&self) -> T {
                    self.elements[$idx]
                }
            )+
        }
    };
}
pub(crate) use impl_named_elements;

/// Everything a square matrix type gets once it provides `ZERO`, `IDENTITY`,
/// `determinant` and `adjugate`.
macro_rules! impl_square_matrix {
    ($ty:ident, $vec:ident, $n:expr) => {
        impl<T: $crate::math::Real> $ty<T> {
            /// Creates a matrix from a row-major slice. Missing elements are
            /// zero, extra elements are ignored.
            pub fn from_slice(values: &[T]) -> Self {
                let mut m = Self::ZERO;
                for (dst, src) in m.elements.iter_mut().zip(values.iter()) {
                    *dst = *src;
                }
                m
            }

            /// Sets every element to zero
            #[inline]
            pub fn make_zero(&mut self) -> &mut Self {
                *self = Self::ZERO;
                self
            }

            /// Resets the matrix to the identity
            #[inline]
            pub fn make_identity(&mut self) -> &mut Self {
                *self = Self::IDENTITY;
                self
            }

            #[inline]
            pub fn is_identity(&self) -> bool {
                *self == Self::IDENTITY
            }

            #[inline]
            pub fn is_zero(&self) -> bool {
                *self == Self::ZERO
            }

            /// Returns the transpose of the matrix
            pub fn transpose(&self) -> Self {
                let mut result = Self::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        result.elements[col * $n + row] = self.elements[row * $n + col];
                    }
                }
                result
            }

            /// Transposes the matrix in-place
            #[inline]
            pub fn transpose_mut(&mut self) -> &mut Self {
                *self = self.transpose();
                self
            }

            /// Sum of the diagonal elements
            pub fn trace(&self) -> T {
                (0..$n).fold(T::ZERO, |sum, i| sum + self.elements[i * $n + i])
            }

            /// Returns true if the determinant is not approximately zero
            #[inline]
            pub fn is_invertible(&self) -> bool {
                !$crate::math::approx_zero(self.determinant())
            }

            /// Returns the inverse, computed as `adjugate / determinant`.
            ///
            /// The matrix must be invertible; this is only checked in debug builds.
            pub fn inverse(&self) -> Self {
                let det = self.determinant();
                debug_assert!(
                    !$crate::math::approx_zero(det),
                    "inverting a singular {}",
                    stringify!($ty)
                );
                self.adjugate() * det.recip()
            }

            /// Inverts the matrix in-place
            #[inline]
            pub fn invert(&mut self) -> &mut Self {
                *self = self.inverse();
                self
            }

            /// Returns the inverse, or [`MathError::SingularMatrix`] when the
            /// determinant is approximately zero
            ///
            /// [`MathError::SingularMatrix`]: crate::error::MathError::SingularMatrix
            pub fn try_inverse(&self) -> $crate::Result<Self> {
                let det = self.determinant();
                if $crate::math::approx_zero(det) {
                    tracing::debug!(determinant = det.to_f64(), "{} is singular", stringify!($ty));
                    return Err($crate::error::MathError::SingularMatrix {
                        determinant: det.to_f64(),
                    });
                }
                Ok(self.adjugate() * det.recip())
            }

            /// `self * rhsᵀ`
            #[inline]
            pub fn multiply_transpose(&self, rhs: &Self) -> Self {
                *self * rhs.transpose()
            }

            /// `selfᵀ * rhs`
            #[inline]
            pub fn transpose_multiply(&self, rhs: &Self) -> Self {
                self.transpose() * *rhs
            }

            /// `selfᵀ * rhsᵀ`
            #[inline]
            pub fn transpose_multiply_transpose(&self, rhs: &Self) -> Self {
                (*rhs * *self).transpose()
            }

            /// Returns the row with the given 1-based index
            pub fn row(&self, row: usize) -> $vec<T> {
                let mut v = $vec::zero();
                for col in 1..=$n {
                    v[col - 1] = self[(row, col)];
                }
                v
            }

            /// Replaces the row with the given 1-based index
            pub fn set_row(&mut self, row: usize, v: $vec<T>) -> &mut Self {
                for col in 1..=$n {
                    self[(row, col)] = v[col - 1];
                }
                self
            }

            /// Replaces the row with the given 1-based index from a slice
            pub fn set_row_from_slice(&mut self, row: usize, values: &[T]) -> &mut Self {
                self.set_row(row, $vec::from_slice(values))
            }

            /// Returns the column with the given 1-based index
            pub fn column(&self, col: usize) -> $vec<T> {
                let mut v = $vec::zero();
                for row in 1..=$n {
                    v[row - 1] = self[(row, col)];
                }
                v
            }

            /// Replaces the column with the given 1-based index
            pub fn set_column(&mut self, col: usize, v: $vec<T>) -> &mut Self {
                for row in 1..=$n {
                    self[(row, col)] = v[row - 1];
                }
                self
            }

            /// Replaces the column with the given 1-based index from a slice
            pub fn set_column_from_slice(&mut self, col: usize, values: &[T]) -> &mut Self {
                self.set_column(col, $vec::from_slice(values))
            }
        }

        impl<T: $crate::math::Real> Default for $ty<T> {
            #[inline]
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl<T: $crate::math::Real> std::ops::Index<usize> for $ty<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                &self.elements[index]
            }
        }

        impl<T: $crate::math::Real> std::ops::IndexMut<usize> for $ty<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.elements[index]
            }
        }

        impl<T: $crate::math::Real> std::ops::Index<(usize, usize)> for $ty<T> {
            type Output = T;

            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &T {
                assert!(
                    (1..=$n).contains(&row) && (1..=$n).contains(&col),
                    "{} element ({}, {}) out of range",
                    stringify!($ty),
                    row,
                    col
                );
                &self.elements[(row - 1) * $n + (col - 1)]
            }
        }

        impl<T: $crate::math::Real> std::ops::IndexMut<(usize, usize)> for $ty<T> {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
                assert!(
                    (1..=$n).contains(&row) && (1..=$n).contains(&col),
                    "{} element ({}, {}) out of range",
                    stringify!($ty),
                    row,
                    col
                );
                &mut self.elements[(row - 1) * $n + (col - 1)]
            }
        }

        $crate::math::impl_tolerant_eq!($ty[elements]);

        impl<T: $crate::math::Real> std::ops::Add for $ty<T> {
            type Output = Self;
            fn add(mut self, rhs: Self) -> Self {
                self += rhs;
                self
            }
        }

        impl<T: $crate::math::Real> std::ops::Sub for $ty<T> {
            type Output = Self;
            fn sub(mut self, rhs: Self) -> Self {
                self -= rhs;
                self
            }
        }

        impl<T: $crate::math::Real> std::ops::Neg for $ty<T> {
            type Output = Self;
            fn neg(mut self) -> Self {
                for e in self.elements.iter_mut() {
                    *e = -*e;
                }
                self
            }
        }

        impl<T: $crate::math::Real> std::ops::Mul<T> for $ty<T> {
            type Output = Self;
            fn mul(mut self, rhs: T) -> Self {
                self *= rhs;
                self
            }
        }

        impl<T: $crate::math::Real> std::ops::Div<T> for $ty<T> {
            type Output = Self;
            fn div(mut self, rhs: T) -> Self {
                self /= rhs;
                self
            }
        }

        impl<T: $crate::math::Real> std::ops::Mul for $ty<T> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                let mut result = Self::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        let mut sum = T::ZERO;
                        for k in 0..$n {
                            sum += self.elements[row * $n + k] * rhs.elements[k * $n + col];
                        }
                        result.elements[row * $n + col] = sum;
                    }
                }
                result
            }
        }

        impl<T: $crate::math::Real> std::ops::Mul<$vec<T>> for $ty<T> {
            type Output = $vec<T>;
            fn mul(self, rhs: $vec<T>) -> $vec<T> {
                let mut result = $vec::zero();
                for row in 0..$n {
                    let mut sum = T::ZERO;
                    for col in 0..$n {
                        sum += self.elements[row * $n + col] * rhs[col];
                    }
                    result[row] = sum;
                }
                result
            }
        }

        impl<T: $crate::math::Real> std::ops::AddAssign for $ty<T> {
            fn add_assign(&mut self, rhs: Self) {
                for (a, b) in self.elements.iter_mut().zip(rhs.elements.iter()) {
                    *a += *b;
                }
            }
        }

        impl<T: $crate::math::Real> std::ops::SubAssign for $ty<T> {
            fn sub_assign(&mut self, rhs: Self) {
                for (a, b) in self.elements.iter_mut().zip(rhs.elements.iter()) {
                    *a -= *b;
                }
            }
        }

        impl<T: $crate::math::Real> std::ops::MulAssign<T> for $ty<T> {
            fn mul_assign(&mut self, rhs: T) {
                for e in self.elements.iter_mut() {
                    *e *= rhs;
                }
            }
        }

        impl<T: $crate::math::Real> std::ops::DivAssign<T> for $ty<T> {
            fn div_assign(&mut self, rhs: T) {
                debug_assert!(rhs != T::ZERO, "division of a matrix by zero");
                *self *= rhs.recip();
            }
        }

        impl<T: $crate::math::Real> std::ops::MulAssign for $ty<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl std::ops::Mul<$ty<f32>> for f32 {
            type Output = $ty<f32>;
            #[inline]
            fn mul(self, rhs: $ty<f32>) -> $ty<f32> {
                rhs * self
            }
        }

        impl std::ops::Mul<$ty<f64>> for f64 {
            type Output = $ty<f64>;
            #[inline]
            fn mul(self, rhs: $ty<f64>) -> $ty<f64> {
                rhs * self
            }
        }

        impl<T: $crate::math::Real> std::fmt::Display for $ty<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                for row in 0..$n {
                    if row > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "[ ")?;
                    for col in 0..$n {
                        if col > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.elements[row * $n + col])?;
                    }
                    write!(f, " ]")?;
                }
                Ok(())
            }
        }
    };
}
pub(crate) use impl_square_matrix;
