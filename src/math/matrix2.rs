#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::math::matrix::{impl_named_elements, impl_square_matrix};
use crate::math::{Real, Vector2};

/// A 2x2 matrix stored in row-major order
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix2<T: Real> {
    pub elements: [T; 4],
}

impl_square_matrix!(Matrix2, Vector2, 2);
impl_named_elements!(Matrix2, a11 => 0, a12 => 1, a21 => 2, a22 => 3);

impl<T: Real> Matrix2<T> {
    pub const ZERO: Self = Self {
        elements: [T::ZERO; 4],
    };

    pub const IDENTITY: Self = Self {
        elements: [T::ONE, T::ZERO, T::ZERO, T::ONE],
    };

    /// Creates a new 2x2 matrix from its elements in row-major order
    #[inline]
    pub fn new(a11: T, a12: T, a21: T, a22: T) -> Self {
        Self {
            elements: [a11, a12, a21, a22],
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a diagonal matrix
    #[inline]
    pub fn from_diagonal(a11: T, a22: T) -> Self {
        Self::new(a11, T::ZERO, T::ZERO, a22)
    }

    /// Creates a matrix from two vectors, used either as rows or as columns
    pub fn from_vectors(v1: Vector2<T>, v2: Vector2<T>, as_columns: bool) -> Self {
        if as_columns {
            Self::new(v1.x, v2.x, v1.y, v2.y)
        } else {
            Self::new(v1.x, v1.y, v2.x, v2.y)
        }
    }

    /// Outer product `u * vᵀ`
    #[inline]
    pub fn tensor_product(u: Vector2<T>, v: Vector2<T>) -> Self {
        Self::new(u.x * v.x, u.x * v.y, u.y * v.x, u.y * v.y)
    }

    /// Counter-clockwise rotation by `theta` radians
    #[inline]
    pub fn from_rotation(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        Self::new(c, -s, s, c)
    }

    #[inline]
    pub fn from_scale(sx: T, sy: T) -> Self {
        Self::from_diagonal(sx, sy)
    }

    /// `[[0, k], [-k, 0]]`
    #[inline]
    pub fn skew_symmetric(k: T) -> Self {
        Self::new(T::ZERO, k, -k, T::ZERO)
    }

    /// `[[0, k], [k, 0]]`
    #[inline]
    pub fn symmetric(k: T) -> Self {
        Self::new(T::ZERO, k, k, T::ZERO)
    }

    /// Shear along x by `kx` and along y by `ky`
    #[inline]
    pub fn from_shear(kx: T, ky: T) -> Self {
        Self::new(T::ONE, kx, ky, T::ONE)
    }

    /// Returns the determinant of the matrix
    #[inline]
    pub fn determinant(&self) -> T {
        let [a, b, c, d] = self.elements;
        a * d - b * c
    }

    /// Transpose of the cofactor matrix
    #[inline]
    pub fn adjugate(&self) -> Self {
        let [a, b, c, d] = self.elements;
        Self::new(d, -b, -c, a)
    }

    /// Makes the columns orthonormal with Gram-Schmidt
    pub fn orthonormalize(&mut self) -> &mut Self {
        let c1 = self.column(1).normalize();
        let c2 = self.column(2);
        let c2 = (c2 - c1 * c2.dot(&c1)).normalize();
        *self = Self::from_vectors(c1, c2, true);
        self
    }
}
