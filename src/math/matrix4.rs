use nalgebra as na;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::math::matrix::{impl_named_elements, impl_square_matrix};
use crate::math::{Matrix3, Real, Vector3, Vector4};

/// A 4x4 matrix stored in row-major order, acting on column vectors.
///
/// Affine transforms keep the translation in the fourth column
/// (`a14`, `a24`, `a34`).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix4<T: Real> {
    pub elements: [T; 16],
}

impl_square_matrix!(Matrix4, Vector4, 4);
impl_named_elements!(
    Matrix4,
    a11 => 0, a12 => 1, a13 => 2, a14 => 3,
    a21 => 4, a22 => 5, a23 => 6, a24 => 7,
    a31 => 8, a32 => 9, a33 => 10, a34 => 11,
    a41 => 12, a42 => 13, a43 => 14, a44 => 15,
);

impl<T: Real> Matrix4<T> {
    pub const ZERO: Self = Self {
        elements: [T::ZERO; 16],
    };

    pub const IDENTITY: Self = Self {
        elements: [
            T::ONE, T::ZERO, T::ZERO, T::ZERO,
            T::ZERO, T::ONE, T::ZERO, T::ZERO,
            T::ZERO, T::ZERO, T::ONE, T::ZERO,
            T::ZERO, T::ZERO, T::ZERO, T::ONE,
        ],
    };

    /// Creates a new 4x4 matrix from its elements in row-major order
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        a11: T, a12: T, a13: T, a14: T,
        a21: T, a22: T, a23: T, a24: T,
        a31: T, a32: T, a33: T, a34: T,
        a41: T, a42: T, a43: T, a44: T,
    ) -> Self {
        Self {
            elements: [
                a11, a12, a13, a14,
                a21, a22, a23, a24,
                a31, a32, a33, a34,
                a41, a42, a43, a44,
            ],
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
    pub fn from_diagonal(a11: T, a22: T, a33: T, a44: T) -> Self {
        let mut m = Self::ZERO;
        m.elements[0] = a11;
        m.elements[5] = a22;
        m.elements[10] = a33;
        m.elements[15] = a44;
        m
    }

    /// Creates a matrix from four vectors, used either as rows or as columns
    pub fn from_vectors(
        v1: Vector4<T>,
        v2: Vector4<T>,
        v3: Vector4<T>,
        v4: Vector4<T>,
        as_columns: bool,
    ) -> Self {
        let mut m = Self::ZERO;
        for (i, v) in [v1, v2, v3, v4].into_iter().enumerate() {
            if as_columns {
                m.set_column(i + 1, v);
            } else {
                m.set_row(i + 1, v);
            }
        }
        m
    }

    /// Creates a new 4x4 translation matrix
    #[inline]
    pub fn from_translation(translation: Vector3<T>) -> Self {
        let mut m = Self::IDENTITY;
        m.set_translation(translation);
        m
    }

    /// Creates a new 4x4 scaling matrix
    #[inline]
    pub fn from_scale(scale: Vector3<T>) -> Self {
        Self::from_diagonal(scale.x, scale.y, scale.z, T::ONE)
    }

    #[inline]
    pub fn from_uniform_scale(scale: T) -> Self {
        Self::from_diagonal(scale, scale, scale, T::ONE)
    }

    /// Creates a transformation matrix from a rotation matrix and a translation vector
    pub fn from_rotation_translation(rotation: Matrix3<T>, translation: Vector3<T>) -> Self {
        let mut m = Self::from(rotation);
        m.set_translation(translation);
        m
    }

    #[inline]
    pub fn from_rotation_x(theta: T) -> Self {
        Self::from(Matrix3::from_rotation_x(theta))
    }

    #[inline]
    pub fn from_rotation_y(theta: T) -> Self {
        Self::from(Matrix3::from_rotation_y(theta))
    }

    #[inline]
    pub fn from_rotation_z(theta: T) -> Self {
        Self::from(Matrix3::from_rotation_z(theta))
    }

    /// Affine reflection about the plane with the given normal through `point`
    pub fn from_planar_reflection(normal: Vector3<T>, point: Vector3<T>) -> Self {
        let n = normal.normalize();
        let offset = n * (T::TWO * n.dot(&point));
        Self::from_rotation_translation(Matrix3::from_planar_reflection(n), offset)
    }

    /// Left-handed perspective projection from a vertical field of view in
    /// radians.
    ///
    /// Points at `z = near` map to `depth_min` and points at `z = far` map to
    /// `depth_max` after the perspective divide. Use `0, 1` for Direct3D
    /// style depth and `-1, 1` for OpenGL style depth.
    pub fn perspective_projection_lh(
        aspect_ratio: T,
        vertical_fov: T,
        near: T,
        far: T,
        depth_min: T,
        depth_max: T,
    ) -> Self {
        debug_assert!(near > T::ZERO && far > near, "invalid depth planes");
        debug_assert!(aspect_ratio > T::ZERO, "invalid aspect ratio");

        let d = (vertical_fov * T::HALF).tan().recip();
        let (a, b) = Self::perspective_depth_lh(near, far, depth_min, depth_max);
        let (o, l) = (T::ZERO, T::ONE);

        Self::new(
            d / aspect_ratio, o, o, o,
            o, d, o, o,
            o, o, a, b,
            o, o, l, o,
        )
    }

    /// Right-handed counterpart of [`Matrix4::perspective_projection_lh`].
    /// The view looks down -z and `near`, `far` are positive distances.
    pub fn perspective_projection_rh(
        aspect_ratio: T,
        vertical_fov: T,
        near: T,
        far: T,
        depth_min: T,
        depth_max: T,
    ) -> Self {
        debug_assert!(near > T::ZERO && far > near, "invalid depth planes");
        debug_assert!(aspect_ratio > T::ZERO, "invalid aspect ratio");

        let d = (vertical_fov * T::HALF).tan().recip();
        let range = far - near;
        let a = (near * depth_min - far * depth_max) / range;
        let b = near * far * (depth_min - depth_max) / range;
        let (o, l) = (T::ZERO, T::ONE);

        Self::new(
            d / aspect_ratio, o, o, o,
            o, d, o, o,
            o, o, a, b,
            o, o, -l, o,
        )
    }

    /// Left-handed perspective projection for a general (possibly off-center)
    /// view volume. `top`, `bottom`, `left`, `right` are measured on the near
    /// plane.
    #[allow(clippy::too_many_arguments)]
    pub fn perspective_frustum_lh(
        near: T,
        far: T,
        top: T,
        bottom: T,
        left: T,
        right: T,
        depth_min: T,
        depth_max: T,
    ) -> Self {
        debug_assert!(near > T::ZERO && far > near, "invalid depth planes");
        debug_assert!(right != left && top != bottom, "degenerate frustum");

        let width = right - left;
        let height = top - bottom;
        let (a, b) = Self::perspective_depth_lh(near, far, depth_min, depth_max);
        let (o, l) = (T::ZERO, T::ONE);

        Self::new(
            T::TWO * near / width, o, -(right + left) / width, o,
            o, T::TWO * near / height, -(top + bottom) / height, o,
            o, o, a, b,
            o, o, l, o,
        )
    }

    /// Left-handed orthographic projection of the box
    /// `[left, right] x [bottom, top] x [near, far]`
    #[allow(clippy::too_many_arguments)]
    pub fn orthographic_projection_lh(
        near: T,
        far: T,
        top: T,
        bottom: T,
        left: T,
        right: T,
        depth_min: T,
        depth_max: T,
    ) -> Self {
        debug_assert!(far != near, "invalid depth planes");
        debug_assert!(right != left && top != bottom, "degenerate frustum");

        let width = right - left;
        let height = top - bottom;
        let range = far - near;
        let (o, l) = (T::ZERO, T::ONE);

        Self::new(
            T::TWO / width, o, o, -(right + left) / width,
            o, T::TWO / height, o, -(top + bottom) / height,
            o, o, (depth_max - depth_min) / range, (far * depth_min - near * depth_max) / range,
            o, o, o, l,
        )
    }

    /// Third row coefficients of a left-handed perspective projection:
    /// `depth = a + b / z`
    fn perspective_depth_lh(near: T, far: T, depth_min: T, depth_max: T) -> (T, T) {
        let range = far - near;
        (
            (far * depth_max - near * depth_min) / range,
            near * far * (depth_min - depth_max) / range,
        )
    }

    /// Upper left 3x3 block
    pub fn upper3x3(&self) -> Matrix3<T> {
        let e = &self.elements;
        Matrix3::new(e[0], e[1], e[2], e[4], e[5], e[6], e[8], e[9], e[10])
    }

    /// Replaces the upper left 3x3 block, leaving the rest untouched
    pub fn set_upper3x3(&mut self, m: &Matrix3<T>) -> &mut Self {
        for row in 0..3 {
            for col in 0..3 {
                self.elements[row * 4 + col] = m.elements[row * 3 + col];
            }
        }
        self
    }

    /// Replaces the upper left 3x3 block from a row-major slice
    #[inline]
    pub fn set_upper3x3_from_slice(&mut self, values: &[T]) -> &mut Self {
        self.set_upper3x3(&Matrix3::from_slice(values))
    }

    /// Translation component of an affine transform
    #[inline]
    pub fn translation(&self) -> Vector3<T> {
        Vector3::new(self.elements[3], self.elements[7], self.elements[11])
    }

    #[inline]
    pub fn set_translation(&mut self, translation: Vector3<T>) -> &mut Self {
        self.elements[3] = translation.x;
        self.elements[7] = translation.y;
        self.elements[11] = translation.z;
        self
    }

    /// Applies an affine transform to a direction (w = 0)
    #[inline]
    pub fn transform_vector(&self, v: Vector3<T>) -> Vector3<T> {
        self.upper3x3() * v
    }

    /// Applies an affine transform to a point (w = 1)
    #[inline]
    pub fn transform_point(&self, p: Vector3<T>) -> Vector3<T> {
        self.upper3x3() * p + self.translation()
    }

    /// Applies a full projective transform to a homogeneous point
    #[inline]
    pub fn transform_homogeneous(&self, p: Vector4<T>) -> Vector4<T> {
        *self * p
    }

    /// The 3x3 matrix left after deleting the given 0-based row and column
    fn minor(&self, row: usize, col: usize) -> Matrix3<T> {
        let mut m = Matrix3::ZERO;
        let mut k = 0;
        for r in (0..4).filter(|&r| r != row) {
            for c in (0..4).filter(|&c| c != col) {
                m.elements[k] = self.elements[r * 4 + c];
                k += 1;
            }
        }
        m
    }

    fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col).determinant();
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Returns the determinant of the matrix
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |det, col| det + self.elements[col] * self.cofactor(0, col))
    }

    /// Transpose of the cofactor matrix
    pub fn adjugate(&self) -> Self {
        let mut result = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                result.elements[col * 4 + row] = self.cofactor(row, col);
            }
        }
        result
    }

    /// Convert to nalgebra Matrix4
    pub fn to_nalgebra(&self) -> na::Matrix4<T> {
        let e = &self.elements;

        na::Matrix4::new(
            e[0], e[1], e[2], e[3],
            e[4], e[5], e[6], e[7],
            e[8], e[9], e[10], e[11],
            e[12], e[13], e[14], e[15],
        )
    }

    /// Convert from nalgebra Matrix4
    pub fn from_nalgebra(m: &na::Matrix4<T>) -> Self {
        let mut result = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                result.elements[row * 4 + col] = m[(row, col)];
            }
        }
        result
    }
}

impl<T: Real> From<Matrix3<T>> for Matrix4<T> {
    /// Embeds a 3x3 matrix as the upper left block of an affine transform
    fn from(m: Matrix3<T>) -> Self {
        let mut result = Self::IDENTITY;
        result.set_upper3x3(&m);
        result
    }
}
