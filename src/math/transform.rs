use std::cell::OnceCell;
use std::ops::{Mul, MulAssign};

use bitflags::bitflags;
use tracing::trace;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::math::{approx_eq, Matrix3, Matrix4, Real, Vector3};

bitflags! {
    /// What is known about the components of a [`Transform`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
    pub struct TransformFlags: u8 {
        /// The transform is exactly the identity
        const IDENTITY = 0b0001;
        /// The matrix component is orthogonal, so its inverse is its transpose
        const ROTATION_REFLECTION = 0b0010;
        /// The scale component differs from one
        const SCALING = 0b0100;
    }
}

/// Affine transform `x ↦ scale · (M · x) + translation`.
///
/// `M` is either a rotation/reflection or a general invertible matrix, the
/// scale factor is uniform. The equivalent 4x4 matrix is built on first use
/// and kept until one of the components changes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform<T: Real> {
    matrix: Matrix3<T>,
    translation: Vector3<T>,
    scale: T,
    flags: TransformFlags,
    #[cfg_attr(feature = "serialize", serde(skip))]
    cached_matrix: OnceCell<Matrix4<T>>,
}

impl<T: Real> Transform<T> {
    /// Creates the identity transform
    pub fn new() -> Self {
        Self {
            matrix: Matrix3::IDENTITY,
            translation: Vector3::zero(),
            scale: T::ONE,
            flags: TransformFlags::IDENTITY | TransformFlags::ROTATION_REFLECTION,
            cached_matrix: OnceCell::new(),
        }
    }

    /// Creates a pure translation
    pub fn from_translation(translation: Vector3<T>) -> Self {
        let mut transform = Self::new();
        transform.set_translation(translation);
        transform
    }

    /// Creates a transform from its matrix component alone
    pub fn from_matrix(matrix: Matrix3<T>, is_rotation_or_reflection: bool) -> Self {
        let mut transform = Self::new();
        if is_rotation_or_reflection {
            transform.set_rotation_reflection(matrix);
        } else {
            transform.set_matrix(matrix);
        }
        transform
    }

    /// Creates a uniform scale
    pub fn from_scale(scale: T) -> Self {
        let mut transform = Self::new();
        transform.set_scale(scale);
        transform
    }

    /// Creates a transform from all of its components
    pub fn from_components(
        matrix: Matrix3<T>,
        is_rotation_or_reflection: bool,
        translation: Vector3<T>,
        scale: T,
    ) -> Self {
        let mut transform = Self::from_matrix(matrix, is_rotation_or_reflection);
        transform.set_translation(translation);
        transform.set_scale(scale);
        transform
    }

    #[inline]
    pub fn flags(&self) -> TransformFlags {
        self.flags
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.flags.contains(TransformFlags::IDENTITY)
    }

    #[inline]
    pub fn is_rotation_or_reflection(&self) -> bool {
        self.flags.contains(TransformFlags::ROTATION_REFLECTION)
    }

    #[inline]
    pub fn is_scaling(&self) -> bool {
        self.flags.contains(TransformFlags::SCALING)
    }

    #[inline]
    pub fn matrix(&self) -> Matrix3<T> {
        self.matrix
    }

    #[inline]
    pub fn translation(&self) -> Vector3<T> {
        self.translation
    }

    #[inline]
    pub fn scale(&self) -> T {
        self.scale
    }

    /// Resets every component
    pub fn make_identity(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Drops the scale component
    pub fn make_non_scaling(&mut self) -> &mut Self {
        self.scale = T::ONE;
        self.flags.remove(TransformFlags::SCALING);
        self.invalidate();
        self
    }

    pub fn set_scale(&mut self, scale: T) -> &mut Self {
        self.scale = scale;
        self.flags
            .set(TransformFlags::SCALING, !approx_eq(scale, T::ONE));
        self.mark_modified();
        self
    }

    /// Sets an orthogonal matrix component
    pub fn set_rotation_reflection(&mut self, matrix: Matrix3<T>) -> &mut Self {
        debug_assert!(
            matrix.multiply_transpose(&matrix).is_identity(),
            "matrix component is not orthogonal"
        );
        self.matrix = matrix;
        self.flags.insert(TransformFlags::ROTATION_REFLECTION);
        self.mark_modified();
        self
    }

    /// Sets a general matrix component, which must be invertible for
    /// [`Transform::compute_inverse`] and [`Transform::invert`]
    pub fn set_matrix(&mut self, matrix: Matrix3<T>) -> &mut Self {
        self.matrix = matrix;
        self.flags.remove(TransformFlags::ROTATION_REFLECTION);
        self.mark_modified();
        self
    }

    pub fn set_translation(&mut self, translation: Vector3<T>) -> &mut Self {
        self.translation = translation;
        self.mark_modified();
        self
    }

    /// The equivalent 4x4 affine matrix
    pub fn transform_matrix(&self) -> Matrix4<T> {
        *self.cached_matrix.get_or_init(|| {
            trace!(
                identity = self.is_identity(),
                scaling = self.is_scaling(),
                "rebuilding transform matrix"
            );
            if self.is_identity() {
                return Matrix4::IDENTITY;
            }
            Matrix4::from_rotation_translation(self.matrix * self.scale, self.translation)
        })
    }

    /// Inverse of the matrix component, without the scale
    fn inverse_matrix_component(&self) -> Matrix3<T> {
        if self.is_rotation_or_reflection() {
            self.matrix.transpose()
        } else {
            self.matrix.inverse()
        }
    }

    /// Returns the 4x4 matrix of the inverse transform, using the transpose
    /// for rotation/reflection components and skipping work for the identity
    pub fn compute_inverse(&self) -> Matrix4<T> {
        if self.is_identity() {
            return Matrix4::IDENTITY;
        }

        let mut upper = self.inverse_matrix_component();
        if self.is_scaling() {
            upper *= self.scale.recip();
        }
        let translation = -(upper * self.translation);
        Matrix4::from_rotation_translation(upper, translation)
    }

    /// Replaces this transform by its inverse
    pub fn invert(&mut self) -> &mut Self {
        if self.is_identity() {
            return self;
        }

        let matrix = self.inverse_matrix_component();
        let scale = self.scale.recip();
        self.translation = -(matrix * self.translation) * scale;
        self.matrix = matrix;
        self.scale = scale;
        self.invalidate();
        self
    }

    /// Applies the transform to a point
    #[inline]
    pub fn transform_point(&self, point: Vector3<T>) -> Vector3<T> {
        self.transform_vector(point) + self.translation
    }

    /// Applies the transform to a direction, ignoring the translation
    #[inline]
    pub fn transform_vector(&self, vector: Vector3<T>) -> Vector3<T> {
        (self.matrix * vector) * self.scale
    }

    fn mark_modified(&mut self) {
        self.flags.remove(TransformFlags::IDENTITY);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.cached_matrix = OnceCell::new();
    }
}

impl<T: Real> Default for Transform<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> PartialEq for Transform<T> {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
            && self.translation == other.translation
            && approx_eq(self.scale, other.scale)
    }
}

/// Composition, `a * b` applies `b` first and then `a`
impl<T: Real> Mul for Transform<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self.is_identity() {
            return rhs;
        }
        if rhs.is_identity() {
            return self;
        }

        let mut flags = TransformFlags::empty();
        if self.is_rotation_or_reflection() && rhs.is_rotation_or_reflection() {
            flags.insert(TransformFlags::ROTATION_REFLECTION);
        }
        let scale = self.scale * rhs.scale;
        flags.set(TransformFlags::SCALING, !approx_eq(scale, T::ONE));

        Self {
            matrix: self.matrix * rhs.matrix,
            translation: self.transform_point(rhs.translation),
            scale,
            flags,
            cached_matrix: OnceCell::new(),
        }
    }
}

impl<T: Real> MulAssign for Transform<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}
