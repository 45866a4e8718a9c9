use nalgebra as na;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::math::matrix::{impl_named_elements, impl_square_matrix};
use crate::math::{approx_zero, clamp, orthonormalize, Real, Vector2, Vector3};

/// A 3x3 matrix stored in row-major order.
///
/// Used both for linear maps in 3D and for affine maps in 2D homogeneous
/// coordinates.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix3<T: Real> {
    pub elements: [T; 9],
}

impl_square_matrix!(Matrix3, Vector3, 3);
impl_named_elements!(
    Matrix3,
    a11 => 0, a12 => 1, a13 => 2,
    a21 => 3, a22 => 4, a23 => 5,
    a31 => 6, a32 => 7, a33 => 8,
);

impl<T: Real> Matrix3<T> {
    pub const ZERO: Self = Self {
        elements: [T::ZERO; 9],
    };

    pub const IDENTITY: Self = Self {
        elements: [
            T::ONE, T::ZERO, T::ZERO,
            T::ZERO, T::ONE, T::ZERO,
            T::ZERO, T::ZERO, T::ONE,
        ],
    };

    /// Creates a new 3x3 matrix from its elements in row-major order
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(a11: T, a12: T, a13: T, a21: T, a22: T, a23: T, a31: T, a32: T, a33: T) -> Self {
        Self {
            elements: [a11, a12, a13, a21, a22, a23, a31, a32, a33],
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
    pub fn from_diagonal(a11: T, a22: T, a33: T) -> Self {
        let o = T::ZERO;
        Self::new(a11, o, o, o, a22, o, o, o, a33)
    }

    /// Creates a matrix from three vectors, used either as rows or as columns
    pub fn from_vectors(v1: Vector3<T>, v2: Vector3<T>, v3: Vector3<T>, as_columns: bool) -> Self {
        let rows = Self::new(v1.x, v1.y, v1.z, v2.x, v2.y, v2.z, v3.x, v3.y, v3.z);
        if as_columns {
            rows.transpose()
        } else {
            rows
        }
    }

    /// Outer product `u * vᵀ`
    pub fn tensor_product(u: Vector3<T>, v: Vector3<T>) -> Self {
        Self::new(
            u.x * v.x, u.x * v.y, u.x * v.z,
            u.y * v.x, u.y * v.y, u.y * v.z,
            u.z * v.x, u.z * v.y, u.z * v.z,
        )
    }

    /// Creates a new 3x3 scaling matrix
    #[inline]
    pub fn from_scale(scale: Vector3<T>) -> Self {
        Self::from_diagonal(scale.x, scale.y, scale.z)
    }

    /// 2D homogeneous translation
    #[inline]
    pub fn from_translation_2d(tx: T, ty: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(l, o, tx, o, l, ty, o, o, l)
    }

    /// 2D homogeneous scale
    #[inline]
    pub fn from_scale_2d(sx: T, sy: T) -> Self {
        Self::from_diagonal(sx, sy, T::ONE)
    }

    /// 2D homogeneous counter-clockwise rotation by `theta` radians
    #[inline]
    pub fn from_rotation_2d(theta: T) -> Self {
        Self::from_rotation_z(theta)
    }

    /// 2D homogeneous reflection about the line through the origin with the
    /// given direction. A zero direction yields the identity.
    pub fn from_reflection_2d(direction: Vector2<T>) -> Self {
        let n = direction.perpendicular(true).normalize();
        let (o, l) = (T::ZERO, T::ONE);
        let xy = -T::TWO * n.x * n.y;
        Self::new(
            l - T::TWO * n.x * n.x, xy, o,
            xy, l - T::TWO * n.y * n.y, o,
            o, o, l,
        )
    }

    /// 2D homogeneous reflection about the line through the origin at
    /// `theta` radians from the x axis
    pub fn from_reflection_angle_2d(theta: T) -> Self {
        let (s, c) = (T::TWO * theta).sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(c, s, o, s, -c, o, o, o, l)
    }

    /// 2D homogeneous reflection about the line `y = slope · x`
    pub fn from_reflection_slope_2d(slope: T) -> Self {
        let ssq = slope * slope;
        let k = (ssq + T::ONE).recip();
        let (o, l) = (T::ZERO, T::ONE);
        let xy = T::TWO * slope * k;
        Self::new(
            (l - ssq) * k, xy, o,
            xy, (ssq - l) * k, o,
            o, o, l,
        )
    }

    /// Matrix of the cross product, `skew_symmetric(u) * v == u × v`
    #[inline]
    pub fn skew_symmetric(u: Vector3<T>) -> Self {
        let o = T::ZERO;
        Self::new(o, -u.z, u.y, u.z, o, -u.x, -u.y, u.x, o)
    }

    /// Shear matrix, `xy` is the amount x changes per unit of y and so on
    #[inline]
    pub fn from_shear(xy: T, xz: T, yx: T, yz: T, zx: T, zy: T) -> Self {
        let l = T::ONE;
        Self::new(l, xy, xz, yx, l, yz, zx, zy, l)
    }

    /// Rotation by `theta` radians about the x axis
    pub fn from_rotation_x(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(l, o, o, o, c, -s, o, s, c)
    }

    /// Rotation by `theta` radians about the y axis
    pub fn from_rotation_y(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(c, o, s, o, l, o, -s, o, c)
    }

    /// Rotation by `theta` radians about the z axis
    pub fn from_rotation_z(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(c, -s, o, s, c, o, o, o, l)
    }

    /// Creates a rotation from Euler angles, `Rx(x) * Ry(y) * Rz(z)`
    pub fn from_euler_xyz(x_angle: T, y_angle: T, z_angle: T) -> Self {
        let (sx, cx) = x_angle.sin_cos();
        let (sy, cy) = y_angle.sin_cos();
        let (sz, cz) = z_angle.sin_cos();

        Self::new(
            cy * cz,
            -cy * sz,
            sy,
            cx * sz + sx * sy * cz,
            cx * cz - sx * sy * sz,
            -sx * cy,
            sx * sz - cx * sy * cz,
            sx * cz + cx * sy * sz,
            cx * cy,
        )
    }

    /// Rotation by `theta` radians about `axis`. The axis does not need to be
    /// normalized; a zero axis yields the identity.
    pub fn from_axis_angle(axis: Vector3<T>, theta: T) -> Self {
        let n = axis.normalize();
        if n.is_zero() {
            return Self::IDENTITY;
        }

        let (s, c) = theta.sin_cos();
        let t = T::ONE - c;

        Self::new(
            t * n.x * n.x + c,
            t * n.x * n.y - s * n.z,
            t * n.x * n.z + s * n.y,
            t * n.x * n.y + s * n.z,
            t * n.y * n.y + c,
            t * n.y * n.z - s * n.x,
            t * n.x * n.z - s * n.y,
            t * n.y * n.z + s * n.x,
            t * n.z * n.z + c,
        )
    }

    /// Shortest-arc rotation that turns the direction of `from` into the
    /// direction of `to`
    pub fn from_rotation_between(from: Vector3<T>, to: Vector3<T>) -> Self {
        let from = from.normalize();
        let to = to.normalize();
        let axis = from.cross(&to);
        let cos_theta = from.dot(&to);

        if axis.is_zero() {
            if cos_theta >= T::ZERO {
                return Self::IDENTITY;
            }
            return Self::from_axis_angle(from.any_orthogonal(), T::PI);
        }

        Self::from_axis_angle(axis, axis.length().atan2(cos_theta))
    }

    /// Reflection about the plane through the origin with the given normal,
    /// `I - 2·n·nᵀ`
    pub fn from_planar_reflection(normal: Vector3<T>) -> Self {
        let n = normal.normalize();
        Self::IDENTITY - Self::tensor_product(n, n) * T::TWO
    }

    /// Returns the determinant of the matrix
    pub fn determinant(&self) -> T {
        let [a, b, c, d, e, f, g, h, i] = self.elements;

        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Transpose of the cofactor matrix
    pub fn adjugate(&self) -> Self {
        let [a, b, c, d, e, f, g, h, i] = self.elements;

        Self::new(
            e * i - f * h,
            c * h - b * i,
            b * f - c * e,
            f * g - d * i,
            a * i - c * g,
            c * d - a * f,
            d * h - e * g,
            b * g - a * h,
            a * e - b * d,
        )
    }

    /// Re-orthonormalizes the columns of a rotation matrix that has drifted
    /// because of accumulated floating point error.
    pub fn orthonormalize(&mut self) -> &mut Self {
        let basis = orthonormalize(&[self.column(1), self.column(2), self.column(3)]);
        *self = Self::from_vectors(basis[0], basis[1], basis[2], true);
        self
    }

    /// Recovers `(x, y, z)` such that `from_euler_xyz(x, y, z)` reproduces
    /// this rotation. In gimbal lock the z angle is reported as zero.
    pub fn extract_euler_xyz(&self) -> (T, T, T) {
        let sy = clamp(self.a13(), -T::ONE, T::ONE);
        let y_angle = sy.asin();

        if approx_zero(T::ONE - sy.abs()) {
            let x_angle = self.a32().atan2(self.a22());
            return (x_angle, y_angle, T::ZERO);
        }

        let x_angle = (-self.a23()).atan2(self.a33());
        let z_angle = (-self.a12()).atan2(self.a11());
        (x_angle, y_angle, z_angle)
    }

    /// Recovers the rotation axis (unit length) and the angle in `[0, π]`.
    ///
    /// A rotation by (approximately) zero reports the x axis. Angles past π/2
    /// take the axis from the symmetric part of the matrix so that rotations
    /// close to π stay accurate.
    pub fn extract_axis_angle(&self) -> (Vector3<T>, T) {
        let cos_theta = clamp((self.trace() - T::ONE) * T::HALF, -T::ONE, T::ONE);
        let theta = cos_theta.acos();

        if approx_zero(theta) {
            return (Vector3::unit_x(), T::ZERO);
        }

        // twice sin(theta) times the axis
        let antisymmetric = Vector3::new(
            self.a32() - self.a23(),
            self.a13() - self.a31(),
            self.a21() - self.a12(),
        );

        if theta <= T::FRAC_PI_2 {
            return (antisymmetric.normalize(), theta);
        }

        let one_minus_cos = T::ONE - cos_theta;
        let diagonal = [self.a11(), self.a22(), self.a33()];
        let mut pivot = 0;
        for i in 1..3 {
            if diagonal[i] > diagonal[pivot] {
                pivot = i;
            }
        }

        let mut axis = Vector3::zero();
        axis[pivot] = ((diagonal[pivot] - cos_theta) / one_minus_cos).max(T::ZERO).sqrt();
        let denominator = T::TWO * one_minus_cos * axis[pivot];
        for i in 0..3 {
            if i != pivot {
                let symmetric = self[(pivot + 1, i + 1)] + self[(i + 1, pivot + 1)];
                axis[i] = symmetric / denominator;
            }
        }

        if axis.dot(&antisymmetric) < T::ZERO {
            axis = -axis;
        }

        (axis.normalize(), theta)
    }

    /// Applies a 2D homogeneous transform to a point
    #[inline]
    pub fn transform_point_2d(&self, p: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            self.a11() * p.x + self.a12() * p.y + self.a13(),
            self.a21() * p.x + self.a22() * p.y + self.a23(),
        )
    }

    /// Applies a 2D homogeneous transform to a direction, ignoring translation
    #[inline]
    pub fn transform_vector_2d(&self, v: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            self.a11() * v.x + self.a12() * v.y,
            self.a21() * v.x + self.a22() * v.y,
        )
    }

    /// Convert to nalgebra Matrix3
    pub fn to_nalgebra(&self) -> na::Matrix3<T> {
        let [a, b, c, d, e, f, g, h, i] = self.elements;

        na::Matrix3::new(
            a, b, c,
            d, e, f,
            g, h, i,
        )
    }

    /// Convert from nalgebra Matrix3
    pub fn from_nalgebra(m: &na::Matrix3<T>) -> Self {
        let mut result = Self::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                result.elements[row * 3 + col] = m[(row, col)];
            }
        }
        result
    }
}
