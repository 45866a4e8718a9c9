use nalgebra as na;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::math::{approx_zero, clamp, impl_tolerant_eq, Matrix3, Real, Vector3};

/// Quaternion `w + xi + yj + zk`, used to represent rotations in 3D space
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Quaternion<T: Real> {
    /// Real component
    pub w: T,

    /// First imaginary component
    pub x: T,

    /// Second imaginary component
    pub y: T,

    /// Third imaginary component
    pub z: T,
}

impl<T: Real> Default for Quaternion<T> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation trait for rotation representations
pub trait Rotation<T: Real> {
    /// Rotate a vector by this rotation
    fn rotate_vector(&self, v: Vector3<T>) -> Vector3<T>;

    /// Get the angle in radians of this rotation
    fn angle(&self) -> T;

    /// Get the axis of this rotation
    fn axis(&self) -> Vector3<T>;
}

impl<T: Real> Quaternion<T> {
    pub const ZERO: Self = Self {
        w: T::ZERO,
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
    };

    pub const IDENTITY: Self = Self {
        w: T::ONE,
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
    };

    /// Creates a new quaternion
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Creates an identity quaternion (no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a quaternion from `[w, x, y, z]`. Missing elements are zero.
    pub fn from_slice(values: &[T]) -> Self {
        let mut q = Self::ZERO;
        for (i, value) in values.iter().take(4).enumerate() {
            q[i] = *value;
        }
        q
    }

    /// Creates a quaternion from its vector part and its scalar part
    #[inline]
    pub fn from_vector_scalar(v: Vector3<T>, w: T) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    /// Vector part `(x, y, z)`
    #[inline]
    pub fn vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn make_zero(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }

    #[inline]
    pub fn make_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Creates a quaternion rotating by `angle` radians about `axis`.
    /// The axis does not need to be normalized; a zero axis yields the identity.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let axis = axis.normalize();
        if axis.is_zero() {
            return Self::IDENTITY;
        }

        let (s, c) = (angle * T::HALF).sin_cos();
        Self::from_vector_scalar(axis * s, c)
    }

    /// Shortest-arc rotation taking the unit vector `from` onto the unit
    /// vector `to`
    pub fn from_vectors(from: Vector3<T>, to: Vector3<T>) -> Self {
        debug_assert!(from.is_unit() && to.is_unit(), "expected unit vectors");

        let bisector = (from + to).normalize();
        if bisector.is_zero() {
            // opposite directions, half turn about any perpendicular axis
            return Self::from_vector_scalar(from.any_orthogonal(), T::ZERO);
        }

        Self::from_vector_scalar(from.cross(&bisector), from.dot(&bisector))
    }

    /// Creates a quaternion from a rotation matrix
    pub fn from_rotation_matrix(m: &Matrix3<T>) -> Self {
        let trace = m.trace();
        let quarter = T::HALF * T::HALF;

        if trace > T::ZERO {
            let s = T::HALF / (trace + T::ONE).sqrt();
            Self {
                w: quarter / s,
                x: (m.a32() - m.a23()) * s,
                y: (m.a13() - m.a31()) * s,
                z: (m.a21() - m.a12()) * s,
            }
        } else if m.a11() > m.a22() && m.a11() > m.a33() {
            let s = T::TWO * (T::ONE + m.a11() - m.a22() - m.a33()).sqrt();
            Self {
                w: (m.a32() - m.a23()) / s,
                x: quarter * s,
                y: (m.a12() + m.a21()) / s,
                z: (m.a13() + m.a31()) / s,
            }
        } else if m.a22() > m.a33() {
            let s = T::TWO * (T::ONE + m.a22() - m.a11() - m.a33()).sqrt();
            Self {
                w: (m.a13() - m.a31()) / s,
                x: (m.a12() + m.a21()) / s,
                y: quarter * s,
                z: (m.a23() + m.a32()) / s,
            }
        } else {
            let s = T::TWO * (T::ONE + m.a33() - m.a11() - m.a22()).sqrt();
            Self {
                w: (m.a21() - m.a12()) / s,
                x: (m.a13() + m.a31()) / s,
                y: (m.a23() + m.a32()) / s,
                z: quarter * s,
            }
        }
    }

    /// Converts the quaternion to a rotation matrix.
    ///
    /// Works for quaternions of any non-zero length, the result is the
    /// rotation of the normalized quaternion.
    pub fn to_rotation_matrix(&self) -> Matrix3<T> {
        let length_squared = self.length_squared();
        if approx_zero(length_squared) {
            return Matrix3::IDENTITY;
        }
        let s = T::TWO / length_squared;

        let Self { w, x, y, z } = *self;

        let xx = x * x * s;
        let xy = x * y * s;
        let xz = x * z * s;
        let xw = x * w * s;

        let yy = y * y * s;
        let yz = y * z * s;
        let yw = y * w * s;

        let zz = z * z * s;
        let zw = z * w * s;

        Matrix3::new(
            T::ONE - (yy + zz), xy - zw, xz + yw,
            xy + zw, T::ONE - (xx + zz), yz - xw,
            xz - yw, yz + xw, T::ONE - (xx + yy),
        )
    }

    /// Returns the rotation axis (unit length) and angle in `[0, 2π]`.
    /// When the angle is approximately zero the axis is the x axis.
    pub fn to_axis_angle(&self) -> (Vector3<T>, T) {
        let q = self.normalize();
        let w = clamp(q.w, -T::ONE, T::ONE);
        let angle = T::TWO * w.acos();
        let sin_half = (T::ONE - w * w).sqrt();

        if sin_half <= T::EPSILON {
            return (Vector3::unit_x(), angle);
        }

        (q.vector() / sin_half, angle)
    }

    /// Returns the conjugate of this quaternion
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Conjugates this quaternion in-place
    #[inline]
    pub fn conjugate_mut(&mut self) -> &mut Self {
        *self = self.conjugate();
        self
    }

    /// Returns the squared length of this quaternion
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns the length of this quaternion
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a unit quaternion, or the zero quaternion when the length is
    /// approximately zero
    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > T::EPSILON {
            *self / len
        } else {
            Self::ZERO
        }
    }

    /// Normalizes this quaternion in-place
    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Normalizes the quaternion, failing on a zero-length input
    pub fn try_normalize(&self) -> crate::Result<Self> {
        let len = self.length();
        if len > T::EPSILON {
            Ok(*self / len)
        } else {
            Err(MathError::ZeroLength)
        }
    }

    /// Returns the inverse of this quaternion, `conjugate / length²`.
    /// The zero quaternion has no inverse and yields the identity.
    #[inline]
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > T::EPSILON {
            self.conjugate() / len_sq
        } else {
            Self::IDENTITY
        }
    }

    /// Inverts this quaternion in-place
    #[inline]
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Computes the dot product of two quaternions
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        approx_zero(self.length_squared() - T::ONE)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Spherical linear interpolation between two quaternions
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let mut cos_half_theta = self.dot(other);

        // Take the shorter path
        let mut other_adj = *other;
        if cos_half_theta < T::ZERO {
            other_adj = -other_adj;
            cos_half_theta = -cos_half_theta;
        }

        // Nearly parallel, fall back to normalized linear interpolation
        if cos_half_theta > T::from_f64(0.999) {
            return (*self + (other_adj - *self) * t).normalize();
        }

        let half_theta = cos_half_theta.acos();
        let sin_half_theta = (T::ONE - cos_half_theta * cos_half_theta).sqrt();

        let ratio_a = ((T::ONE - t) * half_theta).sin() / sin_half_theta;
        let ratio_b = (t * half_theta).sin() / sin_half_theta;

        *self * ratio_a + other_adj * ratio_b
    }

    /// Convert to nalgebra Quaternion
    #[inline]
    pub fn to_nalgebra(&self) -> na::Quaternion<T> {
        na::Quaternion {
            coords: na::Vector4::new(self.x, self.y, self.z, self.w),
        }
    }

    /// Convert from nalgebra Quaternion
    #[inline]
    pub fn from_nalgebra(q: &na::Quaternion<T>) -> Self {
        Self {
            w: q.coords[3],
            x: q.coords[0],
            y: q.coords[1],
            z: q.coords[2],
        }
    }
}

impl<T: Real> Rotation<T> for Quaternion<T> {
    /// Rotates a vector by this quaternion, which must have unit length
    fn rotate_vector(&self, v: Vector3<T>) -> Vector3<T> {
        debug_assert!(self.is_unit(), "rotating by a non-unit quaternion");

        // v + 2w(u × v) + 2u × (u × v)
        let u = self.vector();
        let t = u.cross(&v) * T::TWO;
        v + t * self.w + u.cross(&t)
    }

    /// Returns the angle in radians of this rotation
    fn angle(&self) -> T {
        self.to_axis_angle().1
    }

    /// Returns the normalized axis of this rotation
    fn axis(&self) -> Vector3<T> {
        self.to_axis_angle().0
    }
}

impl<T: Real> Rotation<T> for Matrix3<T> {
    fn rotate_vector(&self, v: Vector3<T>) -> Vector3<T> {
        *self * v
    }

    fn angle(&self) -> T {
        self.extract_axis_angle().1
    }

    fn axis(&self) -> Vector3<T> {
        self.extract_axis_angle().0
    }
}

impl<T: Real> Index<usize> for Quaternion<T> {
    type Output = T;

    /// Components in `w, x, y, z` order
    #[inline]
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.w,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("Quaternion index out of range: {}", index),
        }
    }
}

impl<T: Real> IndexMut<usize> for Quaternion<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.w,
            1 => &mut self.x,
            2 => &mut self.y,
            3 => &mut self.z,
            _ => panic!("Quaternion index out of range: {}", index),
        }
    }
}

impl_tolerant_eq!(Quaternion { w, x, y, z });

impl<T: Real> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}

// Quaternion multiplication (Hamilton product), `a * b` applies `b` first
impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl<T: Real> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Real> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl<T: Real> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Real> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        debug_assert!(rhs != T::ZERO, "division of a quaternion by zero");
        self * rhs.recip()
    }
}

impl<T: Real> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Real> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}
