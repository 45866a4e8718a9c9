#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::math::{approx_eq, approx_zero, Real, Vector3};

/// Infinite plane `normal · p + offset = 0`.
///
/// The normal does not have to be unit length; distances divide by its
/// length. Use [`Plane::normalized`] to get the Hessian normal form.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Plane<T: Real> {
    pub normal: Vector3<T>,
    pub offset: T,
}

impl<T: Real> Plane<T> {
    #[inline]
    pub fn new(normal: Vector3<T>, offset: T) -> Self {
        Self { normal, offset }
    }

    /// Plane `a·x + b·y + c·z + d = 0`
    #[inline]
    pub fn from_coefficients(a: T, b: T, c: T, d: T) -> Self {
        Self::new(Vector3::new(a, b, c), d)
    }

    /// Plane through `point` with the given normal
    #[inline]
    pub fn from_point_and_normal(point: Vector3<T>, normal: Vector3<T>) -> Self {
        Self::new(normal, -normal.dot(&point))
    }

    /// Plane through `point` spanned by two non-parallel directions. The
    /// normal is `dir1 × dir2`.
    #[inline]
    pub fn from_point_and_parallel_directions(point: Vector3<T>, dir1: Vector3<T>, dir2: Vector3<T>) -> Self {
        Self::from_point_and_normal(point, dir1.cross(&dir2))
    }

    /// Plane through three points, oriented so that `a`, `b`, `c` wind
    /// counter-clockwise around the normal
    #[inline]
    pub fn from_points(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        Self::from_point_and_parallel_directions(a, b - a, c - a)
    }

    /// Scales the equation so the normal has unit length. A zero normal is
    /// left unchanged.
    pub fn normalized(&self) -> Self {
        self.try_normalize().unwrap_or(*self)
    }

    pub fn try_normalize(&self) -> crate::Result<Self> {
        let length = self.normal.length();
        if length <= T::EPSILON {
            return Err(MathError::ZeroLength);
        }
        let inv = length.recip();
        Ok(Self::new(self.normal * inv, self.offset * inv))
    }

    /// The same plane with the normal flipped
    #[inline]
    pub fn flipped(&self) -> Self {
        Self::new(-self.normal, -self.offset)
    }

    /// Distance from `point`, positive on the side the normal points to
    pub fn signed_distance(&self, point: Vector3<T>) -> T {
        let length = self.normal.length();
        debug_assert!(length > T::EPSILON, "plane has a zero normal");
        (self.normal.dot(&point) + self.offset) / length
    }

    /// Unsigned distance from `point` to the plane
    #[inline]
    pub fn distance(&self, point: Vector3<T>) -> T {
        self.signed_distance(point).abs()
    }

    /// Closest point of the plane to `point`
    pub fn project_point(&self, point: Vector3<T>) -> Vector3<T> {
        let t = (self.normal.dot(&point) + self.offset) / self.normal.length_squared();
        point - self.normal * t
    }

    #[inline]
    pub fn contains(&self, point: Vector3<T>) -> bool {
        approx_zero(self.signed_distance(point))
    }
}

impl<T: Real> PartialEq for Plane<T> {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && approx_eq(self.offset, other.offset)
    }
}
