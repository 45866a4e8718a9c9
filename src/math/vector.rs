use nalgebra as na;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::math::{approx_zero, clamp, Real};

/// A 2D vector
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector2<T: Real> {
    pub x: T,
    pub y: T,
}

/// A 3D vector
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector3<T: Real> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 4D vector, used for homogeneous coordinates
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector4<T: Real> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Operations shared by all vector types, used by generic algorithms such as
/// [`orthonormalize`].
pub trait VectorSpace<T: Real>:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<T, Output = Self>
{
    fn dot(&self, other: &Self) -> T;
    fn normalize(&self) -> Self;
}

/// Orthonormalizes a list of vectors with modified Gram-Schmidt.
///
/// Every output subtracts its projection onto all previously produced outputs
/// before being normalized. Linearly dependent inputs come out as zero vectors.
pub fn orthonormalize<T: Real, V: VectorSpace<T>>(vectors: &[V]) -> Vec<V> {
    let mut basis: Vec<V> = Vec::with_capacity(vectors.len());

    for v in vectors {
        let mut u = *v;
        for b in &basis {
            u = u - *b * u.dot(b);
        }
        basis.push(u.normalize());
    }

    basis
}

macro_rules! impl_vector_common {
    ($ty:ident, $na:ident, $n:expr, $($idx:expr => $f:ident),+) => {
        impl<T: Real> $ty<T> {
            /// Creates a new vector with all components set to zero
            #[inline]
            pub fn zero() -> Self {
                Self { $($f: T::ZERO),+ }
            }

            /// Creates a new vector with all components set to one
            #[inline]
            pub fn one() -> Self {
                Self { $($f: T::ONE),+ }
            }

            /// Creates a vector from the first elements of a slice.
            /// Missing elements are zero, extra elements are ignored.
            pub fn from_slice(values: &[T]) -> Self {
                let mut v = Self::zero();
                for (i, value) in values.iter().take($n).enumerate() {
                    v[i] = *value;
                }
                v
            }

            /// Returns the components as an array
            #[inline]
            pub fn as_array(&self) -> [T; $n] {
                [$(self.$f),+]
            }

            /// Computes the dot product of two vectors
            #[inline]
            pub fn dot(&self, other: &Self) -> T {
                T::ZERO $(+ self.$f * other.$f)+
            }

            /// Returns the squared length of the vector
            #[inline]
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            /// Returns the length of the vector
            #[inline]
            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Returns a normalized version of the vector, or the zero vector
            /// when the length is approximately zero
            #[inline]
            pub fn normalize(&self) -> Self {
                let length = self.length();
                if length > T::EPSILON {
                    *self / length
                } else {
                    Self::zero()
                }
            }

            /// Normalizes the vector in-place
            #[inline]
            pub fn normalize_mut(&mut self) {
                *self = self.normalize();
            }

            /// Normalizes the vector, failing on a zero-length input
            pub fn try_normalize(&self) -> crate::Result<Self> {
                let length = self.length();
                if length > T::EPSILON {
                    Ok(*self / length)
                } else {
                    Err(MathError::ZeroLength)
                }
            }

            /// Returns true if the vector is approximately zero
            #[inline]
            pub fn is_zero(&self) -> bool {
                $(approx_zero(self.$f))&&+
            }

            /// Returns true if the length is approximately one
            #[inline]
            pub fn is_unit(&self) -> bool {
                approx_zero(self.length_squared() - T::ONE)
            }

            /// Distance between two points
            #[inline]
            pub fn distance(&self, other: &Self) -> T {
                (*self - *other).length()
            }

            /// Squared distance between two points
            #[inline]
            pub fn distance_squared(&self, other: &Self) -> T {
                (*self - *other).length_squared()
            }

            /// Linearly interpolates between two vectors
            #[inline]
            pub fn lerp(&self, other: &Self, t: T) -> Self {
                *self + (*other - *self) * t
            }

            /// Projects this vector onto `onto`. Projecting onto a zero vector
            /// yields zero.
            pub fn project(&self, onto: &Self) -> Self {
                let length_squared = onto.length_squared();
                if length_squared <= T::EPSILON {
                    return Self::zero();
                }
                *onto * (self.dot(onto) / length_squared)
            }

            /// Projects this vector onto a unit vector
            #[inline]
            pub fn project_on_unit(&self, unit: &Self) -> Self {
                debug_assert!(unit.is_unit(), "projection target must be a unit vector");
                *unit * self.dot(unit)
            }

            /// Component of this vector orthogonal to `onto`
            #[inline]
            pub fn reject(&self, onto: &Self) -> Self {
                *self - self.project(onto)
            }

            /// Angle in radians between two vectors, zero if either is degenerate
            pub fn angle_between(&self, other: &Self) -> T {
                let denominator = self.length() * other.length();
                if denominator <= T::EPSILON {
                    return T::ZERO;
                }
                clamp(self.dot(other) / denominator, -T::ONE, T::ONE).acos()
            }

            /// Returns true if the two vectors are orthogonal
            #[inline]
            pub fn is_orthogonal(&self, other: &Self) -> bool {
                approx_zero(self.dot(other))
            }

            /// Convert to the nalgebra equivalent
            #[inline]
            pub fn to_nalgebra(&self) -> na::$na<T> {
                na::$na::new($(self.$f),+)
            }

            /// Convert from the nalgebra equivalent
            #[inline]
            pub fn from_nalgebra(v: &na::$na<T>) -> Self {
                Self { $($f: v[$idx]),+ }
            }
        }

        impl<T: Real> VectorSpace<T> for $ty<T> {
            #[inline]
            fn dot(&self, other: &Self) -> T {
                $ty::dot(self, other)
            }

            #[inline]
            fn normalize(&self) -> Self {
                $ty::normalize(self)
            }
        }

        impl<T: Real> Index<usize> for $ty<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    $($idx => &self.$f,)+
                    _ => panic!("{} index out of range: {}", stringify!($ty), index),
                }
            }
        }

        impl<T: Real> IndexMut<usize> for $ty<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($idx => &mut self.$f,)+
                    _ => panic!("{} index out of range: {}", stringify!($ty), index),
                }
            }
        }

        impl<T: Real> From<[T; $n]> for $ty<T> {
            #[inline]
            fn from(values: [T; $n]) -> Self {
                Self { $($f: values[$idx]),+ }
            }
        }

        impl<T: Real> From<$ty<T>> for [T; $n] {
            #[inline]
            fn from(v: $ty<T>) -> Self {
                v.as_array()
            }
        }

        crate::math::impl_tolerant_eq!($ty { $($f),+ });

        impl<T: Real> Add for $ty<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<T: Real> Sub for $ty<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl<T: Real> Mul<T> for $ty<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl<T: Real> Div<T> for $ty<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: T) -> Self {
                debug_assert!(rhs != T::ZERO, "division of a vector by zero");
                let inv = T::ONE / rhs;
                Self { $($f: self.$f * inv),+ }
            }
        }

        impl<T: Real> Neg for $ty<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl<T: Real> AddAssign for $ty<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl<T: Real> SubAssign for $ty<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$f -= rhs.$f;)+
            }
        }

        impl<T: Real> MulAssign<T> for $ty<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$f *= rhs;)+
            }
        }

        impl<T: Real> DivAssign<T> for $ty<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl Mul<$ty<f32>> for f32 {
            type Output = $ty<f32>;
            #[inline]
            fn mul(self, rhs: $ty<f32>) -> $ty<f32> {
                rhs * self
            }
        }

        impl Mul<$ty<f64>> for f64 {
            type Output = $ty<f64>;
            #[inline]
            fn mul(self, rhs: $ty<f64>) -> $ty<f64> {
                rhs * self
            }
        }
    };
}

impl_vector_common!(Vector2, Vector2, 2, 0 => x, 1 => y);
impl_vector_common!(Vector3, Vector3, 3, 0 => x, 1 => y, 2 => z);
impl_vector_common!(Vector4, Vector4, 4, 0 => x, 1 => y, 2 => z, 3 => w);

// === Vector2 Implementation ===

impl<T: Real> Vector2<T> {
    /// Creates a new 2D vector
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a unit vector pointing in the x direction
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    /// Creates a unit vector pointing in the y direction
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    /// Computes the z component of the cross product of two 2D vectors
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Returns a vector perpendicular to this one, rotated by 90 degrees
    /// counter-clockwise or clockwise
    #[inline]
    pub fn perpendicular(&self, counter_clockwise: bool) -> Self {
        if counter_clockwise {
            Self::new(-self.y, self.x)
        } else {
            Self::new(self.y, -self.x)
        }
    }
}

impl<T: Real> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// === Vector3 Implementation ===

impl<T: Real> Vector3<T> {
    /// Creates a new 3D vector
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a unit vector pointing in the x direction
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// Creates a unit vector pointing in the y direction
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// Creates a unit vector pointing in the z direction
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// Computes the cross product of two vectors
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// `self · (b × c)`, the signed volume of the parallelepiped
    #[inline]
    pub fn triple_scalar_product(&self, b: &Self, c: &Self) -> T {
        self.dot(&b.cross(c))
    }

    /// `self × (b × c)`
    #[inline]
    pub fn triple_vector_product(&self, b: &Self, c: &Self) -> Self {
        self.cross(&b.cross(c))
    }

    /// Returns some unit vector orthogonal to this one
    pub fn any_orthogonal(&self) -> Self {
        let candidate = if self.x.abs() < self.y.abs() && self.x.abs() < self.z.abs() {
            Self::unit_x()
        } else if self.y.abs() < self.z.abs() {
            Self::unit_y()
        } else {
            Self::unit_z()
        };
        self.cross(&candidate).normalize()
    }

    /// Builds a vector from spherical coordinates.
    ///
    /// `phi` is the polar angle measured from +y and `theta` the azimuth
    /// measured from +z towards +x.
    pub fn from_spherical(radius: T, phi: T, theta: T) -> Self {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        Self::new(
            radius * sin_phi * sin_theta,
            radius * cos_phi,
            radius * sin_phi * cos_theta,
        )
    }

    /// Returns `(radius, phi, theta)`, the inverse of [`Vector3::from_spherical`]
    pub fn to_spherical(&self) -> (T, T, T) {
        let radius = self.length();
        if radius <= T::EPSILON {
            return (T::ZERO, T::ZERO, T::ZERO);
        }
        let planar = (self.x * self.x + self.z * self.z).sqrt();
        (radius, planar.atan2(self.y), self.x.atan2(self.z))
    }
}

impl<T: Real> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// === Vector4 Implementation ===

impl<T: Real> Vector4<T> {
    /// Creates a new 4D vector
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO)
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO)
    }

    #[inline]
    pub fn unit_w() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }

    /// Homogeneous point `(x, y, z, 1)`
    #[inline]
    pub fn as_affine_point(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::ONE)
    }

    /// Homogeneous direction `(x, y, z, 0)`
    #[inline]
    pub fn as_affine_vector(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::ZERO)
    }

    /// Homogeneous point `(w·x, w·y, w·z, w)` representing `v`
    #[inline]
    pub fn as_homogeneous_point(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x * w, v.y * w, v.z * w, w)
    }

    #[inline]
    pub fn is_affine_point(&self) -> bool {
        approx_zero(self.w - T::ONE)
    }

    #[inline]
    pub fn is_affine_vector(&self) -> bool {
        approx_zero(self.w)
    }

    /// Drops the w component
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Divides through by w. Directions (w ≈ 0) are returned unchanged.
    #[inline]
    pub fn homogeneous_divide(&self) -> Vector3<T> {
        if approx_zero(self.w) {
            self.xyz()
        } else {
            self.xyz() / self.w
        }
    }
}

impl<T: Real> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
