/// Tolerant `PartialEq` plus the `approx` comparison traits for a type whose
/// elements are either named fields or a flat `elements` array.
macro_rules! impl_tolerant_eq {
    ($ty:ident { $($f:ident),+ }) => {
        impl<T: $crate::math::Real> PartialEq for $ty<T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $($crate::math::approx_eq(self.$f, other.$f))&&+
            }
        }

        impl<T: $crate::math::Real> approx::AbsDiffEq for $ty<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                <T as $crate::math::Real>::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$f, &other.$f, epsilon))&&+
            }
        }

        impl<T: $crate::math::Real> approx::RelativeEq for $ty<T> {
            fn default_max_relative() -> T {
                <T as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $(approx::RelativeEq::relative_eq(&self.$f, &other.$f, epsilon, max_relative))&&+
            }
        }
    };
    ($ty:ident [elements]) => {
        impl<T: $crate::math::Real> PartialEq for $ty<T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.elements
                    .iter()
                    .zip(other.elements.iter())
                    .all(|(a, b)| $crate::math::approx_eq(*a, *b))
            }
        }

        impl<T: $crate::math::Real> approx::AbsDiffEq for $ty<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                <T as $crate::math::Real>::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.elements
                    .iter()
                    .zip(other.elements.iter())
                    .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl<T: $crate::math::Real> approx::RelativeEq for $ty<T> {
            fn default_max_relative() -> T {
                <T as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.elements
                    .iter()
                    .zip(other.elements.iter())
                    .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }
    };
}
pub(crate) use impl_tolerant_eq;

mod scalar;
mod matrix;
mod vector;
mod matrix2;
mod matrix3;
mod matrix4;
mod rotation;
mod transform;
mod plane;
mod color;

pub use scalar::Real;
pub use vector::{orthonormalize, Vector2, Vector3, Vector4, VectorSpace};
pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use rotation::{Quaternion, Rotation};
pub use transform::{Transform, TransformFlags};
pub use plane::Plane;
pub use color::Color;

pub type Vector2F = Vector2<f32>;
pub type Vector2D = Vector2<f64>;
pub type Vector3F = Vector3<f32>;
pub type Vector3D = Vector3<f64>;
pub type Vector4F = Vector4<f32>;
pub type Vector4D = Vector4<f64>;
pub type Matrix2F = Matrix2<f32>;
pub type Matrix2D = Matrix2<f64>;
pub type Matrix3F = Matrix3<f32>;
pub type Matrix3D = Matrix3<f64>;
pub type Matrix4F = Matrix4<f32>;
pub type Matrix4D = Matrix4<f64>;
pub type QuaternionF = Quaternion<f32>;
pub type QuaternionD = Quaternion<f64>;
pub type TransformF = Transform<f32>;
pub type TransformD = Transform<f64>;
pub type PlaneF = Plane<f32>;
pub type PlaneD = Plane<f64>;

/// Returns true if the two values are within [`Real::EPSILON`] of each other
#[inline]
pub fn approx_eq<T: Real>(a: T, b: T) -> bool {
    (a - b).abs() <= T::EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero<T: Real>(a: T) -> bool {
    a.abs() <= T::EPSILON
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp<T: Real>(value: T, min: T, max: T) -> T {
    value.max(min).min(max)
}

/// Linearly interpolates between two values
#[inline]
pub fn lerp<T: Real>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// `1 / sqrt(value)`
#[inline]
pub fn inv_sqrt<T: Real>(value: T) -> T {
    debug_assert!(value > T::ZERO, "inverse square root of a non-positive value");
    value.sqrt().recip()
}

/// Converts degrees to radians
#[inline]
pub fn to_radians<T: Real>(degrees: T) -> T {
    degrees * T::PI / T::from_f64(180.0)
}

/// Converts radians to degrees
#[inline]
pub fn to_degrees<T: Real>(radians: T) -> T {
    radians * T::from_f64(180.0) / T::PI
}
