use crate::error::MathError;
use crate::math::{Matrix4, Real};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Kind of projection a camera applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ProjectionType {
    #[default]
    Perspective,
    Orthographic,
}

/// View volume bounds in camera space. `top`, `bottom`, `left` and `right`
/// lie on the near plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Frustum<T: Real> {
    pub near: T,
    pub far: T,
    pub top: T,
    pub bottom: T,
    pub left: T,
    pub right: T,
}

impl<T: Real> Frustum<T> {
    #[inline]
    pub fn new(near: T, far: T, top: T, bottom: T, left: T, right: T) -> Self {
        Self {
            near,
            far,
            top,
            bottom,
            left,
            right,
        }
    }

    /// Frustum centered on the view direction, from a vertical field of view
    /// in radians
    pub fn symmetric(vertical_fov: T, aspect_ratio: T, near: T, far: T) -> Self {
        let top = near * (vertical_fov * T::HALF).tan();
        let right = top * aspect_ratio;
        Self::new(near, far, top, -top, -right, right)
    }

    /// Checks that the bounds describe a non-empty volume for the given
    /// projection
    pub fn validate(&self, projection: ProjectionType) -> crate::Result<()> {
        if projection == ProjectionType::Perspective && self.near <= T::ZERO {
            return Err(MathError::InvalidFrustum(format!(
                "near plane must be positive, got {}",
                self.near
            )));
        }
        if self.far <= self.near {
            return Err(MathError::InvalidFrustum(format!(
                "far plane {} is not beyond near plane {}",
                self.far, self.near
            )));
        }
        if self.right == self.left || self.top == self.bottom {
            return Err(MathError::InvalidFrustum(format!(
                "empty view window [{}, {}] x [{}, {}]",
                self.left, self.right, self.bottom, self.top
            )));
        }
        Ok(())
    }

    /// Projection matrix for this volume, mapping near and far to
    /// `depth_min` and `depth_max`
    pub fn projection_matrix(&self, projection: ProjectionType, depth_min: T, depth_max: T) -> Matrix4<T> {
        match projection {
            ProjectionType::Perspective => Matrix4::perspective_frustum_lh(
                self.near, self.far, self.top, self.bottom, self.left, self.right, depth_min, depth_max,
            ),
            ProjectionType::Orthographic => Matrix4::orthographic_projection_lh(
                self.near, self.far, self.top, self.bottom, self.left, self.right, depth_min, depth_max,
            ),
        }
    }
}
