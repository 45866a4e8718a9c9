use crate::camera::ProjectionType;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Clip space depth convention of the target graphics API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum DepthRange {
    /// Direct3D, Vulkan and Metal: depth in `[0, 1]`
    #[default]
    ZeroToOne,
    /// OpenGL: depth in `[-1, 1]`
    NegativeOneToOne,
}

impl DepthRange {
    /// `(depth_min, depth_max)`
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            DepthRange::ZeroToOne => (0.0, 1.0),
            DepthRange::NegativeOneToOne => (-1.0, 1.0),
        }
    }
}

/// Configuration parameters for a camera
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CameraConfig {
    /// Depth convention of the projection matrix
    pub depth_range: DepthRange,

    /// Distance to the near plane
    pub near: f64,

    /// Distance to the far plane
    pub far: f64,

    /// Vertical field of view in radians
    pub vertical_fov: f64,

    /// Width divided by height of the view volume
    pub aspect_ratio: f64,

    /// Kind of projection built from the frustum
    pub projection: ProjectionType,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            depth_range: DepthRange::ZeroToOne,
            near: 1.0,
            far: 10000.0,
            vertical_fov: std::f64::consts::FRAC_PI_2,
            aspect_ratio: 1.0,
            projection: ProjectionType::Perspective,
        }
    }
}
