pub mod math;
pub mod camera;

/// Re-export common types for easier usage
pub use crate::camera::{Camera, CameraConfig, DepthRange, Frustum, ProjectionType};
pub use crate::math::{
    Color, Matrix2, Matrix3, Matrix4, Plane, Quaternion, Real, Rotation, Transform, Vector2, Vector3,
    Vector4,
};

/// Error types for the math library
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum MathError {
        #[error("Matrix is singular (determinant {determinant})")]
        SingularMatrix { determinant: f64 },

        #[error("Cannot normalize a zero-length value")]
        ZeroLength,

        #[error("Invalid frustum: {0}")]
        InvalidFrustum(String),
    }
}

/// Result type for fallible math operations
pub type Result<T> = std::result::Result<T, error::MathError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
