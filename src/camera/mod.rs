mod config;
mod frustum;

pub use config::{CameraConfig, DepthRange};
pub use frustum::{Frustum, ProjectionType};

use tracing::debug;

use crate::math::{Matrix4, Real, Vector3, Vector4};

pub type CameraF = Camera<f32>;
pub type CameraD = Camera<f64>;

/// Left-handed camera: `side` (right), `up` and `direction` form the view
/// frame, the view looks along +`direction`.
///
/// The view, projection and projection-view matrices are recomputed as soon
/// as any input changes, so the getters are plain reads.
#[derive(Debug, Clone)]
pub struct Camera<T: Real> {
    origin: Vector3<T>,
    direction: Vector3<T>,
    up: Vector3<T>,
    side: Vector3<T>,
    frustum: Frustum<T>,
    projection_type: ProjectionType,
    depth_range: DepthRange,
    custom_projection: bool,
    view: Matrix4<T>,
    projection: Matrix4<T>,
    projection_view: Matrix4<T>,
}

impl<T: Real> Camera<T> {
    /// Creates a camera at the origin looking down +z with +y up
    pub fn new(config: &CameraConfig) -> Self {
        let frustum = Frustum::symmetric(
            T::from_f64(config.vertical_fov),
            T::from_f64(config.aspect_ratio),
            T::from_f64(config.near),
            T::from_f64(config.far),
        );

        let mut camera = Self {
            origin: Vector3::zero(),
            direction: Vector3::unit_z(),
            up: Vector3::unit_y(),
            side: Vector3::unit_x(),
            frustum,
            projection_type: config.projection,
            depth_range: config.depth_range,
            custom_projection: false,
            view: Matrix4::IDENTITY,
            projection: Matrix4::IDENTITY,
            projection_view: Matrix4::IDENTITY,
        };
        camera.update_view_matrix();
        camera.update_projection_matrix();
        camera
    }

    /// Sets the full view frame. The three axes must be orthonormal.
    pub fn set_view_frame(
        &mut self,
        origin: Vector3<T>,
        direction: Vector3<T>,
        up: Vector3<T>,
        side: Vector3<T>,
    ) -> &mut Self {
        self.origin = origin;
        self.set_axes(direction, up, side)
    }

    pub fn set_origin(&mut self, origin: Vector3<T>) -> &mut Self {
        self.origin = origin;
        self.update_view_matrix();
        self
    }

    /// Sets the view axes, which must be orthonormal
    pub fn set_axes(&mut self, direction: Vector3<T>, up: Vector3<T>, side: Vector3<T>) -> &mut Self {
        debug_assert!(
            direction.is_unit() && up.is_unit() && side.is_unit(),
            "camera axes must have unit length"
        );
        debug_assert!(
            direction.is_orthogonal(&up) && direction.is_orthogonal(&side) && up.is_orthogonal(&side),
            "camera axes must be orthogonal"
        );

        self.direction = direction;
        self.up = up;
        self.side = side;
        self.update_view_matrix();
        self
    }

    /// Places the camera at `origin` looking at `target`. `world_up` only
    /// needs to be non-parallel to the view direction.
    pub fn look_at(&mut self, origin: Vector3<T>, world_up: Vector3<T>, target: Vector3<T>) -> &mut Self {
        let direction = (target - origin).normalize();
        let side = world_up.cross(&direction).normalize();
        let up = direction.cross(&side);

        self.origin = origin;
        self.direction = direction;
        self.up = up;
        self.side = side;
        self.update_view_matrix();
        self
    }

    /// Sets the view volume and rebuilds the projection. The frustum must be
    /// valid for the projection type, see [`Frustum::validate`].
    pub fn set_frustum(&mut self, frustum: Frustum<T>, projection_type: ProjectionType) -> &mut Self {
        debug_assert!(frustum.validate(projection_type).is_ok(), "invalid frustum {:?}", frustum);
        self.frustum = frustum;
        self.projection_type = projection_type;
        self.custom_projection = false;
        self.update_projection_matrix();
        self
    }

    /// Like [`Camera::set_frustum`] but rejects invalid bounds instead of
    /// asserting. The camera is left untouched on error.
    pub fn try_set_frustum(&mut self, frustum: Frustum<T>, projection_type: ProjectionType) -> crate::Result<()> {
        if let Err(err) = frustum.validate(projection_type) {
            debug!(%err, "rejecting camera frustum");
            return Err(err);
        }
        self.set_frustum(frustum, projection_type);
        Ok(())
    }

    /// Symmetric perspective frustum from a vertical field of view in radians
    pub fn set_symmetric_frustum(&mut self, vertical_fov: T, aspect_ratio: T, near: T, far: T) -> &mut Self {
        self.set_frustum(
            Frustum::symmetric(vertical_fov, aspect_ratio, near, far),
            ProjectionType::Perspective,
        )
    }

    /// Replaces the projection matrix directly. The stored frustum bounds are
    /// not derived back from the matrix and keep their previous values.
    ///
    /// The matrix stays in place until the next [`Camera::set_frustum`]
    /// or [`Camera::rebuild_projection`]; [`Camera::set_depth_range`] only
    /// records the new convention.
    pub fn set_projection_matrix(&mut self, projection: Matrix4<T>, projection_type: ProjectionType) -> &mut Self {
        self.projection = projection;
        self.projection_type = projection_type;
        self.custom_projection = true;
        self.update_projection_view();
        self
    }

    /// Replaces the projection matrix from its four columns
    pub fn set_projection_columns(
        &mut self,
        c1: Vector4<T>,
        c2: Vector4<T>,
        c3: Vector4<T>,
        c4: Vector4<T>,
        projection_type: ProjectionType,
    ) -> &mut Self {
        self.set_projection_matrix(Matrix4::from_vectors(c1, c2, c3, c4, true), projection_type)
    }

    /// Switches the clip space depth convention. The projection is rebuilt
    /// from the frustum unless a custom matrix is installed.
    pub fn set_depth_range(&mut self, depth_range: DepthRange) -> &mut Self {
        self.depth_range = depth_range;
        if self.custom_projection {
            debug!(?depth_range, "keeping custom projection matrix");
        } else {
            self.update_projection_matrix();
        }
        self
    }

    /// Drops a custom projection matrix and rebuilds the projection from the
    /// stored frustum, depth range and the given projection type
    pub fn rebuild_projection(&mut self, projection_type: ProjectionType) -> &mut Self {
        self.projection_type = projection_type;
        self.custom_projection = false;
        self.update_projection_matrix();
        self
    }

    /// True while the projection matrix was supplied directly instead of
    /// being built from the frustum
    #[inline]
    pub fn has_custom_projection(&self) -> bool {
        self.custom_projection
    }

    #[inline]
    pub fn origin(&self) -> Vector3<T> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector3<T> {
        self.direction
    }

    #[inline]
    pub fn up(&self) -> Vector3<T> {
        self.up
    }

    #[inline]
    pub fn side(&self) -> Vector3<T> {
        self.side
    }

    #[inline]
    pub fn frustum(&self) -> &Frustum<T> {
        &self.frustum
    }

    #[inline]
    pub fn near(&self) -> T {
        self.frustum.near
    }

    #[inline]
    pub fn far(&self) -> T {
        self.frustum.far
    }

    #[inline]
    pub fn top(&self) -> T {
        self.frustum.top
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.frustum.bottom
    }

    #[inline]
    pub fn left(&self) -> T {
        self.frustum.left
    }

    #[inline]
    pub fn right(&self) -> T {
        self.frustum.right
    }

    #[inline]
    pub fn projection_type(&self) -> ProjectionType {
        self.projection_type
    }

    #[inline]
    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    /// World to camera space
    #[inline]
    pub fn view_transform(&self) -> &Matrix4<T> {
        &self.view
    }

    /// Camera to clip space
    #[inline]
    pub fn projection_transform(&self) -> &Matrix4<T> {
        &self.projection
    }

    /// World to clip space, `projection * view`
    #[inline]
    pub fn projection_view_transform(&self) -> &Matrix4<T> {
        &self.projection_view
    }

    fn update_view_matrix(&mut self) {
        let (side, up, direction, origin) = (self.side, self.up, self.direction, self.origin);
        let (o, l) = (T::ZERO, T::ONE);

        self.view = Matrix4::new(
            side.x, side.y, side.z, -side.dot(&origin),
            up.x, up.y, up.z, -up.dot(&origin),
            direction.x, direction.y, direction.z, -direction.dot(&origin),
            o, o, o, l,
        );
        self.update_projection_view();
    }

    fn update_projection_matrix(&mut self) {
        let (depth_min, depth_max) = self.depth_range.bounds();
        debug!(
            projection = ?self.projection_type,
            depth_range = ?self.depth_range,
            near = self.frustum.near.to_f64(),
            far = self.frustum.far.to_f64(),
            "rebuilding camera projection"
        );

        self.projection = self.frustum.projection_matrix(
            self.projection_type,
            T::from_f64(depth_min),
            T::from_f64(depth_max),
        );
        self.update_projection_view();
    }

    fn update_projection_view(&mut self) {
        self.projection_view = self.projection * self.view;
    }
}

impl<T: Real> Default for Camera<T> {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
