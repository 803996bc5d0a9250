//! Camera host abstraction and a plain in-memory camera.

use glam::Mat4;

use crate::projection::ProjectionMode;

/// Read/write access to the projection state of a host camera.
///
/// The controller mirrors this state and writes every accepted change back.
/// The aspect ratio belongs to the viewport; it is forwarded on resize but
/// never clamped.
pub trait CameraHost {
    /// Current projection mode.
    fn projection_mode(&self) -> ProjectionMode;
    /// Sets the projection mode.
    fn set_projection_mode(&mut self, mode: ProjectionMode);

    /// Vertical field of view in degrees.
    fn fov_degrees(&self) -> f32;
    /// Sets the vertical field of view in degrees.
    fn set_fov_degrees(&mut self, degrees: f32);

    /// Orthographic half-height.
    fn ortho_size(&self) -> f32;
    /// Sets the orthographic half-height.
    fn set_ortho_size(&mut self, size: f32);

    /// Near clip distance.
    fn near(&self) -> f32;
    /// Sets the near clip distance.
    fn set_near(&mut self, near: f32);

    /// Far clip distance.
    fn far(&self) -> f32;
    /// Sets the far clip distance.
    fn set_far(&mut self, far: f32);

    /// Viewport aspect ratio (width / height).
    fn aspect_ratio(&self) -> f32;
    /// Sets the viewport aspect ratio.
    fn set_aspect_ratio(&mut self, aspect_ratio: f32);
}

/// A 3D camera for viewing the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Projection mode.
    pub projection_mode: ProjectionMode,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    /// Orthographic half-height.
    pub ortho_size: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
}

impl Camera {
    /// Creates a new camera with default settings.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            projection_mode: ProjectionMode::Perspective,
            fov_degrees: 60.0,
            ortho_size: 5.0,
            near: 1.0,
            far: 1000.0,
            aspect_ratio,
        }
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection_mode {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.fov_degrees.to_radians(),
                self.aspect_ratio,
                self.near,
                self.far,
            ),
            ProjectionMode::Orthographic => {
                let half_height = self.ortho_size;
                let half_width = half_height * self.aspect_ratio;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

impl CameraHost for Camera {
    fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    fn set_projection_mode(&mut self, mode: ProjectionMode) {
        self.projection_mode = mode;
    }

    fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    fn set_fov_degrees(&mut self, degrees: f32) {
        self.fov_degrees = degrees;
    }

    fn ortho_size(&self) -> f32 {
        self.ortho_size
    }

    fn set_ortho_size(&mut self, size: f32) {
        self.ortho_size = size;
    }

    fn near(&self) -> f32 {
        self.near
    }

    fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    fn far(&self) -> f32 {
        self.far
    }

    fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}
