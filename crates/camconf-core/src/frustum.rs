//! View frustum geometry derived from projection parameters.
//!
//! Everything here is a pure function of [`ProjectionParameters`] and the
//! aspect ratio: no allocation and no state, so it is safe to evaluate on
//! every refresh tick.

use glam::{Mat4, Vec3};

use crate::projection::{ProjectionMode, ProjectionParameters};

/// Extent of the view volume: cross-section at the near plane plus the
/// clip-plane span.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrustumExtent {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
    /// Distance from the near to the far plane.
    pub depth: f32,
}

impl FrustumExtent {
    /// Computes the extent for the given parameters.
    #[must_use]
    pub fn from_parameters(params: &ProjectionParameters, aspect_ratio: f32) -> Self {
        compute(params, aspect_ratio)
    }

    /// Local scale for a unit-cube proxy.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// True when the cross-section has no area (e.g. a 0° field of view).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Computes the frustum extent.
///
/// Orthographic: `2·size·aspect` by `2·size`. Perspective: the cross-section
/// at the near plane, `2·tan(fov/2)·near` high and `aspect` times that wide.
/// Depth is `far − near` in both modes.
///
/// `aspect_ratio` must be positive; it is not checked here.
#[must_use]
pub fn compute(params: &ProjectionParameters, aspect_ratio: f32) -> FrustumExtent {
    let half_height = half_height_at(params, params.near);
    FrustumExtent {
        width: 2.0 * half_height * aspect_ratio,
        height: 2.0 * half_height,
        depth: params.far - params.near,
    }
}

/// Half of the vertical extent at `distance` in front of the camera.
fn half_height_at(params: &ProjectionParameters, distance: f32) -> f32 {
    match params.mode {
        ProjectionMode::Orthographic => params.ortho_size,
        ProjectionMode::Perspective => (params.fov_degrees.to_radians() * 0.5).tan() * distance,
    }
}

/// Line-list wireframe of the frustum in camera space (looking down −Z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumWireframe {
    /// Corners: 0-3 on the near plane, 4-7 on the far plane, each in the
    /// order upper-left, upper-right, lower-right, lower-left.
    pub nodes: [Vec3; 8],
    /// Node index pairs.
    pub edges: [[u32; 2]; 12],
}

impl FrustumWireframe {
    /// Edge list shared by every frustum.
    pub const EDGES: [[u32; 2]; 12] = [
        // Near rectangle
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        // Far rectangle
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        // Connecting edges
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
    ];

    /// Returns the nodes transformed by `model` (e.g. the camera's
    /// inverse view matrix).
    #[must_use]
    pub fn transformed(&self, model: Mat4) -> [Vec3; 8] {
        self.nodes.map(|n| model.transform_point3(n))
    }
}

/// Builds the debug wireframe for the given parameters.
#[must_use]
pub fn wireframe(params: &ProjectionParameters, aspect_ratio: f32) -> FrustumWireframe {
    let rect = |distance: f32| {
        let half_height = half_height_at(params, distance);
        let half_width = half_height * aspect_ratio;
        let z = -distance;
        [
            Vec3::new(-half_width, half_height, z),
            Vec3::new(half_width, half_height, z),
            Vec3::new(half_width, -half_height, z),
            Vec3::new(-half_width, -half_height, z),
        ]
    };
    let near = rect(params.near);
    let far = rect(params.far);

    FrustumWireframe {
        nodes: [near[0], near[1], near[2], near[3], far[0], far[1], far[2], far[3]],
        edges: FrustumWireframe::EDGES,
    }
}

/// GPU-compatible uniforms for a unit-cube frustum proxy.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrustumProxyUniforms {
    /// Model matrix: scales the unit cube to the extent and centers it
    /// between the clip planes.
    pub model: [[f32; 4]; 4],
    /// 0.0 for perspective, 1.0 for orthographic.
    pub orthographic: f32,
    /// Padding for alignment.
    pub _padding: [f32; 3],
}

impl FrustumProxyUniforms {
    /// Builds uniforms for the given parameters.
    #[must_use]
    pub fn new(params: &ProjectionParameters, aspect_ratio: f32) -> Self {
        let extent = compute(params, aspect_ratio);
        let center = Vec3::new(0.0, 0.0, -(params.near + params.far) * 0.5);
        let model = Mat4::from_translation(center) * Mat4::from_scale(extent.scale());
        Self {
            model: model.to_cols_array_2d(),
            orthographic: if params.mode.is_orthographic() { 1.0 } else { 0.0 },
            _padding: [0.0; 3],
        }
    }
}

impl Default for FrustumProxyUniforms {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            orthographic: 0.0,
            _padding: [0.0; 3],
        }
    }
}
