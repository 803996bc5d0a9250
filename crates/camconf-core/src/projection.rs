//! Projection mode and parameter snapshot.

use serde::{Deserialize, Serialize};

/// Camera projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// Perspective projection.
    #[default]
    Perspective,
    /// Orthographic projection.
    Orthographic,
}

impl ProjectionMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "Perspective",
            ProjectionMode::Orthographic => "Orthographic",
        }
    }

    /// Returns true for orthographic projection.
    #[must_use]
    pub fn is_orthographic(self) -> bool {
        matches!(self, ProjectionMode::Orthographic)
    }
}

/// Snapshot of a camera's projection state.
///
/// Both `fov_degrees` and `ortho_size` are kept regardless of `mode`; only
/// the one matching the mode affects the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// Projection mode.
    pub mode: ProjectionMode,
    /// Vertical field of view in degrees (perspective only).
    pub fov_degrees: f32,
    /// Orthographic half-height (orthographic only).
    pub ortho_size: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl ProjectionParameters {
    /// Returns the size parameter that is active for the current mode.
    #[must_use]
    pub fn active_size(&self) -> f32 {
        match self.mode {
            ProjectionMode::Perspective => self.fov_degrees,
            ProjectionMode::Orthographic => self.ortho_size,
        }
    }

    /// Distance between the near and far clip planes.
    #[must_use]
    pub fn clip_span(&self) -> f32 {
        self.far - self.near
    }
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            fov_degrees: 60.0,
            ortho_size: 5.0,
            near: 1.0,
            far: 1000.0,
        }
    }
}
