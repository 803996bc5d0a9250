//! Targets that mirror the frustum extent, such as a debug box.

use camconf_core::{FrustumExtent, Mat4, Vec3};

/// Consumes the frustum extent once per refresh tick.
pub trait VisualProxy {
    /// Receives the latest extent.
    fn apply_extent(&mut self, extent: &FrustumExtent);
}

impl<F: FnMut(&FrustumExtent)> VisualProxy for F {
    fn apply_extent(&mut self, extent: &FrustumExtent) {
        self(extent);
    }
}

/// A transform whose local scale tracks the frustum extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleProxy {
    /// Local scale: width, height, depth.
    pub scale: Vec3,
    /// Number of extents received.
    pub updates: u64,
}

impl ScaleProxy {
    /// Creates a proxy with unit scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: Vec3::ONE,
            updates: 0,
        }
    }

    /// Model matrix of the proxy.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale(self.scale)
    }
}

impl Default for ScaleProxy {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualProxy for ScaleProxy {
    fn apply_extent(&mut self, extent: &FrustumExtent) {
        self.scale = extent.scale();
        self.updates += 1;
    }
}
