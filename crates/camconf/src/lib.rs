//! camconf: interactive perspective/orthographic camera configuration.
//!
//! A [`CameraConfigurator`] keeps a camera's projection parameters valid,
//! mirrors them into a set of bounded UI controls, and derives the view
//! frustum extent for a debug proxy on every refresh tick.
//!
//! # Quick Start
//!
//! ```no_run
//! use camconf::*;
//!
//! init_logging();
//!
//! let mut configurator = CameraConfigurator::with_camera(Camera::new(16.0 / 9.0));
//! configurator.apply_control_change(ControlKind::FieldOfView, 45.0);
//! configurator.toggle_mode();
//!
//! let mut proxy = ScaleProxy::new();
//! configurator.frame_tick(&mut proxy);
//! ```
//!
//! # Architecture
//!
//! - [`ProjectionController`] owns the parameters and clamps every edit
//! - [`UiSyncAdapter`] maps them onto a [`ControlSet`] and routes edits back
//! - [`frustum`] computes the extent, wireframe and proxy uniforms

pub mod configurator;
pub mod diagnostics;
pub mod proxy;
pub mod ui_sync;

// Re-export core types
pub use camconf_core::{
    frustum, CamconfError, Camera, CameraHost, ClipControlPolicy, ConfiguratorOptions,
    FrustumExtent, FrustumProxyUniforms, FrustumWireframe, Mat4, ParameterLimits,
    ProjectionController, ProjectionMode, ProjectionParameters, RecomputePolicy, Result,
    ScalarRange, Vec3,
};

// Re-export UI types
pub use camconf_ui::{
    build_projection_section, ControlBinding, ControlKind, ControlSet, ProjectionAction,
};

pub use configurator::CameraConfigurator;
pub use diagnostics::{CollectingSink, DiagnosticSink, LogSink};
pub use proxy::{ScaleProxy, VisualProxy};
pub use ui_sync::{UiState, UiSyncAdapter};

/// Initializes `env_logger`. Safe to call more than once.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("camconf logging initialized");
    }
}
