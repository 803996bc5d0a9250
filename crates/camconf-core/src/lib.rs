//! Core abstractions for camconf.
//!
//! This crate holds the parts of a camera configurator that have real
//! invariants:
//! - [`ProjectionController`] owns the projection parameters of a
//!   [`CameraHost`] and keeps them inside [`ParameterLimits`]
//! - [`frustum`] derives the view-volume extent and debug wireframe
//! - [`ConfiguratorOptions`] covers limits and behavior policies

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Clamped parameters are compared exactly to detect changes
#![allow(clippy::float_cmp)]

pub mod camera;
pub mod controller;
pub mod error;
pub mod frustum;
pub mod options;
pub mod projection;

pub use camera::{Camera, CameraHost};
pub use controller::ProjectionController;
pub use error::{CamconfError, Result};
pub use frustum::{FrustumExtent, FrustumProxyUniforms, FrustumWireframe};
pub use options::{
    ClipControlPolicy, ConfiguratorOptions, ParameterLimits, RecomputePolicy, ScalarRange,
};
pub use projection::{ProjectionMode, ProjectionParameters};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec3};
