//! The camera configurator component.
//!
//! Wires a camera host, its [`ProjectionController`], the [`UiSyncAdapter`]
//! and a visual proxy together. A configurator created without a camera host
//! reports it once and then ignores every call.

use camconf_core::{
    CamconfError, CameraHost, ConfiguratorOptions, FrustumExtent, FrustumProxyUniforms,
    FrustumWireframe, ProjectionController, ProjectionMode, ProjectionParameters,
    RecomputePolicy, Result,
};
use camconf_ui::{build_projection_section, ControlKind, ControlSet, ProjectionAction};

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::proxy::VisualProxy;
use crate::ui_sync::{UiState, UiSyncAdapter};

struct Active<H: CameraHost> {
    controller: ProjectionController<H>,
    adapter: UiSyncAdapter,
    recompute: RecomputePolicy,
    // Revision and aspect ratio bits of the last extent handed to a proxy.
    last_pushed: Option<(u64, u32)>,
}

/// Interactive projection configurator for one camera.
pub struct CameraConfigurator<H: CameraHost> {
    active: Option<Active<H>>,
}

impl<H: CameraHost> CameraConfigurator<H> {
    /// Creates a configurator for `camera` with default options, logging
    /// diagnostics.
    pub fn with_camera(camera: H) -> Self {
        Self::new(Some(camera), ConfiguratorOptions::default(), &mut LogSink)
    }

    /// Creates a configurator.
    ///
    /// A missing camera is reported to `sink` and leaves the configurator
    /// permanently inactive. Invalid options are reported and replaced by
    /// the defaults.
    pub fn new(
        camera: Option<H>,
        options: ConfiguratorOptions,
        sink: &mut impl DiagnosticSink,
    ) -> Self {
        let Some(camera) = camera else {
            sink.warn(
                "no camera host provided to the camera configurator; the configurator is disabled",
            );
            return Self { active: None };
        };

        let options = match options.validate() {
            Ok(()) => options,
            Err(err) => {
                sink.warn(&format!("{err}; using default configurator options"));
                ConfiguratorOptions::default()
            }
        };

        Self::activate(camera, &options)
    }

    /// Creates a configurator, failing instead of degrading.
    pub fn try_new(camera: Option<H>, options: ConfiguratorOptions) -> Result<Self> {
        let camera = camera.ok_or_else(|| {
            CamconfError::MissingCollaborator("camera host".to_string())
        })?;
        options.validate()?;
        Ok(Self::activate(camera, &options))
    }

    fn activate(camera: H, options: &ConfiguratorOptions) -> Self {
        let controller = ProjectionController::with_limits(camera, options.limits);
        let adapter = UiSyncAdapter::new(&controller, options);
        log::info!(
            "camera configurator started in {} mode",
            controller.mode().name()
        );
        Self {
            active: Some(Active {
                controller,
                adapter,
                recompute: options.recompute,
                last_pushed: None,
            }),
        }
    }

    /// Returns false if the configurator was disabled at startup.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The projection controller.
    #[must_use]
    pub fn controller(&self) -> Option<&ProjectionController<H>> {
        self.active.as_ref().map(|a| &a.controller)
    }

    /// Snapshot of the current projection parameters.
    #[must_use]
    pub fn parameters(&self) -> Option<ProjectionParameters> {
        self.controller().map(ProjectionController::current_parameters)
    }

    /// The synchronized control set.
    #[must_use]
    pub fn controls(&self) -> Option<&ControlSet> {
        self.active.as_ref().map(|a| a.adapter.controls())
    }

    /// Current UI state.
    #[must_use]
    pub fn ui_state(&self) -> Option<UiState> {
        self.active.as_ref().map(|a| a.adapter.state())
    }

    /// Applies a control edit.
    pub fn apply_control_change(&mut self, kind: ControlKind, value: f32) {
        if let Some(a) = self.active.as_mut() {
            a.adapter.apply_control_change(&mut a.controller, kind, value);
        }
    }

    /// Applies a control edit addressed by name.
    ///
    /// Unknown names are an error even when the configurator is inactive.
    pub fn apply_named_change(&mut self, name: &str, value: f32) -> Result<()> {
        let kind = name.parse::<ControlKind>()?;
        self.apply_control_change(kind, value);
        Ok(())
    }

    /// Flips between perspective and orthographic projection.
    pub fn toggle_mode(&mut self) {
        if let Some(a) = self.active.as_mut() {
            a.adapter.toggle_mode(&mut a.controller);
        }
    }

    /// Switches to the given projection mode.
    pub fn set_mode(&mut self, mode: ProjectionMode) {
        if let Some(a) = self.active.as_mut() {
            a.adapter.set_mode_explicit(&mut a.controller, mode);
        }
    }

    /// Applies an action reported by the projection panel.
    pub fn handle_action(&mut self, action: ProjectionAction) {
        if let Some(a) = self.active.as_mut() {
            a.adapter.handle_action(&mut a.controller, action);
        }
    }

    /// Forwards a viewport resize to the camera host.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if let Some(a) = self.active.as_mut() {
            a.controller.set_aspect_ratio(aspect_ratio);
        }
    }

    /// Draws the projection panel and applies whatever the user changed.
    pub fn show_panel(&mut self, ui: &mut egui::Ui) {
        let Some(a) = self.active.as_mut() else {
            return;
        };
        let action = build_projection_section(ui, a.adapter.controls());
        a.adapter.handle_action(&mut a.controller, action);
    }

    /// Current frustum extent.
    #[must_use]
    pub fn extent(&self) -> Option<FrustumExtent> {
        self.controller().map(|c| {
            FrustumExtent::from_parameters(&c.current_parameters(), c.aspect_ratio())
        })
    }

    /// Debug wireframe of the current frustum in camera space.
    #[must_use]
    pub fn wireframe(&self) -> Option<FrustumWireframe> {
        self.controller()
            .map(|c| camconf_core::frustum::wireframe(&c.current_parameters(), c.aspect_ratio()))
    }

    /// GPU uniforms for a unit-cube frustum proxy.
    #[must_use]
    pub fn proxy_uniforms(&self) -> Option<FrustumProxyUniforms> {
        self.controller()
            .map(|c| FrustumProxyUniforms::new(&c.current_parameters(), c.aspect_ratio()))
    }

    /// Refresh tick: recomputes the extent and hands it to `proxy`.
    ///
    /// Returns the extent if it was pushed. Under
    /// [`RecomputePolicy::OnChange`] nothing is pushed until the parameters
    /// or the host's aspect ratio change again.
    pub fn frame_tick(&mut self, proxy: &mut impl VisualProxy) -> Option<FrustumExtent> {
        let a = self.active.as_mut()?;
        let aspect = a.controller.aspect_ratio();
        let key = (a.controller.revision(), aspect.to_bits());
        if a.recompute == RecomputePolicy::OnChange && a.last_pushed == Some(key) {
            return None;
        }
        let extent = FrustumExtent::from_parameters(&a.controller.current_parameters(), aspect);
        proxy.apply_extent(&extent);
        a.last_pushed = Some(key);
        Some(extent)
    }

    /// Consumes the configurator and returns the camera host, if any.
    pub fn into_camera(self) -> Option<H> {
        self.active.map(|a| a.controller.into_host())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::proxy::ScaleProxy;
    use camconf_core::{Camera, Mat4, Vec3};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Host whose viewport resizes without going through the controller.
    struct SharedViewportCamera {
        camera: Camera,
        aspect: Rc<Cell<f32>>,
    }

    impl CameraHost for SharedViewportCamera {
        fn projection_mode(&self) -> ProjectionMode {
            self.camera.projection_mode
        }
        fn set_projection_mode(&mut self, mode: ProjectionMode) {
            self.camera.projection_mode = mode;
        }
        fn fov_degrees(&self) -> f32 {
            self.camera.fov_degrees
        }
        fn set_fov_degrees(&mut self, degrees: f32) {
            self.camera.fov_degrees = degrees;
        }
        fn ortho_size(&self) -> f32 {
            self.camera.ortho_size
        }
        fn set_ortho_size(&mut self, size: f32) {
            self.camera.ortho_size = size;
        }
        fn near(&self) -> f32 {
            self.camera.near
        }
        fn set_near(&mut self, near: f32) {
            self.camera.near = near;
        }
        fn far(&self) -> f32 {
            self.camera.far
        }
        fn set_far(&mut self, far: f32) {
            self.camera.far = far;
        }
        fn aspect_ratio(&self) -> f32 {
            self.aspect.get()
        }
        fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
            self.aspect.set(aspect_ratio);
        }
    }

    fn on_change() -> ConfiguratorOptions {
        ConfiguratorOptions {
            recompute: RecomputePolicy::OnChange,
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_camera_disables() {
        let mut sink = CollectingSink::default();
        let mut configurator: CameraConfigurator<Camera> =
            CameraConfigurator::new(None, ConfiguratorOptions::default(), &mut sink);

        assert!(!configurator.is_active());
        assert_eq!(sink.messages.len(), 1);

        configurator.toggle_mode();
        configurator.apply_control_change(ControlKind::FieldOfView, 10.0);
        let mut proxy = ScaleProxy::new();
        assert!(configurator.frame_tick(&mut proxy).is_none());
        assert_eq!(proxy.updates, 0);
        assert!(configurator.parameters().is_none());
        assert!(configurator.controls().is_none());
        assert_eq!(sink.messages.len(), 1);
    }

    #[test]
    fn test_try_new_missing_camera() {
        let result: Result<CameraConfigurator<Camera>> =
            CameraConfigurator::try_new(None, ConfiguratorOptions::default());
        assert!(matches!(result, Err(CamconfError::MissingCollaborator(_))));
    }

    #[test]
    fn test_invalid_options_reported() {
        let mut options = ConfiguratorOptions::default();
        options.limits.clip_epsilon = 0.0;
        let mut sink = CollectingSink::default();
        let configurator = CameraConfigurator::new(Some(Camera::new(1.0)), options, &mut sink);
        assert!(configurator.is_active());
        assert_eq!(sink.messages.len(), 1);
        assert!(CameraConfigurator::try_new(Some(Camera::new(1.0)), {
            let mut o = ConfiguratorOptions::default();
            o.limits.clip_epsilon = 0.0;
            o
        })
        .is_err());
    }

    #[test]
    fn test_frame_tick_every_tick() {
        let mut configurator = CameraConfigurator::with_camera(Camera::new(1.0));
        let mut proxy = ScaleProxy::new();
        assert!(configurator.frame_tick(&mut proxy).is_some());
        assert!(configurator.frame_tick(&mut proxy).is_some());
        assert_eq!(proxy.updates, 2);
    }

    #[test]
    fn test_frame_tick_on_change() {
        let mut configurator =
            CameraConfigurator::new(Some(Camera::new(1.0)), on_change(), &mut LogSink);
        let mut proxy = ScaleProxy::new();
        assert!(configurator.frame_tick(&mut proxy).is_some());
        assert!(configurator.frame_tick(&mut proxy).is_none());

        configurator.toggle_mode();
        let extent = configurator.frame_tick(&mut proxy).unwrap();
        assert_eq!(proxy.updates, 2);
        assert_eq!(proxy.scale, extent.scale());
    }

    #[test]
    fn test_frame_tick_on_change_follows_external_resize() {
        let aspect = Rc::new(Cell::new(1.0));
        let host = SharedViewportCamera {
            camera: Camera::new(1.0),
            aspect: Rc::clone(&aspect),
        };
        let mut configurator = CameraConfigurator::new(Some(host), on_change(), &mut LogSink);
        let mut proxy = ScaleProxy::new();
        assert!(configurator.frame_tick(&mut proxy).is_some());
        assert!(configurator.frame_tick(&mut proxy).is_none());

        aspect.set(2.0);
        assert!(configurator.frame_tick(&mut proxy).is_some());
        assert_eq!(proxy.updates, 2);
        assert_eq!(proxy.scale.x, configurator.extent().unwrap().width);
        assert!(configurator.frame_tick(&mut proxy).is_none());
    }

    #[test]
    fn test_set_aspect_ratio_reaches_proxy() {
        let mut configurator =
            CameraConfigurator::new(Some(Camera::new(1.0)), on_change(), &mut LogSink);
        let mut proxy = ScaleProxy::new();
        let square = configurator.frame_tick(&mut proxy).unwrap();

        configurator.set_aspect_ratio(2.0);
        let wide = configurator.frame_tick(&mut proxy).unwrap();
        assert_eq!(wide.height, square.height);
        assert!((wide.width - square.width * 2.0).abs() < 1e-5);
        assert_eq!(proxy.scale, wide.scale());
        assert_eq!(configurator.into_camera().unwrap().aspect_ratio, 2.0);
    }

    #[test]
    fn test_proxy_uniforms_follow_parameters() {
        let mut configurator = CameraConfigurator::with_camera(Camera::new(1.0));
        configurator.apply_control_change(ControlKind::FarClip, 21.0);
        let uniforms = configurator.proxy_uniforms().unwrap();
        let model = Mat4::from_cols_array_2d(&uniforms.model);
        assert_eq!(model.w_axis.z, -11.0);
        assert_eq!(uniforms.orthographic, 0.0);

        configurator.toggle_mode();
        assert_eq!(configurator.proxy_uniforms().unwrap().orthographic, 1.0);
    }

    #[test]
    fn test_orthographic_proxy_scale() {
        let mut camera = Camera::new(2.0);
        camera.projection_mode = ProjectionMode::Orthographic;
        camera.ortho_size = 3.0;
        camera.near = 1.0;
        camera.far = 11.0;
        let mut configurator = CameraConfigurator::with_camera(camera);
        let mut proxy = ScaleProxy::new();
        configurator.frame_tick(&mut proxy);
        assert_eq!(proxy.scale, Vec3::new(12.0, 6.0, 10.0));
    }

    #[test]
    fn test_closure_proxy() {
        let mut configurator = CameraConfigurator::with_camera(Camera::new(1.0));
        let mut seen = Vec::new();
        configurator.frame_tick(&mut |extent: &FrustumExtent| seen.push(*extent));
        assert_eq!(seen.len(), 1);
        assert_eq!(Some(seen[0]), configurator.extent());
    }

    #[test]
    fn test_into_camera_carries_changes() {
        let mut configurator = CameraConfigurator::with_camera(Camera::new(1.0));
        configurator.apply_control_change(ControlKind::FieldOfView, 35.0);
        configurator.set_mode(ProjectionMode::Orthographic);
        let camera = configurator.into_camera().unwrap();
        assert_eq!(camera.fov_degrees, 35.0);
        assert_eq!(camera.projection_mode, ProjectionMode::Orthographic);
    }

    #[test]
    fn test_show_panel_without_input() {
        let mut configurator = CameraConfigurator::with_camera(Camera::new(1.0));
        let before = configurator.parameters();
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| configurator.show_panel(ui));
        });
        assert_eq!(configurator.parameters(), before);
    }
}
