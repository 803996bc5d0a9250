//! Synchronization between a [`ProjectionController`] and its UI controls.

use camconf_core::{
    CameraHost, ClipControlPolicy, ConfiguratorOptions, ProjectionController, ProjectionMode,
    Result,
};
use camconf_ui::{ControlKind, ControlSet, ProjectionAction};

/// Which control subset the UI currently exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    /// Field of view editable, orthographic size disabled.
    PerspectiveActive,
    /// Orthographic size editable, field of view disabled.
    OrthographicActive,
}

impl UiState {
    /// State matching a projection mode.
    #[must_use]
    pub fn for_mode(mode: ProjectionMode) -> Self {
        match mode {
            ProjectionMode::Perspective => UiState::PerspectiveActive,
            ProjectionMode::Orthographic => UiState::OrthographicActive,
        }
    }

    /// Whether `kind` is editable in this state.
    #[must_use]
    pub fn is_enabled(self, kind: ControlKind, clip_controls: ClipControlPolicy) -> bool {
        match (self, kind) {
            (UiState::PerspectiveActive, ControlKind::FieldOfView)
            | (UiState::OrthographicActive, ControlKind::OrthographicSize) => true,
            (UiState::PerspectiveActive, ControlKind::OrthographicSize)
            | (UiState::OrthographicActive, ControlKind::FieldOfView) => false,
            (UiState::OrthographicActive, ControlKind::NearClip | ControlKind::FarClip) => true,
            (UiState::PerspectiveActive, ControlKind::NearClip | ControlKind::FarClip) => {
                clip_controls == ClipControlPolicy::AlwaysEnabled
            }
        }
    }
}

/// Maps controller state onto a [`ControlSet`] and routes edits back.
///
/// The controller is passed into every call and stays the source of truth:
/// after each change the whole control set is re-read from it, so clamping
/// or clip-plane correction on one parameter shows up in every widget.
#[derive(Debug, Clone)]
pub struct UiSyncAdapter {
    state: UiState,
    controls: ControlSet,
    clip_controls: ClipControlPolicy,
    ortho_size_on_switch: Option<f32>,
}

impl UiSyncAdapter {
    /// Creates the adapter, taking the initial state from the controller's
    /// current mode.
    pub fn new<H: CameraHost>(
        controller: &ProjectionController<H>,
        options: &ConfiguratorOptions,
    ) -> Self {
        let mut adapter = Self {
            state: UiState::for_mode(controller.mode()),
            controls: ControlSet::new(controller.limits()),
            clip_controls: options.clip_controls,
            ortho_size_on_switch: options.ortho_size_on_switch,
        };
        adapter.resync(controller);
        adapter
    }

    /// Current UI state.
    #[must_use]
    pub fn state(&self) -> UiState {
        self.state
    }

    /// The control set as last synchronized.
    #[must_use]
    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    /// Routes a control edit to the matching mutator and refreshes every
    /// displayed value.
    pub fn apply_control_change<H: CameraHost>(
        &mut self,
        controller: &mut ProjectionController<H>,
        kind: ControlKind,
        value: f32,
    ) {
        match kind {
            ControlKind::FieldOfView => controller.set_fov_degrees(value),
            ControlKind::OrthographicSize => controller.set_ortho_size(value),
            ControlKind::NearClip => controller.set_near(value),
            ControlKind::FarClip => controller.set_far(value),
        }
        self.refresh_values(controller);
    }

    /// Like [`Self::apply_control_change`], addressing the control by name.
    pub fn apply_named_change<H: CameraHost>(
        &mut self,
        controller: &mut ProjectionController<H>,
        name: &str,
        value: f32,
    ) -> Result<()> {
        let kind = name.parse::<ControlKind>()?;
        self.apply_control_change(controller, kind, value);
        Ok(())
    }

    /// Flips the projection mode and resynchronizes every control.
    pub fn toggle_mode<H: CameraHost>(&mut self, controller: &mut ProjectionController<H>) {
        let mode = controller.mode().toggled();
        self.set_mode_explicit(controller, mode);
    }

    /// Switches to `mode` and resynchronizes every control.
    pub fn set_mode_explicit<H: CameraHost>(
        &mut self,
        controller: &mut ProjectionController<H>,
        mode: ProjectionMode,
    ) {
        let entering_orthographic =
            mode.is_orthographic() && !controller.mode().is_orthographic();
        controller.set_mode(mode);
        if entering_orthographic {
            if let Some(size) = self.ortho_size_on_switch {
                controller.set_ortho_size(size);
            }
        }
        self.resync(controller);
    }

    /// Applies an action reported by the projection panel.
    pub fn handle_action<H: CameraHost>(
        &mut self,
        controller: &mut ProjectionController<H>,
        action: ProjectionAction,
    ) {
        match action {
            ProjectionAction::None => {}
            ProjectionAction::ToggleProjection => self.toggle_mode(controller),
            ProjectionAction::SetValue(kind, value) => {
                self.apply_control_change(controller, kind, value);
            }
        }
    }

    /// Re-reads state, values and enablement from the controller.
    pub fn resync<H: CameraHost>(&mut self, controller: &ProjectionController<H>) {
        let state = UiState::for_mode(controller.mode());
        if state != self.state {
            log::info!("projection controls switched to {state:?}");
        }
        self.state = state;
        self.controls.set_mode(controller.mode());
        for kind in ControlKind::ALL {
            self.controls
                .set_enabled(kind, state.is_enabled(kind, self.clip_controls));
        }
        self.refresh_values(controller);
    }

    fn refresh_values<H: CameraHost>(&mut self, controller: &ProjectionController<H>) {
        let params = controller.current_parameters();
        for kind in ControlKind::ALL {
            self.controls.set_value(kind, kind.value_of(&params));
        }
    }
}
