//! Named, range-bounded scalar controls for projection parameters.

use std::fmt;
use std::str::FromStr;

use camconf_core::{
    CamconfError, ParameterLimits, ProjectionMode, ProjectionParameters, ScalarRange,
};

/// The scalar controls exposed for a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Field of view in degrees.
    FieldOfView,
    /// Orthographic half-height.
    OrthographicSize,
    /// Near clip distance.
    NearClip,
    /// Far clip distance.
    FarClip,
}

impl ControlKind {
    /// Every control, in display order.
    pub const ALL: [ControlKind; 4] = [
        ControlKind::FieldOfView,
        ControlKind::OrthographicSize,
        ControlKind::NearClip,
        ControlKind::FarClip,
    ];

    /// Stable identifier used to route control changes.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ControlKind::FieldOfView => "fov",
            ControlKind::OrthographicSize => "ortho_size",
            ControlKind::NearClip => "near_clip",
            ControlKind::FarClip => "far_clip",
        }
    }

    /// Returns display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ControlKind::FieldOfView => "FOV",
            ControlKind::OrthographicSize => "Size",
            ControlKind::NearClip => "Near",
            ControlKind::FarClip => "Far",
        }
    }

    /// Reads this control's parameter from a snapshot.
    #[must_use]
    pub fn value_of(self, params: &ProjectionParameters) -> f32 {
        match self {
            ControlKind::FieldOfView => params.fov_degrees,
            ControlKind::OrthographicSize => params.ortho_size,
            ControlKind::NearClip => params.near,
            ControlKind::FarClip => params.far,
        }
    }

    /// Returns the bounds for this control.
    #[must_use]
    pub fn range_of(self, limits: &ParameterLimits) -> ScalarRange {
        match self {
            ControlKind::FieldOfView => limits.fov_degrees,
            ControlKind::OrthographicSize => limits.ortho_size,
            ControlKind::NearClip => limits.near,
            ControlKind::FarClip => limits.far,
        }
    }

    fn index(self) -> usize {
        match self {
            ControlKind::FieldOfView => 0,
            ControlKind::OrthographicSize => 1,
            ControlKind::NearClip => 2,
            ControlKind::FarClip => 3,
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlKind {
    type Err = CamconfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CamconfError::UnknownControl(s.to_string()))
    }
}

/// State of one scalar control widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlBinding {
    /// Which parameter this control edits.
    pub kind: ControlKind,
    /// Displayed value.
    pub current_value: f32,
    /// Lower bound of the widget.
    pub min_value: f32,
    /// Upper bound of the widget.
    pub max_value: f32,
    /// Whether the widget accepts edits.
    pub enabled: bool,
}

impl ControlBinding {
    /// Creates a binding with the given bounds, holding `min`.
    #[must_use]
    pub fn new(kind: ControlKind, range: ScalarRange) -> Self {
        Self {
            kind,
            current_value: range.min,
            min_value: range.min,
            max_value: range.max,
            enabled: true,
        }
    }

    /// Identifier of the bound control.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Every control shown for a projection, plus the mode toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSet {
    bindings: [ControlBinding; 4],
    /// Toggle state: on means orthographic.
    pub orthographic: bool,
    /// Text shown next to the toggle.
    pub mode_label: &'static str,
    /// Whether the perspective settings group is shown.
    pub perspective_group_visible: bool,
    /// Whether the orthographic settings group is shown.
    pub orthographic_group_visible: bool,
}

impl ControlSet {
    /// Creates the control set with bounds taken from `limits`.
    #[must_use]
    pub fn new(limits: &ParameterLimits) -> Self {
        Self {
            bindings: ControlKind::ALL.map(|kind| ControlBinding::new(kind, kind.range_of(limits))),
            orthographic: false,
            mode_label: ProjectionMode::Perspective.name(),
            perspective_group_visible: true,
            orthographic_group_visible: false,
        }
    }

    /// Returns the binding for `kind`.
    #[must_use]
    pub fn get(&self, kind: ControlKind) -> &ControlBinding {
        &self.bindings[kind.index()]
    }

    /// Iterates over all bindings in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ControlBinding> {
        self.bindings.iter()
    }

    /// Sets the displayed value of `kind`.
    pub fn set_value(&mut self, kind: ControlKind, value: f32) {
        self.bindings[kind.index()].current_value = value;
    }

    /// Enables or disables the widget for `kind`.
    pub fn set_enabled(&mut self, kind: ControlKind, enabled: bool) {
        self.bindings[kind.index()].enabled = enabled;
    }

    /// Updates the toggle, label and group visibility for `mode`.
    pub fn set_mode(&mut self, mode: ProjectionMode) {
        self.orthographic = mode.is_orthographic();
        self.mode_label = mode.name();
        self.perspective_group_visible = !self.orthographic;
        self.orthographic_group_visible = self.orthographic;
    }

    /// Returns true if every displayed value matches `params`.
    #[must_use]
    pub fn matches(&self, params: &ProjectionParameters) -> bool {
        self.bindings
            .iter()
            .all(|b| b.current_value.to_bits() == b.kind.value_of(params).to_bits())
            && self.orthographic == params.mode.is_orthographic()
    }
}
