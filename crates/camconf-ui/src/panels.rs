//! UI panel builders.

use egui::{CollapsingHeader, Slider, Ui};

use crate::controls::{ControlBinding, ControlKind, ControlSet};

/// User interaction reported by [`build_projection_section`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionAction {
    /// Nothing changed this frame.
    None,
    /// The projection toggle was pressed.
    ToggleProjection,
    /// A control was dragged to a new value.
    SetValue(ControlKind, f32),
}

/// Builds the projection settings section.
///
/// The control set is only read; edits are returned as an action for the
/// caller to apply, and show up in the widgets once the caller has
/// resynchronized the set.
pub fn build_projection_section(ui: &mut Ui, controls: &ControlSet) -> ProjectionAction {
    let mut action = ProjectionAction::None;

    CollapsingHeader::new("Projection")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let mut orthographic = controls.orthographic;
                if ui.checkbox(&mut orthographic, "Orthographic").changed() {
                    action = ProjectionAction::ToggleProjection;
                }
                ui.label(controls.mode_label);
            });

            ui.separator();

            if controls.perspective_group_visible {
                if let Some(a) = build_slider(ui, controls.get(ControlKind::FieldOfView), "°") {
                    action = a;
                }
            }
            if controls.orthographic_group_visible {
                if let Some(a) = build_slider(ui, controls.get(ControlKind::OrthographicSize), "") {
                    action = a;
                }
            }

            // Clip planes
            for kind in [ControlKind::NearClip, ControlKind::FarClip] {
                if let Some(a) = build_slider(ui, controls.get(kind), "") {
                    action = a;
                }
            }
        });

    action
}

fn build_slider(ui: &mut Ui, binding: &ControlBinding, suffix: &str) -> Option<ProjectionAction> {
    let mut value = binding.current_value;
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(format!("{}:", binding.kind.label()));
        let slider = Slider::new(&mut value, binding.min_value..=binding.max_value).suffix(suffix);
        changed = ui.add_enabled(binding.enabled, slider).changed();
    });
    changed.then_some(ProjectionAction::SetValue(binding.kind, value))
}
