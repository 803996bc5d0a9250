//! End-to-end tests for the camera configurator.

use camconf::*;

fn camera(mode: ProjectionMode) -> Camera {
    let mut camera = Camera::new(1.0);
    camera.projection_mode = mode;
    camera
}

#[test]
fn test_fov_preserved_across_switches() {
    let mut configurator = CameraConfigurator::with_camera(camera(ProjectionMode::Perspective));
    configurator.apply_control_change(ControlKind::FieldOfView, 45.0);
    configurator.set_mode(ProjectionMode::Orthographic);
    configurator.set_mode(ProjectionMode::Perspective);
    assert_eq!(configurator.parameters().unwrap().fov_degrees, 45.0);
}

#[test]
fn test_set_mode_twice_matches_once() {
    let mut once = CameraConfigurator::with_camera(camera(ProjectionMode::Perspective));
    let mut twice = CameraConfigurator::with_camera(camera(ProjectionMode::Perspective));
    once.set_mode(ProjectionMode::Orthographic);
    twice.set_mode(ProjectionMode::Orthographic);
    twice.set_mode(ProjectionMode::Orthographic);
    assert_eq!(once.parameters(), twice.parameters());
    assert_eq!(once.controls(), twice.controls());
}

#[test]
fn test_near_clip_past_far_is_corrected() {
    let mut configurator = CameraConfigurator::with_camera(camera(ProjectionMode::Perspective));
    configurator.apply_control_change(ControlKind::FarClip, 100.0);
    configurator.apply_control_change(ControlKind::NearClip, 500.0);

    let params = configurator.parameters().unwrap();
    assert!(params.near < params.far);
    assert!((params.near - 99.99).abs() < 1e-4);

    let controls = configurator.controls().unwrap();
    assert_eq!(controls.get(ControlKind::NearClip).current_value, params.near);
    assert_eq!(controls.get(ControlKind::FarClip).current_value, params.far);
}

#[test]
fn test_orthographic_scenario_extent() {
    let mut host = Camera::new(1.78);
    host.projection_mode = ProjectionMode::Orthographic;
    host.ortho_size = 5.0;
    host.near = 1.0;
    host.far = 100.0;
    let mut configurator = CameraConfigurator::with_camera(host);

    let mut proxy = ScaleProxy::new();
    let extent = configurator.frame_tick(&mut proxy).unwrap();
    assert!((extent.width - 17.8).abs() < 1e-4);
    assert_eq!(extent.height, 10.0);
    assert_eq!(extent.depth, 99.0);
    assert_eq!(proxy.scale, extent.scale());
}

#[test]
fn test_perspective_scenario_extent() {
    let params = ProjectionParameters {
        mode: ProjectionMode::Perspective,
        fov_degrees: 60.0,
        ortho_size: 5.0,
        near: 0.3,
        far: 1000.0,
    };
    let extent = frustum::compute(&params, 1.0);
    assert!((extent.height - 0.346).abs() < 1e-3);
    assert!((extent.width - 0.346).abs() < 1e-3);
    assert!((extent.depth - 999.7).abs() < 1e-3);
}

#[test]
fn test_toggle_switches_enabled_controls() {
    let mut configurator = CameraConfigurator::with_camera(camera(ProjectionMode::Perspective));
    assert_eq!(configurator.ui_state(), Some(UiState::PerspectiveActive));

    configurator.toggle_mode();
    let controls = configurator.controls().unwrap();
    assert_eq!(configurator.ui_state(), Some(UiState::OrthographicActive));
    assert!(controls.orthographic);
    assert!(controls.get(ControlKind::OrthographicSize).enabled);
    assert!(!controls.get(ControlKind::FieldOfView).enabled);
}

#[test]
fn test_startup_mode_taken_from_camera() {
    let configurator = CameraConfigurator::with_camera(camera(ProjectionMode::Orthographic));
    assert_eq!(configurator.ui_state(), Some(UiState::OrthographicActive));
    assert_eq!(configurator.controls().unwrap().mode_label, "Orthographic");
}

#[test]
fn test_frustum_follows_edits() {
    let mut configurator = CameraConfigurator::with_camera(camera(ProjectionMode::Orthographic));
    let mut proxy = ScaleProxy::new();

    configurator.apply_control_change(ControlKind::OrthographicSize, 2.0);
    configurator.frame_tick(&mut proxy);
    assert_eq!(proxy.scale.y, 4.0);

    configurator.apply_control_change(ControlKind::OrthographicSize, 8.0);
    configurator.frame_tick(&mut proxy);
    assert_eq!(proxy.scale.y, 16.0);
}

#[test]
fn test_named_changes() {
    let mut configurator = CameraConfigurator::with_camera(camera(ProjectionMode::Perspective));
    configurator.apply_named_change("far_clip", 250.0).unwrap();
    assert_eq!(configurator.parameters().unwrap().far, 250.0);
    assert!(matches!(
        configurator.apply_named_change("focal_length", 1.0),
        Err(CamconfError::UnknownControl(_))
    ));
}

#[test]
fn test_disabled_configurator_ignores_everything() {
    let mut sink = CollectingSink::default();
    let mut configurator: CameraConfigurator<Camera> =
        CameraConfigurator::new(None, ConfiguratorOptions::default(), &mut sink);
    configurator.set_mode(ProjectionMode::Orthographic);
    configurator.handle_action(ProjectionAction::ToggleProjection);
    assert!(configurator.apply_named_change("fov", 10.0).is_ok());
    assert!(configurator.extent().is_none());
    assert!(configurator.wireframe().is_none());
    assert!(configurator.into_camera().is_none());
    assert_eq!(sink.messages.len(), 1);
}

#[test]
fn test_options_from_json() {
    let options = ConfiguratorOptions::from_json_str(
        r#"{ "clip_controls": "OrthographicOnly", "ortho_size_on_switch": 5.0 }"#,
    )
    .unwrap();
    let mut configurator =
        CameraConfigurator::try_new(Some(camera(ProjectionMode::Perspective)), options).unwrap();

    let controls = configurator.controls().unwrap();
    assert!(!controls.get(ControlKind::NearClip).enabled);

    configurator.apply_control_change(ControlKind::OrthographicSize, 40.0);
    configurator.toggle_mode();
    assert_eq!(configurator.parameters().unwrap().ortho_size, 5.0);
    assert!(configurator.controls().unwrap().get(ControlKind::NearClip).enabled);
}
