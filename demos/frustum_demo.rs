//! Drives a camera configurator without a window and logs the frustum.
//!
//! Run with `RUST_LOG=info cargo run --example frustum_demo`.

use camconf::*;

fn main() -> Result<()> {
    init_logging();

    let mut configurator = CameraConfigurator::try_new(
        Some(Camera::new(16.0 / 9.0)),
        ConfiguratorOptions::default(),
    )?;
    let mut proxy = ScaleProxy::new();

    let steps: [(&str, f32); 4] = [
        ("fov", 75.0),
        ("far_clip", 250.0),
        ("near_clip", 400.0),
        ("ortho_size", 12.0),
    ];

    for (name, value) in steps {
        configurator.apply_named_change(name, value)?;
        if let Some(extent) = configurator.frame_tick(&mut proxy) {
            log::info!(
                "{name} = {value}: {:.3} x {:.3} x {:.3}",
                extent.width,
                extent.height,
                extent.depth
            );
        }
    }

    configurator.toggle_mode();
    if let Some(extent) = configurator.frame_tick(&mut proxy) {
        log::info!(
            "orthographic: {:.3} x {:.3} x {:.3}",
            extent.width,
            extent.height,
            extent.depth
        );
    }

    configurator.set_aspect_ratio(4.0 / 3.0);
    if let Some(extent) = configurator.frame_tick(&mut proxy) {
        log::info!("resized to 4:3: width {:.3}", extent.width);
    }

    if let Some(wire) = configurator.wireframe() {
        for [a, b] in wire.edges {
            log::debug!("edge {:?} -> {:?}", wire.nodes[a as usize], wire.nodes[b as usize]);
        }
    }

    Ok(())
}
