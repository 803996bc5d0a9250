//! Authoritative projection state for a host camera.

use crate::camera::CameraHost;
use crate::options::ParameterLimits;
use crate::projection::{ProjectionMode, ProjectionParameters};

/// Owns the projection parameters of a camera host and keeps them valid.
///
/// Every mutator is total: out-of-range input is clamped into
/// [`ParameterLimits`], and a clip distance that would cross the other plane
/// is pushed back by `clip_epsilon`, so `near < far` holds after every call.
/// Accepted values are written through to the host.
#[derive(Debug)]
pub struct ProjectionController<H: CameraHost> {
    host: H,
    params: ProjectionParameters,
    limits: ParameterLimits,
    revision: u64,
}

impl<H: CameraHost> ProjectionController<H> {
    /// Creates a controller with the default limits.
    pub fn new(host: H) -> Self {
        Self::with_limits(host, ParameterLimits::default())
    }

    /// Creates a controller with custom limits.
    ///
    /// The host's current state is read once, sanitized, and written back.
    /// Invalid limits are replaced by the defaults.
    pub fn with_limits(host: H, limits: ParameterLimits) -> Self {
        let limits = match limits.validate() {
            Ok(()) => limits,
            Err(err) => {
                log::warn!("{err}; falling back to default limits");
                ParameterLimits::default()
            }
        };

        let near = limits.near.clamp(host.near());
        let mut far = limits.far.clamp(host.far());
        if far <= near {
            far = (near + limits.clip_epsilon).min(limits.far.max);
        }

        let params = ProjectionParameters {
            mode: host.projection_mode(),
            fov_degrees: limits.fov_degrees.clamp(host.fov_degrees()),
            ortho_size: limits.ortho_size.clamp(host.ortho_size()),
            near,
            far,
        };

        let mut controller = Self {
            host,
            params,
            limits,
            revision: 0,
        };
        if controller.host_differs() {
            log::debug!("host projection sanitized to {:?}", controller.params);
        }
        controller.push_all();
        controller
    }

    /// Returns an immutable snapshot of the current parameters.
    #[must_use]
    pub fn current_parameters(&self) -> ProjectionParameters {
        self.params
    }

    /// Current projection mode.
    #[must_use]
    pub fn mode(&self) -> ProjectionMode {
        self.params.mode
    }

    /// Aspect ratio as reported by the host.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.host.aspect_ratio()
    }

    /// Parameter limits in effect.
    #[must_use]
    pub fn limits(&self) -> &ParameterLimits {
        &self.limits
    }

    /// Forwards a viewport resize to the host.
    ///
    /// Non-finite or non-positive ratios are ignored.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            log::warn!("ignoring invalid aspect ratio {aspect_ratio}");
            return;
        }
        if aspect_ratio != self.host.aspect_ratio() {
            self.host.set_aspect_ratio(aspect_ratio);
            self.bump();
        }
    }

    /// Counter bumped whenever a mutation changes a parameter or the aspect
    /// ratio.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Read access to the host camera.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Consumes the controller and returns the host camera.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Switches the projection mode. Stored sizes are left untouched.
    pub fn set_mode(&mut self, mode: ProjectionMode) {
        if self.params.mode == mode {
            return;
        }
        self.params.mode = mode;
        self.host.set_projection_mode(mode);
        self.bump();
        log::info!("projection mode set to {}", mode.name());
    }

    /// Sets the vertical field of view in degrees.
    ///
    /// Stored in either mode; only affects the projection in perspective.
    pub fn set_fov_degrees(&mut self, degrees: f32) {
        let fov = self.limits.fov_degrees.clamp(degrees);
        note_correction("field of view", degrees, fov);
        if fov != self.params.fov_degrees {
            self.params.fov_degrees = fov;
            self.host.set_fov_degrees(fov);
            self.bump();
        }
    }

    /// Sets the orthographic half-height.
    ///
    /// Stored in either mode; only affects the projection in orthographic.
    pub fn set_ortho_size(&mut self, size: f32) {
        let ortho = self.limits.ortho_size.clamp(size);
        note_correction("orthographic size", size, ortho);
        if ortho != self.params.ortho_size {
            self.params.ortho_size = ortho;
            self.host.set_ortho_size(ortho);
            self.bump();
        }
    }

    /// Sets the near clip distance, staying below the far plane.
    pub fn set_near(&mut self, near: f32) {
        let mut corrected = self.limits.near.clamp(near);
        if corrected >= self.params.far {
            corrected = (self.params.far - self.limits.clip_epsilon).max(self.limits.near.min);
        }
        note_correction("near clip", near, corrected);
        if corrected != self.params.near {
            self.params.near = corrected;
            self.host.set_near(corrected);
            self.bump();
        }
    }

    /// Sets the far clip distance, staying above the near plane.
    pub fn set_far(&mut self, far: f32) {
        let mut corrected = self.limits.far.clamp(far);
        if corrected <= self.params.near {
            corrected = (self.params.near + self.limits.clip_epsilon).min(self.limits.far.max);
        }
        note_correction("far clip", far, corrected);
        if corrected != self.params.far {
            self.params.far = corrected;
            self.host.set_far(corrected);
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn host_differs(&self) -> bool {
        let p = &self.params;
        p.mode != self.host.projection_mode()
            || p.fov_degrees != self.host.fov_degrees()
            || p.ortho_size != self.host.ortho_size()
            || p.near != self.host.near()
            || p.far != self.host.far()
    }

    fn push_all(&mut self) {
        let p = self.params;
        self.host.set_projection_mode(p.mode);
        self.host.set_fov_degrees(p.fov_degrees);
        self.host.set_ortho_size(p.ortho_size);
        self.host.set_near(p.near);
        self.host.set_far(p.far);
    }
}

fn note_correction(what: &str, requested: f32, applied: f32) {
    if requested != applied {
        log::debug!("{what} {requested} corrected to {applied}");
    }
}
