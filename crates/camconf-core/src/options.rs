//! Configuration options for the camera configurator.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CamconfError, Result};

/// Closed interval a scalar parameter is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarRange {
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (inclusive).
    pub max: f32,
}

impl ScalarRange {
    /// Creates a new range.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Returns true if `value` lies inside the range.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(CamconfError::InvalidOptions(format!(
                "{name} range must be finite"
            )));
        }
        if self.min > self.max {
            return Err(CamconfError::InvalidOptions(format!(
                "{name} range has min {} greater than max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Bounds for every projection parameter the controller manages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterLimits {
    /// Vertical field of view, in degrees.
    pub fov_degrees: ScalarRange,
    /// Orthographic half-height.
    pub ortho_size: ScalarRange,
    /// Near clip distance.
    pub near: ScalarRange,
    /// Far clip distance.
    pub far: ScalarRange,
    /// Minimum gap kept between the near and far clip planes.
    pub clip_epsilon: f32,
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            fov_degrees: ScalarRange::new(0.0, 180.0),
            ortho_size: ScalarRange::new(1.0, 100.0),
            near: ScalarRange::new(1.0, 100.0),
            far: ScalarRange::new(1.0, 1000.0),
            clip_epsilon: 0.01,
        }
    }
}

impl ParameterLimits {
    /// Checks that the limits admit at least one valid parameter set.
    pub fn validate(&self) -> Result<()> {
        self.fov_degrees.validate("fov_degrees")?;
        self.ortho_size.validate("ortho_size")?;
        self.near.validate("near")?;
        self.far.validate("far")?;

        if !(self.clip_epsilon.is_finite() && self.clip_epsilon > 0.0) {
            return Err(CamconfError::InvalidOptions(
                "clip_epsilon must be finite and positive".to_string(),
            ));
        }
        if self.fov_degrees.min < 0.0 || self.fov_degrees.max > 180.0 {
            return Err(CamconfError::InvalidOptions(
                "fov_degrees range must lie within [0, 180]".to_string(),
            ));
        }
        if self.ortho_size.min <= 0.0 {
            return Err(CamconfError::InvalidOptions(
                "ortho_size minimum must be positive".to_string(),
            ));
        }
        if self.near.min <= 0.0 {
            return Err(CamconfError::InvalidOptions(
                "near minimum must be positive".to_string(),
            ));
        }
        if self.near.max + self.clip_epsilon > self.far.max {
            return Err(CamconfError::InvalidOptions(format!(
                "far maximum {} must exceed near maximum {} by at least {}",
                self.far.max, self.near.max, self.clip_epsilon
            )));
        }
        // The clip-plane correction steps by epsilon; it must move every value
        // in range, and f32 spacing is widest at the range maxima.
        if self.near.max + self.clip_epsilon == self.near.max
            || self.far.max - self.clip_epsilon == self.far.max
        {
            return Err(CamconfError::InvalidOptions(format!(
                "clip_epsilon {} is below f32 precision at near maximum {} or far maximum {}",
                self.clip_epsilon, self.near.max, self.far.max
            )));
        }
        Ok(())
    }
}

/// Which projection modes leave the near/far clip controls editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClipControlPolicy {
    /// Near/far controls are editable in both modes.
    #[default]
    AlwaysEnabled,
    /// Near/far controls are only editable in orthographic mode.
    OrthographicOnly,
}

/// When the frustum extent is recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RecomputePolicy {
    /// Recompute on every refresh tick.
    #[default]
    EveryTick,
    /// Recompute only on the first tick after a parameter change.
    OnChange,
}

/// Options for a camera configurator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfiguratorOptions {
    /// Parameter bounds and the clip-plane gap.
    pub limits: ParameterLimits,

    /// Enablement of the near/far clip controls.
    pub clip_controls: ClipControlPolicy,

    /// Orthographic size applied on every switch into orthographic mode.
    ///
    /// `None` keeps whatever size was last set.
    pub ortho_size_on_switch: Option<f32>,

    /// Frustum recomputation cadence.
    pub recompute: RecomputePolicy,
}

impl ConfiguratorOptions {
    /// Validates the options.
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()?;
        if let Some(size) = self.ortho_size_on_switch {
            if !size.is_finite() {
                return Err(CamconfError::InvalidOptions(
                    "ortho_size_on_switch must be finite".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Parses and validates options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads and validates options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&json)?;
        log::info!("loaded configurator options from {}", path.display());
        Ok(options)
    }

    /// Writes the options to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
