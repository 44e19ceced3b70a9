//! Input and camera settings

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// Settings consumed by the input dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Flip the sign of derived vertical deltas (`last_y - y`)
    ///
    /// Only affects deltas computed from absolute cursor positions.
    /// Relative motion reported by the platform is always used as given.
    pub invert_derived_y: bool,
    /// Fly camera tuning
    pub camera: CameraConfig,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            invert_derived_y: true,
            camera: CameraConfig::default(),
        }
    }
}

impl InputConfig {
    /// Reject values the camera cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()
    }
}

impl Config for InputConfig {}

/// Fly camera tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// World units per second
    pub move_speed: f32,
    /// Degrees of rotation per unit of mouse delta
    pub mouse_sensitivity: f32,
    /// Degrees of field of view per unit of scroll
    pub scroll_zoom_speed: f32,
    /// Narrowest field of view in degrees
    pub min_fov: f32,
    /// Widest field of view in degrees
    pub max_fov: f32,
    /// Pitch clamp in degrees, applied symmetrically
    pub pitch_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.5,
            mouse_sensitivity: 0.1,
            scroll_zoom_speed: 1.0,
            min_fov: 1.0,
            max_fov: 45.0,
            pitch_limit: 89.0,
        }
    }
}

impl CameraConfig {
    /// Reject non-finite or inverted ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("camera.move_speed", self.move_speed)?;
        positive("camera.mouse_sensitivity", self.mouse_sensitivity)?;
        positive("camera.scroll_zoom_speed", self.scroll_zoom_speed)?;
        positive("camera.min_fov", self.min_fov)?;
        positive("camera.pitch_limit", self.pitch_limit)?;

        if !(self.max_fov.is_finite() && self.min_fov < self.max_fov && self.max_fov < 180.0) {
            return Err(ConfigError::Invalid {
                field: "camera.max_fov",
                reason: format!("must lie in ({}, 180)", self.min_fov),
            });
        }
        if self.pitch_limit >= 90.0 {
            return Err(ConfigError::Invalid {
                field: "camera.pitch_limit",
                reason: "must be below 90 degrees".to_string(),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}
