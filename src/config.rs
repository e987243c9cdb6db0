//! Editor settings shared by every command and render pass of a session.

use thiserror::Error;

use crate::sample::{samples_per_segment, DEFAULT_STEP};

/// Distance within which a drag or delete picks up a point.
pub const DEFAULT_PICK_RADIUS: f64 = 10.0;

/// Rejected editor settings.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The sampling step is not positive and finite, or too small to sample with
    #[error("sampling step must be a positive finite number, got {0}")]
    InvalidStep(f64),

    /// The pick radius is negative or not finite
    #[error("pick radius must be a non-negative finite number, got {0}")]
    InvalidPickRadius(f64),
}

/// Validated editor settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorConfig {
    step: f64,
    pick_radius: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            step: DEFAULT_STEP,
            pick_radius: DEFAULT_PICK_RADIUS,
        }
    }
}

impl EditorConfig {
    /// Checks and bundles the settings.
    pub fn new(step: f64, pick_radius: f64) -> Result<Self, ConfigError> {
        if samples_per_segment(step).is_none() {
            return Err(ConfigError::InvalidStep(step));
        }
        if !pick_radius.is_finite() || pick_radius < 0.0 {
            return Err(ConfigError::InvalidPickRadius(pick_radius));
        }
        Ok(EditorConfig { step, pick_radius })
    }

    /// Replaces the sampling step
    pub fn with_step(self, step: f64) -> Result<Self, ConfigError> {
        EditorConfig::new(step, self.pick_radius)
    }

    /// Replaces the pick radius
    pub fn with_pick_radius(self, pick_radius: f64) -> Result<Self, ConfigError> {
        EditorConfig::new(self.step, pick_radius)
    }

    /// Curve parameter increment between two samples
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Radius used by drags and deletes
    pub fn pick_radius(&self) -> f64 {
        self.pick_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.step(), 0.01);
        assert_eq!(config.pick_radius(), 10.0);
        assert_eq!(EditorConfig::new(0.01, 10.0), Ok(config));
    }

    #[test]
    fn rejects_invalid() {
        assert_eq!(EditorConfig::new(0.0, 10.0), Err(ConfigError::InvalidStep(0.0)));
        assert_eq!(EditorConfig::new(-0.5, 10.0), Err(ConfigError::InvalidStep(-0.5)));
        assert_eq!(
            EditorConfig::new(0.1, -1.0),
            Err(ConfigError::InvalidPickRadius(-1.0))
        );
        assert!(EditorConfig::default().with_step(f64::NAN).is_err());
        assert!(EditorConfig::default().with_pick_radius(f64::INFINITY).is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::InvalidStep(0.0).to_string(),
            "sampling step must be a positive finite number, got 0"
        );
    }
}
