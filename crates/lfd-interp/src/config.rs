//! Tunables of the angular search and the projector emission model.
//!
//! Every field has a default, so a YAML file only needs the keys it changes:
//!
//! ```rust
//! use lfd_interp::InterpolationConfig;
//!
//! let config = InterpolationConfig::from_yaml_str("contribution_half_window: 2\n").unwrap();
//! assert_eq!(config.contribution_half_window, 2);
//! assert_eq!(config.max_search_iterations, 50);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{InterpError, InterpResult};

/// Default ratio between a projector's half-decay angle and the sigma of
/// its Gaussian emission lobe.
pub const GAUSSIAN_HALF_DECAY: f32 = 1.11741;

/// Angular search and compositor parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolationConfig {
    /// Ratio between a projector's half-decay angle and the Gaussian sigma.
    pub gaussian_half_decay: f32,
    /// Projectors gathered on each side of the bracketing pair (`K`).
    pub contribution_half_window: usize,
    /// Weights at or below this are ignored, as is a total weight at or
    /// below it when normalizing.
    pub contribution_epsilon: f32,
    /// Upper bound on bisection steps.
    pub max_search_iterations: usize,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            gaussian_half_decay: GAUSSIAN_HALF_DECAY,
            contribution_half_window: 4,
            contribution_epsilon: 0.01,
            max_search_iterations: 50,
        }
    }
}

impl InterpolationConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> InterpResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> InterpResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InterpError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded interpolation config");
        Ok(config)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> InterpResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that every tunable is in range.
    pub fn validate(&self) -> InterpResult<()> {
        if !(self.gaussian_half_decay > 0.0 && self.gaussian_half_decay.is_finite()) {
            return Err(InterpError::InvalidParameter(format!(
                "gaussian_half_decay must be positive, got {}",
                self.gaussian_half_decay
            )));
        }
        if self.contribution_half_window == 0 {
            return Err(InterpError::InvalidParameter(
                "contribution_half_window must be at least 1".into(),
            ));
        }
        if !(self.contribution_epsilon >= 0.0) {
            return Err(InterpError::InvalidParameter(format!(
                "contribution_epsilon must be non-negative, got {}",
                self.contribution_epsilon
            )));
        }
        if self.max_search_iterations == 0 {
            return Err(InterpError::InvalidParameter(
                "max_search_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
