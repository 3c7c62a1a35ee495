//! Configuration management for the gesture recognition core.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classifier::Thresholds;
use crate::constants;
use crate::{Error, Result};

/// Recognizer configuration: buffer sizing plus every rule threshold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame buffer configuration
    pub buffer: BufferConfig,

    /// Rule cascade thresholds
    pub thresholds: Thresholds,
}

/// Sliding-window buffer parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Maximum number of frames retained (window length)
    pub capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: constants::DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;

        if self.buffer.capacity == 0 {
            return Err(Error::Config("Buffer capacity must be greater than 0".to_string()));
        }
        if t.min_history_frames < 2 {
            return Err(Error::Config(
                "Minimum history must be at least 2 frames".to_string(),
            ));
        }
        if self.buffer.capacity < t.min_history_frames {
            return Err(Error::Config(format!(
                "Buffer capacity {} is below the minimum history of {} frames",
                self.buffer.capacity, t.min_history_frames
            )));
        }
        if t.hot_lookback_frames == 0 || t.rub_dwell_frames == 0 || t.tired_dwell_frames == 0 {
            return Err(Error::Config("Rule windows must be greater than 0 frames".to_string()));
        }
        if self.buffer.capacity < t.rub_dwell_frames {
            return Err(Error::Config(format!(
                "Buffer capacity {} cannot hold the {}-frame rub window",
                self.buffer.capacity, t.rub_dwell_frames
            )));
        }

        for (name, value) in [
            ("hot_mouth_radius", t.hot_mouth_radius),
            ("hot_drop_distance", t.hot_drop_distance),
            ("cold_wrist_shoulder_radius", t.cold_wrist_shoulder_radius),
            ("cold_wrist_cross_radius", t.cold_wrist_cross_radius),
            ("cold_elbow_cross_radius", t.cold_elbow_cross_radius),
            ("rub_zone_radius", t.rub_zone_radius),
            ("rub_min_motion", t.rub_min_motion),
            ("tired_zone_radius", t.tired_zone_radius),
            ("tired_max_motion", t.tired_max_motion),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Config(format!("{name} must be a positive distance, got {value}")));
            }
        }
        if !t.oscillation_noise_floor.is_finite() || t.oscillation_noise_floor < 0.0 {
            return Err(Error::Config(
                "Oscillation noise floor must be non-negative".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Gesture recognition configuration

# Sliding-window frame buffer
buffer:
  capacity: 30

# Rule cascade thresholds (normalized image units, frame counts)
thresholds:
  min_history_frames: 10
  hot_lookback_frames: 8
  hot_mouth_radius: 0.2
  hot_drop_distance: 0.15
  cold_wrist_shoulder_radius: 0.25
  cold_wrist_cross_radius: 0.2
  cold_elbow_cross_radius: 0.4
  rub_zone_radius: 0.3
  rub_dwell_frames: 20
  rub_min_motion: 0.15
  rub_min_oscillations: 2
  hungry_center_tolerance: 0.2
  tired_zone_radius: 0.35
  tired_dwell_frames: 15
  tired_max_motion: 0.10
  oscillation_noise_floor: 0.01
  belly_y_offset: 0.1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.buffer.capacity, 30);
        assert_eq!(config.thresholds.rub_dwell_frames, 20);
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn test_validate_rejects_undersized_buffer() {
        let mut config = Config::default();
        config.buffer.capacity = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        let mut config = Config::default();
        config.thresholds.rub_zone_radius = -0.3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("buffer:\n  capacity: 45\n").unwrap();
        assert_eq!(config.buffer.capacity, 45);
        assert_eq!(config.thresholds, Thresholds::default());
    }
}
