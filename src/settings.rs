//! Persisted player settings (the JSON document kept in localStorage)
//!
//! Every field is optional on load; missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::classifier::FingerThresholds;
use crate::error::ConfigError;
use crate::game::Difficulty;
use crate::session::{sensitivity_to_window, window_to_sensitivity, DetectionConfig};

pub const DEFAULT_SENSITIVITY: u32 = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub finger_thresholds: FingerThresholds,
    pub difficulty: Difficulty,
    pub enable_voice: bool,
    #[serde(rename = "enableSFX", alias = "enableSfx")]
    pub enable_sfx: bool,
    /// 1 (steady, 5 frames) ..= 5 (fast, 1 frame)
    pub sensitivity: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            finger_thresholds: FingerThresholds::default(),
            difficulty: Difficulty::default(),
            enable_voice: true,
            enable_sfx: true,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl Settings {
    /// Parse and validate a saved settings document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
    
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
    
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.finger_thresholds.validate()?;
        sensitivity_to_window(self.sensitivity)?;
        Ok(())
    }
    
    pub fn detection_config(&self) -> Result<DetectionConfig, ConfigError> {
        Ok(DetectionConfig {
            thresholds: self.finger_thresholds,
            min_frames_consistent: sensitivity_to_window(self.sensitivity)?,
        })
    }
    
    /// Settings reflecting a live detection config. A window size that is
    /// not on the slider keeps the current sensitivity.
    pub fn with_detection(mut self, config: &DetectionConfig) -> Self {
        self.finger_thresholds = config.thresholds;
        if let Some(s) = window_to_sensitivity(config.min_frames_consistent) {
            self.sensitivity = s;
        }
        self
    }
}
