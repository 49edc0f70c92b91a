//! Detection configuration and the shared handle used to tune it live

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::classifier::{Finger, FingerThresholds};
use crate::error::ConfigError;
use crate::stability::DEFAULT_MIN_FRAMES_CONSISTENT;

/// Sensitivity slider range in the settings panel
const SENSITIVITY_RANGE: std::ops::RangeInclusive<u32> = 1..=5;

/// Map the 1-5 sensitivity slider to a window size (5 → 1 frame, 1 → 5 frames)
pub fn sensitivity_to_window(sensitivity: u32) -> Result<usize, ConfigError> {
    if SENSITIVITY_RANGE.contains(&sensitivity) {
        Ok((6 - sensitivity) as usize)
    } else {
        Err(ConfigError::SensitivityOutOfRange(sensitivity))
    }
}

/// Inverse of `sensitivity_to_window`, if the window is on the slider
pub fn window_to_sensitivity(window: usize) -> Option<u32> {
    let window = u32::try_from(window).ok()?;
    SENSITIVITY_RANGE.contains(&window).then(|| 6 - window)
}

/// Everything the frame pipeline reads per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionConfig {
    pub thresholds: FingerThresholds,
    /// Consecutive identical frames required to confirm a count (N >= 1)
    pub min_frames_consistent: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            thresholds: FingerThresholds::default(),
            min_frames_consistent: DEFAULT_MIN_FRAMES_CONSISTENT,
        }
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        if self.min_frames_consistent < 1 {
            return Err(ConfigError::WindowTooSmall(self.min_frames_consistent));
        }
        Ok(())
    }
}

/// Shared, live-tunable configuration
/// 
/// Settings code writes through a clone of the handle while the session
/// takes one snapshot per frame, so a frame sees either the old or the new
/// configuration as a whole. Invalid updates are rejected and the previous
/// value is kept.
#[derive(Clone, Debug, Default)]
pub struct ConfigHandle {
    inner: Arc<RwLock<DetectionConfig>>,
}

impl ConfigHandle {
    pub fn new(config: DetectionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(RwLock::new(config)),
        })
    }
    
    /// Consistent copy of the current configuration
    pub fn snapshot(&self) -> DetectionConfig {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
    
    fn update<F>(&self, apply: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut DetectionConfig) -> Result<(), ConfigError>,
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = *guard;
        
        let result = apply(&mut next).and_then(|_| next.validate());
        match result {
            Ok(()) => {
                *guard = next;
                Ok(())
            }
            Err(e) => {
                warn!("Rejected configuration update: {}", e);
                Err(e)
            }
        }
    }
    
    pub fn set_threshold(&self, finger: Finger, degrees: f32) -> Result<(), ConfigError> {
        self.update(|c| c.thresholds.set(finger, degrees))
    }
    
    pub fn set_threshold_by_name(&self, name: &str, degrees: f32) -> Result<(), ConfigError> {
        self.update(|c| c.thresholds.set_by_name(name, degrees))
    }
    
    pub fn set_thresholds(&self, thresholds: FingerThresholds) -> Result<(), ConfigError> {
        self.update(|c| {
            c.thresholds = thresholds;
            Ok(())
        })
    }
    
    pub fn set_min_frames_consistent(&self, n: usize) -> Result<(), ConfigError> {
        self.update(|c| {
            c.min_frames_consistent = n;
            Ok(())
        })?;
        info!(frames = n, "minFramesConsistent updated");
        Ok(())
    }
    
    pub fn set_sensitivity(&self, sensitivity: u32) -> Result<(), ConfigError> {
        let n = sensitivity_to_window(sensitivity)?;
        self.set_min_frames_consistent(n)
    }
    
    /// Swap in a whole configuration at once
    pub fn replace(&self, config: DetectionConfig) -> Result<(), ConfigError> {
        self.update(|c| {
            *c = config;
            Ok(())
        })
    }
}
