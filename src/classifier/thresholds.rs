//! Per-finger angle tolerances
//!
//! The thumb bends in a plane roughly orthogonal to the palm, so it gets a
//! looser tolerance than the other four fingers.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::landmarks::Finger;
use crate::error::ConfigError;

pub const DEFAULT_THUMB_THRESHOLD: f32 = 40.0;
pub const DEFAULT_FINGER_THRESHOLD: f32 = 20.0;
pub const MAX_THRESHOLD: f32 = 180.0;

/// Maximum deviation from a straight joint (degrees) per finger
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerThresholds {
    pub thumb: f32,
    pub index: f32,
    pub middle: f32,
    pub ring: f32,
    pub pinky: f32,
}

impl Default for FingerThresholds {
    fn default() -> Self {
        Self {
            thumb: DEFAULT_THUMB_THRESHOLD,
            index: DEFAULT_FINGER_THRESHOLD,
            middle: DEFAULT_FINGER_THRESHOLD,
            ring: DEFAULT_FINGER_THRESHOLD,
            pinky: DEFAULT_FINGER_THRESHOLD,
        }
    }
}

fn check(finger: Finger, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && (0.0..=MAX_THRESHOLD).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ThresholdOutOfRange { finger: finger.as_str(), value })
    }
}

impl FingerThresholds {
    pub fn get(&self, finger: Finger) -> f32 {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }
    
    /// Update one tolerance. Invalid values leave the current one in place.
    pub fn set(&mut self, finger: Finger, value: f32) -> Result<(), ConfigError> {
        let value = check(finger, value).inspect_err(|e| warn!("Rejected threshold: {}", e))?;
        
        let slot = match finger {
            Finger::Thumb => &mut self.thumb,
            Finger::Index => &mut self.index,
            Finger::Middle => &mut self.middle,
            Finger::Ring => &mut self.ring,
            Finger::Pinky => &mut self.pinky,
        };
        *slot = value;
        info!(finger = finger.as_str(), degrees = value, "Finger threshold updated");
        Ok(())
    }
    
    /// Update by finger name as used by the settings panel ("thumb", "index", ...)
    pub fn set_by_name(&mut self, name: &str, value: f32) -> Result<(), ConfigError> {
        let finger = Finger::from_name(name).ok_or_else(|| ConfigError::UnknownFinger(name.to_string()))?;
        self.set(finger, value)
    }
    
    /// Check every tolerance (e.g. after deserializing)
    pub fn validate(&self) -> Result<(), ConfigError> {
        for finger in Finger::ALL {
            check(finger, self.get(finger))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_defaults() {
        let t = FingerThresholds::default();
        assert_eq!(t.get(Finger::Thumb), 40.0);
        assert_eq!(t.get(Finger::Ring), 20.0);
        assert!(t.validate().is_ok());
    }
    
    #[test]
    fn test_set_accepts_bounds() {
        let mut t = FingerThresholds::default();
        t.set(Finger::Index, 0.0).unwrap();
        t.set(Finger::Pinky, 180.0).unwrap();
        assert_eq!(t.index, 0.0);
        assert_eq!(t.pinky, 180.0);
    }
    
    #[test]
    fn test_invalid_value_keeps_previous() {
        let mut t = FingerThresholds::default();
        assert!(t.set(Finger::Middle, -1.0).is_err());
        assert!(t.set(Finger::Middle, 181.0).is_err());
        assert!(t.set(Finger::Middle, f32::NAN).is_err());
        assert_eq!(t.middle, DEFAULT_FINGER_THRESHOLD);
    }
    
    #[test]
    fn test_set_by_name() {
        let mut t = FingerThresholds::default();
        t.set_by_name("thumb", 55.0).unwrap();
        assert_eq!(t.thumb, 55.0);
        assert!(matches!(t.set_by_name("elbow", 10.0), Err(ConfigError::UnknownFinger(_))));
    }
    
    #[test]
    fn test_partial_json_uses_defaults() {
        let t: FingerThresholds = serde_json::from_str(r#"{"thumb": 35}"#).unwrap();
        assert_eq!(t.thumb, 35.0);
        assert_eq!(t.index, DEFAULT_FINGER_THRESHOLD);
    }
}
