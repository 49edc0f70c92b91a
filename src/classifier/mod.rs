//! Classifier module - geometric finger extension heuristics
//!
//! Fixed geometry, no trained model: joint angle + wrist distance per finger.

mod landmarks;
mod thresholds;
mod extension;

pub use landmarks::{
    Finger, FingerJoints, Hand,
    FINGER_JOINTS, HAND_SKELETON, LANDMARK_COUNT, WRIST,
};
pub use thresholds::{FingerThresholds, DEFAULT_FINGER_THRESHOLD, DEFAULT_THUMB_THRESHOLD, MAX_THRESHOLD};
pub use extension::{classify_hand, is_extended, read_finger, read_hand, FingerReading, HandReading};
