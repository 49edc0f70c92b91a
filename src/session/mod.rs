//! Session module - per-frame orchestration and live configuration
//!
//! Re-exports only. All logic in submodules.

mod config;
mod frame;
mod gesture_session;

pub use config::{sensitivity_to_window, window_to_sensitivity, ConfigHandle, DetectionConfig};
pub use frame::FrameObservation;
pub use gesture_session::{FingerCountChanged, FrameReport, GestureSession};
