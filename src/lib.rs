//! FingerCount Web - finger counting game core (WASM)
//! 
//! Turns MediaPipe hand landmarks into a debounced finger count:
//! landmarks → per-frame count → confirmed count → change event.
//! 
//! Entry point for WASM module. Only contains:
//! - Module declarations and re-exports
//! - wasm_bindgen start hook

pub mod geometry;
pub mod classifier;
pub mod stability;
pub mod session;
pub mod game;
pub mod settings;
pub mod error;

mod bridge;
mod logging;

use wasm_bindgen::prelude::*;

pub use classifier::{classify_hand, Finger, FingerThresholds, Hand, HandReading};
pub use error::{ConfigError, GameError, LandmarkError};
pub use geometry::Point2D;
pub use session::{ConfigHandle, DetectionConfig, FingerCountChanged, FrameObservation, FrameReport, GestureSession};
pub use settings::Settings;
pub use stability::StabilityFilter;

// Re-export wasm_bindgen functions for JS access
pub use bridge::*;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init_console_logging();
}
