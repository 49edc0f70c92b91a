//! Stability module - turns noisy per-frame counts into confirmed counts
//!
//! Re-exports only. All logic in submodules.

mod window;
mod filter;

pub use window::StabilityWindow;
pub use filter::{StabilityFilter, DEFAULT_MIN_FRAMES_CONSISTENT};
