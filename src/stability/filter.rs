//! Temporal stability filter (edge-triggered debounce)
//!
//! A count is confirmed only after N consecutive identical frames, and only
//! reported when it differs from the previously confirmed count. Strict
//! unanimity, not a majority vote: a single outlier restarts the run.

use tracing::{debug, info};

use super::window::StabilityWindow;

/// Frames that must agree before a count is confirmed
pub const DEFAULT_MIN_FRAMES_CONSISTENT: usize = 3;

pub struct StabilityFilter {
    window: StabilityWindow,
    /// Last count emitted as stable (0 at session start)
    confirmed: u32,
}

impl StabilityFilter {
    pub fn new(min_frames_consistent: usize) -> Self {
        Self {
            window: StabilityWindow::new(min_frames_consistent),
            confirmed: 0,
        }
    }
    
    /// Feed one per-frame total. Returns the new confirmed count on change.
    pub fn observe(&mut self, total: u32) -> Option<u32> {
        self.window.push(total);
        
        let stable = self.window.unanimous()?;
        if stable == self.confirmed {
            return None;
        }
        
        info!(from = self.confirmed, to = stable, frames = self.window.capacity(), "Finger count confirmed");
        self.confirmed = stable;
        Some(stable)
    }
    
    pub fn confirmed(&self) -> u32 {
        self.confirmed
    }
    
    pub fn min_frames_consistent(&self) -> usize {
        self.window.capacity()
    }
    
    /// Change N. The window is cleared so stale entries from the old size
    /// never take part in the next unanimity check; the confirmed count stays.
    pub fn set_min_frames_consistent(&mut self, n: usize) {
        if n == self.window.capacity() {
            return;
        }
        debug!(from = self.window.capacity(), to = n, "Stability window resized");
        self.window.resize(n);
    }
    
    /// Entries currently held (min(N, frames since last clear))
    pub fn window_len(&self) -> usize {
        self.window.len()
    }
    
    /// Back to session start: empty window, confirmed count 0
    pub fn reset(&mut self) {
        self.window.clear();
        self.confirmed = 0;
    }
}

impl Default for StabilityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_FRAMES_CONSISTENT)
    }
}
