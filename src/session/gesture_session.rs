//! Gesture session - landmarks → per-frame total → confirmed count → event
//!
//! One session per camera-on period. Frames must arrive one at a time and in
//! order; the stability filter's unanimity check depends on it.

use tracing::{debug, warn};

use super::config::{ConfigHandle, DetectionConfig};
use super::frame::FrameObservation;
use crate::classifier::{read_hand, Hand, HandReading};
use crate::stability::StabilityFilter;

/// Edge-triggered notification: the confirmed finger count changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerCountChanged {
    pub count: u32,
}

/// Result of processing one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Raw (undebounced) finger total across all valid hands
    pub total: u32,
    /// Per-finger readings of each valid hand, in detector order
    pub hands: Vec<HandReading>,
    /// Hands dropped as malformed
    pub rejected: usize,
    /// Set only on the frame that confirmed a new count
    pub changed: Option<FingerCountChanged>,
}

pub struct GestureSession {
    config: ConfigHandle,
    filter: StabilityFilter,
    frames: u64,
}

impl GestureSession {
    /// Session with its own default configuration
    pub fn new() -> Self {
        Self::with_config(ConfigHandle::default())
    }
    
    /// Session reading a shared configuration handle
    pub fn with_config(config: ConfigHandle) -> Self {
        let n = config.snapshot().min_frames_consistent;
        Self {
            config,
            filter: StabilityFilter::new(n),
            frames: 0,
        }
    }
    
    /// Handle for settings code to tune thresholds and window size live
    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }
    
    /// Process one camera frame
    /// 
    /// Malformed hands count as absent; a bad frame degrades to a zero
    /// reading and never interrupts the session.
    pub fn on_frame(&mut self, observation: &FrameObservation) -> FrameReport {
        let config = self.config.snapshot();
        self.sync_window(&config);
        self.frames += 1;
        
        let mut report = FrameReport::default();
        
        for (i, points) in observation.hands.iter().enumerate() {
            match Hand::new(points) {
                Ok(hand) => {
                    let reading = read_hand(&hand, &config.thresholds);
                    report.total += reading.count();
                    report.hands.push(reading);
                }
                Err(e) => {
                    warn!(frame = self.frames, hand = i, "Dropping malformed hand: {}", e);
                    report.rejected += 1;
                }
            }
        }
        
        debug!(frame = self.frames, total = report.total, hands = report.hands.len(), "Frame classified");
        
        report.changed = self
            .filter
            .observe(report.total)
            .map(|count| FingerCountChanged { count });
        report
    }
    
    /// Frame where the detector produced no output at all
    pub fn on_missing_frame(&mut self) -> FrameReport {
        self.on_frame(&FrameObservation::empty())
    }
    
    pub fn confirmed_count(&self) -> u32 {
        self.filter.confirmed()
    }
    
    pub fn frames_processed(&self) -> u64 {
        self.frames
    }
    
    pub fn window_len(&self) -> usize {
        self.filter.window_len()
    }
    
    /// Camera restarted: forget history, confirmed count back to 0
    pub fn reset(&mut self) {
        self.filter.reset();
        self.frames = 0;
    }
    
    fn sync_window(&mut self, config: &DetectionConfig) {
        if config.min_frames_consistent != self.filter.min_frames_consistent() {
            self.filter.set_min_frames_consistent(config.min_frames_consistent);
        }
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new()
    }
}
