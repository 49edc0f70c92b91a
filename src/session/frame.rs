//! One camera frame's worth of detector output
//!
//! Raw and unvalidated: each hand is whatever the detector delivered.
//! The session validates hands before classification.

use crate::classifier::LANDMARK_COUNT;
use crate::geometry::Point2D;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameObservation {
    pub hands: Vec<Vec<Point2D>>,
}

impl FrameObservation {
    /// Frame with no hands in view
    pub fn empty() -> Self {
        Self::default()
    }
    
    pub fn new(hands: Vec<Vec<Point2D>>) -> Self {
        Self { hands }
    }
    
    /// Parse `num_hands` hands from a flat array laid out as
    /// `[hand][landmark][component]` with `stride` components per landmark.
    /// 
    /// A hand whose slice is cut short by the array keeps only the landmarks
    /// that fit, so it fails validation later instead of borrowing data.
    pub fn from_flat(data: &[f32], num_hands: usize, stride: usize) -> Self {
        let stride = stride.max(2);
        let hand_len = LANDMARK_COUNT * stride;
        
        let hands = (0..num_hands)
            .map(|h| {
                let start = (h * hand_len).min(data.len());
                let end = (start + hand_len).min(data.len());
                data[start..end]
                    .chunks_exact(stride)
                    .map(|c| Point2D::new(c[0], c[1]))
                    .collect()
            })
            .collect();
        
        Self { hands }
    }
    
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}
