//! Hand landmark layout and validation
//! 
//! MediaPipe Hands reports 21 landmarks per hand. The index layout is fixed:
//! 0 = wrist, then four points per finger from the palm out to the tip.

use crate::error::LandmarkError;
use crate::geometry::Point2D;

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Hand skeleton connections for overlay rendering (fingers + palm)
pub const HAND_SKELETON: [(usize, usize); 23] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP),
];

/// Detectors report points slightly outside the frame for hands at the edge.
/// Anything beyond this margin is garbage.
const FRAME_MARGIN: f32 = 0.5;

// ============================================================================
// FINGER TABLE
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

/// The three landmarks the extension test looks at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerJoints {
    pub tip: usize,
    /// Joint adjacent to the tip
    pub near: usize,
    /// Next joint toward the palm
    pub far: usize,
}

/// Finger → (tip, near, far), in `Finger::ALL` order
pub const FINGER_JOINTS: [FingerJoints; 5] = [
    FingerJoints { tip: THUMB_TIP, near: THUMB_IP, far: THUMB_MCP },
    FingerJoints { tip: INDEX_TIP, near: INDEX_DIP, far: INDEX_PIP },
    FingerJoints { tip: MIDDLE_TIP, near: MIDDLE_DIP, far: MIDDLE_PIP },
    FingerJoints { tip: RING_TIP, near: RING_DIP, far: RING_PIP },
    FingerJoints { tip: PINKY_TIP, near: PINKY_DIP, far: PINKY_PIP },
];

/// Every finger owns the last three slots of its own 4-landmark group
const fn finger_table_is_valid() -> bool {
    let mut i = 0;
    while i < FINGER_JOINTS.len() {
        let j = FINGER_JOINTS[i];
        let group_tip = 4 * (i + 1);
        if j.tip != group_tip || j.near + 1 != j.tip || j.far + 2 != j.tip || j.tip >= LANDMARK_COUNT {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(finger_table_is_valid(), "finger joint table does not match the 21-point layout");

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];
    
    pub fn index(self) -> usize {
        match self {
            Finger::Thumb => 0,
            Finger::Index => 1,
            Finger::Middle => 2,
            Finger::Ring => 3,
            Finger::Pinky => 4,
        }
    }
    
    pub fn joints(self) -> FingerJoints {
        FINGER_JOINTS[self.index()]
    }
    
    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
    
    pub fn from_name(name: &str) -> Option<Self> {
        Finger::ALL.into_iter().find(|f| f.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

// ============================================================================
// HAND
// ============================================================================

/// One validated hand: exactly 21 finite, in-frame landmarks
#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    landmarks: [Point2D; LANDMARK_COUNT],
}

impl Hand {
    /// Validate a detector hand. Fewer or more than 21 points is rejected.
    pub fn new(points: &[Point2D]) -> Result<Self, LandmarkError> {
        let landmarks: [Point2D; LANDMARK_COUNT] = points.try_into().map_err(|_| {
            LandmarkError::WrongLandmarkCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            }
        })?;
        
        for (index, lm) in landmarks.iter().enumerate() {
            if !lm.is_finite() {
                return Err(LandmarkError::NonFinite { index });
            }
            let in_frame = |v: f32| (-FRAME_MARGIN..=1.0 + FRAME_MARGIN).contains(&v);
            if !in_frame(lm.x) || !in_frame(lm.y) {
                return Err(LandmarkError::OutOfRange { index, x: lm.x, y: lm.y });
            }
        }
        
        Ok(Self { landmarks })
    }
    
    /// Parse one hand from a flat array with `stride` floats per landmark
    /// (x, y first; any further components such as z are ignored)
    pub fn from_flat(data: &[f32], stride: usize) -> Result<Self, LandmarkError> {
        let stride = stride.max(2);
        let points: Vec<Point2D> = data
            .chunks_exact(stride)
            .map(|c| Point2D::new(c[0], c[1]))
            .collect();
        
        Self::new(&points)
    }
    
    pub fn landmark(&self, index: usize) -> Point2D {
        self.landmarks[index]
    }
    
    pub fn wrist(&self) -> Point2D {
        self.landmarks[WRIST]
    }
    
    pub fn landmarks(&self) -> &[Point2D; LANDMARK_COUNT] {
        &self.landmarks
    }
}
