//! Finger extension classifier
//!
//! A finger counts as extended when:
//! 1. the joint at `near` is close to straight (|180° - angle| within the
//!    finger's tolerance), and
//! 2. its tip is farther from the wrist than `near` is (anti-fist guard).
//!
//! Angle alone is ambiguous for a finger lying flat against the palm, the
//! wrist distance check separates "straight and raised" from "straight and
//! folded". Pure per-frame function, no state carried between frames.

use super::landmarks::{Finger, Hand};
use super::thresholds::FingerThresholds;
use crate::geometry::{angle_at, distance, point_to_segment_distance};

/// Classification details for one finger (live overlay feedback)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingerReading {
    pub finger: Finger,
    pub extended: bool,
    /// Interior angle at the near joint (degrees)
    pub angle: f32,
    /// |180 - angle|
    pub deviation: f32,
    /// Tip farther from the wrist than the near joint
    pub reaches_out: bool,
    /// Near joint's offset from the far→tip segment, relative to its length.
    /// Feedback only, not part of the decision.
    pub straightness: f32,
}

/// Per-finger readings for one hand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandReading {
    pub fingers: [FingerReading; 5],
}

impl HandReading {
    /// Number of extended fingers (0-5)
    pub fn count(&self) -> u32 {
        self.fingers.iter().filter(|f| f.extended).count() as u32
    }
    
    /// Extended flags in thumb → pinky order
    pub fn flags(&self) -> [bool; 5] {
        self.fingers.map(|f| f.extended)
    }
}

/// Measure and classify a single finger
pub fn read_finger(hand: &Hand, finger: Finger, threshold: f32) -> FingerReading {
    let joints = finger.joints();
    let tip = hand.landmark(joints.tip);
    let near = hand.landmark(joints.near);
    let far = hand.landmark(joints.far);
    let wrist = hand.wrist();
    
    let angle = angle_at(far, near, tip);
    let deviation = (180.0 - angle).abs();
    let reaches_out = distance(tip, wrist) > distance(near, wrist);
    
    let span = distance(far, tip);
    let offset = point_to_segment_distance(near, far, tip);
    let straightness = if span > f32::EPSILON { offset / span } else { offset };
    
    FingerReading {
        finger,
        extended: deviation <= threshold && reaches_out,
        angle,
        deviation,
        reaches_out,
        straightness,
    }
}

/// Is this finger straight and raised away from the palm?
pub fn is_extended(hand: &Hand, finger: Finger, thresholds: &FingerThresholds) -> bool {
    let joints = finger.joints();
    let tip = hand.landmark(joints.tip);
    let near = hand.landmark(joints.near);
    
    let angle = angle_at(hand.landmark(joints.far), near, tip);
    if (180.0 - angle).abs() > thresholds.get(finger) {
        return false;
    }
    
    let wrist = hand.wrist();
    distance(tip, wrist) > distance(near, wrist)
}

/// Full per-finger breakdown for one hand
pub fn read_hand(hand: &Hand, thresholds: &FingerThresholds) -> HandReading {
    HandReading {
        fingers: Finger::ALL.map(|f| read_finger(hand, f, thresholds.get(f))),
    }
}

/// Number of extended fingers on one hand (0-5)
pub fn classify_hand(hand: &Hand, thresholds: &FingerThresholds) -> u32 {
    Finger::ALL
        .iter()
        .filter(|&&f| is_extended(hand, f, thresholds))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2D;
    
    const WRIST: (f32, f32) = (0.5, 0.9);
    
    /// Build a hand from five 4-point finger chains (palm → tip)
    fn hand_from_chains(chains: [[(f32, f32); 4]; 5]) -> Hand {
        let mut points = vec![Point2D::from(WRIST)];
        for chain in chains {
            points.extend(chain.iter().map(|&p| Point2D::from(p)));
        }
        Hand::new(&points).unwrap()
    }
    
    /// Straight chain starting at `base`, stepping by `step` each joint
    fn straight(base: (f32, f32), step: (f32, f32)) -> [(f32, f32); 4] {
        [0.0, 1.0, 2.0, 3.0].map(|k| (base.0 + step.0 * k, base.1 + step.1 * k))
    }
    
    fn open_hand() -> Hand {
        hand_from_chains([
            straight((0.42, 0.82), (-0.05, -0.04)),
            straight((0.44, 0.65), (-0.01, -0.07)),
            straight((0.50, 0.64), (0.0, -0.075)),
            straight((0.56, 0.65), (0.01, -0.07)),
            straight((0.61, 0.68), (0.02, -0.06)),
        ])
    }
    
    fn fist() -> Hand {
        let curled = |bx: f32| [(bx, 0.6), (bx, 0.5), (bx, 0.45), (bx + 0.01, 0.55)];
        hand_from_chains([
            [(0.4, 0.8), (0.35, 0.7), (0.4, 0.62), (0.47, 0.68)],
            curled(0.44),
            curled(0.50),
            curled(0.56),
            curled(0.61),
        ])
    }
    
    #[test]
    fn test_open_hand_counts_five() {
        let hand = open_hand();
        let thresholds = FingerThresholds::default();
        assert_eq!(classify_hand(&hand, &thresholds), 5);
        
        let reading = read_hand(&hand, &thresholds);
        assert_eq!(reading.count(), 5);
        assert_eq!(reading.flags(), [true; 5]);
        for f in reading.fingers {
            assert!(f.deviation < 1.0);
            assert!(f.straightness < 0.01);
        }
    }
    
    #[test]
    fn test_slightly_bent_fingers_still_extended() {
        // ~2° kink at each near joint
        let kinked = |base: (f32, f32)| {
            let mut c = straight(base, (0.0, -0.07));
            c[3].0 += 0.0025;
            c
        };
        let hand = hand_from_chains([
            straight((0.42, 0.82), (-0.05, -0.04)),
            kinked((0.44, 0.65)),
            kinked((0.50, 0.64)),
            kinked((0.56, 0.65)),
            kinked((0.61, 0.68)),
        ]);
        let reading = read_hand(&hand, &FingerThresholds::default());
        for f in reading.fingers {
            assert!(f.angle > 177.0 && f.angle <= 180.0, "{:?}", f);
        }
        assert_eq!(classify_hand(&hand, &FingerThresholds::default()), 5);
    }
    
    #[test]
    fn test_fist_counts_zero() {
        let hand = fist();
        assert_eq!(classify_hand(&hand, &FingerThresholds::default()), 0);
        assert_eq!(read_hand(&hand, &FingerThresholds::default()).count(), 0);
    }
    
    #[test]
    fn test_anti_fist_guard() {
        // Perfectly straight chains pointing back toward the wrist
        let toward_wrist = |bx: f32| straight((bx, 0.45), (0.0, 0.1));
        let hand = hand_from_chains([
            toward_wrist(0.40),
            toward_wrist(0.45),
            toward_wrist(0.50),
            toward_wrist(0.55),
            toward_wrist(0.60),
        ]);
        
        // Even with the loosest tolerance nothing counts
        let loose = FingerThresholds { thumb: 180.0, index: 180.0, middle: 180.0, ring: 180.0, pinky: 180.0 };
        assert_eq!(classify_hand(&hand, &loose), 0);
        
        let reading = read_hand(&hand, &loose);
        for f in reading.fingers {
            assert!(f.deviation < 0.1);
            assert!(!f.reaches_out);
        }
    }
    
    #[test]
    fn test_per_finger_threshold() {
        // Index bent by ~30°: rejected at 20°, accepted at 45°
        let mut chains = [
            straight((0.42, 0.82), (-0.05, -0.04)),
            straight((0.44, 0.65), (-0.01, -0.07)),
            straight((0.50, 0.64), (0.0, -0.075)),
            straight((0.56, 0.65), (0.01, -0.07)),
            straight((0.61, 0.68), (0.02, -0.06)),
        ];
        let near = chains[1][2];
        let len = 0.07;
        let bend = 30f32.to_radians();
        chains[1][3] = (near.0 - 0.01 + len * bend.sin(), near.1 - len * bend.cos());
        let hand = hand_from_chains(chains);
        
        let mut thresholds = FingerThresholds::default();
        assert!(!is_extended(&hand, Finger::Index, &thresholds));
        assert_eq!(classify_hand(&hand, &thresholds), 4);
        
        thresholds.set(Finger::Index, 45.0).unwrap();
        assert!(is_extended(&hand, Finger::Index, &thresholds));
        assert_eq!(classify_hand(&hand, &thresholds), 5);
    }
    
    #[test]
    fn test_classification_is_deterministic() {
        let hand = open_hand();
        let thresholds = FingerThresholds::default();
        let first = read_hand(&hand, &thresholds);
        for _ in 0..10 {
            assert_eq!(read_hand(&hand, &thresholds), first);
            assert_eq!(classify_hand(&hand, &thresholds), first.count());
        }
    }
    
    #[test]
    fn test_read_and_classify_agree() {
        let thresholds = FingerThresholds::default();
        for hand in [open_hand(), fist()] {
            for finger in Finger::ALL {
                assert_eq!(
                    read_finger(&hand, finger, thresholds.get(finger)).extended,
                    is_extended(&hand, finger, &thresholds),
                );
            }
        }
    }
}
