//! End-to-end checks: landmarks in, confirmed finger counts out

use fingercount_web::{
    classify_hand, ConfigHandle, DetectionConfig, FingerCountChanged, FingerThresholds,
    FrameObservation, GestureSession, Hand, Point2D, StabilityFilter,
};

const WRIST: Point2D = Point2D::new(0.5, 0.9);

/// Four landmarks from the palm outwards
fn chain(base: (f32, f32), step: (f32, f32)) -> Vec<Point2D> {
    (0..4)
        .map(|k| Point2D::new(base.0 + step.0 * k as f32, base.1 + step.1 * k as f32))
        .collect()
}

fn hand_points(fingers: [Vec<Point2D>; 5]) -> Vec<Point2D> {
    let mut points = vec![WRIST];
    for f in fingers {
        points.extend(f);
    }
    points
}

fn open_hand() -> Vec<Point2D> {
    hand_points([
        chain((0.42, 0.82), (-0.05, -0.04)),
        chain((0.44, 0.65), (-0.01, -0.07)),
        chain((0.50, 0.64), (0.0, -0.075)),
        chain((0.56, 0.65), (0.01, -0.07)),
        chain((0.61, 0.68), (0.02, -0.06)),
    ])
}

fn closed_fist() -> Vec<Point2D> {
    let curled = |bx: f32| {
        vec![
            Point2D::new(bx, 0.60),
            Point2D::new(bx, 0.50),
            Point2D::new(bx, 0.45),
            Point2D::new(bx + 0.01, 0.55),
        ]
    };
    hand_points([
        vec![
            Point2D::new(0.40, 0.80),
            Point2D::new(0.35, 0.70),
            Point2D::new(0.40, 0.62),
            Point2D::new(0.47, 0.68),
        ],
        curled(0.44),
        curled(0.50),
        curled(0.56),
        curled(0.61),
    ])
}

/// Index and middle raised, the rest curled
fn two_fingers() -> Vec<Point2D> {
    let mut points = closed_fist();
    let open = open_hand();
    points[5..13].copy_from_slice(&open[5..13]);
    points
}

fn events(session: &mut GestureSession, frames: &[&Vec<Point2D>]) -> Vec<u32> {
    frames
        .iter()
        .filter_map(|&points| {
            session
                .on_frame(&FrameObservation::new(vec![points.clone()]))
                .changed
                .map(|FingerCountChanged { count }| count)
        })
        .collect()
}

#[test]
fn open_hand_counts_five() {
    let hand = Hand::new(&open_hand()).unwrap();
    assert_eq!(classify_hand(&hand, &FingerThresholds::default()), 5);
}

#[test]
fn closed_fist_counts_zero() {
    let hand = Hand::new(&closed_fist()).unwrap();
    assert_eq!(classify_hand(&hand, &FingerThresholds::default()), 0);
}

#[test]
fn two_raised_fingers_count_two() {
    let hand = Hand::new(&two_fingers()).unwrap();
    assert_eq!(classify_hand(&hand, &FingerThresholds::default()), 2);
}

#[test]
fn debounce_emits_once_per_change() {
    let mut filter = StabilityFilter::new(3);
    let emitted: Vec<u32> = [2, 2, 2].iter().filter_map(|&t| filter.observe(t)).collect();
    assert_eq!(emitted, vec![2]);
    let emitted: Vec<u32> = [2, 2, 2].iter().filter_map(|&t| filter.observe(t)).collect();
    assert!(emitted.is_empty());
    let emitted: Vec<u32> = [3, 3, 3].iter().filter_map(|&t| filter.observe(t)).collect();
    assert_eq!(emitted, vec![3]);
}

#[test]
fn outlier_delays_confirmation() {
    let mut filter = StabilityFilter::new(3);
    let results: Vec<Option<u32>> = [2, 2, 5, 2, 2, 2].iter().map(|&t| filter.observe(t)).collect();
    assert_eq!(results, vec![None, None, None, None, None, Some(2)]);
}

#[test]
fn session_tracks_gesture_changes() {
    let mut session = GestureSession::new();
    let two = two_fingers();
    let five = open_hand();
    let fist = closed_fist();
    
    assert_eq!(events(&mut session, &[&two, &two, &two]), vec![2]);
    // A flicker of five fingers does not change anything
    assert!(events(&mut session, &[&two, &five, &two, &two]).is_empty());
    assert_eq!(events(&mut session, &[&five, &five, &five, &five]), vec![5]);
    assert_eq!(events(&mut session, &[&fist, &fist, &fist]), vec![0]);
    assert_eq!(session.confirmed_count(), 0);
}

#[test]
fn two_hands_are_summed() {
    let mut session = GestureSession::new();
    let frame = FrameObservation::new(vec![open_hand(), two_fingers()]);
    let mut changes = Vec::new();
    for _ in 0..3 {
        changes.extend(session.on_frame(&frame).changed);
    }
    assert_eq!(changes, vec![FingerCountChanged { count: 7 }]);
}

#[test]
fn bad_frames_read_as_zero() {
    let config = ConfigHandle::new(DetectionConfig { min_frames_consistent: 2, ..DetectionConfig::default() }).unwrap();
    let mut session = GestureSession::with_config(config);
    let five = open_hand();
    assert_eq!(events(&mut session, &[&five, &five]), vec![5]);
    
    let mut truncated = open_hand();
    truncated.pop();
    let report = session.on_frame(&FrameObservation::new(vec![truncated]));
    assert_eq!(report.total, 0);
    assert_eq!(report.rejected, 1);
    
    let report = session.on_missing_frame();
    assert_eq!(report.changed, Some(FingerCountChanged { count: 0 }));
}

#[test]
fn flat_detector_output() {
    let flat: Vec<f32> = open_hand().iter().flat_map(|p| [p.x, p.y, 0.0]).collect();
    let mut session = GestureSession::new();
    let frame = FrameObservation::from_flat(&flat, 1, 3);
    assert_eq!(session.on_frame(&frame).total, 5);
}
