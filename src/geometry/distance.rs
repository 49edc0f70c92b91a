//! Euclidean and point-to-segment distances

use super::point::Point2D;

/// Euclidean distance between two points
pub fn distance(a: Point2D, b: Point2D) -> f32 {
    b.offset_from(a).norm()
}

/// Distance from `point` to the closest point on the segment `seg_start`–`seg_end`
/// 
/// The projection parameter is clamped to [0, 1], so points beyond either
/// end measure to that endpoint rather than to the infinite line.
/// A zero-length segment degenerates to the distance to `seg_start`.
pub fn point_to_segment_distance(point: Point2D, seg_start: Point2D, seg_end: Point2D) -> f32 {
    let to_point = point.offset_from(seg_start);
    let segment = seg_end.offset_from(seg_start);
    
    let len_sq = segment.norm_squared();
    if len_sq == 0.0 {
        return to_point.norm();
    }
    
    let t = (to_point.dot(&segment) / len_sq).clamp(0.0, 1.0);
    let nearest = segment * t;
    
    (to_point - nearest).norm()
}
