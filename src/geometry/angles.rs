//! Joint angle calculation using dot product
//!
//! Calculates the interior angle at a vertex from the vectors
//! vertex→p1 and vertex→p3.

use super::point::Point2D;

/// Vectors shorter than this are treated as zero-length
const DEGENERATE_LENGTH: f32 = 1e-9;

/// Calculate the angle at `vertex` in degrees
/// 
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
/// 
/// Returns angle in degrees, always within [0, 180]:
/// - 180° = p1, vertex, p3 collinear with the vertex between them (straight joint)
/// - 0° = p1 and p3 in the same direction from the vertex
/// 
/// A zero-length vector carries no direction, so the result is 0.
pub fn angle_at(p1: Point2D, vertex: Point2D, p3: Point2D) -> f32 {
    let v1 = p1.offset_from(vertex);
    let v2 = p3.offset_from(vertex);
    
    let mag1 = v1.norm();
    let mag2 = v2.norm();
    
    // Handle degenerate case
    if mag1 < DEGENERATE_LENGTH || mag2 < DEGENERATE_LENGTH {
        return 0.0;
    }
    
    // Clamp absorbs floating-point overshoot past ±1
    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    
    cos_angle.acos().to_degrees()
}
