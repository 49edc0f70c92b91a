//! Geometry module - pure 2D math on normalized landmark coordinates
//!
//! Re-exports only. All logic in submodules.

mod point;
mod angles;
mod distance;

pub use point::Point2D;
pub use angles::angle_at;
pub use distance::{distance, point_to_segment_distance};
