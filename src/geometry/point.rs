//! 2D landmark point in normalized image coordinates

use nalgebra::Vector2;

/// A single 2D point (normalized coordinates, origin top-left)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
}

impl Point2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    
    /// Vector pointing from `origin` to `self`
    pub fn offset_from(self, origin: Point2D) -> Vector2<f32> {
        Vector2::new(self.x - origin.x, self.y - origin.y)
    }
    
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}
