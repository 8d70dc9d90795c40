//! 2D point in pixel space

/// A point in pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale a normalized (0-1) coordinate pair to pixels
    pub fn from_normalized(x: f32, y: f32, width: u32, height: u32) -> Self {
        Self {
            x: x * width as f32,
            y: y * height as f32,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: Point2D) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
