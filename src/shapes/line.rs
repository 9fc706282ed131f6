use crate::math::vec2::Vec2;

/// A directed line segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line {
    /// Creates a new line segment.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Calculates the length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Calculates the squared length of the segment.
    pub fn length_squared(&self) -> f64 {
        self.start.distance_squared(self.end)
    }

    /// The normalized start→end direction. Zero-length segments yield the
    /// zero vector.
    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize()
    }

    /// The segment's separating-axis normal: the direction rotated -90°.
    /// Orientation follows the segment's winding, which is what gives the
    /// resolution push its sign.
    pub fn sat_normal(&self) -> Vec2 {
        let dir = self.direction();
        Vec2::new(dir.y, -dir.x)
    }

    /// Moves both endpoints by the given offsets.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.start.translate(dx, dy);
        self.end.translate(dx, dy);
    }
}
