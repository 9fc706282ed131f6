use crate::math::vec2::Vec2;

/// A circle with a center and a non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Self {
        assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self { center, radius }
    }

    /// The squared radius, for comparisons against squared distances.
    pub fn radius_squared(&self) -> f64 {
        self.radius * self.radius
    }

    /// Moves the center by the given offsets.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(Vec2::new(1.0, 2.0), 5.0);
        assert_eq!(c.center, Vec2::new(1.0, 2.0));
        assert_eq!(c.radius, 5.0);
        assert_eq!(c.radius_squared(), 25.0);
    }

    #[test]
    #[should_panic]
    fn test_circle_new_negative_radius() {
        Circle::new(Vec2::ZERO, -1.0);
    }

    #[test]
    fn test_circle_translate() {
        let mut c = Circle::new(Vec2::ZERO, 2.0);
        c.translate(3.0, -4.0);
        assert_eq!(c.center, Vec2::new(3.0, -4.0));
        assert_eq!(c.radius, 2.0);
    }
}
