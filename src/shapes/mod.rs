pub mod circle;
pub mod line;
pub mod rect;

pub use circle::Circle;
pub use line::Line;
pub use rect::{Corner, Rect, Side};

use crate::math::vec2::Vec2;

/// Discriminant for the closed set of shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeType {
    Point,
    Line,
    Circle,
    Rect,
}

/// Any of the four collision primitives. The pairwise dispatcher matches
/// on this enum, which keeps the 4x4 handler table compiler-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Point(Vec2),
    Line(Line),
    Circle(Circle),
    Rect(Rect),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Point(_) => ShapeType::Point,
            Shape::Line(_) => ShapeType::Line,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Rect(_) => ShapeType::Rect,
        }
    }

    /// How many face normals the shape carries: points and circles have
    /// none, a line one, a rect two.
    pub fn normal_count(&self) -> usize {
        match self {
            Shape::Point(_) | Shape::Circle(_) => 0,
            Shape::Line(_) => 1,
            Shape::Rect(_) => 2,
        }
    }

    /// The shape's `index`-th face normal, or `None` past
    /// [`normal_count`](Shape::normal_count).
    pub fn normal(&self, index: usize) -> Option<Vec2> {
        match self {
            Shape::Point(_) | Shape::Circle(_) => None,
            Shape::Line(line) => (index == 0).then(|| line.sat_normal()),
            Shape::Rect(rect) => (index < 2).then(|| rect.face_normal(index)),
        }
    }

    /// Moves the shape in place by the given offsets.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Point(point) => point.translate(dx, dy),
            Shape::Line(line) => line.translate(dx, dy),
            Shape::Circle(circle) => circle.translate(dx, dy),
            Shape::Rect(rect) => rect.translate(dx, dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shapes() -> [Shape; 4] {
        [
            Shape::Point(Vec2::new(1.0, 2.0)),
            Shape::Line(Line::new(Vec2::ZERO, Vec2::new(4.0, 0.0))),
            Shape::Circle(Circle::new(Vec2::ZERO, 3.0)),
            Shape::Rect(Rect::new(Vec2::ZERO, 2.0, 2.0, 0.0)),
        ]
    }

    #[test]
    fn test_shape_type_tags() {
        let [point, line, circle, rect] = sample_shapes();
        assert_eq!(point.shape_type(), ShapeType::Point);
        assert_eq!(line.shape_type(), ShapeType::Line);
        assert_eq!(circle.shape_type(), ShapeType::Circle);
        assert_eq!(rect.shape_type(), ShapeType::Rect);
    }

    #[test]
    fn test_normal_counts() {
        let [point, line, circle, rect] = sample_shapes();
        assert_eq!(point.normal_count(), 0);
        assert_eq!(line.normal_count(), 1);
        assert_eq!(circle.normal_count(), 0);
        assert_eq!(rect.normal_count(), 2);
    }

    #[test]
    fn test_normals_match_count() {
        for shape in sample_shapes() {
            for index in 0..shape.normal_count() {
                assert!(shape.normal(index).is_some());
            }
            assert!(shape.normal(shape.normal_count()).is_none());
        }
    }

    #[test]
    fn test_translate_moves_every_variant() {
        for mut shape in sample_shapes() {
            let before = shape;
            shape.translate(3.0, -1.0);
            match (before, shape) {
                (Shape::Point(a), Shape::Point(b)) => assert_eq!(b, a + Vec2::new(3.0, -1.0)),
                (Shape::Line(a), Shape::Line(b)) => {
                    assert_eq!(b.start, a.start + Vec2::new(3.0, -1.0));
                    assert_eq!(b.end, a.end + Vec2::new(3.0, -1.0));
                }
                (Shape::Circle(a), Shape::Circle(b)) => {
                    assert_eq!(b.center, a.center + Vec2::new(3.0, -1.0));
                }
                (Shape::Rect(a), Shape::Rect(b)) => {
                    assert_eq!(b.center(), a.center() + Vec2::new(3.0, -1.0));
                }
                _ => unreachable!("translate must not change the variant"),
            }
        }
    }
}
