use crate::math::vec2::Vec2;
use crate::shapes::Line;

/// Returns the unit vector pointing from `from` towards `to`.
/// Coincident points yield the zero vector (guarded normalize).
pub fn normal_between(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize()
}

/// Finds the point on the line through `start` and `end` closest to
/// `test`.
///
/// With `clamp_to_segment` the answer is restricted to the segment
/// itself: projections falling before `start` return `start`, past `end`
/// return `end`. Without it the line is treated as infinite.
pub fn closest_point_on_segment(start: Vec2, end: Vec2, test: Vec2, clamp_to_segment: bool) -> Vec2 {
    let direction = normal_between(start, end);
    let to_test = test - start;
    let distance = to_test.dot(direction);

    if distance < 0.0 && clamp_to_segment {
        start
    } else if distance * distance > (end - start).length_squared() && clamp_to_segment {
        end
    } else {
        start + direction * distance
    }
}

/// [`closest_point_on_segment`] taking the segment as a [`Line`].
pub fn closest_point_on_line(line: &Line, test: Vec2, clamp_to_segment: bool) -> Vec2 {
    closest_point_on_segment(line.start, line.end, test, clamp_to_segment)
}
