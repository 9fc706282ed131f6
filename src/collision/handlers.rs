use crate::collision::sat::sat_overlap;
use crate::math::geometry::{closest_point_on_segment, normal_between};
use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Line, Rect, Shape};

/// Push ratio value that disables resolution: the handlers only report
/// whether the shapes overlap and never mutate them.
pub const DETECT_ONLY: f64 = -1.0;

/// Extra distance added to the line/line push so the segments fully
/// clear each other instead of stopping exactly on the crossing.
const LINE_CLEARANCE: f64 = 0.1;

/// Routes a shape pair to its handler and optionally resolves the
/// collision in place.
///
/// `push_ratio` is in `[0, 1]`, or [`DETECT_ONLY`]: at `1.0` the first
/// shape absorbs the whole separating correction, at `0.0` the second
/// does, values between split it proportionally. Handlers leave the pair
/// exactly separated along the reported axis when the ratio is in
/// `[0, 1]`.
pub fn detect_and_resolve(shape_a: &mut Shape, shape_b: &mut Shape, push_ratio: f64) -> bool {
    match (shape_a, shape_b) {
        (Shape::Point(a), Shape::Point(b)) => point_vs_point(a, b, push_ratio),
        (Shape::Point(a), Shape::Line(b)) => point_vs_line(a, b, push_ratio),
        (Shape::Point(a), Shape::Circle(b)) => point_vs_circle(a, b, push_ratio),
        (Shape::Point(a), Shape::Rect(b)) => point_vs_rect(a, b, push_ratio),
        (Shape::Line(a), Shape::Point(b)) => line_vs_point(a, b, push_ratio),
        (Shape::Line(a), Shape::Line(b)) => line_vs_line(a, b, push_ratio),
        (Shape::Line(a), Shape::Circle(b)) => line_vs_circle(a, b, push_ratio),
        (Shape::Line(a), Shape::Rect(b)) => line_vs_rect(a, b, push_ratio),
        (Shape::Circle(a), Shape::Point(b)) => circle_vs_point(a, b, push_ratio),
        (Shape::Circle(a), Shape::Line(b)) => circle_vs_line(a, b, push_ratio),
        (Shape::Circle(a), Shape::Circle(b)) => circle_vs_circle(a, b, push_ratio),
        (Shape::Circle(a), Shape::Rect(b)) => circle_vs_rect(a, b, push_ratio),
        (Shape::Rect(a), Shape::Point(b)) => rect_vs_point(a, b, push_ratio),
        (Shape::Rect(a), Shape::Line(b)) => rect_vs_line(a, b, push_ratio),
        (Shape::Rect(a), Shape::Circle(b)) => rect_vs_circle(a, b, push_ratio),
        (Shape::Rect(a), Shape::Rect(b)) => rect_vs_rect(a, b, push_ratio),
    }
}

/// Detection-only convenience: runs the pair's handler on copies with
/// [`DETECT_ONLY`], leaving the originals untouched.
pub fn detect(shape_a: &Shape, shape_b: &Shape) -> bool {
    let (mut a, mut b) = (*shape_a, *shape_b);
    detect_and_resolve(&mut a, &mut b, DETECT_ONLY)
}

/// Ratio complement for the mirrored handlers. A negative ratio means
/// detect-only and must pass through unchanged, never become `1 - (-1)`.
fn mirror_ratio(push_ratio: f64) -> f64 {
    if push_ratio < 0.0 {
        push_ratio
    } else {
        1.0 - push_ratio
    }
}

fn same_sign(a: f64, b: f64) -> bool {
    a * b >= 0.0
}

/// Two points collide only when they are the same object, not when two
/// distinct points merely share coordinates. Rust's aliasing rules keep
/// two live `&mut` from ever being the same allocation, so through this
/// API the colliding branch is unreachable; the check documents the
/// contract all the same. The push is a fixed unit step along -x on
/// whichever side the ratio favors.
pub fn point_vs_point(point_a: &mut Vec2, point_b: &mut Vec2, push_ratio: f64) -> bool {
    if !std::ptr::eq(point_a, point_b) {
        return false;
    }
    if push_ratio > 0.5 {
        point_a.translate(-1.0, 0.0);
    } else if push_ratio >= 0.0 {
        point_b.translate(-1.0, 0.0);
    }
    true
}

/// A point collides with a segment when the clamped closest point on the
/// segment coincides with it (tolerant equality). The push is a fixed
/// unit step on the side the ratio favors; a horizontal segment only
/// separates along y, any other orientation along x.
pub fn point_vs_line(point: &mut Vec2, line: &mut Line, push_ratio: f64) -> bool {
    let closest = closest_point_on_segment(line.start, line.end, *point, true);
    if closest != *point {
        return false;
    }

    let direction = line.direction();
    let horizontal = direction == Vec2::new(-1.0, 0.0) || direction == Vec2::new(1.0, 0.0);
    if push_ratio > 0.5 {
        if horizontal {
            point.translate(0.0, -1.0);
        } else {
            point.translate(-1.0, 0.0);
        }
    } else if push_ratio >= 0.0 {
        if horizontal {
            line.translate(0.0, 1.0);
        } else {
            line.translate(1.0, 0.0);
        }
    }
    true
}

/// A point collides with a circle when its squared distance to the
/// center is within the squared radius (touching counts). Penetration
/// depth is `radius - distance`; the point backs away from the center,
/// the circle moves along the point→center direction, split by ratio.
/// A point exactly at the center degrades to a zero push direction.
pub fn point_vs_circle(point: &mut Vec2, circle: &mut Circle, push_ratio: f64) -> bool {
    let to_circle = circle.center - *point;
    if to_circle.length_squared() > circle.radius_squared() {
        return false;
    }

    if push_ratio >= 0.0 {
        let normal = normal_between(*point, circle.center);
        let depth = circle.radius - to_circle.length();

        let circle_push = normal * (depth * (1.0 - push_ratio));
        circle.translate(circle_push.x, circle_push.y);

        let point_push = -normal * (depth * push_ratio);
        point.translate(point_push.x, point_push.y);
    }
    true
}

/// Point against rect via SAT over the rect's two face normals, with the
/// rect's corners as set A and the point as the singleton set B. The
/// point takes `normal * overlap * ratio`, the rect the negated
/// complement.
pub fn point_vs_rect(point: &mut Vec2, rect: &mut Rect, push_ratio: f64) -> bool {
    let axes = [rect.face_normal(0), rect.face_normal(1)];
    let corners = rect.corners();
    let Some(hit) = sat_overlap(&axes, &corners, std::slice::from_ref(point)) else {
        return false;
    };

    if push_ratio >= 0.0 {
        let push = hit.normal * hit.overlap;
        point.translate(push.x * push_ratio, push.y * push_ratio);

        let complement = -push;
        rect.translate(
            complement.x * (1.0 - push_ratio),
            complement.y * (1.0 - push_ratio),
        );
    }
    true
}

/// Mirror of [`point_vs_line`].
pub fn line_vs_point(line: &mut Line, point: &mut Vec2, push_ratio: f64) -> bool {
    point_vs_line(point, line, mirror_ratio(push_ratio))
}

/// Exact segment intersection via the implicit-line form.
///
/// Each segment's endpoints are evaluated against the other's implicit
/// line; both endpoints strictly on one side means no crossing. A zero
/// determinant (collinear segments) reports no collision. On a crossing,
/// both segments are pushed apart along the direction from the nearest
/// of the four endpoints through the intersection point, by that
/// distance plus a small clearance, split by ratio.
pub fn line_vs_line(line_a: &mut Line, line_b: &mut Line, push_ratio: f64) -> bool {
    // Implicit coefficients of line A: a*x + b*y + c = 0.
    let a1 = line_a.end.y - line_a.start.y;
    let b1 = line_a.start.x - line_a.end.x;
    let c1 = line_a.end.x * line_a.start.y - line_a.start.x * line_a.end.y;

    let r3 = a1 * line_b.start.x + b1 * line_b.start.y + c1;
    let r4 = a1 * line_b.end.x + b1 * line_b.end.y + c1;
    if r3 != 0.0 && r4 != 0.0 && same_sign(r3, r4) {
        return false;
    }

    let a2 = line_b.end.y - line_b.start.y;
    let b2 = line_b.start.x - line_b.end.x;
    let c2 = line_b.end.x * line_b.start.y - line_b.start.x * line_b.end.y;

    let r1 = a2 * line_a.start.x + b2 * line_a.start.y + c2;
    let r2 = a2 * line_a.end.x + b2 * line_a.end.y + c2;
    if r1 != 0.0 && r2 != 0.0 && same_sign(r1, r2) {
        return false;
    }

    let denom = a1 * b2 - a2 * b1;
    if denom == 0.0 {
        // Collinear: no single intersection point to resolve around.
        return false;
    }
    let intersection = Vec2::new(
        (b1 * c2 - b2 * c1) / denom,
        (a2 * c1 - a1 * c2) / denom,
    );

    if push_ratio >= 0.0 {
        let mut nearest = line_a.start;
        let mut nearest_dist = intersection.distance_squared(line_a.start);
        for candidate in [line_a.end, line_b.start, line_b.end] {
            let dist = intersection.distance_squared(candidate);
            if dist < nearest_dist {
                nearest = candidate;
                nearest_dist = dist;
            }
        }

        let to_intersection = intersection - nearest;
        let push = to_intersection.normalize() * (to_intersection.length() + LINE_CLEARANCE);

        let push_a = push * push_ratio;
        line_a.translate(push_a.x, push_a.y);
        let push_b = -push * (1.0 - push_ratio);
        line_b.translate(push_b.x, push_b.y);
    }
    true
}

/// The closest point on the segment to the circle's center stands in for
/// the point in the point/circle test. On resolution the whole line
/// translates by the stand-in point's displacement, the circle by its
/// own share.
pub fn line_vs_circle(line: &mut Line, circle: &mut Circle, push_ratio: f64) -> bool {
    let mut closest = closest_point_on_segment(line.start, line.end, circle.center, true);
    if !point_vs_circle(&mut closest, circle, DETECT_ONLY) {
        return false;
    }

    if push_ratio >= 0.0 {
        let to_closest = closest - circle.center;
        let depth = circle.radius - to_closest.length();
        let direction = to_closest.normalize();

        let line_push = direction * (depth * push_ratio);
        line.translate(line_push.x, line_push.y);

        let circle_push = -direction * (depth * (1.0 - push_ratio));
        circle.translate(circle_push.x, circle_push.y);
    }
    true
}

/// Line against rect via SAT: the rect's two face normals plus the
/// line's own perpendicular as axes, the line's endpoints as set A and
/// the rect's corners as set B.
pub fn line_vs_rect(line: &mut Line, rect: &mut Rect, push_ratio: f64) -> bool {
    let axes = [rect.face_normal(0), rect.face_normal(1), line.sat_normal()];
    let endpoints = [line.start, line.end];
    let corners = rect.corners();
    let Some(hit) = sat_overlap(&axes, &endpoints, &corners) else {
        return false;
    };

    if push_ratio >= 0.0 {
        let line_push = -hit.normal * (hit.overlap * push_ratio);
        line.translate(line_push.x, line_push.y);

        let rect_push = hit.normal * (hit.overlap * (1.0 - push_ratio));
        rect.translate(rect_push.x, rect_push.y);
    }
    true
}

/// Mirror of [`point_vs_circle`].
pub fn circle_vs_point(circle: &mut Circle, point: &mut Vec2, push_ratio: f64) -> bool {
    point_vs_circle(point, circle, mirror_ratio(push_ratio))
}

/// Mirror of [`line_vs_circle`].
pub fn circle_vs_line(circle: &mut Circle, line: &mut Line, push_ratio: f64) -> bool {
    line_vs_circle(line, circle, mirror_ratio(push_ratio))
}

/// Two circles collide when their squared center distance is within the
/// squared radius sum (touching counts). Penetration is split along the
/// center-to-center direction by ratio. Concentric circles degrade to a
/// zero push direction.
pub fn circle_vs_circle(circle_a: &mut Circle, circle_b: &mut Circle, push_ratio: f64) -> bool {
    let to_a = circle_a.center - circle_b.center;
    let radius_sum = circle_a.radius + circle_b.radius;
    if to_a.length_squared() > radius_sum * radius_sum {
        return false;
    }

    if push_ratio >= 0.0 {
        let depth = radius_sum - to_a.length();
        let direction = to_a.normalize();

        let push_a = direction * (depth * push_ratio);
        circle_a.translate(push_a.x, push_a.y);

        let push_b = -direction * (depth * (1.0 - push_ratio));
        circle_b.translate(push_b.x, push_b.y);
    }
    true
}

/// Support-style circle/rect test: the rect's corners are projected onto
/// the rect-center→circle-center direction and the largest projection is
/// the rect's effective radius that way. Collision when the center gap
/// minus both radii is non-positive, or when the centers coincide
/// outright. Both shapes push along the center-to-center normal.
pub fn circle_vs_rect(circle: &mut Circle, rect: &mut Rect, push_ratio: f64) -> bool {
    let to_circle = circle.center - rect.center();
    let direction = to_circle.normalize();

    let mut max_projection = f64::NEG_INFINITY;
    for corner in rect.corners() {
        let projection = (corner - rect.center()).dot(direction);
        if projection > max_projection {
            max_projection = projection;
        }
    }

    let distance = to_circle.length();
    let push = distance - max_projection - circle.radius;
    if push > 0.0 && distance > 0.0 {
        return false;
    }

    if push_ratio >= 0.0 {
        // push is non-positive here, so -direction * push points away
        // from the rect.
        let circle_push = -direction * (push * push_ratio);
        circle.translate(circle_push.x, circle_push.y);

        let rect_push = direction * (push * (1.0 - push_ratio));
        rect.translate(rect_push.x, rect_push.y);
    }
    true
}

/// Mirror of [`point_vs_rect`].
pub fn rect_vs_point(rect: &mut Rect, point: &mut Vec2, push_ratio: f64) -> bool {
    point_vs_rect(point, rect, mirror_ratio(push_ratio))
}

/// Mirror of [`line_vs_rect`].
pub fn rect_vs_line(rect: &mut Rect, line: &mut Line, push_ratio: f64) -> bool {
    line_vs_rect(line, rect, mirror_ratio(push_ratio))
}

/// Mirror of [`circle_vs_rect`].
pub fn rect_vs_circle(rect: &mut Rect, circle: &mut Circle, push_ratio: f64) -> bool {
    circle_vs_rect(circle, rect, mirror_ratio(push_ratio))
}

/// Rect against rect via SAT over both rects' face normals (four axes),
/// with each rect's corners as a point set.
pub fn rect_vs_rect(rect_a: &mut Rect, rect_b: &mut Rect, push_ratio: f64) -> bool {
    let axes = [
        rect_a.face_normal(0),
        rect_a.face_normal(1),
        rect_b.face_normal(0),
        rect_b.face_normal(1),
    ];
    let corners_a = rect_a.corners();
    let corners_b = rect_b.corners();
    let Some(hit) = sat_overlap(&axes, &corners_a, &corners_b) else {
        return false;
    };

    if push_ratio >= 0.0 {
        let push_a = -hit.normal * (hit.overlap * push_ratio);
        rect_a.translate(push_a.x, push_a.y);

        let push_b = hit.normal * (hit.overlap * (1.0 - push_ratio));
        rect_b.translate(push_b.x, push_b.y);
    }
    true
}
