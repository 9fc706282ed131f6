use crate::math::vec2::Vec2;

/// Result of a separating-axis test: the axis of least penetration and
/// the signed overlap along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatOverlap {
    /// The candidate axis with the smallest absolute penetration.
    pub normal: Vec2,
    /// Signed overlap along `normal`; the sign encodes which side shape A
    /// sits on, so `normal * overlap` is the translation that carries a
    /// point of B out of A.
    pub overlap: f64,
}

/// Projects every point onto the axis and returns the covered
/// `(min, max)` interval. Expects at least one point.
pub fn project_onto_axis(axis: Vec2, points: &[Vec2]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in points {
        let projection = point.dot(axis);
        if projection < min {
            min = projection;
        }
        if projection > max {
            max = projection;
        }
    }
    (min, max)
}

/// Whether two projection intervals overlap. Touching intervals count.
fn intervals_overlap(a: (f64, f64), b: (f64, f64)) -> bool {
    !(a.0 > b.1 || a.1 < b.0)
}

/// The signed penetration between two overlapping intervals: whichever of
/// `min_a - max_b` and `max_a - min_b` is smaller in magnitude.
fn overlap_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    if (a.0 - b.1).abs() < (a.1 - b.0).abs() {
        a.0 - b.1
    } else {
        a.1 - b.0
    }
}

/// Generalized separating-axis test between two convex point sets.
///
/// Each candidate axis is projected and tested in turn; the first axis on
/// which the intervals fail to overlap proves the shapes disjoint and
/// returns immediately, without projecting onto the remaining axes. When
/// every axis overlaps, the result carries the axis of least absolute
/// penetration (ties keep the earliest axis).
///
/// An empty axis list or point set is a degenerate call and reports no
/// collision; callers must not rely on this path for validation.
pub fn sat_overlap(axes: &[Vec2], points_a: &[Vec2], points_b: &[Vec2]) -> Option<SatOverlap> {
    if axes.is_empty() || points_a.is_empty() || points_b.is_empty() {
        return None;
    }

    let mut best: Option<SatOverlap> = None;
    for &axis in axes {
        let interval_a = project_onto_axis(axis, points_a);
        let interval_b = project_onto_axis(axis, points_b);

        if !intervals_overlap(interval_a, interval_b) {
            // Separating axis found, the shapes are disjoint.
            return None;
        }

        let distance = overlap_distance(interval_a, interval_b);
        match best {
            Some(current) if distance.abs() >= current.overlap.abs() => {}
            _ => {
                best = Some(SatOverlap {
                    normal: axis,
                    overlap: distance,
                })
            }
        }
    }

    best
}
