//! # collision2d
//!
//! Narrow-phase 2D collision detection and resolution over four
//! primitives: point, line segment, circle and (possibly rotated) rect.
//!
//! [`detect_and_resolve`] answers whether two shapes overlap and, given a
//! push ratio in `[0, 1]`, translates them apart in place, splitting the
//! separation between the pair. With [`DETECT_ONLY`] no shape is ever
//! mutated. Broad-phase culling, the simulation loop and velocity/impulse
//! dynamics are the caller's business.
//!
//! ## Architecture
//!
//! - `math`: Vec2, the shared float tolerance and segment queries
//! - `shapes`: the shape data model and its cached derived geometry
//! - `collision`: the SAT engine and the 4x4 pairwise handler table
//!
//! Every call is synchronous and touches at most the two shapes it was
//! given; concurrent use over disjoint shape pairs is safe, sharing a
//! shape between concurrent calls is not.

pub mod collision;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{detect, detect_and_resolve, DETECT_ONLY};
pub use math::vec2::Vec2;
pub use math::{closest_point_on_line, closest_point_on_segment, normal_between, EPSILON};
pub use shapes::{Circle, Corner, Line, Rect, Shape, ShapeType, Side};
