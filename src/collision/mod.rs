pub mod handlers;
pub mod sat;

// Re-export key entry points
pub use handlers::{detect, detect_and_resolve, DETECT_ONLY};
pub use sat::{sat_overlap, SatOverlap};
