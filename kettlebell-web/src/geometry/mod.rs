//! Geometry module - planar points and joint angles
//!
//! Re-exports only. All logic in submodules.

mod point;
mod angles;

pub use point::Point2D;
pub use angles::{angle_at, checked_angle_at, MIN_RAY_LENGTH};
