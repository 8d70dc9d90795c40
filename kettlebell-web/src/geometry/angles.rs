//! Joint angle calculation using polar angles of the two rays
//!
//! The angle at vertex `b` is the difference of the polar angles of
//! b→c and b→a, folded into the minor measure (0-180°).

use super::Point2D;

/// Rays shorter than this (pixels) have no usable direction
pub const MIN_RAY_LENGTH: f32 = 0.0001;

/// Interior angle at `b` in degrees, always in [0, 180]
///
/// - 180° = a, b, c collinear with b between them (straight limb)
/// - 90° = right angle
///
/// Coincident points (`a == b` or `c == b`) give a meaningless value;
/// use [`checked_angle_at`] when the input may be degenerate.
pub fn angle_at(a: Point2D, b: Point2D, c: Point2D) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let angle = radians.to_degrees().abs();

    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Same as [`angle_at`] but returns `None` for degenerate or non-finite input
pub fn checked_angle_at(a: Point2D, b: Point2D, c: Point2D) -> Option<f32> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return None;
    }
    if b.distance(a) < MIN_RAY_LENGTH || b.distance(c) < MIN_RAY_LENGTH {
        return None;
    }

    let angle = angle_at(a, b, c);
    if angle.is_finite() && (0.0..=180.0).contains(&angle) {
        Some(angle)
    } else {
        None
    }
}
