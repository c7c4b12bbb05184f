//! Positional helpers for drawing arcs between node centres.

use super::Point;

/// Arrow head sits this far from the addressee towards the speaker.
pub const ARROW_HEAD_OFFSET: f64 = 0.03;
/// Arrow tail sits this far from the addressee towards the speaker.
pub const ARROW_TAIL_OFFSET: f64 = 0.97;
/// Hover marker position between speaker and addressee.
pub const HOVER_MARKER_OFFSET: f64 = 0.5;

/// Linear interpolation `(1 - t) * p1 + t * p2`.
pub fn interpolated_point(p1: Point, p2: Point, t: f64) -> Point {
    Point {
        x: (1.0 - t) * p1.x + t * p2.x,
        y: (1.0 - t) * p1.y + t * p2.y,
    }
}
