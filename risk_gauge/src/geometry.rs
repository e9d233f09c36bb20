//! Polar-to-Cartesian conversion and SVG arc path emission.
//!
//! The dashboard's gauge variants historically disagreed about where 0° sits:
//! some measure from the positive-x axis (plain math convention in SVG's
//! y-down space), others from the top of the circle. The reference is now an
//! explicit [`AngleOrigin`] parameter carried by each variant's layout record
//! instead of a per-component magic constant.

use serde::{Deserialize, Serialize};

/// A 2D point in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Zero-angle reference for polar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleOrigin {
    /// 0° points right (positive x). In SVG's flipped-y space, positive
    /// angles advance clockwise on screen.
    #[default]
    East,
    /// 0° points up (top of the circle); equivalent to East shifted by -90°.
    North,
}

impl AngleOrigin {
    /// Angle in radians measured from the positive-x axis.
    fn to_east_radians(self, angle_deg: f64) -> f64 {
        match self {
            AngleOrigin::East => angle_deg.to_radians(),
            AngleOrigin::North => (angle_deg - 90.0).to_radians(),
        }
    }
}

/// Convert a polar coordinate to a Cartesian point.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64, origin: AngleOrigin) -> Point {
    let rad = origin.to_east_radians(angle_deg);
    Point {
        x: cx + radius * rad.cos(),
        y: cy + radius * rad.sin(),
    }
}

/// Describe an elliptical arc from `start_deg` to `end_deg` as an SVG path.
///
/// The path moves to the end-angle point and sweeps back to the start-angle
/// point with sweep flag 0, drawing the shorter arc when the span is at most
/// 180° and the longer arc otherwise. Swapping start and end reverses the
/// drawn direction; callers supply them in the order that produces the
/// intended visual. A zero span yields a degenerate (zero-length) but valid
/// path rather than an error.
pub fn describe_arc(
    cx: f64,
    cy: f64,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    origin: AngleOrigin,
) -> String {
    let start = polar_to_cartesian(cx, cy, radius, end_deg, origin);
    let end = polar_to_cartesian(cx, cy, radius, start_deg, origin);
    let large_arc = if end_deg - start_deg <= 180.0 { 0 } else { 1 };
    format!(
        "M {} {} A {} {} 0 {} 0 {} {}",
        start.x, start.y, radius, radius, large_arc, end.x, end.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn east_origin_zero_degrees_points_right() {
        let p = polar_to_cartesian(0.0, 0.0, 10.0, 0.0, AngleOrigin::East);
        assert!((p.x - 10.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn north_origin_zero_degrees_points_up() {
        let p = polar_to_cartesian(0.0, 0.0, 10.0, 0.0, AngleOrigin::North);
        assert!(p.x.abs() < EPS);
        assert!((p.y + 10.0).abs() < EPS);
    }

    #[test]
    fn north_is_east_shifted_by_ninety() {
        let a = polar_to_cartesian(50.0, 50.0, 40.0, 30.0, AngleOrigin::North);
        let b = polar_to_cartesian(50.0, 50.0, 40.0, -60.0, AngleOrigin::East);
        assert!((a.x - b.x).abs() < EPS);
        assert!((a.y - b.y).abs() < EPS);
    }

    #[test]
    fn short_span_uses_small_arc_flag() {
        let d = describe_arc(50.0, 50.0, 40.0, -90.0, 45.0, AngleOrigin::East);
        assert!(d.contains(" 0 0 "), "span <= 180 must use large-arc 0: {d}");
    }

    #[test]
    fn long_span_uses_large_arc_flag() {
        let d = describe_arc(50.0, 50.0, 40.0, -135.0, 135.0, AngleOrigin::East);
        assert!(d.contains(" 1 0 "), "span > 180 must use large-arc 1: {d}");
    }

    #[test]
    fn zero_span_is_degenerate_but_valid() {
        let d = describe_arc(50.0, 50.0, 40.0, -90.0, -90.0, AngleOrigin::East);
        assert!(d.starts_with("M "));
        assert!(!d.contains("NaN"));
        // Both endpoints collapse onto the same point.
        let p = polar_to_cartesian(50.0, 50.0, 40.0, -90.0, AngleOrigin::East);
        assert!(d.matches(&format!("{}", p.x)).count() >= 2);
    }

    #[test]
    fn path_never_contains_nan_for_odd_inputs() {
        for d in [
            describe_arc(0.0, 0.0, 0.0, 0.0, 0.0, AngleOrigin::East),
            describe_arc(50.0, 50.0, -10.0, 10.0, 20.0, AngleOrigin::North),
        ] {
            assert!(!d.contains("NaN"), "degenerate input must not emit NaN: {d}");
        }
    }
}
