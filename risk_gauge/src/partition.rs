//! Proportional loss/profit range partitioning and fill angles.
//!
//! A bidirectional gauge divides its sweep between a loss sub-range and a
//! profit sub-range in proportion to the configured maxima, then measures
//! the current value against its own side only. All arithmetic is guarded:
//! a zero-sum range falls back to an even split and out-of-range values are
//! clamped, so a degenerate configuration renders a degenerate arc instead
//! of corrupting the path with NaN.

use serde::{Deserialize, Serialize};

/// Smallest range considered non-degenerate when partitioning.
const MIN_RANGE: f64 = f64::EPSILON;

/// Split a total sweep between the loss and profit sides, proportional to
/// each side's maximum. Negative maxima are treated as zero. When both
/// maxima are zero the sweep is split evenly.
pub fn partition_range(total_degrees: f64, loss_max: f64, profit_max: f64) -> (f64, f64) {
    let loss_max = loss_max.max(0.0);
    let profit_max = profit_max.max(0.0);
    let sum = loss_max + profit_max;
    if sum <= MIN_RANGE {
        return (total_degrees / 2.0, total_degrees / 2.0);
    }
    let loss_arc = total_degrees * (loss_max / sum);
    (loss_arc, total_degrees - loss_arc)
}

/// Which side a value falls on, and how far along that side it sits.
///
/// Returns `(is_profit, percentage)` with the percentage clamped to
/// `[0, 100]`. Zero is measured against the profit side. A non-positive
/// side maximum pins any nonzero value to 100%.
pub fn side_percentage(value: f64, loss_max: f64, profit_max: f64) -> (bool, f64) {
    let is_profit = value >= 0.0;
    let side_max = if is_profit { profit_max } else { loss_max };
    let abs = value.abs();
    let pct = if side_max <= 0.0 {
        if abs > 0.0 { 100.0 } else { 0.0 }
    } else {
        ((abs / side_max) * 100.0).min(100.0)
    };
    (is_profit, pct)
}

/// Angle of the active arc's moving end: interpolated from `center_angle`
/// toward the loss or profit extreme according to the value's side and
/// clamped percentage.
pub fn fill_angle(
    value: f64,
    center_angle: f64,
    loss_arc: f64,
    profit_arc: f64,
    loss_max: f64,
    profit_max: f64,
) -> f64 {
    let (is_profit, pct) = side_percentage(value, loss_max, profit_max);
    if is_profit {
        center_angle + (pct / 100.0) * profit_arc
    } else {
        center_angle - (pct / 100.0) * loss_arc
    }
}

/// A partitioned sweep, precomputed once per render from the layout and the
/// configured maxima.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitArc {
    pub center_angle_deg: f64,
    pub loss_arc_deg: f64,
    pub profit_arc_deg: f64,
    pub loss_max: f64,
    pub profit_max: f64,
}

impl SplitArc {
    pub fn new(total_degrees: f64, center_angle_deg: f64, loss_max: f64, profit_max: f64) -> Self {
        let (loss_arc_deg, profit_arc_deg) = partition_range(total_degrees, loss_max, profit_max);
        Self {
            center_angle_deg,
            loss_arc_deg,
            profit_arc_deg,
            loss_max,
            profit_max,
        }
    }

    /// Angular start of the loss sub-range (its extreme).
    pub fn loss_start(&self) -> f64 {
        self.center_angle_deg - self.loss_arc_deg
    }

    /// Angular end of the loss sub-range (the shared center).
    pub fn loss_end(&self) -> f64 {
        self.center_angle_deg
    }

    /// Angular start of the profit sub-range (the shared center).
    pub fn profit_start(&self) -> f64 {
        self.center_angle_deg
    }

    /// Angular end of the profit sub-range (its extreme).
    pub fn profit_end(&self) -> f64 {
        self.center_angle_deg + self.profit_arc_deg
    }

    /// Fill angle for the current value.
    pub fn fill_angle(&self, value: f64) -> f64 {
        fill_angle(
            value,
            self.center_angle_deg,
            self.loss_arc_deg,
            self.profit_arc_deg,
            self.loss_max,
            self.profit_max,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn partition_sums_to_total() {
        for (loss, profit) in [(500.0, 500.0), (5000.0, 10000.0), (1.0, 99.0), (250.0, 0.1)] {
            let (l, p) = partition_range(270.0, loss, profit);
            assert!((l + p - 270.0).abs() < EPS, "loss {loss} profit {profit}");
        }
    }

    #[test]
    fn partition_is_proportional() {
        let (l, p) = partition_range(270.0, 5000.0, 10000.0);
        assert!((l - 90.0).abs() < EPS);
        assert!((p - 180.0).abs() < EPS);
    }

    #[test]
    fn zero_sum_range_splits_evenly_without_nan() {
        let (l, p) = partition_range(270.0, 0.0, 0.0);
        assert!((l - 135.0).abs() < EPS);
        assert!((p - 135.0).abs() < EPS);
    }

    #[test]
    fn negative_maxima_are_treated_as_zero() {
        let (l, p) = partition_range(360.0, -500.0, 1000.0);
        assert!(l.abs() < EPS);
        assert!((p - 360.0).abs() < EPS);
    }

    #[test]
    fn value_at_side_max_is_one_hundred_percent() {
        let (is_profit, pct) = side_percentage(10000.0, 5000.0, 10000.0);
        assert!(is_profit);
        assert!((pct - 100.0).abs() < EPS);

        let (is_profit, pct) = side_percentage(-5000.0, 5000.0, 10000.0);
        assert!(!is_profit);
        assert!((pct - 100.0).abs() < EPS);
    }

    #[test]
    fn percentage_clamps_beyond_boundary() {
        let (_, pct) = side_percentage(-6000.0, 5000.0, 10000.0);
        assert!((pct - 100.0).abs() < EPS);
        // Idempotent: even further out still clamps to the same value.
        let (_, pct) = side_percentage(-60000.0, 5000.0, 10000.0);
        assert!((pct - 100.0).abs() < EPS);
    }

    #[test]
    fn zero_value_measures_against_profit_side() {
        let (is_profit, pct) = side_percentage(0.0, 500.0, 500.0);
        assert!(is_profit);
        assert!(pct.abs() < EPS);
    }

    #[test]
    fn zero_side_max_pins_nonzero_values() {
        let (_, pct) = side_percentage(100.0, 500.0, 0.0);
        assert!((pct - 100.0).abs() < EPS);
        let (_, pct) = side_percentage(0.0, 500.0, 0.0);
        assert!(pct.abs() < EPS);
    }

    #[test]
    fn fill_angle_at_zero_is_center() {
        let arc = SplitArc::new(270.0, -90.0, 500.0, 500.0);
        assert!((arc.fill_angle(0.0) - -90.0).abs() < EPS);
    }

    #[test]
    fn fill_angle_reaches_extremes() {
        let arc = SplitArc::new(270.0, -90.0, 500.0, 500.0);
        assert!((arc.fill_angle(500.0) - arc.profit_end()).abs() < EPS);
        assert!((arc.fill_angle(-500.0) - arc.loss_start()).abs() < EPS);
    }

    #[test]
    fn sub_range_boundaries_share_the_center() {
        let arc = SplitArc::new(270.0, -90.0, 5000.0, 10000.0);
        assert!((arc.loss_end() - arc.profit_start()).abs() < EPS);
        assert!((arc.profit_end() - arc.loss_start() - 270.0).abs() < EPS);
    }
}
