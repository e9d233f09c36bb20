//! Gauge variants as configuration records.
//!
//! The dashboard historically shipped six near-identical gauge components,
//! each with its own hardcoded sweep, zero-angle reference and direction.
//! Here a variant is data: a [`SplitLayout`] for bidirectional loss/profit
//! gauges or a [`SweepLayout`] for single-sided ones. Renderers take a
//! layout, never branch on a variant name.

use serde::{Deserialize, Serialize};

use crate::geometry::AngleOrigin;
use crate::partition::SplitArc;

/// Layout for a gauge whose sweep is partitioned between a loss side and a
/// profit side around a shared center angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitLayout {
    pub total_degrees: f64,
    pub center_angle_deg: f64,
    pub origin: AngleOrigin,
}

impl SplitLayout {
    /// 270° sweep centered at the top of the dial.
    pub const fn bidirectional() -> Self {
        Self {
            total_degrees: 270.0,
            center_angle_deg: -90.0,
            origin: AngleOrigin::East,
        }
    }

    /// Full 360° ring with the shared center at the top.
    pub const fn full_circle() -> Self {
        Self {
            total_degrees: 360.0,
            center_angle_deg: 0.0,
            origin: AngleOrigin::North,
        }
    }

    /// Partition this layout for the given side maxima.
    pub fn split(&self, loss_max: f64, profit_max: f64) -> SplitArc {
        SplitArc::new(self.total_degrees, self.center_angle_deg, loss_max, profit_max)
    }
}

/// Layout for a single-sided gauge sweeping from a start angle through a
/// fixed span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepLayout {
    pub start_angle_deg: f64,
    pub total_degrees: f64,
    pub origin: AngleOrigin,
}

impl SweepLayout {
    /// 270° sweep from bottom-left to bottom-right.
    pub const fn three_quarter() -> Self {
        Self {
            start_angle_deg: -135.0,
            total_degrees: 270.0,
            origin: AngleOrigin::East,
        }
    }

    /// Top half-circle, left to right.
    pub const fn half() -> Self {
        Self {
            start_angle_deg: -180.0,
            total_degrees: 180.0,
            origin: AngleOrigin::East,
        }
    }

    pub fn end_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.total_degrees
    }

    /// Angle reached by a clamped percentage of the sweep.
    pub fn value_angle(&self, percentage: f64) -> f64 {
        let pct = percentage.clamp(0.0, 100.0);
        self.start_angle_deg + (pct / 100.0) * self.total_degrees
    }

    /// Evenly spaced tick angles across the sweep, endpoints included.
    pub fn tick_angles(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.start_angle_deg];
        }
        let spacing = self.total_degrees / (count - 1) as f64;
        (0..count)
            .map(|i| self.start_angle_deg + i as f64 * spacing)
            .collect()
    }
}

/// The shipped gauge variants. Each resolves to a layout record; `Vertical`
/// is linear and carries no arc layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeVariant {
    Bidirectional,
    Circular,
    ThreeQuarter,
    FullCircle,
    Small,
    Vertical,
}

impl GaugeVariant {
    /// Dual-sided layout, for variants that partition loss/profit.
    pub fn split_layout(&self) -> Option<SplitLayout> {
        match self {
            GaugeVariant::Bidirectional => Some(SplitLayout::bidirectional()),
            GaugeVariant::FullCircle => Some(SplitLayout::full_circle()),
            _ => None,
        }
    }

    /// Single-sided layout, for variants that sweep one range.
    pub fn sweep_layout(&self) -> Option<SweepLayout> {
        match self {
            GaugeVariant::Circular => Some(SweepLayout::half()),
            GaugeVariant::ThreeQuarter | GaugeVariant::Small => Some(SweepLayout::three_quarter()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn sweep_value_angle_spans_the_layout() {
        let sweep = SweepLayout::three_quarter();
        assert!((sweep.value_angle(0.0) - -135.0).abs() < EPS);
        assert!((sweep.value_angle(50.0) - 0.0).abs() < EPS);
        assert!((sweep.value_angle(100.0) - 135.0).abs() < EPS);
    }

    #[test]
    fn sweep_value_angle_clamps() {
        let sweep = SweepLayout::three_quarter();
        assert!((sweep.value_angle(250.0) - 135.0).abs() < EPS);
        assert!((sweep.value_angle(-10.0) - -135.0).abs() < EPS);
    }

    #[test]
    fn tick_angles_include_both_endpoints() {
        let ticks = SweepLayout::three_quarter().tick_angles(10);
        assert_eq!(ticks.len(), 10);
        assert!((ticks[0] - -135.0).abs() < EPS);
        assert!((ticks[9] - 135.0).abs() < EPS);
    }

    #[test]
    fn variants_resolve_to_one_layout_kind() {
        for variant in [
            GaugeVariant::Bidirectional,
            GaugeVariant::Circular,
            GaugeVariant::ThreeQuarter,
            GaugeVariant::FullCircle,
            GaugeVariant::Small,
        ] {
            assert!(
                variant.split_layout().is_some() != variant.sweep_layout().is_some(),
                "{variant:?} must resolve to exactly one layout kind"
            );
        }
        assert!(GaugeVariant::Vertical.split_layout().is_none());
        assert!(GaugeVariant::Vertical.sweep_layout().is_none());
    }
}
