//! Gauge component library.
//!
//! One configurable renderer per gauge shape, all driven by the
//! `risk_gauge` geometry engine:
//! - **PnlGauge**: bidirectional loss/profit dial with step marks
//! - **SmallGauge**: single-sided 270° dial for counts
//! - **VerticalMeter**: linear meter with a warning threshold
//! - **StreakMeter**: win/loss dot strip over recent outcomes
//!
//! Variants are layout records ([`risk_gauge::SplitLayout`] /
//! [`risk_gauge::SweepLayout`]) plus an injected [`risk_gauge::Theme`], not
//! separate code paths.

mod pnl_gauge;
mod small_gauge;
mod streak_meter;
mod vertical_meter;

pub use pnl_gauge::PnlGauge;
pub use small_gauge::SmallGauge;
pub use streak_meter::StreakMeter;
pub use vertical_meter::VerticalMeter;

use leptos::prelude::*;
use std::time::Duration;

/// A display value that lags the input by one deferred update, giving the
/// CSS arc transition something to animate from. Each change cancels the
/// pending update and schedules a fresh one; never more than one timer is
/// outstanding, and unmount clears it.
pub fn use_animated_value(value: Signal<f64>, delay: Duration) -> ReadSignal<f64> {
    let (display, set_display) = signal(0.0);
    let pending: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    Effect::new(move |_| {
        let target = value.get();
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(move || set_display.set(target), delay).ok();
        pending.set_value(handle);
    });

    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    display
}
