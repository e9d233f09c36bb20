//! Single-sided 270° gauge for bounded counts (trades used, loss streak).

use leptos::prelude::*;
use std::time::Duration;

use risk_gauge::{describe_arc, polar_to_cartesian, SweepLayout};

use super::use_animated_value;

/// Compact single-range gauge sweeping from bottom-left to bottom-right.
#[component]
pub fn SmallGauge(
    /// Current value
    #[prop(into)] value: Signal<f64>,
    /// Range maximum
    #[prop(into)] max: Signal<f64>,
    /// Label shown under the value
    #[prop(into)] label: String,
    /// Red fill instead of green
    #[prop(into)] danger: Signal<bool>,
    /// Pixel size of the square gauge
    #[prop(default = 200.0)] size: f64,
    /// Sweep/origin configuration
    #[prop(default = SweepLayout::three_quarter())] layout: SweepLayout,
    /// Evenly spaced tick marks across the sweep (0 disables)
    #[prop(default = 10)] tick_count: usize,
) -> impl IntoView {
    let radius = size / 2.0 - 30.0;
    let cx = size / 2.0;
    let cy = size / 2.0;
    let stroke_width = 18.0;
    let origin = layout.origin;

    let display_value = use_animated_value(value, Duration::from_millis(100));

    let percentage = move || {
        let max = max.get();
        if max <= 0.0 {
            return 0.0;
        }
        ((display_value.get() / max) * 100.0).clamp(0.0, 100.0)
    };

    let fill_color = move || if danger.get() { "#ef4444" } else { "#10b981" };

    let track = describe_arc(cx, cy, radius, layout.start_angle_deg, layout.end_angle_deg(), origin);
    let value_arc = move || {
        describe_arc(
            cx,
            cy,
            radius,
            layout.start_angle_deg,
            layout.value_angle(percentage()),
            origin,
        )
    };

    let ticks = (tick_count > 0)
        .then(|| {
            layout
                .tick_angles(tick_count)
                .into_iter()
                .enumerate()
                .map(|(i, angle)| {
                    let is_main = i % 3 == 0;
                    let length = if is_main { 12.0 } else { 6.0 };
                    let outer_radius = radius + stroke_width / 2.0 + 8.0;
                    let start = polar_to_cartesian(cx, cy, outer_radius - length, angle, origin);
                    let end = polar_to_cartesian(cx, cy, outer_radius, angle, origin);
                    view! {
                        <line
                            x1=start.x.to_string()
                            y1=start.y.to_string()
                            x2=end.x.to_string()
                            y2=end.y.to_string()
                            stroke="#9ca3af"
                            stroke-width=if is_main { "2" } else { "1" }
                            stroke-linecap="round"
                        />
                    }
                })
                .collect_view()
        });

    view! {
        <div class="relative flex items-center justify-center" style=format!("width: {size}px; height: {size}px;")>
            <svg width=size.to_string() height=size.to_string()>
                // Background arc
                <path
                    d=track
                    fill="none"
                    stroke="#f3f4f6"
                    stroke-width="18"
                    stroke-linecap="round"
                    opacity="0.15"
                />

                // Value arc
                <path
                    d=value_arc
                    fill="none"
                    stroke=fill_color
                    stroke-width="18"
                    stroke-linecap="round"
                    style="transition: all 1s ease-out;"
                />

                {ticks}
            </svg>

            // Center content
            <div class="absolute inset-0 flex flex-col items-center justify-center">
                <div class="text-center">
                    <div class="text-2xl font-bold" style=move || format!("color: {};", fill_color())>
                        {move || format!("{:.0}", display_value.get())}
                    </div>
                    <div class="text-[10px] text-[#99BAD7] uppercase mt-0.5 tracking-wide">{label}</div>
                    <div class="text-[9px] text-[#99BAD7] mt-0.5 opacity-70">
                        {move || format!("Max: {:.0}", max.get())}
                    </div>
                </div>
            </div>
        </div>
    }
}
