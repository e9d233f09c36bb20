//! Bidirectional P&L gauge.
//!
//! The dial's sweep is partitioned between the loss and profit sub-ranges in
//! proportion to the configured daily maxima; the active arc grows from the
//! shared center toward the value's side. The same component renders the
//! 270° and full-circle variants - the difference is the [`SplitLayout`]
//! record passed in, not the code path.

use leptos::prelude::*;
use std::time::Duration;

use risk_gauge::{
    describe_arc, format_signed_inr, polar_to_cartesian, step_marks, SplitLayout, Theme,
};

use super::use_animated_value;

/// Bidirectional loss/profit gauge with step marks and a currency readout.
#[component]
pub fn PnlGauge(
    /// Current total P&L driving the active arc
    #[prop(into)] total: Signal<f64>,
    /// Realised P&L (display only)
    #[prop(into)] realised: Signal<f64>,
    /// Unrealised P&L (display only)
    #[prop(into)] unrealised: Signal<f64>,
    /// Loss-side maximum (daily max loss)
    #[prop(into)] max_loss: Signal<f64>,
    /// Profit-side maximum (daily max profit)
    #[prop(into)] max_profit: Signal<f64>,
    /// Value interval between step marks
    #[prop(into)] trail_step: Signal<f64>,
    /// Pixel size of the square gauge
    #[prop(default = 400.0)] size: f64,
    /// Sweep/origin configuration
    #[prop(default = SplitLayout::bidirectional())] layout: SplitLayout,
    /// Dark (neon) or light palette
    #[prop(default = false)] is_dark: bool,
    /// Unique prefix for SVG def ids
    #[prop(default = "pnl")] id_prefix: &'static str,
) -> impl IntoView {
    let theme = Theme::for_mode(is_dark);
    let radius = size / 2.0 - 50.0;
    let cx = size / 2.0;
    let cy = size / 2.0;
    let stroke_width = 32.0;
    let origin = layout.origin;

    // Deferred display value so the CSS transition has a start state.
    let display_value = use_animated_value(total, Duration::from_millis(100));

    let arc = Memo::new(move |_| layout.split(max_loss.get(), max_profit.get()));

    let is_profit = move || display_value.get() >= 0.0;
    let side_color = move || theme.side_color(is_profit());
    let side_glow = move || theme.side_glow(is_profit());

    let loss_track = move || {
        let a = arc.get();
        describe_arc(cx, cy, radius, a.loss_start(), a.loss_end(), origin)
    };
    let profit_track = move || {
        let a = arc.get();
        describe_arc(cx, cy, radius, a.profit_start(), a.profit_end(), origin)
    };
    let active_arc = move || {
        let a = arc.get();
        let fill = a.fill_angle(display_value.get());
        if is_profit() {
            describe_arc(cx, cy, radius, a.profit_start(), fill, origin)
        } else {
            describe_arc(cx, cy, radius, fill, a.loss_end(), origin)
        }
    };
    let active_gradient = move || {
        if is_profit() {
            format!("url(#{id_prefix}-profit-gradient)")
        } else {
            format!("url(#{id_prefix}-loss-gradient)")
        }
    };

    // Step marks on both sub-ranges, with value labels outside the track.
    let marks = move || {
        let a = arc.get();
        let step = trail_step.get();
        let sides = [
            (a.loss_max, a.loss_arc_deg, -1.0),
            (a.profit_max, a.profit_arc_deg, 1.0),
        ];
        sides
            .into_iter()
            .flat_map(|(side_max, arc_deg, direction)| {
                step_marks(side_max, arc_deg, step).into_iter().map(move |mark| {
                    let angle = a.center_angle_deg + direction * mark.offset_deg;
                    let inner =
                        polar_to_cartesian(cx, cy, radius - stroke_width / 2.0 - 5.0, angle, origin);
                    let outer =
                        polar_to_cartesian(cx, cy, radius + stroke_width / 2.0 + 5.0, angle, origin);
                    let label =
                        polar_to_cartesian(cx, cy, radius + stroke_width / 2.0 + 25.0, angle, origin);
                    view! {
                        <g>
                            <line
                                x1=inner.x.to_string()
                                y1=inner.y.to_string()
                                x2=outer.x.to_string()
                                y2=outer.y.to_string()
                                stroke=theme.text_muted
                                stroke-width="2"
                                stroke-linecap="round"
                                opacity="0.5"
                            />
                            <text
                                x=label.x.to_string()
                                y=label.y.to_string()
                                fill=theme.text_muted
                                font-size="10"
                                text-anchor="middle"
                                dominant-baseline="middle"
                            >
                                {mark.value.round() as i64}
                            </text>
                        </g>
                    }
                })
            })
            .collect_view()
    };

    // The shared center is fixed by the layout, not the value.
    let center_dot = polar_to_cartesian(cx, cy, radius, layout.center_angle_deg, origin);

    let loss_label_pos = move || {
        let a = arc.get();
        polar_to_cartesian(cx, cy, radius + stroke_width / 2.0 + 40.0, a.loss_start(), origin)
    };
    let profit_label_pos = move || {
        let a = arc.get();
        polar_to_cartesian(cx, cy, radius + stroke_width / 2.0 + 40.0, a.profit_end(), origin)
    };

    let container_bg = if is_dark {
        "radial-gradient(circle, #1a1a2e 0%, #0a0a0f 100%)"
    } else {
        "radial-gradient(circle, #2d3748 0%, #1a202c 100%)"
    };
    let container_shadow = if is_dark {
        "0 0 40px rgba(0, 255, 136, 0.2), inset 0 0 60px rgba(0, 0, 0, 0.5)"
    } else {
        "0 20px 60px rgba(0, 0, 0, 0.4), inset 0 0 40px rgba(0, 0, 0, 0.3)"
    };

    view! {
        <div
            class="relative flex items-center justify-center rounded-full"
            style=format!(
                "width: {size}px; height: {size}px; background: {container_bg}; box-shadow: {container_shadow};"
            )
        >
            <svg width=size.to_string() height=size.to_string()>
                <defs>
                    <linearGradient id=format!("{id_prefix}-loss-gradient") x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color=theme.loss stop-opacity="0.6" />
                        <stop offset="100%" stop-color=theme.loss stop-opacity="1" />
                    </linearGradient>
                    <linearGradient id=format!("{id_prefix}-profit-gradient") x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color=theme.profit stop-opacity="1" />
                        <stop offset="100%" stop-color=theme.profit stop-opacity="0.6" />
                    </linearGradient>
                </defs>

                // Background tracks
                <path
                    d=loss_track
                    fill="none"
                    stroke=theme.track
                    stroke-width="32"
                    stroke-linecap="round"
                    opacity="0.3"
                />
                <path
                    d=profit_track
                    fill="none"
                    stroke=theme.track
                    stroke-width="32"
                    stroke-linecap="round"
                    opacity="0.3"
                />

                {marks}

                // Center point indicator
                <circle
                    cx=center_dot.x.to_string()
                    cy=center_dot.y.to_string()
                    r="6"
                    fill=theme.text
                    opacity="0.8"
                />

                // Active arc
                <path
                    d=active_arc
                    fill="none"
                    stroke=active_gradient
                    stroke-width="32"
                    stroke-linecap="round"
                    style=move || format!(
                        "filter: drop-shadow(0 0 6px {}); transition: all 1.5s cubic-bezier(0.4, 0, 0.2, 1);",
                        side_glow()
                    )
                />

                // Range extreme labels
                <text
                    x=move || loss_label_pos().x.to_string()
                    y=move || loss_label_pos().y.to_string()
                    fill=theme.loss
                    font-size="14"
                    font-weight="700"
                    text-anchor="middle"
                >
                    {move || format_signed_inr(-max_loss.get().abs())}
                </text>
                <text
                    x=move || profit_label_pos().x.to_string()
                    y=move || profit_label_pos().y.to_string()
                    fill=theme.profit
                    font-size="14"
                    font-weight="700"
                    text-anchor="middle"
                >
                    {move || format_signed_inr(max_profit.get().abs())}
                </text>
            </svg>

            // Center content
            <div class="absolute inset-0 flex flex-col items-center justify-center">
                <div class="text-center">
                    <div
                        class="text-5xl font-bold mb-3"
                        style=move || format!(
                            "color: {}; text-shadow: 0 0 20px {};",
                            side_color(),
                            side_glow()
                        )
                    >
                        {move || format_signed_inr(display_value.get())}
                    </div>
                    <div
                        class="text-xs uppercase tracking-wider mb-4"
                        style=format!("color: {};", theme.text_muted)
                    >
                        "Total P&L"
                    </div>
                    <div class="flex gap-6 text-sm">
                        <div class="text-center">
                            <div
                                class="font-bold text-lg"
                                style=move || format!("color: {};", theme.side_color(realised.get() >= 0.0))
                            >
                                {move || format_signed_inr(realised.get())}
                            </div>
                            <div class="text-xs" style=format!("color: {};", theme.text_muted)>
                                "Realised"
                            </div>
                        </div>
                        <div class="text-center">
                            <div
                                class="font-bold text-lg"
                                style=move || format!("color: {};", theme.side_color(unrealised.get() >= 0.0))
                            >
                                {move || format_signed_inr(unrealised.get())}
                            </div>
                            <div class="text-xs" style=format!("color: {};", theme.text_muted)>
                                "Unrealised"
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
