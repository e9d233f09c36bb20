//! Status overview cards and the violations alert banner.

use leptos::prelude::*;

use risk_gauge::format::{format_inr, format_signed_inr};

use crate::state::DashboardState;

/// Four-card status overview: P&L, trades, consecutive losses, position size.
#[component]
pub fn MetricCards() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let status = Memo::new(move |_| state.status.get().unwrap_or_default());
    let config = Memo::new(move |_| state.config.get().unwrap_or_default());

    let pnl_color = move || {
        let pnl = status.get().current_pnl;
        if pnl > 0.0 {
            "#B2D7E8"
        } else if pnl < 0.0 {
            "#D56F53"
        } else {
            "#99BAD7"
        }
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            <MetricCard label="Current P&L">
                <div class="text-3xl font-bold" style=move || format!("color: {};", pnl_color())>
                    {move || format_signed_inr(status.get().current_pnl)}
                </div>
                <div class="text-xs text-[#99BAD7] mt-1">
                    {move || {
                        let config = config.get();
                        format!(
                            "Limit: {} / {}",
                            format_inr(config.daily_max_loss),
                            format_inr(config.daily_max_profit),
                        )
                    }}
                </div>
            </MetricCard>

            <MetricCard label="Trades Today">
                <div class="text-3xl font-bold text-[#E4AD75]">
                    {move || status.get().trades_today}
                </div>
                <div class="text-xs text-[#99BAD7] mt-1">
                    {move || format!("Max: {}", config.get().max_trades_per_day)}
                </div>
            </MetricCard>

            <MetricCard label="Consecutive Losses">
                <div class="text-3xl font-bold text-[#D56F53]">
                    {move || status.get().consecutive_losses}
                </div>
                <div class="text-xs text-[#99BAD7] mt-1">
                    {move || format!("Limit: {}", config.get().consecutive_loss_limit)}
                </div>
            </MetricCard>

            <MetricCard label="Position Size">
                <div class="text-3xl font-bold text-[#5F8BC1]">
                    {move || format_inr(status.get().position_size)}
                </div>
                <div class="text-xs text-[#99BAD7] mt-1">
                    {move || format!("Max: {}", format_inr(config.get().max_position_size))}
                </div>
            </MetricCard>
        </div>
    }
}

#[component]
fn MetricCard(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="metric-card bg-[#082434]/50 border border-[#254B5A] rounded-lg p-4 backdrop-blur-md">
            <div class="flex items-center justify-between mb-2">
                <span class="text-[#99BAD7] text-sm font-medium">{label}</span>
            </div>
            {children()}
        </div>
    }
}

/// Red banner listing the backend-reported violations, hidden when empty.
#[component]
pub fn ViolationsAlert() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let violations = Memo::new(move |_| {
        state
            .status
            .get()
            .map(|status| status.violations)
            .unwrap_or_default()
    });

    view! {
        <Show when=move || !violations.get().is_empty()>
            <div class="mb-6 p-4 rounded-lg border-2 border-[#D56F53] bg-[#D56F53]/10">
                <div class="flex items-center gap-2 mb-2">
                    <svg class="h-5 w-5 text-[#D56F53]" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"/>
                    </svg>
                    <h3 class="text-lg font-bold text-[#D56F53]">"Active Violations"</h3>
                </div>
                <ul class="list-disc list-inside text-[#B2D7E8]">
                    {move || {
                        violations
                            .get()
                            .into_iter()
                            .map(|violation| view! { <li>{violation}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>
        </Show>
    }
}
