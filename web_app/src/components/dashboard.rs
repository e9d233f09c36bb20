//! Dashboard page: polling, header, gauges and the tabbed panels.

use leptos::prelude::*;
use leptos::either::Either;
use leptos_use::use_interval_fn;

use risk_common::StatusSeverity;

use crate::components::gauges::{PnlGauge, SmallGauge, StreakMeter, VerticalMeter};
use crate::components::{ConfigForm, LogPanel, MetricCards, TradesPanel, ViolationsAlert};
use crate::state::{streak_from_logs, DashboardState, POLL_INTERVAL_MS};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Config,
    Logs,
    Trades,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Initial fetch, then a fixed 5-second poll. Each batch goes through the
    // stale-response guard in DashboardState.
    state.refresh();
    let _poll = use_interval_fn(move || state.refresh(), POLL_INTERVAL_MS);

    view! {
        <div
            class="min-h-screen"
            style="background: linear-gradient(135deg, #082434 0%, #254B5A 50%, #014552 100%);"
        >
            {move || {
                if state.loading.get() {
                    Either::Left(view! { <LoadingScreen/> })
                } else {
                    Either::Right(view! { <DashboardContent/> })
                }
            }}
        </div>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <svg
                    class="h-12 w-12 animate-spin text-[#5F8BC1] mx-auto mb-4"
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/>
                </svg>
                <p class="text-[#B2D7E8] text-lg">"Loading dashboard..."</p>
            </div>
        </div>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let (active_tab, set_active_tab) = signal(Tab::Config);

    let status = Memo::new(move |_| state.status.get().unwrap_or_default());
    let config = Memo::new(move |_| state.config.get().unwrap_or_default());

    let state_label = move || status.get().trading_state().label();
    let state_color = move || match status.get().severity() {
        StatusSeverity::Danger => "#D56F53",
        StatusSeverity::Warning => "#E4AD75",
        StatusSeverity::Good => "#10b981",
    };

    // Gauge inputs, all defaulting to zero when the backend is unreachable.
    let total_pnl = Signal::derive(move || status.get().total_pnl);
    let realised = Signal::derive(move || status.get().realised);
    let unrealised = Signal::derive(move || status.get().unrealised);
    let max_loss = Signal::derive(move || config.get().daily_max_loss);
    let max_profit = Signal::derive(move || config.get().daily_max_profit);
    // Quarter-of-target marks keep the tick density readable at any scale.
    let trail_step = Signal::derive(move || config.get().daily_max_profit / 4.0);

    let trades_today = Signal::derive(move || status.get().trades_today as f64);
    let max_trades = Signal::derive(move || config.get().max_trades_per_day as f64);
    let trades_danger = Signal::derive(move || {
        let config = config.get();
        config.max_trades_per_day > 0 && status.get().trades_today >= config.max_trades_per_day
    });

    let losses = Signal::derive(move || status.get().consecutive_losses as f64);
    let loss_limit = Signal::derive(move || config.get().consecutive_loss_limit as f64);
    let losses_danger = Signal::derive(move || {
        let limit = config.get().consecutive_loss_limit;
        limit > 0 && status.get().consecutive_losses >= limit
    });

    let cooldown_remaining = Signal::derive(move || status.get().cooldown_remaining_minutes as f64);
    let cooldown_max = Signal::derive(move || config.get().cooldown_after_loss as f64);

    let streak = Signal::derive(move || streak_from_logs(&state.logs.get()));

    view! {
        // Header
        <header class="border-b border-[#254B5A] bg-[#082434]/50 backdrop-blur-md">
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <svg class="h-8 w-8 text-[#5F8BC1]" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z"/>
                        </svg>
                        <div>
                            <h1 class="text-2xl font-bold text-[#B2D7E8]">"Risk Management Dashboard"</h1>
                            <p class="text-sm text-[#99BAD7]">"Professional Trading Discipline"</p>
                        </div>
                    </div>
                    <div class="flex items-center gap-2">
                        <span
                            class="w-3 h-3 rounded-full"
                            style=move || format!(
                                "background-color: {}; box-shadow: 0 0 8px {};",
                                state_color(),
                                state_color()
                            )
                        />
                        <span class="text-[#99BAD7] text-sm font-medium">{state_label}</span>
                    </div>
                </div>
            </div>
        </header>

        <div class="container mx-auto px-6 py-8">
            <MetricCards/>
            <ViolationsAlert/>

            // Gauges
            <div class="flex flex-wrap items-center justify-center gap-8 mb-8">
                <PnlGauge
                    total=total_pnl
                    realised=realised
                    unrealised=unrealised
                    max_loss=max_loss
                    max_profit=max_profit
                    trail_step=trail_step
                />
                <div class="flex flex-col gap-6">
                    <SmallGauge
                        value=trades_today
                        max=max_trades
                        label="Trades Today"
                        danger=trades_danger
                    />
                    <SmallGauge
                        value=losses
                        max=loss_limit
                        label="Loss Streak"
                        danger=losses_danger
                    />
                </div>
                <VerticalMeter
                    value=cooldown_remaining
                    max=cooldown_max
                    label="Cooldown (min)"
                />
            </div>

            <div class="mb-8">
                <StreakMeter entries=streak />
            </div>

            // Tabs
            <div class="space-y-6">
                <div class="inline-flex rounded-lg bg-[#082434]/50 border border-[#254B5A] p-1">
                    <TabButton label="Configuration" tab=Tab::Config active=active_tab set_active=set_active_tab />
                    <TabButton label="Logs" tab=Tab::Logs active=active_tab set_active=set_active_tab />
                    <TabButton label="Trades" tab=Tab::Trades active=active_tab set_active=set_active_tab />
                </div>

                {move || match active_tab.get() {
                    Tab::Config => view! { <ConfigForm/> }.into_any(),
                    Tab::Logs => view! { <LogPanel/> }.into_any(),
                    Tab::Trades => view! { <TradesPanel/> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    tab: Tab,
    active: ReadSignal<Tab>,
    set_active: WriteSignal<Tab>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_active.set(tab)
            class=move || {
                if active.get() == tab {
                    "px-4 py-2 rounded-md text-sm font-medium bg-[#5F8BC1] text-white transition-colors"
                } else {
                    "px-4 py-2 rounded-md text-sm font-medium text-[#99BAD7] hover:text-white transition-colors"
                }
            }
        >
            {label}
        </button>
    }
}
