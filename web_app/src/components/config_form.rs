//! Risk parameters configuration form.
//!
//! Field state lives in local string signals, resynced from the server copy
//! on every poll (the server stays the source of truth). Values are parsed
//! and validated on submit; backend failures surface as toasts.

use leptos::prelude::*;
use leptos::either::Either;

use risk_common::{RiskConfigUpdate, SideLock};

use crate::components::format_timestamp;
use crate::state::DashboardState;

fn parse_field<T: std::str::FromStr>(label: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid value for {label}"))
}

#[component]
pub fn ConfigForm() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let (daily_max_loss, set_daily_max_loss) = signal(String::new());
    let (daily_max_profit, set_daily_max_profit) = signal(String::new());
    let (max_trades, set_max_trades) = signal(String::new());
    let (max_position_size, set_max_position_size) = signal(String::new());
    let (stop_loss_pct, set_stop_loss_pct) = signal(String::new());
    let (loss_limit, set_loss_limit) = signal(String::new());
    let (cooldown, set_cooldown) = signal(String::new());
    let (side_lock, set_side_lock) = signal("none".to_string());
    let (trailing_enabled, set_trailing_enabled) = signal(false);
    let (trailing_step, set_trailing_step) = signal(String::new());
    let (validation_message, set_validation_message) = signal(String::new());

    // Resync the form from the server copy on every poll.
    Effect::new(move |_| {
        if let Some(config) = state.config.get() {
            set_daily_max_loss.set(config.daily_max_loss.to_string());
            set_daily_max_profit.set(config.daily_max_profit.to_string());
            set_max_trades.set(config.max_trades_per_day.to_string());
            set_max_position_size.set(config.max_position_size.to_string());
            set_stop_loss_pct.set(config.stop_loss_percentage.to_string());
            set_loss_limit.set(config.consecutive_loss_limit.to_string());
            set_cooldown.set(config.cooldown_after_loss.to_string());
            set_side_lock.set(
                config
                    .side_lock
                    .map(|lock| lock.as_str().to_string())
                    .unwrap_or_else(|| "none".to_string()),
            );
            set_trailing_enabled.set(config.trailing_profit_enabled);
            set_trailing_step.set(config.trailing_profit_step.to_string());
        }
    });

    let submit = move |_| {
        let parsed = (|| -> Result<RiskConfigUpdate, String> {
            Ok(RiskConfigUpdate {
                daily_max_loss: parse_field("Daily Max Loss", &daily_max_loss.get())?,
                daily_max_profit: parse_field("Daily Max Profit", &daily_max_profit.get())?,
                max_trades_per_day: parse_field("Max Trades Per Day", &max_trades.get())?,
                max_position_size: parse_field("Max Position Size", &max_position_size.get())?,
                stop_loss_percentage: parse_field("Stop Loss Percentage", &stop_loss_pct.get())?,
                consecutive_loss_limit: parse_field("Consecutive Loss Limit", &loss_limit.get())?,
                cooldown_after_loss: parse_field("Cooldown After Loss", &cooldown.get())?,
                trailing_profit_enabled: trailing_enabled.get(),
                trailing_profit_step: if trailing_enabled.get() {
                    parse_field("Trailing Profit Step", &trailing_step.get())?
                } else {
                    0.0
                },
                side_lock: side_lock.get().parse::<SideLock>().ok(),
            })
        })();

        match parsed {
            Ok(update) => {
                set_validation_message.set(String::new());
                state.update_config(update);
            }
            Err(message) => set_validation_message.set(message),
        }
    };

    view! {
        <div class="glass-card bg-[#082434]/50 border border-[#254B5A] rounded-lg p-6 backdrop-blur-md">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-[#B2D7E8]">"Risk Parameters Configuration"</h2>
                <button
                    on:click=move |_| state.reset_status()
                    class="border border-[#D56F53] text-[#D56F53] hover:bg-[#D56F53] hover:text-white font-medium py-2 px-4 rounded transition-colors text-sm"
                >
                    "Reset Status"
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <NumberField
                    label="Daily Max Loss (₹)"
                    value=daily_max_loss
                    on_input=set_daily_max_loss
                />
                <NumberField
                    label="Daily Max Profit (₹)"
                    value=daily_max_profit
                    on_input=set_daily_max_profit
                />
                <NumberField
                    label="Max Trades Per Day"
                    value=max_trades
                    on_input=set_max_trades
                />
                <NumberField
                    label="Max Position Size (₹)"
                    value=max_position_size
                    on_input=set_max_position_size
                />
                <NumberField
                    label="Stop Loss Percentage (%)"
                    value=stop_loss_pct
                    on_input=set_stop_loss_pct
                />
                <NumberField
                    label="Consecutive Loss Limit"
                    value=loss_limit
                    on_input=set_loss_limit
                />
                <NumberField
                    label="Cooldown After Loss (minutes)"
                    value=cooldown
                    on_input=set_cooldown
                />

                // Side lock
                <div class="space-y-2">
                    <label class="block text-[#B2D7E8] text-sm">"Side Lock"</label>
                    <select
                        class="w-full bg-[#082434]/50 border border-[#254B5A] rounded px-3 py-2 text-[#B2D7E8] text-sm focus:border-[#5F8BC1] focus:outline-none"
                        on:change=move |ev| set_side_lock.set(event_target_value(&ev))
                    >
                        <option value="none" selected=move || side_lock.get() == "none">"None"</option>
                        <option value="BUY" selected=move || side_lock.get() == "BUY">"BUY Only"</option>
                        <option value="SELL" selected=move || side_lock.get() == "SELL">"SELL Only"</option>
                    </select>
                </div>

                // Trailing profit
                <div class="space-y-4 col-span-1 md:col-span-2">
                    <div class="flex items-center justify-between">
                        <label class="text-[#B2D7E8] text-sm">"Enable Trailing Profit"</label>
                        <input
                            type="checkbox"
                            class="h-5 w-9 accent-[#5F8BC1]"
                            prop:checked=move || trailing_enabled.get()
                            on:change=move |ev| set_trailing_enabled.set(event_target_checked(&ev))
                        />
                    </div>
                    <Show when=move || trailing_enabled.get()>
                        <NumberField
                            label="Trailing Profit Step (%)"
                            value=trailing_step
                            on_input=set_trailing_step
                        />
                    </Show>
                </div>
            </div>

            // Validation message
            {move || {
                let message = validation_message.get();
                if message.is_empty() {
                    Either::Right(())
                } else {
                    Either::Left(view! {
                        <div class="mt-4 text-xs text-[#D56F53] bg-[#D56F5310] border border-[#D56F5320] rounded px-3 py-2">
                            {message}
                        </div>
                    })
                }
            }}

            <div class="mt-6 flex justify-end">
                <button
                    on:click=submit
                    class="bg-[#5F8BC1] hover:bg-[#5F8BC1]/80 text-white font-semibold py-2 px-8 rounded transition-colors"
                >
                    "Update Configuration"
                </button>
            </div>

            <div class="mt-6 pt-6 border-t border-[#254B5A]">
                <p class="text-sm text-[#99BAD7]">
                    {move || {
                        let updated = state
                            .config
                            .get()
                            .and_then(|config| config.updated_at)
                            .map(|iso| format_timestamp(&iso))
                            .unwrap_or_else(|| "N/A".to_string());
                        format!("Last updated: {updated}")
                    }}
                </p>
            </div>
        </div>
    }
}

#[component]
fn NumberField(
    label: &'static str,
    value: ReadSignal<String>,
    on_input: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="block text-[#B2D7E8] text-sm">{label}</label>
            <input
                type="number"
                step="0.1"
                class="w-full bg-[#082434]/50 border border-[#254B5A] rounded px-3 py-2 text-[#B2D7E8] text-sm focus:border-[#5F8BC1] focus:outline-none"
                prop:value=move || value.get()
                on:input=move |ev| on_input.set(event_target_value(&ev))
            />
        </div>
    }
}
