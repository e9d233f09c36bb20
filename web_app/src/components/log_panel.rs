//! Activity log panel.

use leptos::prelude::*;
use leptos::either::Either;

use risk_common::{LogEntry, LogLevel};

use crate::components::format_timestamp;
use crate::state::DashboardState;

fn level_color(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "#D56F53",
        LogLevel::Warning => "#E4AD75",
        LogLevel::Success => "#B2D7E8",
        LogLevel::Info => "#5F8BC1",
    }
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let logs = state.logs;

    view! {
        <div class="glass-card bg-[#082434]/50 border border-[#254B5A] rounded-lg p-6 backdrop-blur-md">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-[#B2D7E8]">"Activity Logs"</h2>
                <button
                    on:click=move |_| state.clear_logs()
                    class="border border-[#D56F53] text-[#D56F53] hover:bg-[#D56F53] hover:text-white font-medium py-2 px-4 rounded transition-colors text-sm"
                >
                    "Clear All Logs"
                </button>
            </div>

            <div class="space-y-2 max-h-[600px] overflow-y-auto">
                {move || {
                    let entries = logs.get();
                    if entries.is_empty() {
                        Either::Left(view! {
                            <div class="text-center py-12">
                                <p class="text-[#99BAD7]">"No logs available"</p>
                            </div>
                        })
                    } else {
                        Either::Right(
                            entries
                                .into_iter()
                                .map(|entry| view! { <LogRow entry=entry /> })
                                .collect_view(),
                        )
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn LogRow(entry: LogEntry) -> impl IntoView {
    let color = level_color(entry.level);
    let timestamp = format_timestamp(&entry.timestamp);
    let details = entry
        .details
        .as_ref()
        .and_then(|details| serde_json::to_string_pretty(details).ok());

    view! {
        <div
            class="rounded px-3 py-2 bg-[#082434]/40"
            style=format!("border-left: 3px solid {color};")
        >
            <div class="flex items-center gap-2 mb-1">
                <span class="w-2 h-2 rounded-full" style=format!("background-color: {color};") />
                <span class="text-sm font-medium text-[#B2D7E8]">{entry.message}</span>
            </div>
            <div class="flex items-center gap-4 text-xs text-[#99BAD7]">
                <span>{entry.kind.as_str()}</span>
                <span>{timestamp}</span>
            </div>
            {details.map(|details| view! {
                <pre class="mt-2 text-xs text-[#99BAD7] bg-[#082434]/50 p-2 rounded overflow-x-auto">
                    {details}
                </pre>
            })}
        </div>
    }
}
