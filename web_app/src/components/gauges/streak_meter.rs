//! Win/loss streak strip over recent trade outcomes.

use leptos::prelude::*;

use risk_common::StreakEntry;
use risk_gauge::format::format_inr;

/// One dot per recent outcome, oldest to newest, profit green / loss red.
#[component]
pub fn StreakMeter(
    /// Outcomes, oldest first
    #[prop(into)] entries: Signal<Vec<StreakEntry>>,
    /// Most recent entries shown
    #[prop(default = 20)] max_display: usize,
) -> impl IntoView {
    let shown = move || {
        let entries = entries.get();
        let skip = entries.len().saturating_sub(max_display);
        entries.into_iter().skip(skip).collect::<Vec<_>>()
    };

    view! {
        <div class="glass-card p-6">
            <h3 class="text-lg font-semibold mb-4 text-[#B2D7E8]">"Win/Loss Streak"</h3>
            <div class="flex items-center gap-2 flex-wrap">
                {move || {
                    let entries = shown();
                    if entries.is_empty() {
                        view! { <span class="text-[#99BAD7] text-sm">"No trades yet"</span> }.into_any()
                    } else {
                        entries
                            .into_iter()
                            .map(|entry| {
                                let (color, shadow) = if entry.profit {
                                    ("#10b981", "rgba(16, 185, 129, 0.3)")
                                } else {
                                    ("#ef4444", "rgba(239, 68, 68, 0.3)")
                                };
                                let tooltip = format!(
                                    "{}: {}",
                                    if entry.profit { "Profit" } else { "Loss" },
                                    format_inr(entry.amount),
                                );
                                view! {
                                    <div
                                        class="w-3 h-3 rounded-full transition-all hover:scale-150 cursor-pointer"
                                        style=format!(
                                            "background-color: {color}; box-shadow: 0 2px 4px {shadow};"
                                        )
                                        title=tooltip
                                    />
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <div class="flex justify-between mt-3 text-xs text-[#99BAD7]">
                <div class="flex items-center gap-1">
                    <div class="w-2 h-2 rounded-full" style="background-color: #10b981;" />
                    <span>"Profit"</span>
                </div>
                <div class="flex items-center gap-1">
                    <div class="w-2 h-2 rounded-full" style="background-color: #ef4444;" />
                    <span>"Loss"</span>
                </div>
                <span class="font-medium">
                    {move || format!("{} / {} shown", shown().len(), max_display)}
                </span>
            </div>
        </div>
    }
}
