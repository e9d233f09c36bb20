//! Trade history panel.

use leptos::prelude::*;
use leptos::either::Either;

use risk_common::TradeSide;
use risk_gauge::format::format_inr;

use crate::components::format_timestamp;
use crate::state::DashboardState;

#[component]
pub fn TradesPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let trades = state.trades;

    view! {
        <div class="glass-card bg-[#082434]/50 border border-[#254B5A] rounded-lg p-6 backdrop-blur-md">
            <h2 class="text-2xl font-bold text-[#B2D7E8] mb-6">"Trade History"</h2>

            {move || {
                let trades = trades.get();
                if trades.is_empty() {
                    Either::Left(view! {
                        <div class="text-center py-12">
                            <p class="text-[#99BAD7]">"No trades recorded"</p>
                        </div>
                    })
                } else {
                    Either::Right(view! {
                        <table class="w-full text-sm text-left">
                            <thead>
                                <tr class="text-[#99BAD7] border-b border-[#254B5A]">
                                    <th class="py-2 pr-4 font-medium">"Instrument"</th>
                                    <th class="py-2 pr-4 font-medium">"Side"</th>
                                    <th class="py-2 pr-4 font-medium">"Qty"</th>
                                    <th class="py-2 pr-4 font-medium">"Price"</th>
                                    <th class="py-2 font-medium">"Time"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {trades
                                    .into_iter()
                                    .map(|trade| {
                                        let side_color = match trade.side {
                                            TradeSide::Buy => "#10b981",
                                            TradeSide::Sell => "#ef4444",
                                        };
                                        let timestamp = format_timestamp(&trade.timestamp);
                                        view! {
                                            <tr class="border-b border-[#254B5A]/50 text-[#B2D7E8]">
                                                <td class="py-2 pr-4 font-medium">{trade.instrument}</td>
                                                <td class="py-2 pr-4">
                                                    <span
                                                        class="px-2 py-0.5 rounded text-xs font-bold"
                                                        style=format!(
                                                            "color: {side_color}; border: 1px solid {side_color};"
                                                        )
                                                    >
                                                        {trade.side.as_str()}
                                                    </span>
                                                </td>
                                                <td class="py-2 pr-4">{trade.quantity}</td>
                                                <td class="py-2 pr-4">{format_inr(trade.price)}</td>
                                                <td class="py-2 text-[#99BAD7]">{timestamp}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    })
                }
            }}
        </div>
    }
}
