//! Vertical bar meter with a warning threshold.

use leptos::prelude::*;

/// Linear vertical meter: fill rises from the bottom, switching to the
/// warning palette once the fill percentage crosses the threshold.
#[component]
pub fn VerticalMeter(
    /// Current value
    #[prop(into)] value: Signal<f64>,
    /// Range maximum
    #[prop(into)] max: Signal<f64>,
    /// Label shown under the meter
    #[prop(into)] label: String,
    /// Warning threshold as a fill percentage
    #[prop(default = 70.0)] warning_threshold: f64,
    /// Pixel height of the meter
    #[prop(default = 200.0)] size: f64,
) -> impl IntoView {
    let height = size;
    let width = 60.0;
    let bar_height = height - 40.0;

    let percentage = move || {
        let max = max.get();
        if max <= 0.0 {
            return 0.0;
        }
        ((value.get() / max) * 100.0).clamp(0.0, 100.0)
    };
    let is_warning = move || percentage() >= warning_threshold;

    view! {
        <div class="flex flex-col items-center" style=format!("width: {}px;", width + 40.0)>
            <div class="relative" style=format!("width: {width}px; height: {height}px;")>
                // Background bar
                <div
                    class="absolute bottom-0 left-1/2 -translate-x-1/2 rounded-full"
                    style=format!(
                        "width: 28px; height: {bar_height}px; background: #1a2b36; border: 2px solid #254B5A;"
                    )
                />

                // Fill bar, anchored to the bottom
                <div
                    class="absolute bottom-0 left-1/2 -translate-x-1/2 rounded-full transition-all duration-1000"
                    style=move || {
                        let fill_height = (percentage() / 100.0) * bar_height;
                        let (gradient, glow) = if is_warning() {
                            (
                                "linear-gradient(to top, #dc2626 0%, #ef4444 50%, #fca5a5 100%)",
                                "0 0 10px rgba(239, 68, 68, 0.4)",
                            )
                        } else {
                            (
                                "linear-gradient(to top, #059669 0%, #10b981 50%, #6ee7b7 100%)",
                                "0 0 10px rgba(16, 185, 129, 0.4)",
                            )
                        };
                        format!(
                            "width: 28px; height: {fill_height}px; background: {gradient}; box-shadow: {glow};"
                        )
                    }
                />

                // Value display
                <div class="absolute -top-2 left-1/2 -translate-x-1/2 text-center">
                    <div
                        class="text-2xl font-bold"
                        style=move || format!("color: {};", if is_warning() { "#ef4444" } else { "#10b981" })
                    >
                        {move || format!("{:.0}", value.get())}
                    </div>
                </div>

                // Range labels
                <div class="absolute top-8 -right-8 text-xs text-[#99BAD7]">
                    {move || format!("{:.0}", max.get())}
                </div>
                <div class="absolute bottom-0 -right-6 text-xs text-[#99BAD7]">"0"</div>
            </div>

            <div class="mt-2 text-xs text-[#99BAD7] uppercase text-center">{label}</div>
        </div>
    }
}
