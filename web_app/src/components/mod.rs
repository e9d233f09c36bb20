mod config_form;
mod dashboard;
mod log_panel;
mod metric_cards;
mod toast;
mod trades_panel;
pub mod gauges;

pub use dashboard::DashboardPage;
pub use toast::ToastContainer;

pub(crate) use config_form::ConfigForm;
pub(crate) use log_panel::LogPanel;
pub(crate) use metric_cards::{MetricCards, ViolationsAlert};
pub(crate) use trades_panel::TradesPanel;

use wasm_bindgen::JsValue;

/// Render an ISO 8601 timestamp in the browser locale, "N/A" when absent or
/// unparseable.
pub(crate) fn format_timestamp(iso: &str) -> String {
    if iso.is_empty() {
        return "N/A".to_string();
    }
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return "N/A".to_string();
    }
    String::from(date.to_locale_string("en-IN", &JsValue::UNDEFINED))
}
