//! Request handlers for the `/api` surface.

mod config;
mod kv_sync;
mod logs;
mod status;
mod trades;

pub use config::{get_risk_config, update_risk_config};
pub use kv_sync::sync_kv_state;
pub use logs::{clear_logs, create_log, get_logs};
pub use status::{get_risk_status, reset_risk_status, update_risk_status};
pub use trades::{create_trade, get_trades};

use axum::Json;
use serde_json::json;

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({"message": "Risk Management Dashboard API"}))
}
