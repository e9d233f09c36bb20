//! Risk configuration endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::info;

use risk_common::{LogLevel, LogType, RiskConfig, RiskConfigUpdate};

use crate::state::{now_iso, AppState};

pub async fn get_risk_config(State(state): State<Arc<AppState>>) -> Json<RiskConfig> {
    Json(state.config.read().await.clone())
}

pub async fn update_risk_config(
    State(state): State<Arc<AppState>>,
    Json(update): Json<RiskConfigUpdate>,
) -> Json<RiskConfig> {
    let config = {
        let mut config = state.config.write().await;
        config.daily_max_loss = update.daily_max_loss;
        config.daily_max_profit = update.daily_max_profit;
        config.max_trades_per_day = update.max_trades_per_day;
        config.max_position_size = update.max_position_size;
        config.stop_loss_percentage = update.stop_loss_percentage;
        config.consecutive_loss_limit = update.consecutive_loss_limit;
        config.cooldown_after_loss = update.cooldown_after_loss;
        config.trailing_profit_enabled = update.trailing_profit_enabled;
        config.trailing_profit_step = update.trailing_profit_step;
        config.side_lock = update.side_lock;
        config.updated_at = Some(now_iso());
        config.clone()
    };

    info!("Risk configuration updated");
    state
        .push_log(
            LogLevel::Info,
            LogType::ConfigChange,
            "Risk configuration updated",
            serde_json::to_value(&config).ok(),
        )
        .await;

    Json(config)
}
