//! Risk status endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::json;
use tracing::info;

use risk_common::{LogLevel, LogType, RiskStatus, RiskStatusUpdate};

use crate::state::{now_iso, AppState};

pub async fn get_risk_status(State(state): State<Arc<AppState>>) -> Json<RiskStatus> {
    Json(state.status.read().await.clone())
}

/// Partial update: only the provided fields are merged onto the snapshot.
pub async fn update_risk_status(
    State(state): State<Arc<AppState>>,
    Json(update): Json<RiskStatusUpdate>,
) -> Json<RiskStatus> {
    let mut status = state.status.write().await;
    update.apply_to(&mut status);
    status.updated_at = Some(now_iso());
    Json(status.clone())
}

pub async fn reset_risk_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    {
        let mut status = state.status.write().await;
        *status = RiskStatus {
            updated_at: Some(now_iso()),
            ..RiskStatus::default()
        };
    }

    info!("Risk status reset to default");
    state
        .push_log(LogLevel::Info, LogType::System, "Risk status reset to default", None)
        .await;

    Json(json!({"message": "Risk status reset successfully"}))
}
