//! Ingestion endpoint for the external risk engine's KV state.
//!
//! The engine pushes its raw state blob; this maps the known keys onto the
//! served status (and, when limit keys are present, onto the config). The
//! mapping is tolerant: unknown keys are ignored, missing keys leave the
//! corresponding defaults.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use risk_common::{KvStateUpdate, RiskConfig, RiskStatus};

use crate::state::{now_iso, AppState};

pub async fn sync_kv_state(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<KvStateUpdate>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let kv = payload.state;
    if !kv.is_object() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Failed to sync KV state: state must be an object".to_string(),
        ));
    }

    let now_ms = chrono::Utc::now().timestamp_millis();

    let status = {
        let mut status = state.status.write().await;
        apply_kv_status(&kv, now_ms, &mut status);
        status.updated_at = Some(now_iso());
        status.clone()
    };

    if let Some(config_update) = config_from_kv(&kv) {
        let mut config = state.config.write().await;
        let side_lock = config.side_lock;
        *config = RiskConfig {
            side_lock,
            updated_at: Some(now_iso()),
            ..config_update
        };
    }

    info!("KV state synced");
    Ok(Json(json!({
        "message": "KV state synced successfully",
        "status": status,
    })))
}

/// Whole minutes left until an epoch-millisecond deadline, never negative.
fn remaining_minutes(until_ms: i64, now_ms: i64) -> u32 {
    ((until_ms - now_ms).max(0) / 60_000) as u32
}

fn iso_from_ms(ms: i64) -> Option<String> {
    chrono::DateTime::from_timestamp_millis(ms).map(|dt| dt.to_rfc3339())
}

/// Map the engine's KV keys onto the status snapshot.
fn apply_kv_status(kv: &Value, now_ms: i64, status: &mut RiskStatus) {
    status.realised = kv.get("realised").and_then(Value::as_f64).unwrap_or(0.0);
    status.unrealised = kv.get("unrealised").and_then(Value::as_f64).unwrap_or(0.0);
    status.total_pnl = kv.get("total_pnl").and_then(Value::as_f64).unwrap_or(0.0);
    status.current_pnl = status.total_pnl;
    status.consecutive_losses = kv
        .get("consecutive_losses")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;
    status.in_cooldown = kv
        .get("cooldown_active")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let cooldown_until_ms = kv.get("cooldown_until").and_then(Value::as_i64);
    status.cooldown_until = cooldown_until_ms.and_then(iso_from_ms);
    status.cooldown_remaining_minutes = match (status.in_cooldown, cooldown_until_ms) {
        (true, Some(until_ms)) => remaining_minutes(until_ms, now_ms),
        _ => 0,
    };

    status.max_loss_hit = kv.get("tripped_day").and_then(Value::as_bool).unwrap_or(false);
    status.trip_reason = kv
        .get("trip_reason")
        .and_then(Value::as_str)
        .map(str::to_string);
    status.violations = status.trip_reason.iter().cloned().collect();
    status.orders_allowed = !status.max_loss_hit && !status.in_cooldown;
    status.last_trade_time = kv
        .get("last_trade_time")
        .and_then(Value::as_i64)
        .and_then(iso_from_ms);
}

/// Map the engine's limit keys onto a config snapshot. Only produced when
/// the engine sent its loss limit; otherwise the stored config stands.
fn config_from_kv(kv: &Value) -> Option<RiskConfig> {
    let max_loss_pct = kv.get("max_loss_pct")?.as_f64()?;
    let capital = kv
        .get("capital_day_915")
        .and_then(Value::as_f64)
        .unwrap_or(3000.0);
    let trail_step = kv
        .get("trail_step_profit")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);

    Some(RiskConfig {
        daily_max_loss: kv
            .get("max_loss_abs")
            .and_then(Value::as_f64)
            .unwrap_or(capital * max_loss_pct / 100.0),
        daily_max_profit: kv.get("max_profit_abs").and_then(Value::as_f64).unwrap_or_else(|| {
            let max_profit_pct = kv.get("max_profit_pct").and_then(Value::as_f64).unwrap_or(10.0);
            capital * max_profit_pct / 100.0
        }),
        // Not tracked in KV state; engine defaults.
        max_trades_per_day: 10,
        max_position_size: capital,
        stop_loss_percentage: 2.0,
        consecutive_loss_limit: kv
            .get("max_consecutive_losses")
            .and_then(Value::as_u64)
            .unwrap_or(3) as u32,
        cooldown_after_loss: kv.get("cooldown_min").and_then(Value::as_u64).unwrap_or(15) as u32,
        trailing_profit_enabled: trail_step > 0.0,
        trailing_profit_step: trail_step,
        ..RiskConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_minutes_rounds_down_and_floors_at_zero() {
        let now = 1_700_000_000_000;
        assert_eq!(remaining_minutes(now + 15 * 60_000, now), 15);
        assert_eq!(remaining_minutes(now + 90_000, now), 1);
        assert_eq!(remaining_minutes(now - 60_000, now), 0);
    }

    #[test]
    fn kv_status_mapping_fills_pnl_and_cooldown() {
        let now = 1_700_000_000_000;
        let kv = json!({
            "realised": 350.0,
            "unrealised": -120.5,
            "total_pnl": 229.5,
            "consecutive_losses": 2,
            "cooldown_active": true,
            "cooldown_until": now + 10 * 60_000,
            "tripped_day": false,
        });

        let mut status = RiskStatus::default();
        apply_kv_status(&kv, now, &mut status);

        assert_eq!(status.realised, 350.0);
        assert_eq!(status.unrealised, -120.5);
        assert_eq!(status.total_pnl, 229.5);
        assert_eq!(status.current_pnl, 229.5);
        assert_eq!(status.consecutive_losses, 2);
        assert!(status.in_cooldown);
        assert_eq!(status.cooldown_remaining_minutes, 10);
        assert!(!status.orders_allowed);
        assert!(status.violations.is_empty());
    }

    #[test]
    fn trip_reason_becomes_a_violation() {
        let kv = json!({
            "tripped_day": true,
            "trip_reason": "Daily max loss exceeded",
        });

        let mut status = RiskStatus::default();
        apply_kv_status(&kv, 0, &mut status);

        assert!(status.max_loss_hit);
        assert_eq!(status.violations, vec!["Daily max loss exceeded".to_string()]);
        assert!(!status.orders_allowed);
    }

    #[test]
    fn config_mapping_requires_the_loss_limit_key() {
        assert!(config_from_kv(&json!({"realised": 1.0})).is_none());

        let config = config_from_kv(&json!({
            "max_loss_pct": 5.0,
            "capital_day_915": 10000.0,
            "trail_step_profit": 0.5,
        }))
        .unwrap();
        assert_eq!(config.daily_max_loss, 500.0);
        assert_eq!(config.daily_max_profit, 1000.0);
        assert_eq!(config.max_position_size, 10000.0);
        assert!(config.trailing_profit_enabled);
    }

    #[test]
    fn absolute_limits_override_percentages() {
        let config = config_from_kv(&json!({
            "max_loss_pct": 5.0,
            "max_loss_abs": 750.0,
            "max_profit_abs": 2500.0,
        }))
        .unwrap();
        assert_eq!(config.daily_max_loss, 750.0);
        assert_eq!(config.daily_max_profit, 2500.0);
    }
}
