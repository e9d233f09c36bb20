//! Dashboard state manager.
//!
//! A struct of signals provided once at the App root (the same shape as a
//! connection manager: public read signals, private writers, methods that
//! spawn the async work). The backend is polled on a fixed interval; each
//! poll batch carries a monotonically increasing sequence number and a batch
//! is applied only if it is newer than the last applied one, so a slow
//! response can never overwrite fresher state.

use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

use risk_common::{LogEntry, LogType, RiskConfig, RiskConfigUpdate, RiskStatus, StreakEntry, Trade};

use crate::api::{self, DEFAULT_API_BASE};

/// Poll interval for the status/config/logs/trades batch.
pub const POLL_INTERVAL_MS: u64 = 5_000;

const LOG_FETCH_LIMIT: usize = 50;
const TRADE_FETCH_LIMIT: usize = 50;

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub config: ReadSignal<Option<RiskConfig>>,
    set_config: WriteSignal<Option<RiskConfig>>,
    pub status: ReadSignal<Option<RiskStatus>>,
    set_status: WriteSignal<Option<RiskStatus>>,
    pub logs: ReadSignal<Vec<LogEntry>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
    pub trades: ReadSignal<Vec<Trade>>,
    set_trades: WriteSignal<Vec<Trade>>,
    /// True until the first poll batch lands.
    pub loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
    /// Success message for toast notifications.
    pub api_message: ReadSignal<Option<String>>,
    set_api_message: WriteSignal<Option<String>>,
    /// Error message for toast notifications.
    pub api_error: ReadSignal<Option<String>>,
    set_api_error: WriteSignal<Option<String>>,
    api_base: StoredValue<String>,
    /// Sequence number of the most recent poll batch issued.
    issued_seq: StoredValue<u64>,
    /// Sequence number of the most recent poll batch applied.
    applied_seq: StoredValue<u64>,
}

impl DashboardState {
    pub fn new() -> Self {
        let (config, set_config) = signal(None);
        let (status, set_status) = signal(None);
        let (logs, set_logs) = signal(Vec::new());
        let (trades, set_trades) = signal(Vec::new());
        let (loading, set_loading) = signal(true);
        let (api_message, set_api_message) = signal(None);
        let (api_error, set_api_error) = signal(None);

        Self {
            config,
            set_config,
            status,
            set_status,
            logs,
            set_logs,
            trades,
            set_trades,
            loading,
            set_loading,
            api_message,
            set_api_message,
            api_error,
            set_api_error,
            api_base: StoredValue::new(DEFAULT_API_BASE.to_string()),
            issued_seq: StoredValue::new(0),
            applied_seq: StoredValue::new(0),
        }
    }

    /// Fetch the full data batch. Fire-and-forget; results are applied
    /// through the sequence guard.
    pub fn refresh(&self) {
        let state = *self;
        let seq = state.issued_seq.get_value() + 1;
        state.issued_seq.set_value(seq);
        let base = state.api_base.get_value();

        spawn_local(async move {
            let logs_path = format!("/logs?limit={LOG_FETCH_LIMIT}");
            let trades_path = format!("/trades?limit={TRADE_FETCH_LIMIT}");
            let (config, status, logs, trades) = join!(
                api::get_json::<RiskConfig>(&base, "/risk-config"),
                api::get_json::<RiskStatus>(&base, "/risk-status"),
                api::get_json::<Vec<LogEntry>>(&base, &logs_path),
                api::get_json::<Vec<Trade>>(&base, &trades_path),
            );

            // Stale guard: only the newest batch may land.
            if seq <= state.applied_seq.get_value() {
                log::debug!("Dropping stale poll batch {seq}");
                return;
            }
            state.applied_seq.set_value(seq);

            let mut failed = false;
            match config {
                Ok(config) => state.set_config.set(Some(config)),
                Err(e) => {
                    log::warn!("Failed to fetch risk config: {e}");
                    failed = true;
                }
            }
            match status {
                Ok(status) => state.set_status.set(Some(status)),
                Err(e) => {
                    log::warn!("Failed to fetch risk status: {e}");
                    failed = true;
                }
            }
            match logs {
                Ok(logs) => state.set_logs.set(logs),
                Err(e) => {
                    log::warn!("Failed to fetch logs: {e}");
                    failed = true;
                }
            }
            match trades {
                Ok(trades) => state.set_trades.set(trades),
                Err(e) => {
                    log::warn!("Failed to fetch trades: {e}");
                    failed = true;
                }
            }

            if failed {
                state.set_api_error.set(Some("Failed to fetch data".to_string()));
            }
            state.set_loading.set(false);
        });
    }

    pub fn update_config(&self, update: RiskConfigUpdate) {
        let state = *self;
        let base = state.api_base.get_value();
        spawn_local(async move {
            match api::put_json::<_, RiskConfig>(&base, "/risk-config", &update).await {
                Ok(config) => {
                    state.set_config.set(Some(config));
                    state
                        .set_api_message
                        .set(Some("Risk configuration updated successfully".to_string()));
                    state.refresh();
                }
                Err(e) => {
                    log::error!("Failed to update configuration: {e}");
                    state
                        .set_api_error
                        .set(Some("Failed to update configuration".to_string()));
                }
            }
        });
    }

    pub fn reset_status(&self) {
        let state = *self;
        let base = state.api_base.get_value();
        spawn_local(async move {
            match api::post_empty(&base, "/risk-status/reset").await {
                Ok(()) => {
                    state
                        .set_api_message
                        .set(Some("Risk status reset successfully".to_string()));
                    state.refresh();
                }
                Err(e) => {
                    log::error!("Failed to reset status: {e}");
                    state.set_api_error.set(Some("Failed to reset status".to_string()));
                }
            }
        });
    }

    pub fn clear_logs(&self) {
        let state = *self;
        let base = state.api_base.get_value();
        spawn_local(async move {
            match api::delete(&base, "/logs").await {
                Ok(()) => {
                    state
                        .set_api_message
                        .set(Some("Logs cleared successfully".to_string()));
                    state.refresh();
                }
                Err(e) => {
                    log::error!("Failed to clear logs: {e}");
                    state.set_api_error.set(Some("Failed to clear logs".to_string()));
                }
            }
        });
    }

    pub fn clear_api_message(&self) {
        self.set_api_message.set(None);
    }

    pub fn clear_api_error(&self) {
        self.set_api_error.set(None);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Win/loss streak entries from the activity log, oldest first.
///
/// The risk engine reports each closed trade's realised outcome as a
/// `risk_event` entry with a numeric `pnl` detail; anything else is skipped.
pub fn streak_from_logs(logs: &[LogEntry]) -> Vec<StreakEntry> {
    logs.iter()
        .rev()
        .filter(|entry| entry.kind == LogType::RiskEvent)
        .filter_map(|entry| {
            let pnl = entry.details.as_ref()?.get("pnl")?.as_f64()?;
            Some(StreakEntry {
                profit: pnl >= 0.0,
                amount: pnl,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_common::LogLevel;

    fn entry(kind: LogType, details: Option<serde_json::Value>) -> LogEntry {
        LogEntry {
            timestamp: "2025-01-15T09:30:00Z".to_string(),
            level: LogLevel::Info,
            kind,
            message: String::new(),
            details,
        }
    }

    #[test]
    fn streak_reads_pnl_from_risk_events_oldest_first() {
        // Logs arrive newest-first from the API.
        let logs = vec![
            entry(LogType::RiskEvent, Some(serde_json::json!({"pnl": 120.0}))),
            entry(LogType::System, None),
            entry(LogType::RiskEvent, Some(serde_json::json!({"pnl": -75.0}))),
        ];
        let streak = streak_from_logs(&logs);
        assert_eq!(streak.len(), 2);
        assert!(!streak[0].profit);
        assert_eq!(streak[0].amount, -75.0);
        assert!(streak[1].profit);
    }

    #[test]
    fn streak_skips_events_without_numeric_pnl() {
        let logs = vec![
            entry(LogType::RiskEvent, None),
            entry(LogType::RiskEvent, Some(serde_json::json!({"pnl": "n/a"}))),
        ];
        assert!(streak_from_logs(&logs).is_empty());
    }
}
