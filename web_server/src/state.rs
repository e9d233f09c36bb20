//! In-memory application state.
//!
//! The dashboard layer does not persist anything: the store holds the last
//! pushed snapshot of each resource and serves it back to pollers. Logs and
//! trades are bounded rings so a long-running process cannot grow without
//! limit.

use tokio::sync::RwLock;

use risk_common::{LogEntry, LogLevel, LogType, RiskConfig, RiskStatus, Trade};

/// Upper bound on retained log entries and trades.
const MAX_RETAINED: usize = 1000;

pub struct AppState {
    pub config: RwLock<RiskConfig>,
    pub status: RwLock<RiskStatus>,
    /// Oldest first; read paths reverse for newest-first responses.
    pub logs: RwLock<Vec<LogEntry>>,
    pub trades: RwLock<Vec<Trade>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: RwLock::new(default_config()),
            status: RwLock::new(RiskStatus::default()),
            logs: RwLock::new(Vec::new()),
            trades: RwLock::new(Vec::new()),
        }
    }

    /// Append a log entry, dropping the oldest beyond the retention bound.
    pub async fn push_log_entry(&self, entry: LogEntry) {
        let mut logs = self.logs.write().await;
        logs.push(entry);
        let overflow = logs.len().saturating_sub(MAX_RETAINED);
        if overflow > 0 {
            logs.drain(..overflow);
        }
    }

    /// Convenience for server-originated entries, stamped with the current time.
    pub async fn push_log(&self, level: LogLevel, kind: LogType, message: &str, details: Option<serde_json::Value>) {
        self.push_log_entry(LogEntry {
            timestamp: now_iso(),
            level,
            kind,
            message: message.to_string(),
            details,
        })
        .await;
    }

    /// Append a trade, dropping the oldest beyond the retention bound.
    pub async fn push_trade(&self, trade: Trade) {
        let mut trades = self.trades.write().await;
        trades.push(trade);
        let overflow = trades.len().saturating_sub(MAX_RETAINED);
        if overflow > 0 {
            trades.drain(..overflow);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed configuration served before the risk engine pushes its own limits.
pub fn default_config() -> RiskConfig {
    RiskConfig {
        daily_max_loss: 5000.0,
        daily_max_profit: 10000.0,
        max_trades_per_day: 10,
        max_position_size: 50000.0,
        stop_loss_percentage: 2.0,
        consecutive_loss_limit: 3,
        cooldown_after_loss: 15,
        trailing_profit_enabled: false,
        trailing_profit_step: 0.5,
        updated_at: Some(now_iso()),
        ..RiskConfig::default()
    }
}

/// Current UTC time as an RFC 3339 string.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn push_log_keeps_the_newest_entries() {
        let state = AppState::new();
        for i in 0..(MAX_RETAINED + 5) {
            state
                .push_log(LogLevel::Info, LogType::System, &format!("entry {i}"), None)
                .await;
        }
        let logs = state.logs.read().await;
        assert_eq!(logs.len(), MAX_RETAINED);
        assert_eq!(logs.last().unwrap().message, format!("entry {}", MAX_RETAINED + 4));
        assert_eq!(logs.first().unwrap().message, "entry 5");
    }

    #[test]
    fn seed_config_matches_engine_defaults() {
        let config = default_config();
        assert_eq!(config.daily_max_loss, 5000.0);
        assert_eq!(config.daily_max_profit, 10000.0);
        assert_eq!(config.max_trades_per_day, 10);
        assert_eq!(config.consecutive_loss_limit, 3);
        assert!(!config.trailing_profit_enabled);
        assert!(config.updated_at.is_some());
    }
}
