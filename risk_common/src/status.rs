//! Risk status DTOs and derived display state.

use serde::{Deserialize, Serialize};

/// Current risk status snapshot, as served by `GET /api/risk-status`.
///
/// Every field defaults, so a partial or empty payload decodes to an
/// all-zero snapshot the gauges can render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskStatus {
    pub id: String,
    pub current_pnl: f64,
    pub realised: f64,
    pub unrealised: f64,
    pub total_pnl: f64,
    pub trades_today: u32,
    pub consecutive_losses: u32,
    pub max_loss_hit: bool,
    pub max_profit_hit: bool,
    pub position_size: f64,
    pub in_cooldown: bool,
    pub cooldown_until: Option<String>,
    pub cooldown_remaining_minutes: u32,
    pub violations: Vec<String>,
    pub orders_allowed: bool,
    pub trip_reason: Option<String>,
    pub last_trade_time: Option<String>,
    pub updated_at: Option<String>,
}

impl Default for RiskStatus {
    fn default() -> Self {
        Self {
            id: "current_status".to_string(),
            current_pnl: 0.0,
            realised: 0.0,
            unrealised: 0.0,
            total_pnl: 0.0,
            trades_today: 0,
            consecutive_losses: 0,
            max_loss_hit: false,
            max_profit_hit: false,
            position_size: 0.0,
            in_cooldown: false,
            cooldown_until: None,
            cooldown_remaining_minutes: 0,
            violations: Vec::new(),
            orders_allowed: true,
            trip_reason: None,
            last_trade_time: None,
            updated_at: None,
        }
    }
}

/// Coarse trading state shown in the header pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradingState {
    Active,
    Cooldown,
    Locked,
}

impl TradingState {
    pub fn label(&self) -> &'static str {
        match self {
            TradingState::Active => "ACTIVE",
            TradingState::Cooldown => "COOLDOWN",
            TradingState::Locked => "LOCKED",
        }
    }
}

/// Severity of the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Good,
    Warning,
    Danger,
}

impl RiskStatus {
    pub fn trading_state(&self) -> TradingState {
        if self.max_loss_hit {
            TradingState::Locked
        } else if self.in_cooldown {
            TradingState::Cooldown
        } else {
            TradingState::Active
        }
    }

    pub fn severity(&self) -> StatusSeverity {
        if self.max_loss_hit || !self.violations.is_empty() {
            StatusSeverity::Danger
        } else if self.consecutive_losses >= 2 || self.in_cooldown {
            StatusSeverity::Warning
        } else {
            StatusSeverity::Good
        }
    }
}

/// Body of `PUT /api/risk-status`: a partial update where only the provided
/// fields are merged onto the stored snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskStatusUpdate {
    pub current_pnl: Option<f64>,
    pub realised: Option<f64>,
    pub unrealised: Option<f64>,
    pub total_pnl: Option<f64>,
    pub trades_today: Option<u32>,
    pub consecutive_losses: Option<u32>,
    pub max_loss_hit: Option<bool>,
    pub max_profit_hit: Option<bool>,
    pub position_size: Option<f64>,
    pub in_cooldown: Option<bool>,
    pub cooldown_until: Option<String>,
    pub cooldown_remaining_minutes: Option<u32>,
    pub violations: Option<Vec<String>>,
    pub orders_allowed: Option<bool>,
    pub trip_reason: Option<String>,
    pub last_trade_time: Option<String>,
}

impl RiskStatusUpdate {
    /// Merge the provided fields onto `status`, leaving the rest untouched.
    pub fn apply_to(&self, status: &mut RiskStatus) {
        if let Some(value) = self.current_pnl {
            status.current_pnl = value;
        }
        if let Some(value) = self.realised {
            status.realised = value;
        }
        if let Some(value) = self.unrealised {
            status.unrealised = value;
        }
        if let Some(value) = self.total_pnl {
            status.total_pnl = value;
        }
        if let Some(value) = self.trades_today {
            status.trades_today = value;
        }
        if let Some(value) = self.consecutive_losses {
            status.consecutive_losses = value;
        }
        if let Some(value) = self.max_loss_hit {
            status.max_loss_hit = value;
        }
        if let Some(value) = self.max_profit_hit {
            status.max_profit_hit = value;
        }
        if let Some(value) = self.position_size {
            status.position_size = value;
        }
        if let Some(value) = self.in_cooldown {
            status.in_cooldown = value;
        }
        if let Some(value) = self.cooldown_remaining_minutes {
            status.cooldown_remaining_minutes = value;
        }
        if let Some(value) = &self.violations {
            status.violations = value.clone();
        }
        if let Some(value) = self.orders_allowed {
            status.orders_allowed = value;
        }
        if self.cooldown_until.is_some() {
            status.cooldown_until = self.cooldown_until.clone();
        }
        if self.trip_reason.is_some() {
            status.trip_reason = self.trip_reason.clone();
        }
        if self.last_trade_time.is_some() {
            status.last_trade_time = self.last_trade_time.clone();
        }
    }
}

/// Body of `POST /api/sync-kv-state`: an opaque state blob from the external
/// risk engine, mapped onto status/config by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KvStateUpdate {
    pub state: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_an_all_zero_snapshot() {
        let status: RiskStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status, RiskStatus::default());
        assert_eq!(status.total_pnl, 0.0);
        assert!(status.orders_allowed);
    }

    #[test]
    fn trading_state_precedence() {
        let mut status = RiskStatus::default();
        assert_eq!(status.trading_state(), TradingState::Active);

        status.in_cooldown = true;
        assert_eq!(status.trading_state(), TradingState::Cooldown);

        status.max_loss_hit = true;
        assert_eq!(status.trading_state(), TradingState::Locked);
    }

    #[test]
    fn severity_escalates_with_violations_and_losses() {
        let mut status = RiskStatus::default();
        assert_eq!(status.severity(), StatusSeverity::Good);

        status.consecutive_losses = 2;
        assert_eq!(status.severity(), StatusSeverity::Warning);

        status.violations = vec!["Daily max loss exceeded".to_string()];
        assert_eq!(status.severity(), StatusSeverity::Danger);
    }

    #[test]
    fn partial_update_merges_only_provided_fields() {
        let mut status = RiskStatus {
            total_pnl: 1500.0,
            trades_today: 4,
            ..RiskStatus::default()
        };
        let update = RiskStatusUpdate {
            total_pnl: Some(-250.0),
            in_cooldown: Some(true),
            ..RiskStatusUpdate::default()
        };
        update.apply_to(&mut status);
        assert_eq!(status.total_pnl, -250.0);
        assert!(status.in_cooldown);
        // Untouched fields survive.
        assert_eq!(status.trades_today, 4);
    }
}
