//! Risk configuration DTOs.

use serde::{Deserialize, Serialize};

/// Permitted trade direction restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideLock {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl SideLock {
    pub fn as_str(&self) -> &'static str {
        match self {
            SideLock::Buy => "BUY",
            SideLock::Sell => "SELL",
        }
    }
}

impl std::str::FromStr for SideLock {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(SideLock::Buy),
            "SELL" => Ok(SideLock::Sell),
            _ => Err(format!("Unknown side lock: {}", s)),
        }
    }
}

/// Current risk configuration, as served by `GET /api/risk-config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    #[serde(default = "default_config_id")]
    pub id: String,
    #[serde(default)]
    pub daily_max_loss: f64,
    #[serde(default)]
    pub daily_max_profit: f64,
    #[serde(default)]
    pub max_trades_per_day: u32,
    #[serde(default)]
    pub max_position_size: f64,
    #[serde(default)]
    pub stop_loss_percentage: f64,
    #[serde(default)]
    pub consecutive_loss_limit: u32,
    /// Cooldown period in minutes after a loss.
    #[serde(default)]
    pub cooldown_after_loss: u32,
    #[serde(default)]
    pub trailing_profit_enabled: bool,
    #[serde(default)]
    pub trailing_profit_step: f64,
    #[serde(default)]
    pub side_lock: Option<SideLock>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_config_id() -> String {
    "current_config".to_string()
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            id: default_config_id(),
            daily_max_loss: 0.0,
            daily_max_profit: 0.0,
            max_trades_per_day: 0,
            max_position_size: 0.0,
            stop_loss_percentage: 0.0,
            consecutive_loss_limit: 0,
            cooldown_after_loss: 0,
            trailing_profit_enabled: false,
            trailing_profit_step: 0.0,
            side_lock: None,
            updated_at: None,
        }
    }
}

/// Body of `PUT /api/risk-config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfigUpdate {
    pub daily_max_loss: f64,
    pub daily_max_profit: f64,
    pub max_trades_per_day: u32,
    pub max_position_size: f64,
    pub stop_loss_percentage: f64,
    pub consecutive_loss_limit: u32,
    pub cooldown_after_loss: u32,
    #[serde(default)]
    pub trailing_profit_enabled: bool,
    #[serde(default)]
    pub trailing_profit_step: f64,
    #[serde(default)]
    pub side_lock: Option<SideLock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_lock_uses_uppercase_wire_spelling() {
        assert_eq!(serde_json::to_string(&SideLock::Buy).unwrap(), r#""BUY""#);
        assert_eq!(serde_json::to_string(&SideLock::Sell).unwrap(), r#""SELL""#);
        let parsed: SideLock = serde_json::from_str(r#""SELL""#).unwrap();
        assert_eq!(parsed, SideLock::Sell);
    }

    #[test]
    fn empty_payload_decodes_to_defaults() {
        let config: RiskConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.id, "current_config");
        assert_eq!(config.daily_max_loss, 0.0);
        assert_eq!(config.side_lock, None);
    }

    #[test]
    fn null_side_lock_is_accepted() {
        let config: RiskConfig =
            serde_json::from_str(r#"{"daily_max_loss": 5000.0, "side_lock": null}"#).unwrap();
        assert_eq!(config.daily_max_loss, 5000.0);
        assert_eq!(config.side_lock, None);
    }
}
