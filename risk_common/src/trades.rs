//! Trade history DTOs.

use serde::{Deserialize, Serialize};

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

/// An executed trade, newest served first by `GET /api/trades`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(default)]
    pub id: Option<String>,
    pub timestamp: String,
    pub instrument: String,
    pub side: TradeSide,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default = "default_trade_status")]
    pub status: String,
}

fn default_trade_status() -> String {
    "executed".to_string()
}

/// Body of `POST /api/trades`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeCreate {
    pub instrument: String,
    pub side: TradeSide,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default = "default_trade_status")]
    pub status: String,
}

/// One dot in the win/loss streak strip: the realised outcome of a closed
/// trade, as reported by the risk engine through `risk_event` log details.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreakEntry {
    pub profit: bool,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_uses_uppercase_wire_spelling() {
        assert_eq!(serde_json::to_string(&TradeSide::Buy).unwrap(), r#""BUY""#);
        let side: TradeSide = serde_json::from_str(r#""SELL""#).unwrap();
        assert_eq!(side, TradeSide::Sell);
    }

    #[test]
    fn trade_decodes_with_missing_optional_fields() {
        let trade: Trade = serde_json::from_str(
            r#"{"timestamp": "2025-01-15T09:30:00Z", "instrument": "NIFTY25JAN", "side": "BUY"}"#,
        )
        .unwrap();
        assert_eq!(trade.quantity, 0);
        assert_eq!(trade.price, 0.0);
        assert_eq!(trade.status, "executed");
        assert_eq!(trade.id, None);
    }
}
