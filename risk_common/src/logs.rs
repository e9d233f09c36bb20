//! Activity log DTOs.

use serde::{Deserialize, Serialize};

/// Log entry severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Success,
}

/// Log entry category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    ConfigChange,
    RiskEvent,
    Violation,
    System,
}

impl LogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::ConfigChange => "config_change",
            LogType::RiskEvent => "risk_event",
            LogType::Violation => "violation",
            LogType::System => "system",
        }
    }
}

/// An activity log entry, newest served first by `GET /api/logs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    #[serde(rename = "type")]
    pub kind: LogType,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Body of `POST /api/logs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntryCreate {
    pub level: LogLevel,
    #[serde(rename = "type")]
    pub kind: LogType,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_use_lowercase_wire_spelling() {
        assert_eq!(serde_json::to_string(&LogLevel::Warning).unwrap(), r#""warning""#);
        let level: LogLevel = serde_json::from_str(r#""success""#).unwrap();
        assert_eq!(level, LogLevel::Success);
    }

    #[test]
    fn types_use_snake_case_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&LogType::ConfigChange).unwrap(),
            r#""config_change""#
        );
        let kind: LogType = serde_json::from_str(r#""risk_event""#).unwrap();
        assert_eq!(kind, LogType::RiskEvent);
    }

    #[test]
    fn kind_serializes_under_the_type_key() {
        let entry = LogEntry {
            timestamp: "2025-01-15T09:30:00Z".to_string(),
            level: LogLevel::Info,
            kind: LogType::System,
            message: "Risk status reset to default".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "system");
        assert!(json.get("kind").is_none());
    }
}
