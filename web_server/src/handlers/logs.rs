//! Activity log endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use risk_common::{LogEntry, LogEntryCreate};

use crate::state::{now_iso, AppState};

const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub limit: Option<usize>,
    pub log_type: Option<String>,
}

/// Newest first, optionally filtered by type.
pub async fn get_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogQuery>,
) -> Json<Vec<LogEntry>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let logs = state.logs.read().await;
    let entries = logs
        .iter()
        .rev()
        .filter(|entry| match &query.log_type {
            Some(kind) => entry.kind.as_str() == kind,
            None => true,
        })
        .take(limit)
        .cloned()
        .collect();
    Json(entries)
}

pub async fn create_log(
    State(state): State<Arc<AppState>>,
    Json(create): Json<LogEntryCreate>,
) -> Json<LogEntry> {
    let entry = LogEntry {
        timestamp: now_iso(),
        level: create.level,
        kind: create.kind,
        message: create.message,
        details: create.details,
    };
    state.push_log_entry(entry.clone()).await;
    Json(entry)
}

pub async fn clear_logs(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let deleted = {
        let mut logs = state.logs.write().await;
        let count = logs.len();
        logs.clear();
        count
    };
    Json(json!({"message": format!("Deleted {deleted} log entries")}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_common::{LogLevel, LogType};

    async fn seeded_state() -> Arc<AppState> {
        let state = Arc::new(AppState::new());
        state
            .push_log(LogLevel::Info, LogType::System, "first", None)
            .await;
        state
            .push_log(LogLevel::Warning, LogType::Violation, "second", None)
            .await;
        state
            .push_log(LogLevel::Info, LogType::System, "third", None)
            .await;
        state
    }

    #[tokio::test]
    async fn logs_are_served_newest_first() {
        let state = seeded_state().await;
        let Json(entries) = get_logs(
            State(state),
            Query(LogQuery { limit: None, log_type: None }),
        )
        .await;
        let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn limit_and_type_filter_apply() {
        let state = seeded_state().await;
        let Json(entries) = get_logs(
            State(Arc::clone(&state)),
            Query(LogQuery { limit: Some(1), log_type: None }),
        )
        .await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "third");

        let Json(entries) = get_logs(
            State(state),
            Query(LogQuery { limit: None, log_type: Some("violation".to_string()) }),
        )
        .await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "second");
    }

    #[tokio::test]
    async fn clear_reports_the_deleted_count() {
        let state = seeded_state().await;
        let Json(body) = clear_logs(State(Arc::clone(&state))).await;
        assert_eq!(body["message"], "Deleted 3 log entries");
        assert!(state.logs.read().await.is_empty());
    }
}
