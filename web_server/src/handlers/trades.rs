//! Trade history endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use risk_common::{Trade, TradeCreate};

use crate::state::{now_iso, AppState};

const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct TradeQuery {
    pub limit: Option<usize>,
}

/// Newest first.
pub async fn get_trades(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TradeQuery>,
) -> Json<Vec<Trade>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let trades = state.trades.read().await;
    Json(trades.iter().rev().take(limit).cloned().collect())
}

pub async fn create_trade(
    State(state): State<Arc<AppState>>,
    Json(create): Json<TradeCreate>,
) -> Json<Trade> {
    let trade = Trade {
        id: Some(uuid::Uuid::new_v4().to_string()),
        timestamp: now_iso(),
        instrument: create.instrument,
        side: create.side,
        quantity: create.quantity,
        price: create.price,
        order_id: create.order_id,
        status: create.status,
    };
    state.push_trade(trade.clone()).await;
    Json(trade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_common::TradeSide;

    #[tokio::test]
    async fn trades_are_served_newest_first_with_limit() {
        let state = Arc::new(AppState::new());
        for (i, side) in [TradeSide::Buy, TradeSide::Sell, TradeSide::Buy].iter().enumerate() {
            let Json(created) = create_trade(
                State(Arc::clone(&state)),
                Json(TradeCreate {
                    instrument: format!("NIFTY{i}"),
                    side: *side,
                    quantity: 50,
                    price: 100.0 + i as f64,
                    order_id: None,
                    status: "executed".to_string(),
                }),
            )
            .await;
            assert!(created.id.is_some());
        }

        let Json(trades) = get_trades(
            State(state),
            Query(TradeQuery { limit: Some(2) }),
        )
        .await;
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].instrument, "NIFTY2");
        assert_eq!(trades[1].instrument, "NIFTY1");
    }
}
