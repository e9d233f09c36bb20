// REST backend for the risk dashboard web client.
// Run with: cargo run -p web_server

mod handlers;
mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use handlers::{
    clear_logs, create_log, create_trade, get_logs, get_risk_config, get_risk_status, get_trades,
    reset_risk_status, root, sync_kv_state, update_risk_config, update_risk_status,
};
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Configuration from environment variables with defaults. The risk
    // engine pushes state here; the dashboard polls it back out.
    let port = std::env::var("RISK_API_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    let static_dir =
        std::env::var("RISK_STATIC_DIR").unwrap_or_else(|_| "web_app/dist".to_string());

    let state = Arc::new(AppState::new());

    let api = Router::new()
        .route("/", get(root))
        .route("/risk-config", get(get_risk_config).put(update_risk_config))
        .route("/risk-status", get(get_risk_status).put(update_risk_status))
        .route("/risk-status/reset", post(reset_risk_status))
        .route("/sync-kv-state", post(sync_kv_state))
        .route("/logs", get(get_logs).post(create_log).delete(clear_logs))
        .route("/trades", get(get_trades).post(create_trade));

    let app = Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(&static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {addr}: {e}");
            return;
        }
    };

    info!("Risk dashboard API listening on http://{addr}");
    info!("   Serving static files from {static_dir}");
    info!("   Environment: RISK_API_PORT={port}");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {e}");
    }
}
