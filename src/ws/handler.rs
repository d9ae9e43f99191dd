//! Axum WebSocket upgrade handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::{run_config_connection, run_ddr_connection};
use crate::app_state::AppState;

/// `GET /` on the DDR listener — Upgrade HTTP connection to WebSocket.
pub async fn ddr_ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let service = Arc::clone(&state.ddr_service);
    ws.on_upgrade(move |socket| run_ddr_connection(socket, service))
}

/// `GET /` on the config listener — Upgrade HTTP connection to WebSocket.
pub async fn config_ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let service = Arc::clone(&state.config_service);
    ws.on_upgrade(move |socket| run_config_connection(socket, service))
}
