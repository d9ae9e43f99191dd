//! WebSocket connection loops.
//!
//! Each accepted connection runs one loop that reads client frames in
//! arrival order and routes them. On the DDR endpoint the loop also drains
//! the session's outbound queue into the socket.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

use super::router::{route_config, route_ddr};
use crate::domain::SessionId;
use crate::service::{ConfigService, DdrService};

/// Runs the read/write loop for a single DDR connection.
///
/// - Registers a session on entry and removes it on exit.
/// - Routes incoming text frames to the [`DdrService`].
/// - Forwards queued pushes from the session's outbound channel.
pub async fn run_ddr_connection(socket: WebSocket, service: Arc<DdrService>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (session_id, mut outbound) = service.open_session().await;
    tracing::info!(%session_id, "ddr client connected");

    loop {
        tokio::select! {
            // Incoming message from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        tracing::debug!(%session_id, message = text.as_str(), "ddr message received");
                        let outcome = route_ddr(&service, session_id, text.as_str()).await;
                        tracing::debug!(%session_id, ?outcome, "ddr message routed");
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(%session_id, error = %err, "ddr socket error");
                        break;
                    }
                    _ => {}
                }
            }
            // Push queued by the service
            push = outbound.recv() => {
                let Some(push) = push else { break };
                match serde_json::to_string(&push) {
                    Ok(json) => {
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%session_id, error = %err, "failed to encode push");
                    }
                }
            }
        }
    }

    service.close_session(session_id).await;
    tracing::info!(%session_id, "ddr client disconnected");
}

/// Runs the request/reply loop for a single config connection.
pub async fn run_config_connection(socket: WebSocket, service: Arc<ConfigService>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let session_id = SessionId::new();
    tracing::info!(%session_id, "config client connected");

    while let Some(msg) = ws_rx.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                tracing::debug!(%session_id, message = text.as_str(), "config message received");
                if let Some(reply) = route_config(&service, session_id, text.as_str())
                    && ws_tx.send(Message::text(reply)).await.is_err()
                {
                    break;
                }
            }
            Ok(Message::Close(_)) => break,
            Err(err) => {
                tracing::debug!(%session_id, error = %err, "config socket error");
                break;
            }
            _ => {}
        }
    }

    tracing::info!(%session_id, "config client disconnected");
}
