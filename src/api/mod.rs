//! HTTP API layer: system routes served next to the WebSocket endpoints.

pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the HTTP routes shared by both listeners.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(handlers::system::routes())
}
