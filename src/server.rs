//! Router composition and listener startup for both endpoints.

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::ws::handler::{config_ws_handler, ddr_ws_handler};

/// Builds the DDR endpoint: WebSocket on `/` plus system routes.
pub fn ddr_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ddr_ws_handler))
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Builds the config endpoint: WebSocket on `/` plus system routes.
pub fn config_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(config_ws_handler))
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an I/O error if the server fails.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
