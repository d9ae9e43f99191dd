//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{ConfigService, DdrService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor. Both listeners share one instance.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Variable table, sessions and fan-out.
    pub ddr_service: Arc<DdrService>,
    /// Static configuration lookups.
    pub config_service: Arc<ConfigService>,
}
