//! ddr-gateway server entry point.
//!
//! Loads the startup files, then starts the DDR and config WebSocket
//! endpoints on their own listeners.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use ddr_gateway::app_state::AppState;
use ddr_gateway::config::{GatewayConfig, LogFormat};
use ddr_gateway::loader;
use ddr_gateway::server;
use ddr_gateway::service::{ConfigService, DdrService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env().context("invalid listen address")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    // Load startup files; any failure aborts
    let table = loader::load_variables(&config.variables_file)
        .with_context(|| format!("failed to load {}", config.variables_file.display()))?;
    let catalog = loader::load_catalog(&config.lmt_file, &config.connections_file)
        .context("failed to load configuration catalog")?;

    // Build service layer
    let app_state = AppState {
        ddr_service: Arc::new(DdrService::new(table)),
        config_service: Arc::new(ConfigService::new(catalog)),
    };

    let ddr_listener = TcpListener::bind(config.ddr_listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.ddr_listen_addr))?;
    let config_listener = TcpListener::bind(config.config_listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.config_listen_addr))?;
    tracing::info!(
        ddr = %config.ddr_listen_addr,
        config = %config.config_listen_addr,
        "starting ddr-gateway"
    );

    // Ctrl-C stops both listeners
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown requested");
        }
        let _ = shutdown_tx.send(true);
    });

    tokio::try_join!(
        server::serve(
            ddr_listener,
            server::ddr_router(app_state.clone()),
            wait_for(shutdown_rx.clone()),
        ),
        server::serve(
            config_listener,
            server::config_router(app_state),
            wait_for(shutdown_rx),
        ),
    )?;

    Ok(())
}

async fn wait_for(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}
