//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Every key has a default matching the
//! historical deployment (DDR on port 20002, config on port 21003, data
//! files in the working directory).

use std::net::SocketAddr;
use std::path::PathBuf;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text.
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address of the DDR WebSocket endpoint.
    pub ddr_listen_addr: SocketAddr,

    /// Socket address of the config WebSocket endpoint.
    pub config_listen_addr: SocketAddr,

    /// Variables file seeding the variable table.
    pub variables_file: PathBuf,

    /// LMT file holding the station and mission lists.
    pub lmt_file: PathBuf,

    /// Connections file holding the station connection list.
    pub connections_file: PathBuf,

    /// Log output format.
    pub log_format: LogFormat,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `DDR_LISTEN_ADDR` or `CONFIG_LISTEN_ADDR` is set
    /// but cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let ddr_listen_addr: SocketAddr = std::env::var("DDR_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:20002".to_string())
            .parse()?;
        let config_listen_addr: SocketAddr = std::env::var("CONFIG_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:21003".to_string())
            .parse()?;

        let variables_file = env_path("VARIABLES_FILE", "variables.json");
        let lmt_file = env_path("LMT_FILE", "LMT.json");
        let connections_file = env_path("CONNECTIONS_FILE", "Connections.json");

        let log_format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            ddr_listen_addr,
            config_listen_addr,
            variables_file,
            lmt_file,
            connections_file,
            log_format,
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var_os(key).map_or_else(|| PathBuf::from(default), PathBuf::from)
}
