//! # ddr-gateway
//!
//! WebSocket data-dictionary gateway.
//!
//! Clients connect to the DDR endpoint to read, write and subscribe to a
//! small table of named runtime variables; every write is fanned out to
//! the sessions subscribed to that variable. A second endpoint serves
//! read-only station, mission and connection lists loaded at startup.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket)
//!     │
//!     ├── DDR endpoint ─────┐        ├── Config endpoint
//!     │                     │        │
//!     ├── Router (ws/)      │        ├── Router (ws/)
//!     │                     │        │
//!     ├── DdrService (service/)      ├── ConfigService (service/)
//!     │                              │
//!     ├── VariableTable (domain/)    └── ConfigCatalog (domain/)
//!     └── SessionRegistry + fan-out (domain/)
//! ```
//!
//! Startup files are read by [`loader`] before any listener is bound.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod server;
pub mod service;
pub mod ws;
