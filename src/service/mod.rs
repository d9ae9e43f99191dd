//! Service layer: request orchestration.
//!
//! [`DdrService`] owns the variable table and the live sessions and
//! performs notification fan-out. [`ConfigService`] serves the static
//! configuration catalog.

pub mod config_service;
pub mod ddr_service;

pub use config_service::ConfigService;
pub use ddr_service::DdrService;
