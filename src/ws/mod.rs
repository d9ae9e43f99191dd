//! WebSocket layer: connection handling, message decoding, request routing.
//!
//! Two endpoints share this layer: the DDR endpoint (variable reads,
//! writes and subscriptions) and the config endpoint (static lookups).

pub mod connection;
pub mod handler;
pub mod messages;
pub mod router;
