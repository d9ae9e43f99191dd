//! Gateway error types.
//!
//! [`GatewayError`] covers the two failure families of the service:
//! startup configuration errors, which abort the process, and protocol
//! errors, which cause a single inbound frame to be logged and dropped.
//! No variant is ever serialized back to a client.

use std::path::PathBuf;

use crate::domain::SessionId;

/// Server-side error enum.
///
/// # Categories
///
/// | Variants                  | Category | Effect                       |
/// |---------------------------|----------|------------------------------|
/// | `Config*`                 | Startup  | Fatal, process exits         |
/// | `MalformedMessage`, `NotAnObject`, `InvalidPayload` | Protocol | Frame dropped |
/// | `SessionNotFound`         | Internal | Request dropped              |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A startup file could not be read.
    #[error("cannot read config file {path}: {source}")]
    ConfigRead {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A startup file is not valid JSON.
    #[error("cannot parse config file {path}: {source}")]
    ConfigParse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A startup file lacks a required top-level member.
    #[error("config file {path} does not contain the '{member}' member")]
    ConfigMissingMember {
        /// Offending file.
        path: PathBuf,
        /// Name of the missing member.
        member: &'static str,
    },

    /// A startup file has the wrong top-level shape.
    #[error("config file {path} should contain {expected}")]
    ConfigShape {
        /// Offending file.
        path: PathBuf,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },

    /// Inbound frame is not valid JSON.
    #[error("malformed message: {0}")]
    MalformedMessage(#[source] serde_json::Error),

    /// Inbound frame is valid JSON but not an object.
    #[error("message is not a JSON object")]
    NotAnObject,

    /// Inbound frame carries a known discriminator with a payload of the
    /// wrong shape.
    #[error("invalid {request} payload: {source}")]
    InvalidPayload {
        /// Discriminator key of the request.
        request: &'static str,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The session addressed by a request is no longer registered.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),
}

impl GatewayError {
    /// Returns `true` for errors that must abort startup.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigRead { .. }
                | Self::ConfigParse { .. }
                | Self::ConfigMissingMember { .. }
                | Self::ConfigShape { .. }
        )
    }
}
