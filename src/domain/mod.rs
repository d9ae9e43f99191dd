//! Domain layer: variable table, sessions, subscriptions and fan-out.
//!
//! This module contains the server-side model: the variable table, the
//! per-connection session record with its subscription set, the registry
//! of live sessions that performs notification fan-out, the push messages
//! sent to DDR clients, and the static configuration catalog.

pub mod config_catalog;
pub mod push;
pub mod session;
pub mod session_id;
pub mod session_registry;
pub mod subscription;
pub mod variable_table;

pub use config_catalog::ConfigCatalog;
pub use push::{DdrPush, VariableValue};
pub use session::{PushOutcome, Session};
pub use session_id::SessionId;
pub use session_registry::SessionRegistry;
pub use subscription::SubscriptionSet;
pub use variable_table::{VariableDefinition, VariableTable};
