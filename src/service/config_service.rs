//! Config service: read-only lookups into the static configuration catalog.

use serde_json::Value;

use crate::domain::ConfigCatalog;

/// Answers `getConfigRequest` lookups. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct ConfigService {
    catalog: ConfigCatalog,
}

impl ConfigService {
    /// Creates a service serving `catalog`.
    #[must_use]
    pub fn new(catalog: ConfigCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the list selected by `xpath`, or `None` for an unknown path.
    #[must_use]
    pub fn get_config(&self, xpath: &str) -> Option<&[Value]> {
        let found = self.catalog.lookup(xpath);
        if found.is_none() {
            tracing::warn!(xpath, "unknown config xpath");
        }
        found
    }
}
