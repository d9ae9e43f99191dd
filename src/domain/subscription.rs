//! Per-session subscription set.
//!
//! Tracks which variable names a client wants pushed. The set only grows:
//! there is no unsubscribe, and the whole set is dropped with its session.

use std::collections::HashSet;

/// The set of variable names a single session is subscribed to.
#[derive(Debug, Default, Clone)]
pub struct SubscriptionSet {
    names: HashSet<String>,
}

impl SubscriptionSet {
    /// Creates a new empty subscription set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` to the set. Returns `true` if it was not already present.
    pub fn subscribe(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// Returns `true` if the session is subscribed to `name`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the number of subscribed names.
    #[must_use]
    pub fn count(&self) -> usize {
        self.names.len()
    }
}
