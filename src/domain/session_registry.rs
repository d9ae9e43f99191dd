//! Live session registry and notification fan-out.
//!
//! [`SessionRegistry`] holds every connected DDR session. Each session owns
//! its own subscription set; the fan-out walks all live sessions and pushes
//! to those whose set contains the changed variable.

use std::collections::HashMap;

use serde_json::Value;

use super::session::PushOutcome;
use super::{DdrPush, Session, SessionId};

/// Collection of live sessions keyed by [`SessionId`].
///
/// Not synchronized on its own: the DDR service keeps it next to the
/// variable table under one lock so that a write and its fan-out are
/// atomic with respect to every other request.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a newly connected session.
    pub fn insert(&mut self, session: Session) {
        self.sessions.insert(session.id(), session);
    }

    /// Drops a session. Returns it if it was registered.
    pub fn remove(&mut self, id: SessionId) -> Option<Session> {
        self.sessions.remove(&id)
    }

    /// Returns the session with the given ID.
    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Returns the session with the given ID, mutably.
    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(&id)
    }

    /// Returns the number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no session is connected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Pushes an `onVariableValueChangedNotification` to every session
    /// subscribed to `name`.
    ///
    /// Each subscribed session gets exactly one attempt. Sessions whose
    /// connection is already gone are skipped. Returns the number of
    /// sessions the notification was queued for.
    pub fn notify_change(&self, name: &str, value: &Value) -> usize {
        let mut delivered = 0;
        for session in self.sessions.values() {
            if !session.subscriptions().matches(name) {
                continue;
            }
            match session.push(DdrPush::value_changed(name, value.clone())) {
                PushOutcome::Queued => delivered += 1,
                PushOutcome::Disconnected => {
                    tracing::debug!(
                        session_id = %session.id(),
                        variable = name,
                        "skipping notification for closed session"
                    );
                }
            }
        }
        delivered
    }
}
