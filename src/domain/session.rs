//! Per-connection session record.

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use super::{DdrPush, SessionId, SubscriptionSet};

/// Result of queueing a push on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The push was queued for the connection writer.
    Queued,
    /// The connection writer is gone; the push was dropped.
    Disconnected,
}

/// Server-side context for one live DDR connection.
///
/// Owns the session's subscription set and the sending half of its
/// outbound queue. The queue is unbounded so a push never waits or drops
/// while the service lock is held; the connection writer drains it in
/// order. Dropping the session closes the queue, which ends the
/// connection's write loop.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    connected_at: DateTime<Utc>,
    subscriptions: SubscriptionSet,
    outbound: mpsc::UnboundedSender<DdrPush>,
}

impl Session {
    /// Creates a session with an empty subscription set.
    #[must_use]
    pub fn new(id: SessionId, outbound: mpsc::UnboundedSender<DdrPush>) -> Self {
        Self {
            id,
            connected_at: Utc::now(),
            subscriptions: SubscriptionSet::new(),
            outbound,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns when the connection was accepted.
    #[must_use]
    pub const fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }

    /// Returns the session's subscriptions.
    #[must_use]
    pub const fn subscriptions(&self) -> &SubscriptionSet {
        &self.subscriptions
    }

    /// Adds `name` to the subscription set. Returns `true` if newly added.
    pub fn subscribe(&mut self, name: &str) -> bool {
        self.subscriptions.subscribe(name)
    }

    /// Queues `push` without waiting.
    pub fn push(&self, push: DdrPush) -> PushOutcome {
        match self.outbound.send(push) {
            Ok(()) => PushOutcome::Queued,
            Err(_) => PushOutcome::Disconnected,
        }
    }
}
