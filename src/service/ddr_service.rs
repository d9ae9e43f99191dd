//! DDR service: variable reads, writes, subscriptions and fan-out.

use serde_json::Value;
use tokio::sync::{Mutex, mpsc};

use crate::domain::{DdrPush, PushOutcome, Session, SessionId, SessionRegistry, VariableTable};
use crate::error::GatewayError;

/// State guarded by the service lock.
#[derive(Debug)]
struct DdrState {
    table: VariableTable,
    sessions: SessionRegistry,
}

/// Orchestration layer for the DDR endpoint.
///
/// Owns the [`VariableTable`] and the [`SessionRegistry`] behind a single
/// mutex. Every operation runs to completion under the lock and only
/// queues pushes (never awaits socket I/O), so a write and its fan-out are
/// atomic with respect to every other request.
#[derive(Debug)]
pub struct DdrService {
    state: Mutex<DdrState>,
}

impl DdrService {
    /// Creates a service seeded with `table`.
    #[must_use]
    pub fn new(table: VariableTable) -> Self {
        Self {
            state: Mutex::new(DdrState {
                table,
                sessions: SessionRegistry::new(),
            }),
        }
    }

    /// Registers a new session and returns its ID with the receiving half
    /// of its outbound queue.
    pub async fn open_session(&self) -> (SessionId, mpsc::UnboundedReceiver<DdrPush>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = SessionId::new();
        let mut state = self.state.lock().await;
        state.sessions.insert(Session::new(id, tx));
        tracing::debug!(session_id = %id, sessions = state.sessions.len(), "session opened");
        (id, rx)
    }

    /// Drops a session and its subscriptions.
    pub async fn close_session(&self, id: SessionId) {
        let mut state = self.state.lock().await;
        if let Some(session) = state.sessions.remove(id) {
            tracing::debug!(
                session_id = %id,
                subscriptions = session.subscriptions().count(),
                connected_at = %session.connected_at(),
                "session closed"
            );
        }
    }

    /// Subscribes the session to each name in order and pushes the current
    /// value of each to it (`null` when unset).
    ///
    /// Returns the number of pushes queued.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SessionNotFound`] if the session is not
    /// registered.
    pub async fn subscribe(&self, id: SessionId, names: &[String]) -> Result<usize, GatewayError> {
        let mut guard = self.state.lock().await;
        let DdrState { table, sessions } = &mut *guard;
        let session = sessions
            .get_mut(id)
            .ok_or(GatewayError::SessionNotFound(id))?;

        let mut queued = 0;
        for name in names {
            let added = session.subscribe(name);
            tracing::debug!(session_id = %id, variable = %name, added, "subscribed to variable");
            let push = DdrPush::value_changed(name, table.value_or_null(name));
            if session.push(push) == PushOutcome::Queued {
                queued += 1;
            }
        }
        Ok(queued)
    }

    /// Pushes a `getValueResponse` for `name` to the session.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SessionNotFound`] if the session is not
    /// registered.
    pub async fn get_value(&self, id: SessionId, name: &str) -> Result<(), GatewayError> {
        let state = self.state.lock().await;
        let session = state
            .sessions
            .get(id)
            .ok_or(GatewayError::SessionNotFound(id))?;
        let _ = session.push(DdrPush::value_response(name, state.table.value_or_null(name)));
        Ok(())
    }

    /// Writes `value` to `name` and notifies every subscribed session.
    ///
    /// Returns the number of sessions notified.
    pub async fn set_value(&self, name: &str, value: Value) -> usize {
        let mut state = self.state.lock().await;
        state.table.set(name, value.clone());
        let notified = state.sessions.notify_change(name, &value);
        tracing::debug!(variable = name, notified, "variable value set");
        notified
    }

    /// Returns the current value of `name`, if set.
    pub async fn value(&self, name: &str) -> Option<Value> {
        self.state.lock().await.table.get(name).cloned()
    }

    /// Returns the number of variables in the table.
    pub async fn variable_count(&self) -> usize {
        self.state.lock().await.table.len()
    }

    /// Returns the number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.state.lock().await.sessions.len()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    fn service() -> DdrService {
        let mut table = VariableTable::new();
        table.set("alt", json!(0));
        DdrService::new(table)
    }

    fn recv(rx: &mut mpsc::UnboundedReceiver<DdrPush>) -> DdrPush {
        let Ok(push) = rx.try_recv() else {
            panic!("expected a push");
        };
        push
    }

    #[tokio::test]
    async fn subscribe_pushes_current_value() {
        let svc = service();
        let (id, mut rx) = svc.open_session().await;

        let queued = svc.subscribe(id, &["alt".to_string()]).await;
        assert_eq!(queued.ok(), Some(1));
        assert_eq!(recv(&mut rx), DdrPush::value_changed("alt", json!(0)));
    }

    #[tokio::test]
    async fn subscribe_to_unknown_pushes_null() {
        let svc = service();
        let (id, mut rx) = svc.open_session().await;
        let _ = svc.subscribe(id, &["ghost".to_string()]).await;
        assert_eq!(recv(&mut rx), DdrPush::value_changed("ghost", Value::Null));
    }

    #[tokio::test]
    async fn subscribe_pushes_in_request_order() {
        let svc = service();
        let (id, mut rx) = svc.open_session().await;
        let names = vec!["b".to_string(), "alt".to_string(), "a".to_string()];
        let _ = svc.subscribe(id, &names).await;
        let order: Vec<String> = (0..3)
            .map(|_| recv(&mut rx).variable_name().to_string())
            .collect();
        assert_eq!(order, names);
    }

    #[tokio::test]
    async fn large_subscribe_pushes_every_initial_value() {
        let svc = service();
        let (id, mut rx) = svc.open_session().await;
        let names: Vec<String> = (0..2_000).map(|i| format!("var{i}")).collect();

        assert_eq!(svc.subscribe(id, &names).await.ok(), Some(2_000));
        for name in &names {
            assert_eq!(recv(&mut rx), DdrPush::value_changed(name, Value::Null));
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn writes_to_unread_subscriber_arrive_in_write_order() {
        let svc = service();
        let (id, mut rx) = svc.open_session().await;
        let _ = svc.subscribe(id, &["alt".to_string()]).await;

        for i in 1..=2_000 {
            assert_eq!(svc.set_value("alt", json!(i)).await, 1);
        }
        assert_eq!(recv(&mut rx), DdrPush::value_changed("alt", json!(0)));
        for i in 1..=2_000 {
            assert_eq!(recv(&mut rx), DdrPush::value_changed("alt", json!(i)));
        }
        assert!(rx.try_recv().is_err());
        assert_eq!(svc.value("alt").await, Some(json!(2_000)));
    }

    #[tokio::test]
    async fn set_notifies_subscriber_including_writer() {
        let svc = service();
        let (id, mut rx) = svc.open_session().await;
        let _ = svc.subscribe(id, &["alt".to_string()]).await;
        let _ = recv(&mut rx);

        assert_eq!(svc.set_value("alt", json!(100)).await, 1);
        assert_eq!(recv(&mut rx), DdrPush::value_changed("alt", json!(100)));
        assert_eq!(svc.value("alt").await, Some(json!(100)));
    }

    #[tokio::test]
    async fn double_subscribe_yields_single_notification() {
        let svc = service();
        let (id, mut rx) = svc.open_session().await;
        let _ = svc.subscribe(id, &["alt".to_string()]).await;
        let _ = svc.subscribe(id, &["alt".to_string()]).await;
        let _ = recv(&mut rx);
        let _ = recv(&mut rx);

        assert_eq!(svc.set_value("alt", json!(1)).await, 1);
        let _ = recv(&mut rx);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn set_without_subscribers_notifies_nobody() {
        let svc = service();
        let (_id, mut rx) = svc.open_session().await;
        assert_eq!(svc.set_value("speed", json!(3)).await, 0);
        assert!(rx.try_recv().is_err());
        assert_eq!(svc.variable_count().await, 2);
    }

    #[tokio::test]
    async fn closed_session_stops_receiving() {
        let svc = service();
        let (a, _rx_a) = svc.open_session().await;
        let (b, mut rx_b) = svc.open_session().await;
        let _ = svc.subscribe(a, &["alt".to_string()]).await;
        let _ = svc.subscribe(b, &["alt".to_string()]).await;
        let _ = recv(&mut rx_b);

        svc.close_session(a).await;
        assert_eq!(svc.session_count().await, 1);
        assert_eq!(svc.set_value("alt", json!(9)).await, 1);
        assert_eq!(recv(&mut rx_b), DdrPush::value_changed("alt", json!(9)));
    }

    #[tokio::test]
    async fn get_value_replies_without_subscribing() {
        let svc = service();
        let (id, mut rx) = svc.open_session().await;
        assert!(svc.get_value(id, "unknown").await.is_ok());
        assert_eq!(recv(&mut rx), DdrPush::value_response("unknown", Value::Null));

        assert_eq!(svc.set_value("unknown", json!(true)).await, 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn requests_for_closed_session_fail() {
        let svc = service();
        let (id, _rx) = svc.open_session().await;
        svc.close_session(id).await;
        assert!(matches!(
            svc.get_value(id, "alt").await,
            Err(GatewayError::SessionNotFound(_))
        ));
        assert!(svc.subscribe(id, &["alt".to_string()]).await.is_err());
    }
}
