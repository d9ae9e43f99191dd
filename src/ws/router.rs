//! Request routing for the DDR and config endpoints.
//!
//! A decoded request is dispatched to its service handler. Protocol errors
//! and unknown discriminators are logged and dropped; nothing is ever sent
//! back to the client for them.

use super::messages::{ConfigBody, ConfigPush, ConfigRequest, DdrRequest};
use crate::domain::SessionId;
use crate::service::{ConfigService, DdrService};

/// What the router did with one inbound frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The request was dispatched to its handler.
    Handled,
    /// The request is reserved and has no handler yet.
    NotImplemented(&'static str),
    /// The frame carried no known discriminator.
    Ignored,
    /// The frame could not be decoded or addressed a dead session.
    Dropped,
}

/// Routes one DDR text frame from `session_id`.
///
/// All replies are queued on the session's outbound channel by the service.
pub async fn route_ddr(service: &DdrService, session_id: SessionId, text: &str) -> RouteOutcome {
    let request = match DdrRequest::parse(text) {
        Ok(Some(request)) => request,
        Ok(None) => {
            tracing::warn!(%session_id, message = text, "ignoring request");
            return RouteOutcome::Ignored;
        }
        Err(err) => {
            tracing::warn!(%session_id, error = %err, "dropping malformed request");
            return RouteOutcome::Dropped;
        }
    };
    let kind = request.name();
    tracing::debug!(%session_id, request = kind, "routing request");

    let result = match request {
        DdrRequest::SubscribeVariables(names) => {
            service.subscribe(session_id, &names).await.map(|_| ())
        }
        DdrRequest::GetValue(name) => service.get_value(session_id, &name).await,
        DdrRequest::SetVariableValue(req) => {
            let _ = service.set_value(&req.variable_name, req.variable_value).await;
            Ok(())
        }
        DdrRequest::GetVariableCount | DdrRequest::GetVariableDefinitions => {
            tracing::debug!(%session_id, request = kind, "request not implemented");
            return RouteOutcome::NotImplemented(kind);
        }
    };

    match result {
        Ok(()) => RouteOutcome::Handled,
        Err(err) => {
            tracing::warn!(%session_id, error = %err, "request dropped");
            RouteOutcome::Dropped
        }
    }
}

/// Routes one config text frame, returning the JSON reply if any.
#[must_use]
pub fn route_config(service: &ConfigService, session_id: SessionId, text: &str) -> Option<String> {
    let request = match ConfigRequest::parse(text) {
        Ok(Some(request)) => request,
        Ok(None) => {
            tracing::warn!(%session_id, message = text, "ignoring request");
            return None;
        }
        Err(err) => {
            tracing::warn!(%session_id, error = %err, "dropping malformed request");
            return None;
        }
    };

    let ConfigRequest::GetConfig(req) = request;
    let config = service.get_config(&req.xpath)?;
    let push = ConfigPush::GetConfigResponse(ConfigBody {
        xpath: &req.xpath,
        config,
    });
    match serde_json::to_string(&push) {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::warn!(%session_id, error = %err, "failed to encode config response");
            None
        }
    }
}
