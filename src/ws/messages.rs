//! WebSocket message types for both endpoints.
//!
//! Inbound frames are JSON objects keyed by a single discriminator, e.g.
//! `{"getValueRequest": "alt"}`. Keys are checked in a fixed precedence
//! order and the first match wins; other keys are ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GatewayError;

/// `subscribeVariablesRequest` discriminator.
pub const SUBSCRIBE_VARIABLES_REQUEST: &str = "subscribeVariablesRequest";
/// `getValueRequest` discriminator.
pub const GET_VALUE_REQUEST: &str = "getValueRequest";
/// `setVariableValueRequest` discriminator.
pub const SET_VARIABLE_VALUE_REQUEST: &str = "setVariableValueRequest";
/// `getVariableCountRequest` discriminator (reserved).
pub const GET_VARIABLE_COUNT_REQUEST: &str = "getVariableCountRequest";
/// `getVariableDefinitionsRequest` discriminator (reserved).
pub const GET_VARIABLE_DEFINITIONS_REQUEST: &str = "getVariableDefinitionsRequest";
/// `getConfigRequest` discriminator.
pub const GET_CONFIG_REQUEST: &str = "getConfigRequest";

/// Payload of `setVariableValueRequest`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetVariableValue {
    /// Variable to write.
    pub variable_name: String,
    /// New value. Written as `null` when omitted.
    #[serde(default)]
    pub variable_value: Value,
}

/// Requests accepted on the DDR endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum DdrRequest {
    /// Subscribe to each listed variable and receive its current value.
    SubscribeVariables(Vec<String>),
    /// Read one variable.
    GetValue(String),
    /// Write one variable and notify its subscribers.
    SetVariableValue(SetVariableValue),
    /// Reserved, not implemented.
    GetVariableCount,
    /// Reserved, not implemented.
    GetVariableDefinitions,
}

impl DdrRequest {
    /// Decodes a text frame.
    ///
    /// Returns `Ok(None)` when the object carries no known discriminator.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MalformedMessage`] for invalid JSON,
    /// [`GatewayError::NotAnObject`] for non-object JSON and
    /// [`GatewayError::InvalidPayload`] when a known discriminator carries
    /// a payload of the wrong shape.
    pub fn parse(text: &str) -> Result<Option<Self>, GatewayError> {
        let mut obj = parse_object(text)?;

        if let Some(payload) = obj.remove(SUBSCRIBE_VARIABLES_REQUEST) {
            let names = decode(SUBSCRIBE_VARIABLES_REQUEST, payload)?;
            return Ok(Some(Self::SubscribeVariables(names)));
        }
        if let Some(payload) = obj.remove(GET_VALUE_REQUEST) {
            let name = decode(GET_VALUE_REQUEST, payload)?;
            return Ok(Some(Self::GetValue(name)));
        }
        if let Some(payload) = obj.remove(SET_VARIABLE_VALUE_REQUEST) {
            let req = decode(SET_VARIABLE_VALUE_REQUEST, payload)?;
            return Ok(Some(Self::SetVariableValue(req)));
        }
        if obj.contains_key(GET_VARIABLE_COUNT_REQUEST) {
            return Ok(Some(Self::GetVariableCount));
        }
        if obj.contains_key(GET_VARIABLE_DEFINITIONS_REQUEST) {
            return Ok(Some(Self::GetVariableDefinitions));
        }
        Ok(None)
    }

    /// Returns the discriminator key of this request.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SubscribeVariables(_) => SUBSCRIBE_VARIABLES_REQUEST,
            Self::GetValue(_) => GET_VALUE_REQUEST,
            Self::SetVariableValue(_) => SET_VARIABLE_VALUE_REQUEST,
            Self::GetVariableCount => GET_VARIABLE_COUNT_REQUEST,
            Self::GetVariableDefinitions => GET_VARIABLE_DEFINITIONS_REQUEST,
        }
    }
}

/// Payload of `getConfigRequest`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetConfigRequest {
    /// Path of the requested list.
    pub xpath: String,
}

/// Requests accepted on the config endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigRequest {
    /// Fetch one preloaded list.
    GetConfig(GetConfigRequest),
}

impl ConfigRequest {
    /// Decodes a text frame. Returns `Ok(None)` for an unknown discriminator.
    ///
    /// # Errors
    ///
    /// Same as [`DdrRequest::parse`].
    pub fn parse(text: &str) -> Result<Option<Self>, GatewayError> {
        let mut obj = parse_object(text)?;
        match obj.remove(GET_CONFIG_REQUEST) {
            Some(payload) => Ok(Some(Self::GetConfig(decode(GET_CONFIG_REQUEST, payload)?))),
            None => Ok(None),
        }
    }
}

/// `{xpath, config}` body of a `getConfigResponse`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigBody<'a> {
    /// The requested path, echoed.
    pub xpath: &'a str,
    /// The preloaded list, verbatim.
    pub config: &'a [Value],
}

/// Pushes sent on the config endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigPush<'a> {
    /// Reply to a `getConfigRequest`.
    GetConfigResponse(ConfigBody<'a>),
}

fn parse_object(text: &str) -> Result<Map<String, Value>, GatewayError> {
    match serde_json::from_str(text).map_err(GatewayError::MalformedMessage)? {
        Value::Object(obj) => Ok(obj),
        _ => Err(GatewayError::NotAnObject),
    }
}

fn decode<T: DeserializeOwned>(request: &'static str, payload: Value) -> Result<T, GatewayError> {
    serde_json::from_value(payload).map_err(|source| GatewayError::InvalidPayload { request, source })
}
