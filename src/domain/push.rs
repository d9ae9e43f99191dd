//! Server → client pushes on the DDR endpoint.
//!
//! Every frame a DDR session receives is a [`DdrPush`]. Pushes are queued on
//! the session's outbound channel and serialized by the connection writer.

use serde::Serialize;
use serde_json::Value;

/// `{variableName, variableValue}` body shared by every push.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableValue {
    /// Variable name.
    pub variable_name: String,
    /// Current value, `null` when the variable was never set.
    pub variable_value: Value,
}

/// A message pushed to a DDR client.
///
/// Serialized externally tagged, e.g.
/// `{"onVariableValueChangedNotification":{"variableName":"alt","variableValue":0}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DdrPush {
    /// Reply to a `getValueRequest`.
    GetValueResponse(VariableValue),
    /// Current value after a subscription, or a new value after a write.
    OnVariableValueChangedNotification(VariableValue),
}

impl DdrPush {
    /// Builds a `getValueResponse`.
    #[must_use]
    pub fn value_response(name: &str, value: Value) -> Self {
        Self::GetValueResponse(VariableValue {
            variable_name: name.to_string(),
            variable_value: value,
        })
    }

    /// Builds an `onVariableValueChangedNotification`.
    #[must_use]
    pub fn value_changed(name: &str, value: Value) -> Self {
        Self::OnVariableValueChangedNotification(VariableValue {
            variable_name: name.to_string(),
            variable_value: value,
        })
    }

    /// Returns the variable this push is about.
    #[must_use]
    pub fn variable_name(&self) -> &str {
        match self {
            Self::GetValueResponse(v) | Self::OnVariableValueChangedNotification(v) => {
                &v.variable_name
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn value_changed_wire_shape() {
        let push = DdrPush::value_changed("alt", json!(100));
        assert_eq!(
            serde_json::to_value(&push).ok(),
            Some(json!({
                "onVariableValueChangedNotification": {
                    "variableName": "alt",
                    "variableValue": 100
                }
            }))
        );
    }

    #[test]
    fn value_response_keeps_null() {
        let push = DdrPush::value_response("unknown", Value::Null);
        assert_eq!(
            serde_json::to_value(&push).ok(),
            Some(json!({
                "getValueResponse": {
                    "variableName": "unknown",
                    "variableValue": null
                }
            }))
        );
        assert_eq!(push.variable_name(), "unknown");
    }
}
