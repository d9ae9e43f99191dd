//! In-memory variable table.
//!
//! [`VariableTable`] maps a variable name to its current value. Values are
//! opaque [`serde_json::Value`]s: no schema is enforced and a write may change
//! the effective type of a variable. The table itself is not synchronized;
//! the owning service serializes access.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// One `{variableName, defaultValue}` entry of the variables file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDefinition {
    /// Variable name.
    pub variable_name: String,
    /// Value the variable holds at startup.
    pub default_value: Value,
}

/// Name → value store. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    entries: HashMap<String, Value>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table by applying each definition in order.
    ///
    /// A name defined twice keeps the last default.
    #[must_use]
    pub fn from_definitions<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = VariableDefinition>,
    {
        let mut table = Self::new();
        for def in definitions {
            table.set(def.variable_name, def.default_value);
        }
        table
    }

    /// Returns the current value of `name`, or `None` if it was never set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Returns the current value of `name`, or `Value::Null` if it was
    /// never set.
    #[must_use]
    pub fn value_or_null(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or(Value::Null)
    }

    /// Inserts or overwrites the value of `name`.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.entries.insert(name.into(), value);
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no variable has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all variable names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn get_before_set_is_absent() {
        let table = VariableTable::new();
        assert!(table.get("alt").is_none());
        assert_eq!(table.value_or_null("alt"), Value::Null);
    }

    #[test]
    fn set_then_get_returns_value_verbatim() {
        let mut table = VariableTable::new();
        for value in [
            json!(0),
            json!(-12.5),
            json!("north"),
            json!(true),
            json!(null),
            json!([1, 2, 3]),
            json!({"lat": 45.5, "lon": -73.6}),
        ] {
            table.set("v", value.clone());
            assert_eq!(table.get("v"), Some(&value));
        }
    }

    #[test]
    fn last_write_wins_and_type_may_change() {
        let mut table = VariableTable::new();
        table.set("mode", json!(1));
        table.set("mode", json!("manual"));
        assert_eq!(table.get("mode"), Some(&json!("manual")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn from_definitions_applies_in_order() {
        let defs = vec![
            VariableDefinition {
                variable_name: "alt".to_string(),
                default_value: json!(0),
            },
            VariableDefinition {
                variable_name: "speed".to_string(),
                default_value: json!(12),
            },
            VariableDefinition {
                variable_name: "alt".to_string(),
                default_value: json!(5),
            },
        ];
        let table = VariableTable::from_definitions(defs);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("alt"), Some(&json!(5)));
        assert_eq!(table.names(), vec!["alt", "speed"]);
    }

    #[test]
    fn definition_deserializes_camel_case() {
        let def: Result<VariableDefinition, _> =
            serde_json::from_value(json!({"variableName": "alt", "defaultValue": 0}));
        assert_eq!(
            def.ok(),
            Some(VariableDefinition {
                variable_name: "alt".to_string(),
                default_value: json!(0),
            })
        );
    }
}
