//! Startup file loading.
//!
//! Reads the variables file into a [`VariableTable`] and the LMT and
//! connections files into a [`ConfigCatalog`]. Loading is synchronous and
//! runs before any listener is bound. A missing, unparsable or wrongly
//! shaped file is fatal; a single malformed variable entry is logged and
//! skipped.

use std::path::Path;

use serde_json::Value;

use crate::domain::{ConfigCatalog, VariableDefinition, VariableTable};
use crate::error::GatewayError;

/// Loads the variables file: `{"variables": [{"variableName", "defaultValue"}, ...]}`.
///
/// # Errors
///
/// Returns a fatal [`GatewayError`] if the file cannot be read or parsed,
/// is not an object, or has no `variables` array.
pub fn load_variables(path: &Path) -> Result<VariableTable, GatewayError> {
    tracing::info!(path = %path.display(), "loading variables file");
    let root = read_json(path)?;
    let items = array_member(path, &root, "variables")?;

    let mut definitions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match serde_json::from_value::<VariableDefinition>(item.clone()) {
            Ok(def) => {
                tracing::debug!(
                    variable = %def.variable_name,
                    default_value = %def.default_value,
                    "setting variable default value"
                );
                definitions.push(def);
            }
            Err(err) => {
                tracing::error!(
                    path = %path.display(),
                    index,
                    error = %err,
                    "skipping variable entry: 'variableName' and/or 'defaultValue' is missing or invalid"
                );
            }
        }
    }

    let table = VariableTable::from_definitions(definitions);
    tracing::info!(count = table.len(), "variables loaded");
    tracing::debug!(names = ?table.names(), "seeded variables");
    Ok(table)
}

/// Loads the LMT file (`{"stations": [...], "missions": [...]}`) and the
/// connections file (`[...]`).
///
/// # Errors
///
/// Returns a fatal [`GatewayError`] if either file cannot be read or
/// parsed, or does not have the expected shape.
pub fn load_catalog(lmt_path: &Path, connections_path: &Path) -> Result<ConfigCatalog, GatewayError> {
    tracing::info!(path = %lmt_path.display(), "loading LMT file");
    let lmt = read_json(lmt_path)?;
    let stations = array_member(lmt_path, &lmt, "stations")?.clone();
    let missions = array_member(lmt_path, &lmt, "missions")?.clone();

    tracing::info!(path = %connections_path.display(), "loading connections file");
    let connections = match read_json(connections_path)? {
        Value::Array(items) => items,
        _ => {
            return Err(GatewayError::ConfigShape {
                path: connections_path.to_path_buf(),
                expected: "an array",
            });
        }
    };

    tracing::info!(
        stations = stations.len(),
        missions = missions.len(),
        connections = connections.len(),
        "configuration catalog loaded"
    );

    Ok(ConfigCatalog {
        stations,
        missions,
        connections,
    })
}

fn read_json(path: &Path) -> Result<Value, GatewayError> {
    let raw = std::fs::read(path).map_err(|source| GatewayError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| GatewayError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

fn array_member<'a>(
    path: &Path,
    root: &'a Value,
    member: &'static str,
) -> Result<&'a Vec<Value>, GatewayError> {
    let Some(object) = root.as_object() else {
        return Err(GatewayError::ConfigShape {
            path: path.to_path_buf(),
            expected: "a JSON object",
        });
    };
    match object.get(member) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(GatewayError::ConfigShape {
            path: path.to_path_buf(),
            expected: "an array in its top-level member",
        }),
        None => Err(GatewayError::ConfigMissingMember {
            path: path.to_path_buf(),
            member,
        }),
    }
}
