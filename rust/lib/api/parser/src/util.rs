//! Shared raw-document helpers.

use serde_json::{Map, Value};

use crate::error::SchemaError;

/// View a raw value as a mapping.
pub fn as_mapping<'a>(
    value: &'a Value,
    field: &str,
) -> Result<&'a Map<String, Value>, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::InvalidContainerType {
            field: field.to_string(),
            expected: "mapping",
        })
}

/// Fetch a required string attribute. Absent or null fails.
pub fn require_string(map: &Map<String, Value>, key: &str) -> Result<String, SchemaError> {
    match map.get(key) {
        None | Some(Value::Null) => Err(SchemaError::MissingRequiredField(key.to_string())),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SchemaError::InvalidContainerType {
            field: key.to_string(),
            expected: "string",
        }),
    }
}

/// Fetch an optional string attribute. Null counts as absent.
pub fn optional_string(
    map: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, SchemaError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SchemaError::InvalidContainerType {
            field: key.to_string(),
            expected: "string",
        }),
    }
}

/// Fetch an optional attribute of any shape. Null counts as absent.
pub fn optional_value(map: &Map<String, Value>, key: &str) -> Option<Value> {
    map.get(key).filter(|v| !v.is_null()).cloned()
}
