//! Endpoint descriptor construction and the batch loader.

use std::collections::BTreeMap;

use apidef_ir::{ApiSet, EndpointDef, FieldDef, FieldKind};
use serde_json::Value;
use tracing::debug;

use crate::error::SchemaError;
use crate::field_parser::parse_field;
use crate::util;

/// Build one endpoint descriptor from its raw definition.
pub fn parse_endpoint(raw: &Value) -> Result<EndpointDef, SchemaError> {
    let map = util::as_mapping(raw, "endpoint")?;

    Ok(EndpointDef {
        method: util::require_string(map, "method")?,
        path: util::require_string(map, "path")?,
        title: util::require_string(map, "title")?,
        description: util::optional_string(map, "description")?,
        permission: util::optional_string(map, "permission")?,
        headers: parse_field_map(FieldKind::Header, "headers", map.get("headers"))?,
        params: parse_field_map(FieldKind::Params, "params", map.get("params"))?,
        returns: parse_field_map(FieldKind::Success, "returns", map.get("returns"))?,
        errors: parse_field_map(FieldKind::Errors, "errors", map.get("errors"))?,
    })
}

/// An absent or null sub-mapping yields an empty collection.
fn parse_field_map(
    kind: FieldKind,
    name: &str,
    raw: Option<&Value>,
) -> Result<BTreeMap<String, FieldDef>, SchemaError> {
    let raw = match raw {
        None | Some(Value::Null) => return Ok(BTreeMap::new()),
        Some(v) => v,
    };

    let map = util::as_mapping(raw, name)?;
    let mut fields = BTreeMap::new();
    for (field_name, field_raw) in map {
        fields.insert(field_name.clone(), parse_field(kind, field_name, field_raw)?);
    }
    Ok(fields)
}

/// Build the full endpoint set from a mapping of key → raw definition.
///
/// A definition without a `title` gets its key as the title. Any malformed
/// entry aborts the whole load; no partial set is returned.
pub fn load_api(raw: &Value) -> Result<ApiSet, SchemaError> {
    let map = util::as_mapping(raw, "api document")?;

    let mut endpoints = BTreeMap::new();
    for (key, defn) in map {
        let defn_map = util::as_mapping(defn, key)?;
        let endpoint = match defn_map.get("title") {
            Some(title) if !title.is_null() => parse_endpoint(defn)?,
            _ => {
                let mut patched = defn_map.clone();
                patched.insert("title".to_string(), Value::String(key.clone()));
                parse_endpoint(&Value::Object(patched))?
            }
        };
        debug!("loaded endpoint definition '{}'", key);
        endpoints.insert(key.clone(), endpoint);
    }

    debug!("loaded {} endpoint definitions", endpoints.len());
    Ok(ApiSet { endpoints })
}
