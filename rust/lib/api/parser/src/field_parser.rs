//! Recursive field schema construction.
//!
//! Reads one raw (name → attributes) mapping entry into a typed
//! `FieldDef`, recursing into nested `fields`. The variant is selected by
//! the caller's `FieldKind` and inherited by every child.

use std::collections::BTreeMap;

use apidef_ir::{FieldDef, FieldKind, FieldVariant};
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::util;

/// Build one field schema node from its raw definition.
///
/// The raw `type` text is kept verbatim; it is not run through the
/// type-expression grammar here. `name` is only used in error context.
pub fn parse_field(kind: FieldKind, name: &str, raw: &Value) -> Result<FieldDef, SchemaError> {
    let map = util::as_mapping(raw, name)?;

    let ty = util::require_string(map, "type")?;
    let group = util::optional_string(map, "group")?;
    let description = util::optional_string(map, "description")?;

    let mut fields = BTreeMap::new();
    if let Some(sub) = map.get("fields").filter(|v| !v.is_null()) {
        let sub = util::as_mapping(sub, "fields")?;
        for (child_name, child_raw) in sub {
            fields.insert(child_name.clone(), parse_field(kind, child_name, child_raw)?);
        }
    }

    Ok(FieldDef {
        ty,
        group,
        description,
        fields,
        variant: parse_variant(kind, map)?,
    })
}

/// Variant dispatch: capture the attributes applicable to `kind`.
/// Attributes outside the variant's contract are ignored.
fn parse_variant(kind: FieldKind, map: &Map<String, Value>) -> Result<FieldVariant, SchemaError> {
    match kind {
        FieldKind::Header => Ok(FieldVariant::Header {
            default: util::optional_value(map, "default"),
        }),
        FieldKind::Params => Ok(FieldVariant::Params {
            default: util::optional_value(map, "default"),
            restrict_to_values: parse_restrict(map)?,
        }),
        FieldKind::Success => Ok(FieldVariant::Success),
        FieldKind::Errors => Ok(FieldVariant::Errors),
    }
}

/// `restrictToValues` must be a sequence when present.
fn parse_restrict(map: &Map<String, Value>) -> Result<Vec<Value>, SchemaError> {
    match map.get("restrictToValues") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(values)) => Ok(values.clone()),
        Some(_) => Err(SchemaError::InvalidContainerType {
            field: "restrictToValues".to_string(),
            expected: "sequence",
        }),
    }
}
