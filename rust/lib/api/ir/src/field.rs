//! Field schema nodes: one named, typed entry in an endpoint definition.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{FieldType, TypeExprError};

/// Which endpoint collection a field belongs to.
///
/// Selects the variant-specific attributes captured at construction time
/// and is inherited by nested `fields` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Header,
    Params,
    Success,
    Errors,
}

/// Variant-specific attributes beyond the base field contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldVariant {
    Header {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,
    },
    Params {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,

        /// Enumerated acceptable literal values. Empty = unrestricted.
        #[serde(
            default,
            skip_serializing_if = "Vec::is_empty",
            rename = "restrictToValues"
        )]
        restrict_to_values: Vec<Value>,
    },
    Success,
    Errors,
}

impl FieldVariant {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldVariant::Header { .. } => FieldKind::Header,
            FieldVariant::Params { .. } => FieldKind::Params,
            FieldVariant::Success => FieldKind::Success,
            FieldVariant::Errors => FieldKind::Errors,
        }
    }
}

/// One named field in an endpoint definition.
///
/// `ty` keeps the raw type-expression text exactly as authored. It is
/// parsed on demand via [`FieldDef::field_type`], never at load time, so a
/// document whose type text is structural (`object`) or momentarily
/// invalid still loads; the parse error surfaces only when that field's
/// type is asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Raw type expression (e.g. `optional<uuid>`).
    #[serde(rename = "type")]
    pub ty: String,

    /// Free-form grouping label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Documentation text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Nested child fields, same variant as self, arbitrary depth.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldDef>,

    /// Variant-specific attributes.
    pub variant: FieldVariant,
}

impl FieldDef {
    /// Parse the raw type expression. Recomputed on every call.
    pub fn field_type(&self) -> Result<FieldType, TypeExprError> {
        self.ty.parse()
    }

    /// Which collection variant this field carries.
    pub fn kind(&self) -> FieldKind {
        self.variant.kind()
    }

    /// Look up a nested child field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Default value, for header and params fields.
    pub fn default_value(&self) -> Option<&Value> {
        match &self.variant {
            FieldVariant::Header { default } | FieldVariant::Params { default, .. } => {
                default.as_ref()
            }
            FieldVariant::Success | FieldVariant::Errors => None,
        }
    }

    /// Acceptable literal values, for params fields. Empty when
    /// unrestricted.
    pub fn restrict_to_values(&self) -> &[Value] {
        match &self.variant {
            FieldVariant::Params {
                restrict_to_values, ..
            } => restrict_to_values,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScalarType;
    use serde_json::json;

    fn success_leaf(ty: &str) -> FieldDef {
        FieldDef {
            ty: ty.into(),
            group: None,
            description: None,
            fields: BTreeMap::new(),
            variant: FieldVariant::Success,
        }
    }

    #[test]
    fn lazy_type_parse() {
        let field = success_leaf("optional<uuid>");
        assert_eq!(
            field.field_type().unwrap(),
            FieldType::Optional(ScalarType::Uuid)
        );

        // Structural container type: the node is fine, only the type
        // accessor fails.
        let field = success_leaf("object");
        assert!(field.field_type().is_err());
    }

    #[test]
    fn nested_lookup() {
        let mut parent = success_leaf("object");
        parent.fields.insert("id21".into(), success_leaf("UUID"));

        let child = parent.field("id21").unwrap();
        assert_eq!(child.ty, "UUID");
        assert_eq!(
            child.field_type().unwrap(),
            FieldType::Scalar(ScalarType::Uuid)
        );
        assert!(parent.field("missing").is_none());
    }

    #[test]
    fn variant_accessors() {
        let field = FieldDef {
            ty: "string".into(),
            group: None,
            description: None,
            fields: BTreeMap::new(),
            variant: FieldVariant::Params {
                default: Some(json!("asc")),
                restrict_to_values: vec![json!("asc"), json!("desc")],
            },
        };
        assert_eq!(field.kind(), FieldKind::Params);
        assert_eq!(field.default_value(), Some(&json!("asc")));
        assert_eq!(field.restrict_to_values(), [json!("asc"), json!("desc")]);

        let field = success_leaf("string");
        assert_eq!(field.kind(), FieldKind::Success);
        assert_eq!(field.default_value(), None);
        assert!(field.restrict_to_values().is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let mut field = success_leaf("object");
        field.description = Some("ID two.".into());
        field.fields.insert("id21".into(), success_leaf("UUID"));

        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains("\"type\":\"object\""));

        let back: FieldDef = serde_json::from_str(&json).unwrap();
        assert_eq!(field, back);
    }
}
