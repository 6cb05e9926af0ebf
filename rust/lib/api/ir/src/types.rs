//! Type-expression grammar: scalar vocabulary, decorators, `FieldType`.
//!
//! Endpoint documents describe field types with short expressions like
//! `string`, `optional<uuid>` or `map<string, integer>`. The grammar is
//! intentionally one level deep: a decorator wraps scalars, never another
//! decorated type, so `optional<list<string>>` does not parse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a type expression does not parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeExprError {
    #[error("invalid type expression: '{0}'")]
    InvalidExpression(String),

    #[error("unknown decorator: '{0}'")]
    UnknownDecorator(String),

    #[error("map takes exactly two scalar types: '{0}'")]
    InvalidMapType(String),

    #[error("expected a single scalar type: '{0}'")]
    InvalidScalarType(String),
}

/// Atomic type names accepted inside a type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Int,
    Integer,
    Numeric,
    Double,
    Boolean,
    String,
    Date,
    DateTime,
    Timestamp,
    Uuid,
}

impl ScalarType {
    /// The full scalar vocabulary.
    pub const ALL: [ScalarType; 10] = [
        ScalarType::Int,
        ScalarType::Integer,
        ScalarType::Numeric,
        ScalarType::Double,
        ScalarType::Boolean,
        ScalarType::String,
        ScalarType::Date,
        ScalarType::DateTime,
        ScalarType::Timestamp,
        ScalarType::Uuid,
    ];

    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Int => "int",
            ScalarType::Integer => "integer",
            ScalarType::Numeric => "numeric",
            ScalarType::Double => "double",
            ScalarType::Boolean => "boolean",
            ScalarType::String => "string",
            ScalarType::Date => "date",
            ScalarType::DateTime => "datetime",
            ScalarType::Timestamp => "timestamp",
            ScalarType::Uuid => "uuid",
        }
    }

    /// Look up a scalar by name, case-insensitively. Surrounding whitespace
    /// is ignored.
    pub fn parse(name: &str) -> Option<ScalarType> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammar keywords that wrap one or two scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decorator {
    Optional,
    List,
    Map,
    Set,
}

impl Decorator {
    /// Canonical lower-case keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decorator::Optional => "optional",
            Decorator::List => "list",
            Decorator::Map => "map",
            Decorator::Set => "set",
        }
    }

    /// Look up a decorator keyword, case-insensitively.
    pub fn parse(name: &str) -> Option<Decorator> {
        [
            Decorator::Optional,
            Decorator::List,
            Decorator::Map,
            Decorator::Set,
        ]
        .into_iter()
        .find(|d| d.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed form of a type expression.
///
/// A single-level tagged union: a bare scalar, a scalar wrapped in one
/// decorator, or a key/value scalar pair for `map`. Nested decorators and
/// optional collections are unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Scalar(ScalarType),
    /// `optional<inner>` — a nullable scalar, not a collection.
    Optional(ScalarType),
    /// `list<inner>`
    List(ScalarType),
    /// `set<inner>`
    Set(ScalarType),
    /// `map<key, value>`
    Map { key: ScalarType, value: ScalarType },
}

impl FieldType {
    /// The element/value scalar of this type.
    pub fn value_type(&self) -> ScalarType {
        match self {
            FieldType::Scalar(s)
            | FieldType::Optional(s)
            | FieldType::List(s)
            | FieldType::Set(s) => *s,
            FieldType::Map { value, .. } => *value,
        }
    }

    /// The key scalar, present only for `map`.
    pub fn key_type(&self) -> Option<ScalarType> {
        match self {
            FieldType::Map { key, .. } => Some(*key),
            _ => None,
        }
    }

    /// True only for `optional<...>`; collection types are never optional.
    pub fn is_optional(&self) -> bool {
        matches!(self, FieldType::Optional(_))
    }

    /// The collection decorator, if any. `optional` is not a collection.
    pub fn collection(&self) -> Option<Decorator> {
        match self {
            FieldType::List(_) => Some(Decorator::List),
            FieldType::Set(_) => Some(Decorator::Set),
            FieldType::Map { .. } => Some(Decorator::Map),
            FieldType::Scalar(_) | FieldType::Optional(_) => None,
        }
    }

    /// True if this is `list`, `set` or `map`.
    pub fn is_collection(&self) -> bool {
        self.collection().is_some()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(s) => write!(f, "{}", s),
            FieldType::Optional(s) => write!(f, "optional<{}>", s),
            FieldType::List(s) => write!(f, "list<{}>", s),
            FieldType::Set(s) => write!(f, "set<{}>", s),
            FieldType::Map { key, value } => write!(f, "map<{}, {}>", key, value),
        }
    }
}

impl FromStr for FieldType {
    type Err = TypeExprError;

    /// Parse one type expression. Case-insensitive; whitespace around the
    /// map comma is not significant. Pure function of the input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();

        if let Some(scalar) = ScalarType::parse(&text) {
            return Ok(FieldType::Scalar(scalar));
        }

        // Outer shape: name<inner>, one level only.
        let open = match text.find('<') {
            Some(i) => i,
            None => return Err(TypeExprError::InvalidExpression(s.trim().to_string())),
        };
        if open == 0 || !text.ends_with('>') {
            return Err(TypeExprError::InvalidExpression(s.trim().to_string()));
        }
        let name = &text[..open];
        let inner = &text[open + 1..text.len() - 1];
        if name.contains('>') || inner.contains('<') || inner.contains('>') {
            return Err(TypeExprError::InvalidExpression(s.trim().to_string()));
        }

        let decorator = Decorator::parse(name)
            .ok_or_else(|| TypeExprError::UnknownDecorator(name.to_string()))?;

        let single = |inner: &str| {
            ScalarType::parse(inner)
                .ok_or_else(|| TypeExprError::InvalidScalarType(inner.to_string()))
        };

        match decorator {
            Decorator::Optional => Ok(FieldType::Optional(single(inner)?)),
            Decorator::List => Ok(FieldType::List(single(inner)?)),
            Decorator::Set => Ok(FieldType::Set(single(inner)?)),
            Decorator::Map => {
                let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
                match parts.as_slice() {
                    [key, value] => {
                        let invalid = || TypeExprError::InvalidMapType(inner.to_string());
                        Ok(FieldType::Map {
                            key: ScalarType::parse(key).ok_or_else(invalid)?,
                            value: ScalarType::parse(value).ok_or_else(invalid)?,
                        })
                    }
                    _ => Err(TypeExprError::InvalidMapType(inner.to_string())),
                }
            }
        }
    }
}
