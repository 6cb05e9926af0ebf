use thiserror::Error;

/// Construction-time validation failure for a definition document.
///
/// These are configuration errors in static authored data: callers abort
/// startup, no retry is appropriate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("missing required field '{0}'")]
    MissingRequiredField(String),

    #[error("field '{field}' must be a {expected}")]
    InvalidContainerType {
        field: String,
        expected: &'static str,
    },
}
