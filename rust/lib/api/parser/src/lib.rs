//! apidef document parser.
//!
//! Builds the typed IR from a raw nested definition document
//! (`serde_json::Value`). Used by:
//! - the routing layer (loads the endpoint document at startup)
//! - doc tooling (reads the validated tree)
//!
//! Construction is fail-fast: any malformed entry aborts the whole load
//! and no partial result is returned. Type expressions are NOT parsed
//! here; `FieldDef::field_type` parses on demand.

pub mod error;
pub mod util;
pub mod field_parser;
pub mod endpoint_parser;

pub use error::SchemaError;
pub use field_parser::parse_field;
pub use endpoint_parser::{load_api, parse_endpoint};
