//! apidef IR — typed endpoint definitions.
//!
//! Data structures shared between:
//! - the document parser (builds the tree from raw definitions)
//! - routing / doc tooling downstream (reads the validated tree)
//!
//! Three layers:
//! 1. Types    — the type-expression grammar (`FieldType`)
//! 2. Field    — one named field schema node (`FieldDef`)
//! 3. Endpoint — one documented endpoint and the full set (`EndpointDef`, `ApiSet`)

pub mod types;
pub mod field;
pub mod endpoint;

pub use types::*;
pub use field::*;
pub use endpoint::*;
