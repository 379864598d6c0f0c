//! Schema contracts for request validation and response serialization.
//!
//! Each resource has a schema object that validates raw JSON input into a field-level
//! error map, loads validated input into operation parameters and dumps domain models
//! into DTOs.

pub mod player;

use std::collections::BTreeMap;

/// Field name, or `"_schema"` for errors about the input as a whole, mapped to the
/// messages raised for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Key for errors that concern the whole input rather than a single field.
pub const SCHEMA_KEY: &str = "_schema";
