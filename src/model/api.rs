use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Key under which errors not tied to a single field are reported.
pub const GENERAL: &str = "general";

/// The directory service could not be reached or rejected the request.
pub const REQUEST_FAILED: &str = "REQUEST_FAILED";
/// The request body was missing or empty.
pub const BODY_EMPTY: &str = "BODY_EMPTY";
/// The request body was not valid JSON.
pub const INVALID_JSON: &str = "INVALID_JSON";
/// Something went wrong on our side.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Formats the not-found message for a resource, e.g. `"Player not found"`.
pub fn not_found(resource: &str) -> String {
    format!("{} not found", resource)
}

/// Envelope wrapping every successful response payload.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DataDto<T> {
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Envelope for every error response.
///
/// Maps a field name, or `"general"`, to the messages raised for it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorDto {
    /// Error envelope with a single general message.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            errors: BTreeMap::from([(GENERAL.to_string(), vec![message.into()])]),
        }
    }
}
