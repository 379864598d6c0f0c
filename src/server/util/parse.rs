use serde_json::Value;

use crate::{
    model::api::{BODY_EMPTY, INVALID_JSON},
    server::error::AppError,
};

/// Parses a raw request body as JSON, rejecting empty bodies.
///
/// The body counts as empty when it has no content, only whitespace, or holds a falsy
/// JSON value: `null`, `false`, `0`, `""`, `[]` or `{}`.
///
/// # Arguments
/// - `body` - The raw request body bytes
///
/// # Returns
/// - `Ok(Value)` - The parsed, non-empty JSON value
/// - `Err(AppError::BadRequest(BODY_EMPTY))` - The body is empty
/// - `Err(AppError::BadRequest(INVALID_JSON))` - The body is not valid JSON
pub fn parse_json_body(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest(BODY_EMPTY.to_string()));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|_| AppError::BadRequest(INVALID_JSON.to_string()))?;

    if is_falsy(&value) {
        return Err(AppError::BadRequest(BODY_EMPTY.to_string()));
    }

    Ok(value)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
