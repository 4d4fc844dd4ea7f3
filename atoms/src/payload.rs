use photogroups_shared::{ApiError, Record};
use serde_json::Value;

/// Parses a request body that must be a JSON object.
pub fn parse_object(body: &[u8]) -> Result<Record, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(ApiError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

/// Lays client fields over server fields. Client keys win on collision.
pub fn overlay(mut base: Record, fields: Record) -> Record {
    base.extend(fields);
    base
}

/// The merged record must still carry a usable partition key.
pub fn require_key(record: &Record, key_name: &str) -> Result<(), ApiError> {
    match record.get(key_name) {
        Some(Value::String(key)) if !key.is_empty() => Ok(()),
        _ => Err(ApiError::BadRequest(format!(
            "{} must be a non-empty string",
            key_name
        ))),
    }
}
