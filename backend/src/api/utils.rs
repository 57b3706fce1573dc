//! API utility functions
//!
//! Helpers shared by the handlers: presence checks, lenient body field
//! decoding and the common "created" response.

use crate::error::AppError;
use crate::store::RecordId;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Body returned by every create endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedResponse {
    /// Generated identifier
    pub id: RecordId,
    /// Human-readable confirmation
    pub message: String,
}

impl CreatedResponse {
    /// Confirmation for a freshly inserted row
    pub fn new(id: RecordId, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }
}

/// Require a non-empty value
///
/// # Arguments
/// * `value` - Field as decoded from the request
/// * `message` - Text sent back with the 400 response
///
/// # Returns
/// * `Ok(String)` - The value
/// * `Err(AppError::Validation)` - Missing, null or empty
pub fn require_present(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(message.to_string()))
}

/// Treat an empty query parameter like a missing one
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// Decode a text column that clients may send as a JSON number
///
/// Use with `#[serde(default, deserialize_with = "lenient_string")]`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Text(s) => s,
    }))
}

/// Decode a row id sent either as a JSON number or a numeric string
///
/// Form `<select>` values arrive as strings. An empty string is `None`.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Int(n)) => Ok(Some(n)),
        Some(Scalar::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Scalar::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid id: {}", s))),
        Some(Scalar::Float(f)) => Err(de::Error::custom(format!("invalid id: {}", f))),
        Some(Scalar::Bool(b)) => Err(de::Error::custom(format!("invalid id: {}", b))),
    }
}
