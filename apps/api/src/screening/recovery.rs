//! Response-JSON Recoverer: pulls the JSON object out of a free-form model reply.
//!
//! Models often wrap the object in prose or markdown fences. The primary
//! heuristic takes the greedy span from the first `{` to the last `}`. When that
//! span is not valid JSON (two objects, or unbalanced braces inside strings), the
//! first complete JSON value starting at the first `{` is tried instead.

use serde_json::{Map, Value};
use thiserror::Error;

/// In-band error text returned to clients when no object can be recovered.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse valid JSON from response.";

#[derive(Debug, Error, PartialEq)]
pub enum RecoveryError {
    #[error("no JSON object found in response")]
    NoObject,

    #[error("invalid JSON object in response: {0}")]
    Invalid(String),
}

/// Returns the first JSON object embedded in `text`, unchanged.
pub fn recover_json_object(text: &str) -> Result<Map<String, Value>, RecoveryError> {
    let start = text.find('{').ok_or(RecoveryError::NoObject)?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or(RecoveryError::NoObject)?;

    match serde_json::from_str::<Map<String, Value>>(&text[start..=end]) {
        Ok(object) => Ok(object),
        Err(greedy_err) => {
            first_object(&text[start..]).ok_or_else(|| RecoveryError::Invalid(greedy_err.to_string()))
        }
    }
}

fn first_object(text: &str) -> Option<Map<String, Value>> {
    serde_json::Deserializer::from_str(text)
        .into_iter::<Map<String, Value>>()
        .next()?
        .ok()
}
