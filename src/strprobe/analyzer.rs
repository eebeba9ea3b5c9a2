//! Property computation. Everything here is a pure function of the input
//! string; storage never feeds back into analysis.

use crate::error::{Result, StrprobeError};
use crate::model::PropertyRecord;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Computes the full property record for a value.
///
/// The raw input is used as-is for `length`, `unique_characters` and the
/// frequency map; only `word_count` and the palindrome check look at a
/// trimmed/normalized form. Errors with [`StrprobeError::EmptyValue`] when
/// the input trims to nothing.
pub fn analyze(raw: &str) -> Result<PropertyRecord> {
    if raw.trim().is_empty() {
        return Err(StrprobeError::EmptyValue);
    }

    let mut character_frequency_map = BTreeMap::new();
    for c in raw.chars() {
        *character_frequency_map.entry(c).or_insert(0usize) += 1;
    }

    Ok(PropertyRecord {
        length: raw.chars().count(),
        is_palindrome: is_palindrome(raw),
        unique_characters: character_frequency_map.len(),
        word_count: raw.split_whitespace().count(),
        content_hash: content_hash(raw),
        character_frequency_map,
    })
}

/// Analyzes a JSON value, rejecting anything that is not a string.
///
/// The distinction between "not a string" and "an empty string" only exists
/// at an untyped boundary, so it lives here rather than in [`analyze`].
pub fn analyze_json(value: &Value) -> Result<PropertyRecord> {
    match value {
        Value::String(s) => analyze(s),
        other => Err(StrprobeError::InvalidType(json_type_name(other).to_string())),
    }
}

/// SHA-256 of the raw input bytes, lowercase hex. Used both as a reported
/// property and as the entry identifier.
pub fn content_hash(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    format!("{:x}", hasher.finalize())
}

// Normalized comparison: lowercase, ASCII alphanumerics only. The raw-reversal
// variant is deliberately not used; swapping it back in means changing only
// this function.
fn is_palindrome(raw: &str) -> bool {
    let normalized: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    normalized.iter().eq(normalized.iter().rev())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
