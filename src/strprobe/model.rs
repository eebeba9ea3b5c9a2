use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The computed structural profile of an analyzed string.
///
/// Immutable once computed: identical input bytes always yield an identical
/// record, so two records for the same value compare equal field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Character count of the raw (un-trimmed) input.
    pub length: usize,
    /// Palindrome check over the lowercased, ASCII-alphanumeric-only form.
    pub is_palindrome: bool,
    /// Distinct characters in the raw input, case- and whitespace-sensitive.
    pub unique_characters: usize,
    /// Whitespace-delimited tokens after trimming; 0 for all-whitespace input.
    pub word_count: usize,
    /// SHA-256 of the raw input bytes, lowercase hex. Doubles as the entry id.
    pub content_hash: String,
    // BTreeMap so serialization order is deterministic
    pub character_frequency_map: BTreeMap<char, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedEntry {
    pub id: String,
    pub value: String,
    pub properties: PropertyRecord,
    pub created_at: DateTime<Utc>,
}

impl AnalyzedEntry {
    /// Builds an entry for a value and its computed properties.
    /// The id is the content hash, so re-analyzing the same value always
    /// produces the same id.
    pub fn new(value: String, properties: PropertyRecord) -> Self {
        Self {
            id: properties.content_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }
}
