use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrprobeError {
    #[error("Value must be a string, got {0}")]
    InvalidType(String),

    #[error("Value must not be empty")]
    EmptyValue,

    #[error("An entry with this value already exists: {0}")]
    Duplicate(String),

    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Invalid filter parameter `{field}`: {reason}")]
    InvalidFilterParameter { field: &'static str, reason: String },

    #[error("Could not interpret query: {0:?}")]
    UnparseableQuery(String),

    #[error("Conflicting filters: {0}")]
    ConflictingFilters(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, StrprobeError>;
