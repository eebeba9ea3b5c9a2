//! # Storage Layer
//!
//! The [`EntryStore`] trait abstracts persistence of analyzed entries so the
//! command layer never holds a connection, file handle or session itself.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production file-based storage; all entries live in a
//!   single `data.json` under the store root.
//! - [`memory::InMemoryStore`]: in-memory storage for tests and throwaway
//!   sessions; no persistence.
//!
//! ## Uniqueness
//!
//! The store enforces uniqueness on `id` at `save` time. The write path also
//! pre-checks by raw `value` (`find_by_value`), but the check-then-insert
//! pair is not atomic from the caller's side, so a `Duplicate` raised by
//! `save` and one raised by the pre-check are the same error kind.
//!
//! ## Predicate pushdown
//!
//! `query` evaluates a [`FilterPredicate`] store-side. For every valid
//! predicate it must return exactly the entries that in-memory filtering of
//! `list()` through `FilterPredicate::matches` would return; the
//! `pushdown_equivalence` tests in `memory.rs` and `fs.rs` pin this down.

use crate::error::Result;
use crate::filter::FilterPredicate;
use crate::model::AnalyzedEntry;

pub mod fs;
pub mod memory;

/// Abstract interface for entry storage.
pub trait EntryStore {
    /// Persist a new entry. Fails with `Duplicate` if the id already exists.
    fn save(&mut self, entry: &AnalyzedEntry) -> Result<()>;

    /// Get an entry by id. Fails with `NotFound` on a miss.
    fn find_by_id(&self, id: &str) -> Result<AnalyzedEntry>;

    /// Look up an entry by exact raw value. A miss is not an error; it is
    /// the happy path of the duplicate pre-check.
    fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedEntry>>;

    /// All stored entries.
    fn list(&self) -> Result<Vec<AnalyzedEntry>>;

    /// Delete an entry permanently. Fails with `NotFound` on a miss.
    fn remove(&mut self, id: &str) -> Result<()>;

    /// Evaluate a predicate store-side and return the matching entries.
    fn query(&self, predicate: &FilterPredicate) -> Result<Vec<AnalyzedEntry>>;
}
