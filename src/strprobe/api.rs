//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! strprobe operations, regardless of the client in front of it.
//!
//! The facade dispatches, nothing more: business logic lives in
//! `commands/*.rs`, persistence behind [`EntryStore`]. It never touches
//! stdout/stderr and returns structured `Result<CmdResult>` values only.
//!
//! `StrprobeApi<S: EntryStore>` is generic over the storage backend:
//! `StrprobeApi<FileStore>` in production, `StrprobeApi<InMemoryStore>` in
//! tests — so every layer above the store can be exercised without a
//! filesystem.

use crate::commands;
use crate::error::Result;
use crate::filter::FilterParams;
use crate::store::EntryStore;

/// The main API facade for strprobe operations.
pub struct StrprobeApi<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> StrprobeApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Analyze and persist a value; fails with `Duplicate` if the exact
    /// value is already stored.
    pub fn add(&mut self, value: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, value)
    }

    /// Analyze a value without persisting it.
    pub fn inspect(&self, value: &str) -> Result<commands::CmdResult> {
        commands::inspect::run(value)
    }

    pub fn get(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    /// Structured filter query. An empty `FilterParams` lists everything.
    pub fn query(&self, params: &FilterParams) -> Result<commands::CmdResult> {
        commands::query::run_structured(&self.store, params)
    }

    /// Free-text query, translated into the same predicate shape the
    /// structured path uses.
    pub fn query_natural(&self, text: &str) -> Result<commands::CmdResult> {
        commands::query::run_natural(&self.store, text)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
