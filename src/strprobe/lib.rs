//! # Strprobe Architecture
//!
//! Strprobe is a **UI-agnostic string-analysis library**: it computes a fixed
//! structural profile for arbitrary text values, stores each result keyed by
//! its content hash, and answers filter queries — structured or free-text —
//! over the stored properties. The CLI binary is just one client of the
//! library.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the store        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: add, get, delete, query, inspect         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract EntryStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Core Engines
//!
//! Four leaf modules hold all the non-trivial logic, and all four are pure
//! functions over their arguments — no internal state, no I/O, freely
//! parallelizable:
//!
//! - [`analyzer`]: string → [`model::PropertyRecord`] (plus the content hash
//!   that doubles as the entry id)
//! - [`filter`]: the AND-composed [`filter::FilterPredicate`], its structured
//!   construction/validation, and its evaluation against a record
//! - [`translate`]: the free-text → predicate heuristic, emitting exactly the
//!   shape [`filter`] consumes
//! - [`model`]: the persisted entry and property types
//!
//! Identity is content-addressed: the id of an entry is the SHA-256 of its
//! value, and the store rejects re-insertion of a value that already exists.
//!
//! ## Error Handling
//!
//! One closed taxonomy in [`error::StrprobeError`]; callers branch on kinds,
//! never on strings. Empty query results are a success with zero matches,
//! never `NotFound` — that kind is reserved for single-entity lookups.

pub mod analyzer;
pub mod api;
pub mod commands;
pub mod error;
pub mod filter;
pub mod model;
pub mod store;
pub mod translate;
