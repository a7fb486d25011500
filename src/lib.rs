//! Document indexing and extended-query matching.
//!
//! This crate turns a collection of JSON documents into per-field records
//! with length norms, and grades individual strings against query tokens
//! such as `^fire`, `!^fire`, `"dune"` or `fly$`. Combining per-field
//! evidence into a ranking is left to the caller.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │   keys.rs   │────▶│   index/     │────▶│  FieldMatch     │
//! │ (KeySpec,   │     │ (DocumentIdx,│     │  (per-field     │
//! │ KeyRegistry)│     │  create/add) │     │   evidence)     │
//! └─────────────┘     └──────────────┘     └─────────────────┘
//!        │                   │                    ▲
//!        ▼                   ▼                    │
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │ extract.rs  │     │  scoring/    │     │   extended/     │
//! │ (deep get,  │     │ (FieldNorm)  │     │ (TokenMatcher,  │
//! │  flatten)   │     │              │     │  fuzzy seam)    │
//! └─────────────┘     └──────────────┘     └─────────────────┘
//! ```
//!
//! | Module      | Responsibility                                   |
//! |-------------|--------------------------------------------------|
//! | `extract`   | Read values along a path, fanning out on arrays  |
//! | `scoring`   | Field-length norm with a build-scoped cache      |
//! | `keys`      | Key specs, validation, id → ordinal registry     |
//! | `index`     | Records, mutation, snapshots, per-record matching|
//! | `extended`  | Six deterministic operators and token parsing    |
//! | `fuzzy`     | Pluggable fuzzy scorer, Levenshtein by default   |
//! | `contracts` | Debug-build invariant checks                     |
//!
//! # Usage
//!
//! ```
//! use fieldsift::{DocumentIndex, IndexOptions, TokenMatcher};
//! use serde_json::json;
//!
//! let docs = vec![
//!     json!({"title": "firefly", "tags": ["space", "western"]}),
//!     json!({"title": "wildfire"}),
//! ];
//! let index = DocumentIndex::build(["title", "tags"], docs, IndexOptions::objects()).unwrap();
//!
//! let token = TokenMatcher::parse("^fire").unwrap();
//! let evidence = index.match_record(0, &token).unwrap();
//! assert!(evidence[0].is_match());
//! assert!(!index.match_record(1, &token).unwrap()[0].is_match());
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod error;
pub mod extended;
pub mod extract;
pub mod fuzzy;
mod index;
pub mod keys;
pub mod scoring;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::IndexOptions;
pub use error::{IndexError, Result};
pub use extended::{ExtendedMatch, MatchResult, Matcher, OperatorKind, TokenMatcher};
pub use extract::Extracted;
pub use fuzzy::{FuzzyMatch, FuzzyScorer, LevenshteinScorer};
pub use index::{BuildReport, DocumentIndex, FieldMatch};
pub use keys::{create_key, Key, KeyRegistry, KeySpec};
pub use scoring::FieldNorm;
pub use types::{
    CollectionMode, FieldSlot, IndexSnapshot, ObjectRecord, Record, TextRecord, ValueEntry,
};
