// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typed failures reported to the calling orchestrator.
//!
//! Nothing here is shown to an end user directly. Malformed field values are
//! absorbed during indexing (see `index`), so these variants only surface for
//! problems the caller can act on: a bad key, a document of the wrong shape
//! passed to `add`, or a position that does not exist.

use crate::types::CollectionMode;
use thiserror::Error;

/// Errors produced by key registration, indexing and snapshot handling.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Key specification rejected before it could enter the id space.
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// Index options out of their valid range.
    #[error("invalid index options: {reason}")]
    InvalidOptions { reason: &'static str },

    /// Two key specifications collapsed to the same id.
    #[error("duplicate key id '{id}'")]
    DuplicateKey { id: String },

    /// Document does not fit the declared collection mode.
    #[error("document at {position} is {found}, but the index holds {expected} documents")]
    UnsupportedDocumentShape {
        position: usize,
        expected: CollectionMode,
        found: &'static str,
    },

    /// Record position outside `0..size`.
    #[error("position {position} out of range for index of size {size}")]
    IndexOutOfRange { position: usize, size: usize },

    /// Snapshot parsed but describes an index that cannot exist.
    #[error("invalid snapshot: {reason}")]
    InvalidSnapshot { reason: &'static str },

    /// Snapshot (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;
