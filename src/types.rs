// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a document index.
//!
//! A record is the indexed form of one source document. String collections
//! produce flat `TextRecord`s; object collections produce `ObjectRecord`s whose
//! `fields` map each key id to the value(s) extracted at that key's path.
//!
//! # Invariants
//!
//! - **Record positions** strictly increase across `DocumentIndex::records()`.
//!   Removal shifts every later position down by one.
//!
//! - **ValueEntry::norm** is a pure function of the value's character length,
//!   the configured field-norm weight and the precision. Equal inputs give
//!   bit-identical norms.
//!
//! - **ValueEntry::array_position** is `Some` only when the value came out of
//!   an array, and then holds its ordinal in the flattened sequence.
//!
//! Field values are always strings. Numbers and booleans are stringified at
//! extraction time so every matcher sees the same kind of input.

use crate::keys::Key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// COLLECTION MODE
// =============================================================================

/// Shape of every document in the source collection, declared up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionMode {
    /// Each document is a bare string.
    Strings,
    /// Each document is an object addressed through registered keys.
    #[default]
    Objects,
}

impl fmt::Display for CollectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionMode::Strings => write!(f, "string"),
            CollectionMode::Objects => write!(f, "object"),
        }
    }
}

// =============================================================================
// VALUE ENTRIES
// =============================================================================

/// One indexed string with its length norm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueEntry {
    pub value: String,
    pub norm: f64,
    /// Ordinal within the flattened array this value came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_position: Option<usize>,
}

/// What a single key resolved to for one document.
///
/// Scalar paths give `Single`; any path that crossed an array gives `Many`,
/// even when the array held zero or one usable strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldSlot {
    Single(ValueEntry),
    Many(Vec<ValueEntry>),
}

impl FieldSlot {
    /// Iterate the entries in extraction order.
    pub fn entries(&self) -> impl Iterator<Item = &ValueEntry> {
        let slice: &[ValueEntry] = match self {
            FieldSlot::Single(entry) => std::slice::from_ref(entry),
            FieldSlot::Many(entries) => entries,
        };
        slice.iter()
    }

    pub fn len(&self) -> usize {
        match self {
            FieldSlot::Single(_) => 1,
            FieldSlot::Many(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// Indexed form of a string document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
    pub value: String,
    pub position: usize,
    pub norm: f64,
}

/// Indexed form of an object document.
///
/// `fields` is sparse: keys whose path resolved to nothing have no entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub position: usize,
    pub fields: BTreeMap<String, FieldSlot>,
}

/// One record per indexed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Text(TextRecord),
    Object(ObjectRecord),
}

impl Record {
    /// Position of the source document this record was built from.
    #[inline]
    pub fn position(&self) -> usize {
        match self {
            Record::Text(record) => record.position,
            Record::Object(record) => record.position,
        }
    }

    #[inline]
    pub(crate) fn position_mut(&mut self) -> &mut usize {
        match self {
            Record::Text(record) => &mut record.position,
            Record::Object(record) => &mut record.position,
        }
    }

    pub fn as_text(&self) -> Option<&TextRecord> {
        match self {
            Record::Text(record) => Some(record),
            Record::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRecord> {
        match self {
            Record::Object(record) => Some(record),
            Record::Text(_) => None,
        }
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Exported form of an index: enough to rebuild it without re-extracting.
///
/// Custom key accessors are not part of the snapshot. Keys restored from a
/// snapshot resolve through their path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub keys: Vec<Key>,
    pub records: Vec<Record>,
}
