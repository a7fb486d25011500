// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The mutable document index.
//!
//! Lifecycle: configure keys and sources, `create()` once, then `add` and
//! `remove_at` incrementally. A snapshot taken with `serialize()` restores
//! through `deserialize()` without re-extracting or re-normalizing anything.
//!
//! # Positions
//!
//! Every record carries the position of the document it came from. `create`
//! uses the source index offset past any records already present, so skipped
//! blank strings leave gaps. `add` appends
//! one past the last position. `remove_at` shifts everything after the removed
//! record down by one. Positions strictly increase at all times.

use super::evidence::FieldMatch;
use super::record::{build_object_record, build_text_record, shape_of, Shape};
use crate::config::IndexOptions;
use crate::contracts;
use crate::error::{IndexError, Result};
use crate::extended::Matcher;
use crate::keys::{KeyRegistry, KeySpec};
use crate::scoring::FieldNorm;
use crate::types::{CollectionMode, FieldSlot, IndexSnapshot, ObjectRecord, Record};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Counts from one `create()` pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Documents that became records.
    pub indexed: usize,
    /// Null or whitespace-only string documents.
    pub blank: usize,
    /// Documents whose shape did not match the collection mode.
    pub skipped: usize,
}

/// Records for a document collection, ready for matching.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    options: IndexOptions,
    keys: KeyRegistry,
    sources: Arc<[Value]>,
    records: Vec<Record>,
    norm: FieldNorm,
    created: bool,
}

impl DocumentIndex {
    /// Empty index with no keys and no sources.
    ///
    /// # Errors
    ///
    /// `InvalidOptions` if the norm weight or precision is out of range.
    pub fn new(options: IndexOptions) -> Result<Self> {
        options
            .validate()
            .map_err(|reason| IndexError::InvalidOptions { reason })?;

        Ok(Self {
            norm: FieldNorm::new(options.field_norm_weight, options.norm_precision),
            options,
            keys: KeyRegistry::default(),
            sources: Arc::from(Vec::<Value>::new()),
            records: Vec::new(),
            created: false,
        })
    }

    /// Register keys, attach sources and build in one call.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldsift::{DocumentIndex, IndexOptions};
    /// use serde_json::json;
    ///
    /// let docs = vec![
    ///     json!({"title": "Dune", "tags": ["desert", "spice"]}),
    ///     json!({"title": "Solaris"}),
    /// ];
    /// let index = DocumentIndex::build(["title", "tags"], docs, IndexOptions::objects()).unwrap();
    /// assert_eq!(index.size(), 2);
    /// ```
    pub fn build<I, S>(keys: I, sources: impl Into<Arc<[Value]>>, options: IndexOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<KeySpec>,
    {
        let mut index = Self::new(options)?;
        index.set_keys(keys)?;
        index.set_sources(sources);
        index.create();
        Ok(index)
    }

    // =========================================================================
    // CONFIGURATION
    // =========================================================================

    /// Replace the key set. Existing records keep the fields they were built with.
    ///
    /// On error the previous key set stays in place.
    pub fn set_keys<I, S>(&mut self, specs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<KeySpec>,
    {
        self.keys = KeyRegistry::new(specs)?;
        Ok(())
    }

    /// Replace the source collection. Does not build.
    pub fn set_sources(&mut self, sources: impl Into<Arc<[Value]>>) {
        self.sources = sources.into();
    }

    pub fn sources(&self) -> &Arc<[Value]> {
        &self.sources
    }

    // =========================================================================
    // BUILD
    // =========================================================================

    /// Build records for every source document.
    ///
    /// Does nothing when the index was already created or there are no
    /// sources. Records already added are kept and the new ones follow them.
    pub fn create(&mut self) -> BuildReport {
        let mut report = BuildReport::default();
        if self.created || self.sources.is_empty() {
            return report;
        }
        self.created = true;

        let mode = self.options.mode;
        let base = self.next_position();
        let sources = Arc::clone(&self.sources);
        self.records.reserve(sources.len());

        for (offset, document) in sources.iter().enumerate() {
            let position = base + offset;
            match shape_of(document, mode) {
                Shape::Mismatch(found) => {
                    warn!(position, %mode, found, "skipping document with unexpected shape");
                    report.skipped += 1;
                }
                Shape::Blank => report.blank += 1,
                Shape::Fits => {
                    if let Some(record) = self.build_record(document, position) {
                        self.records.push(record);
                        report.indexed += 1;
                    }
                }
            }
        }

        info!(
            %mode,
            indexed = report.indexed,
            blank = report.blank,
            skipped = report.skipped,
            cached_norms = self.norm.cache_len(),
            "index created"
        );
        self.norm.clear();
        contracts::check_positions_increasing(&self.records);
        report
    }

    fn build_record(&mut self, document: &Value, position: usize) -> Option<Record> {
        let record = match self.options.mode {
            CollectionMode::Strings => {
                Record::Text(build_text_record(&mut self.norm, document, position)?)
            }
            CollectionMode::Objects => Record::Object(build_object_record(
                &self.keys,
                &mut self.norm,
                document,
                position,
            )),
        };
        contracts::check_record_norms(&record);
        Some(record)
    }

    /// Position the next appended record receives.
    fn next_position(&self) -> usize {
        self.records.last().map_or(0, |record| record.position() + 1)
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Append one document and return its position.
    ///
    /// The new position is one past the last record's position, not `size()`.
    /// The two differ once `create` has skipped blanks, and using `size()`
    /// there would collide with an existing position.
    ///
    /// `Ok(None)` means the document was blank and nothing was added.
    ///
    /// # Errors
    ///
    /// `UnsupportedDocumentShape` when the document does not fit the mode.
    pub fn add(&mut self, document: &Value) -> Result<Option<usize>> {
        let position = self.next_position();
        match shape_of(document, self.options.mode) {
            Shape::Mismatch(found) => Err(IndexError::UnsupportedDocumentShape {
                position,
                expected: self.options.mode,
                found,
            }),
            Shape::Blank => Ok(None),
            Shape::Fits => {
                let record = self.build_record(document, position);
                self.norm.clear();
                Ok(record.map(|record| {
                    self.records.push(record);
                    position
                }))
            }
        }
    }

    /// Remove the `idx`-th record and renumber the ones after it.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `idx >= size()`.
    pub fn remove_at(&mut self, idx: usize) -> Result<Record> {
        if idx >= self.records.len() {
            return Err(IndexError::IndexOutOfRange {
                position: idx,
                size: self.records.len(),
            });
        }

        let removed = self.records.remove(idx);
        for record in &mut self.records[idx..] {
            *record.position_mut() -= 1;
        }
        debug!(
            idx,
            position = removed.position(),
            renumbered = self.records.len() - idx,
            "record removed"
        );
        contracts::check_positions_increasing(&self.records);
        Ok(removed)
    }

    // =========================================================================
    // ACCESS
    // =========================================================================

    pub fn get(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn keys(&self) -> &KeyRegistry {
        &self.keys
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Slot stored for `key_id`, or `None` if the key is unknown or absent.
    pub fn value_for_key<'a>(&self, record: &'a ObjectRecord, key_id: &str) -> Option<&'a FieldSlot> {
        if !self.keys.contains(key_id) {
            return None;
        }
        record.fields.get(key_id)
    }

    // =========================================================================
    // MATCHING
    // =========================================================================

    /// Run `matcher` against every value of the `idx`-th record.
    ///
    /// Object fields are visited in key registration order, then in array
    /// order within a field. Misses are reported too: inverse operators and
    /// the caller's scorer both need to see them.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `idx >= size()`.
    pub fn match_record<M: Matcher + ?Sized>(
        &self,
        idx: usize,
        matcher: &M,
    ) -> Result<Vec<FieldMatch>> {
        let record = self.get(idx).ok_or(IndexError::IndexOutOfRange {
            position: idx,
            size: self.records.len(),
        })?;

        let matches = match record {
            Record::Text(text) => vec![FieldMatch {
                key_id: None,
                array_position: None,
                norm: text.norm,
                weight: 1.0,
                result: matcher.search(&text.value),
            }],
            Record::Object(object) => self
                .keys
                .keys()
                .iter()
                .filter_map(|key| object.fields.get(&key.id).map(|slot| (key, slot)))
                .flat_map(|(key, slot)| {
                    slot.entries().map(move |entry| FieldMatch {
                        key_id: Some(key.id.clone()),
                        array_position: entry.array_position,
                        norm: entry.norm,
                        weight: key.weight,
                        result: matcher.search(&entry.value),
                    })
                })
                .collect(),
        };
        Ok(matches)
    }

    // =========================================================================
    // SNAPSHOTS
    // =========================================================================

    pub fn serialize(&self) -> IndexSnapshot {
        IndexSnapshot {
            keys: self.keys.keys().to_vec(),
            records: self.records.clone(),
        }
    }

    /// Rebuild an index from a snapshot. The result counts as created.
    ///
    /// # Errors
    ///
    /// - `InvalidOptions` / `InvalidKey` / `DuplicateKey` as for construction
    /// - `UnsupportedDocumentShape` if a record does not fit `options.mode`
    /// - `InvalidSnapshot` for out-of-order positions, bad norms, or fields
    ///   under unregistered keys
    pub fn deserialize(snapshot: IndexSnapshot, options: IndexOptions) -> Result<Self> {
        let mut index = Self::new(options)?;
        index.keys = KeyRegistry::from_keys(snapshot.keys)?;
        index.validate_records(&snapshot.records)?;
        index.records = snapshot.records;
        index.created = true;
        Ok(index)
    }

    fn validate_records(&self, records: &[Record]) -> Result<()> {
        let mode = self.options.mode;
        let mut previous: Option<usize> = None;

        for record in records {
            let position = record.position();
            if previous.is_some_and(|p| p >= position) {
                return Err(IndexError::InvalidSnapshot {
                    reason: "record positions must strictly increase",
                });
            }
            previous = Some(position);

            match (mode, record) {
                (CollectionMode::Strings, Record::Text(text)) => {
                    if !valid_norm(text.norm) {
                        return Err(IndexError::InvalidSnapshot {
                            reason: "norm must be a positive finite number",
                        });
                    }
                }
                (CollectionMode::Objects, Record::Object(object)) => {
                    for (key_id, slot) in &object.fields {
                        if !self.keys.contains(key_id) {
                            return Err(IndexError::InvalidSnapshot {
                                reason: "record references an unregistered key",
                            });
                        }
                        if !slot.entries().all(|entry| valid_norm(entry.norm)) {
                            return Err(IndexError::InvalidSnapshot {
                                reason: "norm must be a positive finite number",
                            });
                        }
                    }
                }
                (_, Record::Text(_)) => return Err(mismatched(position, mode, "a text record")),
                (_, Record::Object(_)) => {
                    return Err(mismatched(position, mode, "an object record"))
                }
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    pub fn from_json(json: &str, options: IndexOptions) -> Result<Self> {
        let snapshot: IndexSnapshot = serde_json::from_str(json)?;
        Self::deserialize(snapshot, options)
    }
}

fn valid_norm(norm: f64) -> bool {
    norm.is_finite() && norm > 0.0
}

fn mismatched(position: usize, expected: CollectionMode, found: &'static str) -> IndexError {
    IndexError::UnsupportedDocumentShape {
        position,
        expected,
        found,
    }
}
