// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning one source document into one record.

use crate::extract::{stringify, Extracted};
use crate::keys::{Key, KeyRegistry};
use crate::scoring::FieldNorm;
use crate::types::{CollectionMode, FieldSlot, ObjectRecord, TextRecord, ValueEntry};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// How a document relates to the declared collection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// Indexable.
    Fits,
    /// Right shape, nothing to index (null or whitespace-only string).
    Blank,
    /// Wrong shape; carries a description of what was found.
    Mismatch(&'static str),
}

pub(crate) fn shape_of(document: &Value, mode: CollectionMode) -> Shape {
    match (mode, document) {
        (CollectionMode::Strings, Value::Null) => Shape::Blank,
        (CollectionMode::Strings, Value::String(text)) if is_blank(text) => Shape::Blank,
        (CollectionMode::Strings, Value::String(_)) => Shape::Fits,
        (CollectionMode::Objects, Value::Object(_)) => Shape::Fits,
        _ => Shape::Mismatch(describe(document)),
    }
}

/// Article-prefixed name of a JSON value's type, for error messages.
pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[inline]
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Record for a string document. The caller has already checked the shape.
pub(crate) fn build_text_record(
    norm: &mut FieldNorm,
    document: &Value,
    position: usize,
) -> Option<TextRecord> {
    let value = document.as_str().filter(|text| !is_blank(text))?;
    Some(TextRecord {
        value: value.to_owned(),
        position,
        norm: norm.get(value),
    })
}

/// Record for an object document, one field slot per resolvable key.
pub(crate) fn build_object_record(
    keys: &KeyRegistry,
    norm: &mut FieldNorm,
    document: &Value,
    position: usize,
) -> ObjectRecord {
    let mut fields = BTreeMap::new();

    for key in keys.keys() {
        let Some(extracted) = key.resolve(document) else {
            continue;
        };
        let slot = match extracted {
            Extracted::Single(Value::Array(items)) => {
                Some(many_slot(key, norm, flatten(items), position))
            }
            Extracted::Single(value) => single_slot(key, norm, &value, position),
            Extracted::Many(values) => Some(many_slot(key, norm, flatten(values), position)),
        };
        if let Some(slot) = slot {
            fields.insert(key.id.clone(), slot);
        }
    }

    ObjectRecord { position, fields }
}

fn single_slot(
    key: &Key,
    norm: &mut FieldNorm,
    value: &Value,
    position: usize,
) -> Option<FieldSlot> {
    let text = indexable_text(key, value, position)?;
    Some(FieldSlot::Single(ValueEntry {
        norm: norm.get(&text),
        value: text,
        array_position: None,
    }))
}

fn many_slot(key: &Key, norm: &mut FieldNorm, values: Vec<Value>, position: usize) -> FieldSlot {
    let entries = values
        .iter()
        .enumerate()
        .filter_map(|(array_position, value)| {
            let text = indexable_text(key, value, position)?;
            Some(ValueEntry {
                norm: norm.get(&text),
                value: text,
                array_position: Some(array_position),
            })
        })
        .collect();
    FieldSlot::Many(entries)
}

fn indexable_text(key: &Key, value: &Value, position: usize) -> Option<String> {
    let Some(text) = stringify(value) else {
        debug!(
            key = %key.id,
            position,
            found = describe(value),
            "skipping non-string field value"
        );
        return None;
    };
    (!is_blank(&text)).then_some(text)
}

/// Depth-first flattening for accessor output that returns nested arrays.
fn flatten(values: Vec<Value>) -> Vec<Value> {
    let mut flat = Vec::with_capacity(values.len());
    let mut stack: Vec<Value> = values.into_iter().rev().collect();
    while let Some(value) = stack.pop() {
        match value {
            Value::Array(items) => stack.extend(items.into_iter().rev()),
            other => flat.push(other),
        }
    }
    flat
}
