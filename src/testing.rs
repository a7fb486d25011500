//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test suite indexes the same data.

#![doc(hidden)]

use crate::config::IndexOptions;
use crate::index::DocumentIndex;
use crate::keys::KeySpec;
use serde_json::{json, Value};

/// Canonical book collection: nested authors, tag arrays, one numeric field.
pub fn books() -> Vec<Value> {
    vec![
        json!({
            "title": "Old Man's War",
            "author": {"name": "John Scalzi", "tags": [{"value": "American"}]},
            "tags": ["fiction", "military"],
            "year": 2005
        }),
        json!({
            "title": "The Lock Artist",
            "author": {"name": "Steve Hamilton", "tags": [{"value": "English"}]},
            "tags": ["thriller", "mystery"],
            "year": 2010
        }),
        json!({
            "title": "HTML5",
            "author": {"name": "Remy Sharp", "tags": [{"value": "British"}, {"value": "developer"}]},
            "tags": [],
            "year": 2010
        }),
        json!({
            "title": "Right Ho Jeeves",
            "author": {"name": "P.D. Woodhouse"},
            "tags": ["comedy", ["classic", "british"]],
            "year": 1934
        }),
    ]
}

/// Keys over [`books`]: a weighted title, nested author fields, flat tags.
pub fn book_keys() -> Vec<KeySpec> {
    vec![
        KeySpec::weighted("title", 2.0),
        KeySpec::from("author.name"),
        KeySpec::from("author.tags.value"),
        KeySpec::from("tags"),
    ]
}

/// String collection with blank entries at positions 1 and 4.
pub fn fruit() -> Vec<Value> {
    vec![
        json!("Apple"),
        json!(""),
        json!("Orange"),
        json!("Banana"),
        json!("   "),
        json!("Pineapple"),
    ]
}

/// Created index over [`books`] with [`book_keys`].
pub fn book_index() -> DocumentIndex {
    DocumentIndex::build(book_keys(), books(), IndexOptions::objects())
        .expect("fixture keys are valid")
}

/// Created index over [`fruit`].
pub fn fruit_index() -> DocumentIndex {
    DocumentIndex::build(Vec::<KeySpec>::new(), fruit(), IndexOptions::strings())
        .expect("fixture options are valid")
}
