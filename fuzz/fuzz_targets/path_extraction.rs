// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for path extraction over arbitrary JSON.
//!
//! The extractor walks untrusted documents of any depth. It must never panic,
//! and every value it returns for a non-empty path must be a string or an
//! object leaf.

#![no_main]

use arbitrary::Arbitrary;
use fieldsift::extract::get;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

#[derive(Debug, Arbitrary)]
struct ExtractInput {
    json: String,
    path: Vec<String>,
}

fuzz_target!(|input: ExtractInput| {
    if input.path.len() > 8 {
        return;
    }
    let Ok(document) = serde_json::from_str::<Value>(&input.json) else {
        return;
    };

    if let Some(extracted) = get(&document, &input.path) {
        for value in extracted.into_values() {
            assert!(
                matches!(value, Value::String(_) | Value::Object(_)),
                "unexpected leaf {value:?}"
            );
        }
    }
});
