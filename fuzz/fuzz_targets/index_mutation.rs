// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for interleaved add/remove on a string index.
//!
//! Positions must strictly increase after every operation, and snapshots
//! taken at the end must restore to the same records.

#![no_main]

use arbitrary::Arbitrary;
use fieldsift::{DocumentIndex, IndexOptions};
use libfuzzer_sys::fuzz_target;
use serde_json::json;

#[derive(Debug, Arbitrary)]
enum Op {
    Add(String),
    Remove(u8),
}

fuzz_target!(|ops: Vec<Op>| {
    let Ok(mut index) = DocumentIndex::new(IndexOptions::strings()) else {
        return;
    };

    for op in ops.into_iter().take(64) {
        match op {
            Op::Add(text) => {
                let added = index.add(&json!(text)).expect("strings fit a string index");
                assert_eq!(added.is_none(), text.trim().is_empty());
            }
            Op::Remove(k) => {
                let k = usize::from(k);
                let size = index.size();
                assert_eq!(index.remove_at(k).is_ok(), k < size);
            }
        }

        let positions: Vec<usize> = index.records().iter().map(|r| r.position()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    let restored = DocumentIndex::from_json(
        &index.to_json().expect("snapshot serializes"),
        IndexOptions::strings(),
    )
    .expect("snapshot restores");
    assert_eq!(restored.records(), index.records());
});
