//! Index properties.
//!
//! - `size()` after `create()` counts exactly the indexable documents
//! - `remove_at(k)` shifts later positions by one and leaves earlier ones alone
//! - `deserialize(serialize(index))` reproduces keys and records
//! - Norms are deterministic and never infinite

use super::common::{assert_index_well_formed, positions, strings_index};
use fieldsift::scoring::{length_norm, FieldNorm};
use fieldsift::{DocumentIndex, IndexOptions, KeySpec};
use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// STRATEGIES
// ============================================================================

/// String documents, roughly one in four blank.
fn string_doc_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::string::string_regex("[a-z]{1,6}( [a-z]{1,6}){0,2}").unwrap(),
        1 => prop::sample::select(vec![String::new(), " ".to_string(), "\t ".to_string()]),
    ]
}

/// Book-like objects with an optional nested author and a tag array.
fn object_doc_strategy() -> impl Strategy<Value = Value> {
    (
        "[a-z]{1,8}",
        prop::option::of("[a-z]{1,8}"),
        prop::collection::vec("[a-z]{0,5}", 0..4),
    )
        .prop_map(|(title, author, tags)| match author {
            Some(name) => json!({"title": title, "author": {"name": name}, "tags": tags}),
            None => json!({"title": title, "tags": tags}),
        })
}

fn object_index(docs: Vec<Value>) -> DocumentIndex {
    DocumentIndex::build(["title", "author.name", "tags"], docs, IndexOptions::objects())
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: every object document becomes exactly one record.
    #[test]
    fn prop_object_size_after_create(docs in prop::collection::vec(object_doc_strategy(), 0..12)) {
        let index = object_index(docs.clone());
        prop_assert_eq!(index.size(), docs.len());
        prop_assert_eq!(positions(&index), (0..docs.len()).collect::<Vec<_>>());
        assert_index_well_formed(&index);
    }

    /// Property: string collections index the non-blank documents at their
    /// source positions.
    #[test]
    fn prop_string_size_counts_non_blank(docs in prop::collection::vec(string_doc_strategy(), 0..16)) {
        let values: Vec<Value> = docs.iter().map(|d| json!(d)).collect();
        let index = strings_index(values);

        let expected: Vec<usize> = docs
            .iter()
            .enumerate()
            .filter(|(_, d)| !d.trim().is_empty())
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(positions(&index), expected);
        assert_index_well_formed(&index);
    }

    /// Property: removal renumbers exactly the records after the removed one.
    #[test]
    fn prop_removal_invariant(
        docs in prop::collection::vec(string_doc_strategy(), 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let values: Vec<Value> = docs.iter().map(|d| json!(d)).collect();
        let mut index = strings_index(values);
        prop_assume!(!index.is_empty());

        let k = pick.index(index.size());
        let before = positions(&index);
        let removed = index.remove_at(k).unwrap();
        let after = positions(&index);

        prop_assert_eq!(removed.position(), before[k]);
        prop_assert_eq!(after.len(), before.len() - 1);
        prop_assert_eq!(&after[..k], &before[..k]);
        for (new, old) in after[k..].iter().zip(&before[k + 1..]) {
            prop_assert_eq!(*new, old - 1);
        }
        assert_index_well_formed(&index);
    }

    /// Property: snapshots round-trip through JSON.
    #[test]
    fn prop_snapshot_round_trip(docs in prop::collection::vec(object_doc_strategy(), 0..8)) {
        let index = object_index(docs);
        let json = index.to_json().unwrap();
        let restored = DocumentIndex::from_json(&json, IndexOptions::objects()).unwrap();

        prop_assert_eq!(restored.serialize(), index.serialize());
        prop_assert!(restored.is_created());
    }

    /// Property: add after create continues one past the last position.
    #[test]
    fn prop_add_appends(
        docs in prop::collection::vec(string_doc_strategy(), 0..10),
        extra in "[a-z]{1,6}",
    ) {
        let values: Vec<Value> = docs.iter().map(|d| json!(d)).collect();
        let mut index = strings_index(values);
        let expected = index.records().last().map_or(0, |r| r.position() + 1);

        prop_assert_eq!(index.add(&json!(extra)).unwrap(), Some(expected));
        assert_index_well_formed(&index);
    }

    /// Property: norms are deterministic, cached or not.
    #[test]
    fn prop_norm_deterministic(text in ".{0,20}", weight in 0.1f64..10.0) {
        let mut norm = FieldNorm::new(weight, 3);
        let first = norm.get(&text);
        let second = norm.get(&text);
        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(first.to_bits(), length_norm(&text, weight, 3).to_bits());
        prop_assert!(first.is_finite() && first > 0.0);
    }
}

#[test]
fn test_empty_string_norm_is_weight() {
    let mut norm = FieldNorm::new(1.5, 3);
    assert_eq!(norm.get(""), 1.5);
}

#[test]
fn test_strings_index_with_keys_ignores_them() {
    let index = DocumentIndex::build(
        vec![KeySpec::from("title")],
        vec![json!("Dune")],
        IndexOptions::strings(),
    )
    .unwrap();
    assert_eq!(index.size(), 1);
    assert!(index.get(0).unwrap().as_text().is_some());
}
