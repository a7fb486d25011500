//! Query tokens run across whole indexes, the way a caller combines them.

use super::common::{book_index, fruit_index};
use fieldsift::{DocumentIndex, FieldMatch, Matcher, TokenMatcher};

/// Positions of records where every token matches at least one field, or
/// for inverse tokens, where no field fails.
fn matching_positions(index: &DocumentIndex, query: &str) -> Vec<usize> {
    let tokens: Vec<TokenMatcher> = query.split_whitespace().filter_map(TokenMatcher::parse).collect();

    (0..index.size())
        .filter(|&idx| {
            tokens.iter().all(|token| {
                let evidence = index.match_record(idx, token).unwrap();
                let inverse = token.kind().is_some_and(|kind| kind.is_inverse());
                if inverse {
                    evidence.iter().all(FieldMatch::is_match)
                } else {
                    evidence.iter().any(FieldMatch::is_match)
                }
            })
        })
        .map(|idx| index.get(idx).unwrap().position())
        .collect()
}

#[test]
fn test_prefix_query() {
    let index = book_index();
    assert_eq!(matching_positions(&index, "^The"), vec![1]);
    assert_eq!(matching_positions(&index, "^Old"), vec![0]);
}

#[test]
fn test_inverse_prefix_excludes_records() {
    let index = book_index();
    assert_eq!(matching_positions(&index, "!^Old"), vec![1, 2, 3]);
}

#[test]
fn test_combined_tokens() {
    let index = book_index();
    assert_eq!(matching_positions(&index, "^Right british$"), vec![3]);
    assert_eq!(matching_positions(&index, r#""HTML5" !^Remy"#), Vec::<usize>::new());
}

#[test]
fn test_exact_tokens_over_fields() {
    let index = book_index();
    assert_eq!(matching_positions(&index, r#""HTML5""#), vec![2]);
    assert_eq!(matching_positions(&index, r#""HTML""#), Vec::<usize>::new());
    assert_eq!(matching_positions(&index, r#"!"HTML5""#), vec![0, 1, 3]);
}

#[test]
fn test_suffix_over_nested_array_values() {
    let index = book_index();
    assert_eq!(matching_positions(&index, "ish$"), vec![1, 2, 3]);
}

#[test]
fn test_fuzzy_token_tolerates_typos() {
    let index = fruit_index();
    assert_eq!(matching_positions(&index, "Banan"), vec![3]);
    assert_eq!(matching_positions(&index, "Pineaple"), vec![5]);
}

#[test]
fn test_evidence_per_field_with_dyn_matchers() {
    let index = book_index();
    let tokens: Vec<Box<dyn Matcher>> = vec![
        Box::new(TokenMatcher::parse("^mys").unwrap()),
        Box::new(TokenMatcher::parse("Hamilton").unwrap()),
    ];

    let hits: Vec<(String, Option<usize>)> = tokens
        .iter()
        .flat_map(|token| index.match_record(1, token.as_ref()).unwrap())
        .filter(FieldMatch::is_match)
        .map(|m| (m.key_id.unwrap_or_default(), m.array_position))
        .collect();

    assert!(hits.contains(&("tags".to_string(), Some(1))));
    assert!(hits.iter().any(|(key, _)| key == "author.name"));
}
