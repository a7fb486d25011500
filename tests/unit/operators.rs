//! Extended operators and token parsing through the public API.

use fieldsift::{
    ExtendedMatch, FuzzyMatch, LevenshteinScorer, MatchResult, Matcher, OperatorKind, TokenMatcher,
};

fn search(token: &str, text: &str) -> MatchResult {
    TokenMatcher::parse(token).expect("token parses").search(text)
}

// ============================================================================
// OPERATOR TABLE
// ============================================================================

#[test]
fn test_prefix_exact_reference_cases() {
    let op = ExtendedMatch::prefix("fire");
    assert_eq!(
        op.search("firefly"),
        MatchResult {
            is_match: true,
            score: 0.0,
            indices: Some((0, 3))
        }
    );
    let miss = op.search("wildfire");
    assert!(!miss.is_match);
    assert_eq!(miss.score, 1.0);
}

#[test]
fn test_every_operator_against_one_text() {
    let text = "firefly";
    let cases = [
        (r#""firefly""#, true, Some((0, 6))),
        (r#""fire""#, false, Some((0, 6))),
        (r#"!"fire""#, true, Some((0, 6))),
        (r#"!"firefly""#, false, Some((0, 6))),
        ("^fire", true, Some((0, 3))),
        ("!^fire", false, Some((0, 6))),
        ("!^wild", true, Some((0, 6))),
        ("fly$", true, Some((4, 6))),
        ("!fly$", false, Some((0, 6))),
        ("!fire$", true, Some((0, 6))),
    ];

    for (token, is_match, indices) in cases {
        let result = search(token, text);
        assert_eq!(result.is_match, is_match, "{token}");
        assert_eq!(result.score, if is_match { 0.0 } else { 1.0 }, "{token}");
        assert_eq!(result.indices, indices, "{token}");
    }
}

#[test]
fn test_quoted_tokens_keep_whitespace() {
    assert!(search(r#"^"old man""#, "old man's war").is_match);
    assert!(!search(r#"!^"old man""#, "old man's war").is_match);
    assert!(search(r#""man's war"$"#, "old man's war").is_match);
    assert!(search(r#""old man's war""#, "old man's war").is_match);
    assert!(search("'old man's war'", "old man's war").is_match);
}

/// Every row of the token table, through both recognizers, with one text the
/// operator accepts and one it rejects.
#[test]
fn test_token_syntax_table() {
    // (kind, single token, quoted token, [hits], [misses]); the first text
    // of each pair goes with the single token, the second with the quoted one.
    let rows = [
        (
            OperatorKind::Exact,
            r#""dune""#,
            "'old man'",
            ["dune", "old man"],
            ["dunes", "old man's war"],
        ),
        (
            OperatorKind::InverseExact,
            r#"!"dune""#,
            "!'old man'",
            ["dunes", "old man's war"],
            ["dune", "old man"],
        ),
        (
            OperatorKind::PrefixExact,
            "^dune",
            r#"^"old man""#,
            ["dunes", "old man's war"],
            ["a dune", "an old man"],
        ),
        (
            OperatorKind::InversePrefixExact,
            "!^dune",
            r#"!^"old man""#,
            ["a dune", "an old man"],
            ["dunes", "old man's war"],
        ),
        (
            OperatorKind::SuffixExact,
            "dune$",
            r#""old man"$"#,
            ["a dune", "an old man"],
            ["dunes", "old man's war"],
        ),
        (
            OperatorKind::InverseSuffixExact,
            "!dune$",
            r#"!"old man"$"#,
            ["dunes", "old man's war"],
            ["a dune", "an old man"],
        ),
    ];

    for (kind, single, quoted, hits, misses) in rows {
        assert_eq!(kind.recognize(single, false), Some("dune"), "{kind} single");
        assert_eq!(kind.recognize(quoted, true), Some("old man"), "{kind} quoted");

        for (i, token) in [single, quoted].into_iter().enumerate() {
            let matcher = TokenMatcher::parse(token).expect("token parses");
            assert_eq!(matcher.kind(), Some(kind), "{token}");

            let hit = matcher.search(hits[i]);
            assert!(hit.is_match, "{token} vs {}", hits[i]);
            assert_eq!(hit.score, 0.0, "{token}");

            let miss = matcher.search(misses[i]);
            assert!(!miss.is_match, "{token} vs {}", misses[i]);
            assert_eq!(miss.score, 1.0, "{token}");
        }
    }
}

#[test]
fn test_quoted_exact_is_not_fuzzy() {
    let matcher = TokenMatcher::parse(r#""dune""#).expect("token parses");
    assert_eq!(matcher.name(), "exact");
    assert!(!matcher.search("dunes").is_match);
}

#[test]
fn test_matching_is_case_sensitive() {
    assert!(!search("^fire", "Firefly").is_match);
    assert!(search("!^fire", "Firefly").is_match);
}

#[test]
fn test_negated_operators_are_inverse_kinds() {
    for kind in OperatorKind::ALL {
        let op = ExtendedMatch::new(kind, "ab");
        assert_eq!(op.negated().kind, kind.inverse());
        for text in ["ab", "abc", "cab", "", "x"] {
            assert_ne!(op.search(text).is_match, op.negated().search(text).is_match);
        }
    }
}

// ============================================================================
// TOKEN PARSING
// ============================================================================

#[test]
fn test_to_token_parses_back() {
    for kind in OperatorKind::ALL {
        for pattern in ["fire", "wild fire"] {
            let op = ExtendedMatch::new(kind, pattern);
            let parsed = TokenMatcher::parse(&op.to_token()).unwrap();
            assert_eq!(parsed, TokenMatcher::Extended(op.clone()), "{}", op.to_token());
        }
    }
}

#[test]
fn test_parse_trims_surrounding_whitespace() {
    let matcher = TokenMatcher::parse("  ^fire  ").unwrap();
    assert_eq!(matcher.kind(), Some(OperatorKind::PrefixExact));
    assert_eq!(matcher.pattern(), "fire");
}

#[test]
fn test_bare_word_is_fuzzy() {
    let matcher = TokenMatcher::parse("firefly").unwrap();
    assert_eq!(matcher.kind(), None);
    assert_eq!(matcher.name(), "fuzzy");
    assert!(matcher.search("firefli").is_match);
    assert!(!matcher.search("moth").is_match);
}

#[test]
fn test_parse_with_custom_threshold() {
    let strict = TokenMatcher::parse_with("firefly", LevenshteinScorer::new(0.0)).unwrap();
    assert!(!strict.search("firefli").is_match);
    assert!(strict.search("firefly").is_match);
}

#[test]
fn test_fuzzy_scores_stay_in_range() {
    let fuzzy = FuzzyMatch::new("spice");
    for text in ["spice", "spicy", "slice", "dune", "", "spices and more"] {
        let result = fuzzy.search(text);
        assert!((0.0..=1.0).contains(&result.score), "{text}: {}", result.score);
        assert_eq!(result.is_match, result.score < 1.0, "{text}");
    }
}
