// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query token parsing and operator search.
//!
//! Any string must parse without panicking, and the resulting matcher must
//! honor the score convention against any text. Deterministic operators must
//! also be exact negations of their inverse.

#![no_main]

use arbitrary::Arbitrary;
use fieldsift::{Matcher, TokenMatcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct TokenInput {
    token: String,
    text: String,
}

fuzz_target!(|input: TokenInput| {
    // Cap lengths so the fuzzy scorer cannot time out
    if input.token.len() > 64 || input.text.len() > 256 {
        return;
    }

    let Some(matcher) = TokenMatcher::parse(&input.token) else {
        assert!(input.token.trim().is_empty(), "non-blank token rejected");
        return;
    };

    let result = matcher.search(&input.text);
    assert!((0.0..=1.0).contains(&result.score), "score out of range");

    if let TokenMatcher::Extended(op) = &matcher {
        assert_eq!(result.score, if result.is_match { 0.0 } else { 1.0 });
        let negated = op.negated().search(&input.text);
        assert_ne!(result.is_match, negated.is_match, "inverse disagrees");

        if result.is_match {
            if let Some((start, end)) = result.indices {
                assert!(start <= end && end < input.text.chars().count());
            }
        }
    }
});
