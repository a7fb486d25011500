// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning one query token into the matcher its syntax asks for.

use super::{ExtendedMatch, MatchResult, Matcher, OperatorKind};
use crate::fuzzy::{FuzzyMatch, FuzzyScorer, LevenshteinScorer};

/// Matcher for a single token: a deterministic operator, or fuzzy as fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenMatcher<S = LevenshteinScorer> {
    Extended(ExtendedMatch),
    Fuzzy(FuzzyMatch<S>),
}

impl TokenMatcher {
    /// Parse `token` using the default fuzzy scorer for bare words.
    ///
    /// ```
    /// use fieldsift::extended::{Matcher, OperatorKind, TokenMatcher};
    ///
    /// let matcher = TokenMatcher::parse("!^fire").unwrap();
    /// assert_eq!(matcher.kind(), Some(OperatorKind::InversePrefixExact));
    /// assert!(matcher.search("wildfire").is_match);
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        Self::parse_with(token, LevenshteinScorer::default())
    }
}

impl<S: FuzzyScorer> TokenMatcher<S> {
    /// Parse `token`, handing anything no operator claims to `scorer`.
    ///
    /// Quoted forms are tried across every operator before any single-token
    /// form, so `^"fire fly"` is a quoted prefix rather than a prefix of
    /// `"fire fly"`. Returns `None` for a blank token.
    pub fn parse_with(token: &str, scorer: S) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        for quoted in [true, false] {
            for kind in OperatorKind::PARSE_ORDER {
                if let Some(pattern) = kind.recognize(token, quoted) {
                    return Some(TokenMatcher::Extended(ExtendedMatch::new(kind, pattern)));
                }
            }
        }

        Some(TokenMatcher::Fuzzy(FuzzyMatch::with_scorer(token, scorer)))
    }

    /// Deterministic operator kind, or `None` for fuzzy.
    pub fn kind(&self) -> Option<OperatorKind> {
        match self {
            TokenMatcher::Extended(op) => Some(op.kind),
            TokenMatcher::Fuzzy(_) => None,
        }
    }

    /// Type tag, e.g. `prefix-exact` or `fuzzy`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenMatcher::Extended(op) => op.kind.name(),
            TokenMatcher::Fuzzy(_) => "fuzzy",
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            TokenMatcher::Extended(op) => &op.pattern,
            TokenMatcher::Fuzzy(fuzzy) => &fuzzy.pattern,
        }
    }
}

impl<S: FuzzyScorer> Matcher for TokenMatcher<S> {
    fn search(&self, text: &str) -> MatchResult {
        match self {
            TokenMatcher::Extended(op) => op.search(text),
            TokenMatcher::Fuzzy(fuzzy) => fuzzy.search(text),
        }
    }
}
