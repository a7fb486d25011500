// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::levenshtein::bounded_distance;
use crate::config::DEFAULT_FUZZY_THRESHOLD;
use crate::contracts;
use crate::extended::{span, MatchResult, Matcher};

/// Anything that can grade how closely `text` resembles `pattern`.
///
/// Implementations follow the same contract as the deterministic operators:
/// score 0 is a perfect hit, score 1 is no match, and `indices` (when present)
/// are inclusive character offsets into `text`.
pub trait FuzzyScorer {
    fn score(&self, pattern: &str, text: &str) -> MatchResult;
}

/// Default scorer: edit distance over the longer length.
///
/// `threshold` is the largest normalized distance still counted as a match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevenshteinScorer {
    pub threshold: f64,
}

impl Default for LevenshteinScorer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl LevenshteinScorer {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }
}

impl FuzzyScorer for LevenshteinScorer {
    fn score(&self, pattern: &str, text: &str) -> MatchResult {
        let text_len = text.chars().count();
        let longest = pattern.chars().count().max(text_len);
        if longest == 0 {
            return MatchResult::hit(None);
        }

        let max_edits = (self.threshold * longest as f64).floor() as usize;
        match bounded_distance(pattern, text, max_edits) {
            Some(distance) => MatchResult {
                is_match: true,
                score: distance as f64 / longest as f64,
                indices: span(0, text_len),
            },
            None => MatchResult::miss(None),
        }
    }
}

/// A bare query token paired with the scorer that grades it.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch<S = LevenshteinScorer> {
    pub pattern: String,
    pub scorer: S,
}

impl FuzzyMatch {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_scorer(pattern, LevenshteinScorer::default())
    }
}

impl<S: FuzzyScorer> FuzzyMatch<S> {
    pub fn with_scorer(pattern: impl Into<String>, scorer: S) -> Self {
        Self {
            pattern: pattern.into(),
            scorer,
        }
    }
}

impl<S: FuzzyScorer> Matcher for FuzzyMatch<S> {
    fn search(&self, text: &str) -> MatchResult {
        let result = self.scorer.score(&self.pattern, text);
        contracts::check_score_range(&result);
        result
    }
}
