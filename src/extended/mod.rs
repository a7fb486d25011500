// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Extended query operators: one matcher per token syntax.
//!
//! The external tokenizer splits a query into tokens; each token names its
//! operator through a small prefix/suffix syntax:
//!
//! | Token        | Operator               | Matches text that...        |
//! |--------------|------------------------|-----------------------------|
//! | `"fire"`     | exact                  | equals `fire`               |
//! | `!"fire"`    | inverse-exact          | does not equal `fire`       |
//! | `^fire`      | prefix-exact           | starts with `fire`          |
//! | `!^fire`     | inverse-prefix-exact   | does not start with `fire`  |
//! | `fire$`      | suffix-exact           | ends with `fire`            |
//! | `!fire$`     | inverse-suffix-exact   | does not end with `fire`    |
//! | `fire`       | fuzzy                  | resembles `fire`            |
//!
//! Each form also has a quoted variant (`'fire fly'`, `!'fire fly'`,
//! `^"fire fly"`, `!^"fire fly"`, `"fire fly"$`, `!"fire fly"$`) so that
//! patterns with whitespace survive tokenization.
//!
//! # Score convention
//!
//! 0 is the best possible match and 1 is no match. The six deterministic
//! operators only ever produce exactly 0 or 1, which lets them sit next to a
//! fuzzy scorer without rescaling.

mod operator;
mod token;

pub use operator::*;
pub use token::*;

use serde::Serialize;

/// Outcome of running one matcher against one string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub is_match: bool,
    /// 0.0 = best, 1.0 = no match.
    pub score: f64,
    /// Inclusive character range `[start, end]`; `None` when the range is empty.
    pub indices: Option<(usize, usize)>,
}

impl MatchResult {
    /// Binary result: score 0 on a match, 1 otherwise.
    #[inline]
    pub fn binary(is_match: bool, indices: Option<(usize, usize)>) -> Self {
        Self {
            is_match,
            score: if is_match { 0.0 } else { 1.0 },
            indices,
        }
    }

    #[inline]
    pub fn hit(indices: Option<(usize, usize)>) -> Self {
        Self::binary(true, indices)
    }

    #[inline]
    pub fn miss(indices: Option<(usize, usize)>) -> Self {
        Self::binary(false, indices)
    }
}

/// Shared capability of every operator: grade one string.
pub trait Matcher {
    fn search(&self, text: &str) -> MatchResult;
}

/// Inclusive range covering characters `start..end`, or `None` if empty.
#[inline]
pub(crate) fn span(start: usize, end: usize) -> Option<(usize, usize)> {
    (end > start).then(|| (start, end - 1))
}
