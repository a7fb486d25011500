// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: the pluggable scorer behind bare query tokens.
//!
//! The deterministic operators in `extended` only ever answer 0 or 1. A token
//! no operator claims (`fire`, `=fire`) goes to a [`FuzzyScorer`] instead,
//! which may return anything in between. The default scorer is a bounded Levenshtein
//! distance normalized by the longer string's length.

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::*;
