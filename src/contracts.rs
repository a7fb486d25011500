//! Runtime contracts for the index and the matchers.
//!
//! Debug-mode assertions for the invariants the rest of the crate relies on.
//! They compile to nothing in release builds and fail loudly during
//! development and testing.
//!
//! | Contract                      | Invariant                                      |
//! |-------------------------------|------------------------------------------------|
//! | `check_positions_increasing`  | record positions strictly increase             |
//! | `check_norm_valid`            | norms are finite and positive                  |
//! | `check_binary_score`          | deterministic operators score exactly 0 or 1   |
//! | `check_score_range`           | every score lies in `[0, 1]`                   |
//! | `check_indices_within`        | a match's character range lies inside the text |
//!
//! # Usage
//!
//! ```ignore
//! use fieldsift::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_positions_increasing(index.records());
//! ```

use crate::extended::MatchResult;
use crate::types::{FieldSlot, Record};

// ============================================================================
// RECORD CONTRACTS
// ============================================================================

/// Check that record positions strictly increase.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair out of order.
#[inline]
pub fn check_positions_increasing(records: &[Record]) {
    for i in 1..records.len() {
        debug_assert!(
            records[i - 1].position() < records[i].position(),
            "Contract violation: positions not increasing - \
             records[{}].position = {} >= records[{}].position = {}",
            i - 1,
            records[i - 1].position(),
            i,
            records[i].position()
        );
    }
}

/// Check that a norm can be used as a multiplier.
#[inline]
pub fn check_norm_valid(norm: f64) {
    debug_assert!(
        norm.is_finite() && norm > 0.0,
        "Contract violation: norm {} is not a positive finite number",
        norm
    );
}

/// Check every norm stored in a record.
pub fn check_record_norms(record: &Record) {
    match record {
        Record::Text(text) => check_norm_valid(text.norm),
        Record::Object(object) => {
            for entry in object.fields.values().flat_map(FieldSlot::entries) {
                check_norm_valid(entry.norm);
            }
        }
    }
}

// ============================================================================
// MATCHER CONTRACTS
// ============================================================================

/// Deterministic operators answer 0 on a match and 1 otherwise.
#[inline]
pub fn check_binary_score(result: &MatchResult) {
    let expected = if result.is_match { 0.0 } else { 1.0 };
    debug_assert!(
        result.score == expected,
        "Contract violation: binary operator returned score {} with is_match = {}",
        result.score,
        result.is_match
    );
}

/// Scores live in `[0, 1]`.
#[inline]
pub fn check_score_range(result: &MatchResult) {
    debug_assert!(
        (0.0..=1.0).contains(&result.score),
        "Contract violation: score {} outside [0, 1]",
        result.score
    );
}

/// A successful match points at characters that exist in the text.
#[inline]
pub fn check_indices_within(result: &MatchResult, text_len: usize) {
    if !result.is_match {
        return;
    }
    if let Some((start, end)) = result.indices {
        debug_assert!(
            start <= end && end < text_len,
            "Contract violation: indices [{}, {}] outside text of {} chars",
            start,
            end,
            text_len
        );
    }
}
