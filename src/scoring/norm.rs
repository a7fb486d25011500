// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field-length norm with a build-scoped cache.
//!
//! The cache only exists to skip recomputation for repeated values while an
//! index is being built. `DocumentIndex::create` clears it when it finishes;
//! keeping it alive would grow without bound on a diverse corpus.

use crate::config::{DEFAULT_FIELD_NORM_WEIGHT, DEFAULT_NORM_PRECISION};
use std::collections::HashMap;

/// Round `value` to `digits` significant digits.
///
/// Zero and non-finite values pass through untouched. So does any value whose
/// rounding scale falls outside `f64` (very small values, or more digits than
/// an `f64` holds), or whose rounded result would overflow.
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let exponent = (i64::from(digits) - 1 - i64::from(magnitude))
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    // Divide by an exact power of ten rather than multiply by an inexact 0.1.
    let scale = 10f64.powi(exponent.saturating_abs());
    if !scale.is_finite() {
        return value;
    }
    let rounded = if exponent >= 0 {
        (value * scale).round() / scale
    } else {
        (value / scale).round() * scale
    };
    if rounded.is_finite() && rounded != 0.0 {
        rounded
    } else {
        value
    }
}

/// Compute `weight / sqrt(char_len)` with zero length treated as one.
///
/// The empty-string case is canonical: its norm is exactly `weight` (after
/// rounding), never infinity.
#[inline]
pub fn length_norm(text: &str, weight: f64, precision: u32) -> f64 {
    let len = text.chars().count().max(1);
    round_significant(weight * (1.0 / (len as f64).sqrt()), precision)
}

/// Memoizing norm generator for one index build.
#[derive(Debug, Clone)]
pub struct FieldNorm {
    weight: f64,
    precision: u32,
    cache: HashMap<String, f64>,
}

impl Default for FieldNorm {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_NORM_WEIGHT, DEFAULT_NORM_PRECISION)
    }
}

impl FieldNorm {
    pub fn new(weight: f64, precision: u32) -> Self {
        Self {
            weight,
            precision,
            cache: HashMap::new(),
        }
    }

    /// Norm for `text`, computed once per distinct string until [`clear`](Self::clear).
    pub fn get(&mut self, text: &str) -> f64 {
        if let Some(&norm) = self.cache.get(text) {
            return norm;
        }
        let norm = length_norm(text, self.weight, self.precision);
        self.cache.insert(text.to_owned(), norm);
        norm
    }

    /// Drop every cached norm.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of distinct strings currently cached.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
