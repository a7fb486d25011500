// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction options and the constants behind their defaults.

use crate::types::CollectionMode;
use serde::{Deserialize, Serialize};

/// Weight applied to every field-length norm unless overridden.
pub const DEFAULT_FIELD_NORM_WEIGHT: f64 = 1.0;

/// Significant digits kept when rounding a norm.
pub const DEFAULT_NORM_PRECISION: u32 = 3;

/// Most significant digits a norm can keep; an `f64` holds about 17.
pub const MAX_NORM_PRECISION: u32 = 17;

/// Separator between path segments in a dotted key name and in key ids.
pub const KEY_PATH_DELIMITER: &str = ".";

/// Normalized edit distance above which the default fuzzy scorer gives up.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// How a `DocumentIndex` reads its sources and derives norms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexOptions {
    pub mode: CollectionMode,
    pub field_norm_weight: f64,
    pub norm_precision: u32,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            mode: CollectionMode::Objects,
            field_norm_weight: DEFAULT_FIELD_NORM_WEIGHT,
            norm_precision: DEFAULT_NORM_PRECISION,
        }
    }
}

impl IndexOptions {
    /// Options for a collection of bare strings.
    pub fn strings() -> Self {
        Self::default().with_mode(CollectionMode::Strings)
    }

    /// Options for a collection of objects.
    pub fn objects() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: CollectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_field_norm_weight(mut self, weight: f64) -> Self {
        self.field_norm_weight = weight;
        self
    }

    pub fn with_norm_precision(mut self, precision: u32) -> Self {
        self.norm_precision = precision;
        self
    }

    /// Check the numeric options. Returns a description of the first problem.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.field_norm_weight.is_finite() || self.field_norm_weight <= 0.0 {
            return Err("field norm weight must be a positive finite number");
        }
        if self.norm_precision == 0 {
            return Err("norm precision must keep at least one significant digit");
        }
        if self.norm_precision > MAX_NORM_PRECISION {
            return Err("norm precision cannot exceed 17 significant digits");
        }
        Ok(())
    }
}
