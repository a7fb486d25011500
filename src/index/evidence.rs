// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::extended::MatchResult;
use serde::Serialize;

/// Result of one matcher against one indexed value.
///
/// The crate stops here: combining evidence across fields and tokens into a
/// document score belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    /// Key the value came from; `None` in a string collection.
    pub key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_position: Option<usize>,
    pub norm: f64,
    /// Weight of the key, 1 for string collections.
    pub weight: f64,
    pub result: MatchResult,
}

impl FieldMatch {
    #[inline]
    pub fn is_match(&self) -> bool {
        self.result.is_match
    }
}
