// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance numbers attached to indexed values.
//!
//! Short fields are more specific than long ones: a hit in a three-character
//! title says more than a hit somewhere in a paragraph. The field-length norm
//! captures that as `weight / sqrt(len)`, rounded to a fixed number of
//! significant digits so that the same string always produces the same bits.

mod norm;

pub use norm::*;
