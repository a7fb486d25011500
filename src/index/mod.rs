// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document indexing: from a source collection to normalized records.
//!
//! - **record**: per-document record builders and the shape check
//! - **document_index**: the mutable index and its snapshot form
//! - **evidence**: what one matcher found inside one record

mod document_index;
mod evidence;
mod record;

pub use document_index::*;
pub use evidence::*;
