// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Output formatting for the fieldsift CLI.
//!
//! Match evidence goes to stdout as one JSON object per line so it pipes into
//! `jq`. The human summary goes to stderr, colored only when stderr is a
//! terminal and `NO_COLOR` is unset.

use fieldsift::{BuildReport, FieldMatch};
use serde::Serialize;
use std::io::IsTerminal;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// One line of `fieldsift match` output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchLine<'a> {
    /// Source position of the record.
    pub position: usize,
    #[serde(flatten)]
    pub evidence: &'a FieldMatch,
}

pub fn match_line(position: usize, evidence: &FieldMatch) -> serde_json::Result<String> {
    serde_json::to_string(&MatchLine { position, evidence })
}

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

fn paint(code: &str, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// `indexed 4 · blank 2 · skipped 0`
pub fn build_summary(report: &BuildReport, colors: bool) -> String {
    let skipped = if report.skipped > 0 {
        paint(YELLOW, &report.skipped.to_string(), colors)
    } else {
        report.skipped.to_string()
    };
    format!(
        "indexed {} {} blank {} {} skipped {}",
        paint(GREEN, &report.indexed.to_string(), colors),
        paint(DIM, "·", colors),
        report.blank,
        paint(DIM, "·", colors),
        skipped
    )
}

/// `3 of 12 fields matched across 4 records`
pub fn match_summary(matched: usize, fields: usize, records: usize, colors: bool) -> String {
    format!(
        "{} of {fields} fields matched across {records} records",
        paint(GREEN, &matched.to_string(), colors)
    )
}
