// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fieldsift command-line interface.
//!
//! Two subcommands: `index` builds a snapshot from a JSON array of documents,
//! and `match` runs one query token against every record of a snapshot.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use fieldsift::{CollectionMode, KeySpec};

#[derive(Parser)]
#[command(
    name = "fieldsift",
    about = "Document indexing and extended-query matching",
    version
)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default filter directive when RUST_LOG is unset.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index snapshot from a JSON array of documents
    Index {
        /// JSON file holding an array of documents
        #[arg(short, long)]
        input: String,

        /// Searchable key as `path` or `path:weight` (repeatable)
        #[arg(short, long = "key", value_parser = parse_key_arg)]
        keys: Vec<KeySpec>,

        /// Shape of every document in the input
        #[arg(short, long, value_enum, default_value_t = ModeArg::Objects)]
        mode: ModeArg,

        /// Where to write the snapshot (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run one query token against every record of a snapshot
    Match {
        /// Snapshot written by `fieldsift index`
        #[arg(short, long)]
        index: String,

        /// Query token, e.g. `^fire`, `!^"wild fire"`, `"dune"`, `fly$`
        #[arg(short, long, allow_hyphen_values = true)]
        token: String,

        /// Collection mode the snapshot was built with
        #[arg(short, long, value_enum, default_value_t = ModeArg::Objects)]
        mode: ModeArg,

        /// Largest normalized edit distance accepted by fuzzy tokens
        #[arg(long, default_value_t = fieldsift::config::DEFAULT_FUZZY_THRESHOLD)]
        threshold: f64,

        /// Also print fields that did not match
        #[arg(long)]
        all: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Strings,
    Objects,
}

impl From<ModeArg> for CollectionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Strings => CollectionMode::Strings,
            ModeArg::Objects => CollectionMode::Objects,
        }
    }
}

/// Parse `path` or `path:weight`. A suffix that is not a number stays part
/// of the path.
pub fn parse_key_arg(arg: &str) -> Result<KeySpec, String> {
    if arg.trim().is_empty() {
        return Err("key must not be empty".to_string());
    }
    if let Some((path, weight)) = arg.rsplit_once(':') {
        if let Ok(weight) = weight.parse::<f64>() {
            return Ok(KeySpec::weighted(path, weight));
        }
    }
    Ok(KeySpec::from(arg))
}
