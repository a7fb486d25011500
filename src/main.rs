use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;
use std::fs;
use std::io::{self, BufWriter, Write};

use fieldsift::{
    CollectionMode, DocumentIndex, IndexOptions, KeySpec, LevenshteinScorer, TokenMatcher,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Index {
            input,
            keys,
            mode,
            output,
        } => run_index(&input, keys, mode.into(), output.as_deref()),
        Commands::Match {
            index,
            token,
            mode,
            threshold,
            all,
        } => run_match(&index, &token, mode.into(), threshold, all),
    }
}

fn run_index(
    input: &str,
    keys: Vec<KeySpec>,
    mode: CollectionMode,
    output: Option<&str>,
) -> Result<()> {
    let raw = fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    let documents: Vec<Value> =
        serde_json::from_str(&raw).with_context(|| format!("{input} is not a JSON array"))?;

    if mode == CollectionMode::Objects && keys.is_empty() {
        bail!("object collections need at least one --key");
    }

    let mut index = DocumentIndex::new(IndexOptions::default().with_mode(mode))?;
    index.set_keys(keys)?;
    index.set_sources(documents);
    let report = index.create();
    eprintln!("{}", display::build_summary(&report, display::use_colors()));

    let json = index.to_json()?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {path}"))?;
            info!(path, records = index.size(), "snapshot written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_match(path: &str, token: &str, mode: CollectionMode, threshold: f64, all: bool) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let index = DocumentIndex::from_json(&raw, IndexOptions::default().with_mode(mode))
        .with_context(|| format!("loading snapshot {path}"))?;

    let Some(matcher) = TokenMatcher::parse_with(token, LevenshteinScorer::new(threshold)) else {
        bail!("query token is blank");
    };
    debug!(kind = matcher.name(), pattern = matcher.pattern(), "token parsed");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let (mut fields, mut matched) = (0, 0);

    for (idx, record) in index.records().iter().enumerate() {
        for evidence in index.match_record(idx, &matcher)? {
            fields += 1;
            if evidence.is_match() {
                matched += 1;
            } else if !all {
                continue;
            }
            writeln!(out, "{}", display::match_line(record.position(), &evidence)?)?;
        }
    }
    out.flush()?;

    eprintln!(
        "{}",
        display::match_summary(matched, fields, index.size(), display::use_colors())
    );
    Ok(())
}
