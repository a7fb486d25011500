//! End-to-end runs of the `fieldsift` binary.

use super::common::books;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fieldsift(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fieldsift"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fieldsift")
}

fn write_books(dir: &Path) -> String {
    let path = dir.join("books.json");
    fs::write(&path, serde_json::to_string(&books()).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

fn json_lines(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}

#[test]
fn test_index_then_match() {
    let dir = TempDir::new().unwrap();
    let input = write_books(dir.path());
    let snapshot = dir.path().join("index.json");
    let snapshot = snapshot.to_string_lossy();

    let built = fieldsift(&[
        "index", "--input", &input, "--key", "title:2", "--key", "author.name", "--key", "tags",
        "--output", &snapshot,
    ]);
    assert!(built.status.success(), "{}", String::from_utf8_lossy(&built.stderr));
    assert!(String::from_utf8_lossy(&built.stderr).contains("indexed 4"));

    let matched = fieldsift(&["match", "--index", &snapshot, "--token", "^The"]);
    assert!(matched.status.success(), "{}", String::from_utf8_lossy(&matched.stderr));

    let lines = json_lines(&matched);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["position"], 1);
    assert_eq!(lines[0]["keyId"], "title");
    assert_eq!(lines[0]["weight"], 2.0);
    assert_eq!(lines[0]["result"]["indices"], serde_json::json!([0, 2]));
}

#[test]
fn test_index_to_stdout_is_a_snapshot() {
    let dir = TempDir::new().unwrap();
    let input = write_books(dir.path());

    let built = fieldsift(&["index", "-i", &input, "-k", "title"]);
    assert!(built.status.success());

    let snapshot: Value = serde_json::from_slice(&built.stdout).unwrap();
    assert_eq!(snapshot["keys"][0]["id"], "title");
    assert_eq!(snapshot["records"].as_array().unwrap().len(), 4);
}

#[test]
fn test_match_all_prints_misses() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("fruit.json");
    fs::write(&input, r#"["Apple", "", "Banana"]"#).unwrap();
    let snapshot = dir.path().join("fruit-index.json");

    let built = fieldsift(&[
        "index", "-i", &input.to_string_lossy(), "-m", "strings", "-o", &snapshot.to_string_lossy(),
    ]);
    assert!(built.status.success());

    let matched = fieldsift(&[
        "match", "-i", &snapshot.to_string_lossy(), "-m", "strings", "-t", "!^Ban", "--all",
    ]);
    let lines = json_lines(&matched);
    let summary: Vec<(u64, bool)> = lines
        .iter()
        .map(|l| (l["position"].as_u64().unwrap(), l["result"]["isMatch"].as_bool().unwrap()))
        .collect();
    assert_eq!(summary, vec![(0, true), (2, false)]);
}

#[test]
fn test_objects_without_keys_fail() {
    let dir = TempDir::new().unwrap();
    let input = write_books(dir.path());

    let built = fieldsift(&["index", "-i", &input]);
    assert!(!built.status.success());
    assert!(String::from_utf8_lossy(&built.stderr).contains("--key"));
}

#[test]
fn test_wrong_mode_snapshot_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_books(dir.path());
    let snapshot = dir.path().join("index.json");

    fieldsift(&["index", "-i", &input, "-k", "title", "-o", &snapshot.to_string_lossy()]);
    let matched = fieldsift(&[
        "match", "-i", &snapshot.to_string_lossy(), "-m", "strings", "-t", "^The",
    ]);
    assert!(!matched.status.success());
}
