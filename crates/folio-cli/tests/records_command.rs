#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]
//! Records and split commands over local files and stdin

mod common;

use common::{RESUME, folio_cmd_with_config};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let resume = dir.path().join("resume.md");
    fs::write(&resume, RESUME).expect("write resume");
    (dir, resume)
}

#[test]
fn test_records_json_from_file() {
    let (dir, resume) = setup();
    let output = folio_cmd_with_config(&dir.path().join("config.toml"))
        .args(["records", resume.to_str().unwrap(), "--format", "json"])
        .output()
        .expect("run folio");
    assert!(output.status.success());

    let records: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let records = records.as_array().expect("array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], 0);
    assert_eq!(records[0]["title"], "ProofKit");
    assert_eq!(records[0]["link"], "https://example.com/proofkit");
    assert_eq!(records[0]["type"], "ZK Protocol");
    assert_eq!(records[0]["tags"], serde_json::json!(["ZK", "Circom"]));
    assert_eq!(records[0]["contributions"], "Built the circuit.\nShipped the demo.");
    assert_eq!(records[0]["expanded"], false);
    assert_eq!(records[1]["link"], "#");
    assert_eq!(records[1]["contributions"], "Wrote docs.");
}

#[test]
fn test_records_jsonl_from_stdin_with_expansion() {
    let (dir, _) = setup();
    let output = folio_cmd_with_config(&dir.path().join("config.toml"))
        .args(["records", "-", "--format", "jsonl", "--expand", "1"])
        .write_stdin(RESUME)
        .output()
        .expect("run folio");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("JSON line"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["expanded"], false);
    assert_eq!(lines[1]["expanded"], true);
}

#[test]
fn test_records_end_of_block_contributions() {
    let (dir, resume) = setup();
    let output = folio_cmd_with_config(&dir.path().join("config.toml"))
        .args(["records", resume.to_str().unwrap(), "-f", "json"])
        .args(["--contributions", "end-of-block"])
        .output()
        .expect("run folio");
    let records: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[1]["contributions"], "Wrote docs.\n**Images:** shot.png");
}

#[test]
fn test_records_text_output() {
    let (dir, resume) = setup();
    folio_cmd_with_config(&dir.path().join("config.toml"))
        .args(["records", resume.to_str().unwrap(), "--format", "text", "--expand-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ProofKit"))
        .stdout(predicate::str::contains("Shipped the demo."))
        .stdout(predicate::str::contains("#ZK"));
}

#[test]
fn test_no_marker_means_no_records() {
    let (dir, _) = setup();
    folio_cmd_with_config(&dir.path().join("config.toml"))
        .args(["records", "-", "--format", "json"])
        .write_stdin("# Only prose\n### Not a record\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_split_inclusive_keeps_marker() {
    let (dir, resume) = setup();
    let output = folio_cmd_with_config(&dir.path().join("config.toml"))
        .args(["split", resume.to_str().unwrap(), "--inclusive", "--format", "json"])
        .output()
        .expect("run folio");
    let view: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["found"], true);
    assert_eq!(view["mode"], "inclusive");
    assert_eq!(view["preamble"], "# Max Zhang\nECE student.\n\n");
    assert!(view["body"].as_str().unwrap().starts_with("## Projects\n"));
}

#[test]
fn test_split_reports_trailing_marker_as_found() {
    let (dir, _) = setup();
    let output = folio_cmd_with_config(&dir.path().join("config.toml"))
        .args(["split", "-", "--format", "json", "--verbose"])
        .write_stdin("# Max\n## Projects")
        .output()
        .expect("run folio");
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("not found"));

    let view: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["found"], true);
    assert_eq!(view["preamble"], "# Max\n");
    assert_eq!(view["body"], "");
}

#[test]
fn test_missing_file_fails() {
    let (dir, _) = setup();
    folio_cmd_with_config(&dir.path().join("config.toml"))
        .args(["records", "does-not-exist.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.md"));
}
