//! E2E tests for `crumbs show` and `crumbs stats` over snapshot files.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "parents":  [["A", "B"], ["C", "B"], ["A", "Ghost"]],
    "siblings": [["A", "D"]],
    "children": [["B", "A"], ["E", "A"]],
    "unresolved": { "A": { "Ghost": 1 } }
}"#;

fn crumbs_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crumbs"));
    cmd.env("CRUMBS_LOG", "error");
    cmd.env_remove("FORMAT");
    cmd
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

fn show_json(dir: &TempDir, focal: &str, extra: &[&str]) -> Value {
    let snapshot = write_file(dir.path(), "graphs.json", SNAPSHOT);
    let output = crumbs_cmd()
        .args(["show", focal, "--format", "json", "--snapshot"])
        .arg(&snapshot)
        .args(extra)
        .output()
        .expect("show should not crash");
    assert!(
        output.status.success(),
        "show failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

fn targets(square: &Value, side: &str) -> Vec<String> {
    square[side]
        .as_array()
        .expect("array")
        .iter()
        .map(|i| i["target"].as_str().expect("target").to_string())
        .collect()
}

#[test]
fn show_json_lists_real_and_implied_relations() {
    let dir = TempDir::new().expect("tempdir");
    let json = show_json(&dir, "A", &[]);

    assert_eq!(json["focal"], "A");
    assert_eq!(json["view"], "matrix");

    let squares = json["squares"].as_array().expect("squares");
    assert_eq!(squares.len(), 3);

    let parents = &squares[0];
    assert_eq!(parents["kind"], "parent");
    assert_eq!(parents["label"], "Parent");
    assert_eq!(targets(parents, "real"), vec!["B", "Ghost"]);
    assert_eq!(targets(parents, "implied"), vec!["B", "E"]);
    assert_eq!(parents["real"][1]["resolved"], false);

    let siblings = &squares[1];
    assert_eq!(targets(siblings, "real"), vec!["D"]);
    assert_eq!(targets(siblings, "implied"), vec!["C"]);
}

#[test]
fn implied_children_of_shared_parent() {
    let dir = TempDir::new().expect("tempdir");
    let json = show_json(&dir, "B", &[]);
    let children = &json["squares"][2];
    assert_eq!(targets(children, "real"), vec!["A"]);
    let mut implied = targets(children, "implied");
    implied.sort();
    assert_eq!(implied, vec!["A", "C"]);
}

#[test]
fn unknown_note_yields_empty_squares() {
    let dir = TempDir::new().expect("tempdir");
    let json = show_json(&dir, "Nobody", &[]);
    for square in json["squares"].as_array().expect("squares") {
        assert!(square["real"].as_array().expect("real").is_empty());
        assert!(square["implied"].as_array().expect("implied").is_empty());
    }
}

#[test]
fn config_labels_and_default_view_apply() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_file(
        dir.path(),
        "config.toml",
        "[panel]\nparent_field_name = \"up\"\nshow_name_or_type = true\ndefault_view = \"list\"\n",
    );
    let config_arg = config.to_str().expect("utf8 path");

    let json = show_json(&dir, "A", &["--config", config_arg]);
    assert_eq!(json["view"], "list");
    assert_eq!(json["squares"][0]["label"], "up");

    let toggled = show_json(&dir, "A", &["--config", config_arg, "--toggle"]);
    assert_eq!(toggled["view"], "matrix");
}

#[test]
fn show_text_output_is_tab_separated() {
    let dir = TempDir::new().expect("tempdir");
    let snapshot = write_file(dir.path(), "graphs.json", SNAPSHOT);
    crumbs_cmd()
        .args(["show", "A", "--format", "text", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("parent\treal\tGhost\tunresolved"))
        .stdout(predicate::str::contains("sibling\timplied\tC\tresolved"));
}

#[test]
fn show_pretty_list_view() {
    let dir = TempDir::new().expect("tempdir");
    let snapshot = write_file(dir.path(), "graphs.json", SNAPSHOT);
    crumbs_cmd()
        .env("FORMAT", "pretty")
        .args(["show", "A", "--view", "list", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("  - Ghost?"))
        .stdout(predicate::str::contains("  - C (implied)"))
        .stdout(predicate::str::contains("(toggle: Matrix)"));
}

#[test]
fn missing_snapshot_fails_with_suggestion() {
    let dir = TempDir::new().expect("tempdir");
    crumbs_cmd()
        .args(["show", "A", "--format", "text", "--snapshot"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E2003]: cannot read snapshot"))
        .stderr(predicate::str::contains("suggestion:"));
}

#[test]
fn missing_snapshot_json_error_carries_code() {
    let dir = TempDir::new().expect("tempdir");
    let output = crumbs_cmd()
        .args(["show", "A", "--format", "json", "--snapshot"])
        .arg(dir.path().join("missing.json"))
        .output()
        .expect("show should not crash");
    assert!(!output.status.success());

    let err: Value = serde_json::from_slice(&output.stderr).expect("JSON error on stderr");
    assert_eq!(err["error"]["code"], "E2003");
    assert!(err["error"]["suggestion"].as_str().expect("suggestion").contains("--snapshot"));
}

#[test]
fn missing_config_file_is_a_read_error() {
    let dir = TempDir::new().expect("tempdir");
    let snapshot = write_file(dir.path(), "graphs.json", SNAPSHOT);
    crumbs_cmd()
        .args(["show", "A", "--format", "text", "--snapshot"])
        .arg(&snapshot)
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E2004]"))
        .stderr(predicate::str::contains("suggestion: Check the --config path"));
}

#[test]
fn malformed_config_file_is_a_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let snapshot = write_file(dir.path(), "graphs.json", SNAPSHOT);
    let config = write_file(dir.path(), "config.toml", "[panel\n");
    crumbs_cmd()
        .args(["show", "A", "--format", "text", "--snapshot"])
        .arg(&snapshot)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E2001]"));
}

#[test]
fn malformed_snapshot_reports_error_code() {
    let dir = TempDir::new().expect("tempdir");
    let snapshot = write_file(dir.path(), "graphs.json", r#"{"parents": [["A"]]}"#);
    crumbs_cmd()
        .args(["show", "A", "--json", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2002"));
}

#[test]
fn empty_focal_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let snapshot = write_file(dir.path(), "graphs.json", SNAPSHOT);
    crumbs_cmd()
        .args(["show", "", "--format", "text", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("focal node name must not be empty"));
}

#[test]
fn stats_reports_counts_and_hashes() {
    let dir = TempDir::new().expect("tempdir");
    let snapshot = write_file(dir.path(), "graphs.json", SNAPSHOT);
    let output = crumbs_cmd()
        .args(["stats", "--format", "json", "--snapshot"])
        .arg(&snapshot)
        .output()
        .expect("stats should not crash");
    assert!(output.status.success());

    let rows: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let rows = rows.as_array().expect("rows");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["kind"], "parent");
    assert_eq!(rows[0]["edges"], 3);
    assert_eq!(rows[0]["nodes"], 4);
    assert!(rows[1]["content_hash"].as_str().expect("hash").starts_with("blake3:"));
}
