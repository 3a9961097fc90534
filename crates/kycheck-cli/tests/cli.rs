//! Runs the built `kycheck` binary against payload files and stdin.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};
use tempfile::TempDir;

fn kycheck() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kycheck"))
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str], payload: &Path) -> Output {
    kycheck().args(args).arg(payload).output().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn verified_payload_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_file(&dir, "ok.json", r#"{ "status": "VALID", "verified": true }"#);

    let output = run(&[], &payload);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_json(&output),
        json!({ "verified": true, "matchedPhrases": [] })
    );
}

#[test]
fn failed_payload_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_file(&dir, "fail.json", r#"{ "status": "No Match" }"#);

    let output = run(&[], &payload);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_json(&output),
        json!({ "verified": false, "matchedPhrases": ["no match"] })
    );
}

#[test]
fn non_json_payload_is_classified_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_file(&dir, "body.txt", "Record not found");

    let output = run(&[], &payload);
    assert_eq!(output.status.code(), Some(1));
    let matched = stdout_json(&output)["matchedPhrases"].clone();
    assert!(matched.as_array().unwrap().contains(&json!("not found")));
}

#[test]
fn raw_mode_keeps_json_quotes() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_file(&dir, "quoted.json", r#""not""#);

    let output = run(&["--phrase", " not "], &payload);
    assert_eq!(output.status.code(), Some(1));

    let output = run(&["--raw", "--phrase", " not "], &payload);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn phrase_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        &dir,
        "kycheck.json",
        r#"{ "config_version": 1, "negativePhrases": ["blocked"] }"#,
    );
    let payload = write_file(
        &dir,
        "payload.json",
        r#"{ "status": "blocked", "note": "flagged" }"#,
    );
    let config = config.to_str().unwrap();

    let output = run(&["--config", config], &payload);
    assert_eq!(stdout_json(&output)["matchedPhrases"], json!(["blocked"]));

    let output = run(&["--config", config, "--phrase", "Flagged"], &payload);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["matchedPhrases"], json!(["flagged"]));
}

#[test]
fn provider_list_comes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        &dir,
        "kycheck.json",
        r#"{ "config_version": 1, "providers": { "pan": ["pan inactive"] } }"#,
    );
    let payload = write_file(&dir, "pan.json", r#"{ "status": "PAN Inactive" }"#);
    let config = config.to_str().unwrap();

    let output = run(&["--config", config, "--provider", "pan"], &payload);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["matchedPhrases"], json!(["pan inactive"]));

    let output = run(&["--config", config], &payload);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn reads_payload_from_stdin() {
    let mut child = kycheck()
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{ "error": "Account Blocked" }"#)
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_json(&output)["matchedPhrases"],
        json!(["account blocked"])
    );
}

#[test]
fn missing_payload_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&[], &dir.path().join("absent.json"));
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_config_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(&dir, "kycheck.json", r#"{ "config_version": 99 }"#);
    let payload = write_file(&dir, "ok.json", "{}");

    let output = run(&["--config", config.to_str().unwrap()], &payload);
    assert_eq!(output.status.code(), Some(2));
}
