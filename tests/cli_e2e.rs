//! End-to-end CLI tests for chatstats.
//!
//! These tests run the actual binary against temporary chat exports and
//! check stdout, stderr and exit status. Chart rendering is skipped with
//! `--no-charts` so the tests don't depend on system fonts.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "\
[01/01/23, 10:00:00 AM] Alice: \u{200E}hello world
[01/01/23, 10:01:00 AM] Bob: \u{200E}hello left
[01/01/23, 10:02:00 AM] Bob: \u{200E}good morning
[01/01/23, 10:03:00 AM] Bob: <attached: 00000001-PHOTO.jpg>
[02/01/23, 08:00:00 PM] Alice: \u{200E}hello again
[02/01/23, 08:05:00 PM] Carol: \u{200E}morning!
";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    let tied = "\
[01/01/23, 10:00:00 AM] Alice: \u{200E}one
[01/01/23, 10:01:00 AM] Bob: \u{200E}two
";
    fs::write(dir.path().join("tied.txt"), tied).unwrap();

    fs::write(dir.path().join("empty.txt"), "").unwrap();

    let bad = "\
[01/01/23, 10:00:00 AM] Alice: \u{200E}fine
[2023-01-01 10:00] Bob: \u{200E}broken
";
    fs::write(dir.path().join("bad.txt"), bad).unwrap();

    dir
}

fn fixture(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn chatstats() -> Command {
    Command::cargo_bin("chatstats").expect("binary should build")
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_help() {
    chatstats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--sender-chart"))
        .stdout(predicate::str::contains("--no-charts"));
}

#[test]
fn test_version() {
    chatstats()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_text_report() {
    let dir = setup_fixtures();
    chatstats()
        .arg(fixture(&dir, "chat.txt"))
        .arg("--no-charts")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The sender with the highest number of messages is: Alice",
        ))
        .stdout(predicate::str::contains("1. Alice: 2 messages"))
        .stdout(predicate::str::contains("2. Bob: 1 messages"))
        .stdout(predicate::str::contains("3. Carol: 1 messages"))
        .stdout(predicate::str::contains("Most Common Words:\nhello: 2\n"));
}

#[test]
fn test_tied_leaders() {
    let dir = setup_fixtures();
    chatstats()
        .arg(fixture(&dir, "tied.txt"))
        .arg("--no-charts")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The senders with the highest number of messages are: Alice, Bob",
        ));
}

#[test]
fn test_json_report() {
    let dir = setup_fixtures();
    let output = chatstats()
        .arg(fixture(&dir, "chat.txt"))
        .args(["--no-charts", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_messages"], 4);
    assert_eq!(value["days"]["2023-01-01"], 2);
    assert_eq!(value["days"]["2023-01-02"], 2);
    assert_eq!(value["top_words"][0][0], "hello");
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_no_default_excludes_keeps_left() {
    let dir = setup_fixtures();
    chatstats()
        .arg(fixture(&dir, "chat.txt"))
        .args(["--no-charts", "--no-default-excludes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob: 2 messages"))
        .stdout(predicate::str::contains("hello: 3"));
}

#[test]
fn test_extra_exclude() {
    let dir = setup_fixtures();
    chatstats()
        .arg(fixture(&dir, "chat.txt"))
        .args(["--no-charts", "-x", "morning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carol").not())
        .stdout(predicate::str::contains("Bob").not());
}

#[test]
fn test_top_limits() {
    let dir = setup_fixtures();
    chatstats()
        .arg(fixture(&dir, "chat.txt"))
        .args(["--no-charts", "--top-senders", "1", "--top-words", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 1 Message Senders:\n1. Alice: 2 messages\nMost Common Words:\nhello: 2\n"));
}

// ============================================================================
// Edge cases and errors
// ============================================================================

#[test]
fn test_empty_file() {
    let dir = setup_fixtures();
    chatstats()
        .arg(fixture(&dir, "empty.txt"))
        .arg("--no-charts")
        .assert()
        .success()
        .stdout(predicate::str::diff("No messages found in the chat data.\n"));
}

#[test]
fn test_charts_written() {
    let dir = setup_fixtures();
    let senders = dir.path().join("senders.png");
    let daily = dir.path().join("daily.svg");
    chatstats()
        .arg(fixture(&dir, "chat.txt"))
        .arg("--sender-chart")
        .arg(&senders)
        .arg("--daily-chart")
        .arg(&daily)
        .assert()
        .success()
        .stderr(predicate::str::contains("Chart saved to"));

    assert!(fs::metadata(&senders).unwrap().len() > 0);
    assert!(fs::metadata(&daily).unwrap().len() > 0);
}

#[test]
fn test_empty_file_json_notes_no_messages() {
    let dir = setup_fixtures();
    let output = chatstats()
        .arg(fixture(&dir, "empty.txt"))
        .args(["--no-charts", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_messages"], 0);
    assert!(String::from_utf8_lossy(&output.stderr).contains("No messages found in the chat data."));
}

#[test]
fn test_empty_file_writes_no_charts() {
    let dir = setup_fixtures();
    let senders = dir.path().join("senders.png");
    let daily = dir.path().join("daily.png");
    chatstats()
        .arg(fixture(&dir, "empty.txt"))
        .arg("--sender-chart")
        .arg(&senders)
        .arg("--daily-chart")
        .arg(&daily)
        .assert()
        .success();
    assert!(!senders.exists());
    assert!(!daily.exists());
}

#[test]
fn test_missing_file() {
    let dir = setup_fixtures();
    chatstats()
        .arg(fixture(&dir, "does_not_exist.txt"))
        .arg("--no-charts")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_bad_timestamp_fails() {
    let dir = setup_fixtures();
    chatstats()
        .arg(fixture(&dir, "bad.txt"))
        .arg("--no-charts")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid timestamp '2023-01-01 10:00' on line 2"));
}

#[test]
fn test_invalid_number_argument() {
    chatstats()
        .args(["--top-words", "lots"])
        .assert()
        .failure();
}
