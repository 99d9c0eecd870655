//! CLI integration tests for Tick
//!
//! These tests drive the demo binary end to end and assert on its output
//! in both text and JSON modes.

use predicates::prelude::*;

/// Get a command instance for the tick binary
fn tick_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("tick"))
}

// =============================================================================
// Text Mode Tests
// =============================================================================

#[test]
fn test_walkthrough_reports_each_operation() {
    tick_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added \"Learn Rust\" with priority high (id 1)",
        ))
        .stdout(predicate::str::contains(
            "Added \"Deploy to production\" with priority low (id 4)",
        ))
        .stdout(predicate::str::contains("Completed \"Learn Rust\" (id 1)"))
        .stdout(predicate::str::contains("No item with id 99"));
}

#[test]
fn test_walkthrough_renders_listings() {
    tick_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks (4):"))
        .stdout(predicate::str::contains("[ ] [MEDIUM] Build a web app"))
        .stdout(predicate::str::contains("[x] [HIGH] Learn Rust"));
}

#[test]
fn test_filter_limits_the_final_listing() {
    tick_cmd()
        .arg("--filter")
        .arg("active")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks (3):"))
        .stdout(predicate::str::contains("[x]").not());
}

#[test]
fn test_unknown_filter_keyword_behaves_as_all() {
    tick_cmd()
        .arg("--filter")
        .arg("everything")
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] [HIGH] Learn Rust"));
}

#[test]
fn test_verbose_reports_outcomes_on_stderr() {
    tick_cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("complete(1) -> Completed"))
        .stderr(predicate::str::contains("complete(99) -> NotFound"));
}

// =============================================================================
// JSON Mode Tests
// =============================================================================

#[test]
fn test_json_output_is_machine_parseable() {
    let output = tick_cmd().args(["--format", "json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let items: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["text"], "Learn Rust");
    assert_eq!(items[0]["priority"], "high");
    assert_eq!(items[0]["completed"], true);
    assert_eq!(items[1]["completed"], false);
}

#[test]
fn test_json_respects_completed_filter() {
    let output = tick_cmd()
        .args(["--format", "json", "--filter", "completed"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let items: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["completed"], true);
}

#[test]
fn test_json_respects_active_filter() {
    let output = tick_cmd()
        .args(["--format", "json", "--filter", "active"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let items: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], 2);
}
