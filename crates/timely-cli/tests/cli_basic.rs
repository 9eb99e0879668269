//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "timely-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_plan_generate_defaults() {
    let (stdout, _, code) = run_cli(&["plan", "generate"]);
    assert_eq!(code, 0, "plan generate failed");
    assert!(stdout.contains("Work Plan for"));
    assert!(stdout.contains("Work session from 09:00 AM"));
}

#[test]
fn test_plan_generate_with_parameters() {
    let (stdout, _, code) = run_cli(&[
        "plan",
        "generate",
        "--name",
        "Ana",
        "--work-hours",
        "7",
        "--lunch-break",
        "1.5",
        "--short-break",
        "10",
        "--work-session",
        "50",
        "--start-hour",
        "09:00",
    ]);
    assert_eq!(code, 0, "plan generate with parameters failed");
    assert!(stdout.contains("Work Plan for Ana"));
    assert!(stdout.contains("- Work session from 09:00 AM"));
    assert!(stdout.contains("- Short break from 09:50 AM"));
    assert!(stdout.contains("- Work session from 10:00 AM"));
    assert!(stdout.contains("- Lunch break from 12:00 PM"));
}

#[test]
fn test_plan_generate_short_day_has_no_lunch() {
    let (stdout, _, code) = run_cli(&[
        "plan",
        "generate",
        "--work-hours",
        "1",
        "--start-hour",
        "11:30",
    ]);
    assert_eq!(code, 0, "short-day plan generate failed");
    assert!(stdout.contains("- Work session from 11:30 AM"));
    assert!(!stdout.contains("Lunch break"));
}

#[test]
fn test_plan_generate_json() {
    let (stdout, _, code) = run_cli(&["plan", "generate", "--json"]);
    assert_eq!(code, 0, "plan generate --json failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("output is not valid JSON");
    let entries = parsed["entries"].as_array().expect("entries missing");
    assert!(!entries.is_empty());
    assert_eq!(entries[0]["kind"], "work_session");
}

#[test]
fn test_plan_generate_rejects_malformed_start_hour() {
    let (_, stderr, code) = run_cli(&["plan", "generate", "--start-hour", "25:99"]);
    assert_ne!(code, 0, "malformed start hour should fail");
    assert!(stderr.contains("invalid start time"));
}

#[test]
fn test_plan_defaults() {
    let (stdout, _, code) = run_cli(&["plan", "defaults"]);
    assert_eq!(code, 0, "plan defaults failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("output is not valid JSON");
    assert!(parsed["work_hours"].is_number());
    assert!(parsed["start_hour"].is_string());
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("[plan]"));
    assert!(stdout.contains("[clock]"));
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "plan.start_hour"]);
    assert_eq!(code, 0, "config get failed");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "plan.nonexistent"]);
    assert_ne!(code, 0, "unknown config key should fail");
    assert!(stderr.contains("unknown config key"));
}
