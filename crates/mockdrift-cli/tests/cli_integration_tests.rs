//! CLI integration tests
//!
//! These run the `mockdrift` binary against temporary fixture directories.

use serde_json::json;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn fixture(status: u16) -> String {
    json!({
        "apis": [{
            "request": {"url": "/users", "method": "GET"},
            "response": {"status": status}
        }]
    })
    .to_string()
}

fn setup() -> (TempDir, TempDir) {
    let mock = TempDir::new().unwrap();
    let real = TempDir::new().unwrap();
    fs::write(mock.path().join("users.json"), fixture(200)).unwrap();
    fs::write(real.path().join("users.json"), fixture(500)).unwrap();
    (mock, real)
}

fn mockdrift() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_mockdrift"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn test_help_prints_usage() {
    let output = mockdrift().arg("--help").output().expect("Failed to execute CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MOCK_DIR"));
    assert!(stdout.contains("--apply-all"));
}

#[test]
fn test_invalid_directory_is_fatal() {
    // Scenario: mock directory does not exist
    // When: `mockdrift <missing> <real>`
    // Then: non-zero exit and the bad path is named
    let real = TempDir::new().unwrap();
    let missing = real.path().join("no-such-dir");

    let output = mockdrift()
        .args([missing.to_str().unwrap(), real.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("One of the provided paths is invalid"));
    assert!(stderr.contains("no-such-dir"));
}

#[test]
fn test_apply_all_flag_rewrites_mock() {
    let (mock, real) = setup();

    let output = mockdrift()
        .args([
            "--mock",
            mock.path().to_str().unwrap(),
            "--real",
            real.path().to_str().unwrap(),
            "--apply-all",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(mock.path().join("users.json")).unwrap()).unwrap();
    assert_eq!(written["apis"][0]["response"]["status"], 500);
    assert!(String::from_utf8_lossy(&output.stdout).contains("users.json"));
}

#[test]
fn test_legacy_single_dash_flags() {
    let (mock, real) = setup();
    fs::write(real.path().join("orders.json"), fixture(201)).unwrap();

    let output = mockdrift()
        .args([
            "-mock",
            mock.path().to_str().unwrap(),
            "-real",
            real.path().to_str().unwrap(),
            "--create-missing",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    assert!(mock.path().join("orders.json").exists());
    // create-missing alone leaves differing fixtures alone
    assert_eq!(fs::read_to_string(mock.path().join("users.json")).unwrap(), fixture(200));
}

#[test]
fn test_interactive_session_over_stdin() {
    let (mock, real) = setup();

    let mut child = mockdrift()
        .args([mock.path().to_str().unwrap(), real.path().to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    // S (show differences), Y (detail), Y (accept)
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"s\ny\ny\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Property was modified"));
    assert!(stdout.contains("Changes are applied for the following files:"));
    let text = fs::read_to_string(mock.path().join("users.json")).unwrap();
    assert!(text.contains("\"status\": 500"));
}

#[test]
fn test_closed_stdin_fails_without_writing() {
    let (mock, real) = setup();

    let output = mockdrift()
        .args([mock.path().to_str().unwrap(), real.path().to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("input closed"));
    assert_eq!(fs::read_to_string(mock.path().join("users.json")).unwrap(), fixture(200));
}
