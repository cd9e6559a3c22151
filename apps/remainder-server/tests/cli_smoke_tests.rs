#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the remainder-server binary.

use std::io::Write as _;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

fn run_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_remainder-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute remainder-server")
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn help_lists_commands_and_options() {
    let output = run_server(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--port"));
}

#[test]
fn version_prints_binary_name() {
    let output = run_server(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("remainder-server"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn check_accepts_valid_config() {
    let file = config_file(
        "server:\n  bind_addr: \"127.0.0.1:18080\"\n  application_name: smoke\nlogging:\n  level: warn\n",
    );

    let output = run_server(&["--config", file.path().to_str().unwrap(), "check"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("127.0.0.1:18080"));
    assert!(stdout.contains("smoke"));
}

#[test]
fn check_rejects_unknown_keys() {
    let file = config_file("server:\n  port: 8080\n");

    let output = run_server(&["--config", file.path().to_str().unwrap(), "check"]);

    assert!(!output.status.success());
}

#[test]
fn check_rejects_credentialed_wildcard_cors() {
    let file = config_file("server:\n  cors:\n    allow_credentials: true\n");

    let output = run_server(&["--config", file.path().to_str().unwrap(), "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CORS misconfiguration"));
}

#[test]
fn missing_config_file_fails() {
    let output = run_server(&["--config", "/definitely/not/here.yaml", "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file does not exist"));
}

#[test]
fn print_config_applies_port_override() {
    let output = run_server(&["--port", "9191", "--print-config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Effective configuration"));
    assert!(stdout.contains("127.0.0.1:9191"));
}

#[test]
fn invalid_rust_log_is_reported_not_ignored() {
    let output = Command::new(env!("CARGO_BIN_EXE_remainder-server"))
        .arg("check")
        .env("RUST_LOG", "remainder_server=loudest")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute remainder-server");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid RUST_LOG directive"));
}
