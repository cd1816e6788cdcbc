use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn jetconf() -> Command {
    Command::cargo_bin("jetconf").unwrap()
}

#[test]
fn test_path_with_prefix() {
    jetconf()
        .args(["path", "--name", "/usr/local/bin/widget", "--prefix", "/srv"])
        .assert()
        .success()
        .stdout("/srv/etc/widget.conf\n");
}

#[test]
fn test_path_without_separator() {
    jetconf()
        .args(["path", "--name", "widget"])
        .assert()
        .success()
        .stdout("/etc/widget.conf\n");
}

#[test]
fn test_path_defaults_to_own_name() {
    jetconf()
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("/etc/jetconf.conf\n"));
}

#[test]
fn test_check_valid_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("etc")).unwrap();
    fs::write(dir.path().join("etc/widget.conf"), r#"{"port": 8080}"#).unwrap();

    jetconf()
        .args(["check", "--name", "widget", "--prefix"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 8080"));
}

#[test]
fn test_check_malformed_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("etc")).unwrap();
    fs::write(dir.path().join("etc/widget.conf"), "{\"port\": ").unwrap();

    jetconf()
        .args(["check", "--name", "widget", "--prefix"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode config file"));
}

#[test]
fn test_check_missing_file() {
    let dir = TempDir::new().unwrap();

    jetconf()
        .args(["check", "--name", "widget", "--prefix"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_rust_log_enables_debug_events() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("etc")).unwrap();
    fs::write(dir.path().join("etc/widget.conf"), "{}").unwrap();

    jetconf()
        .env("RUST_LOG", "debug")
        .args(["check", "--name", "widget", "--prefix"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Reading config file"));
}

#[test]
fn test_rust_log_can_silence_info() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("etc")).unwrap();
    fs::write(dir.path().join("etc/widget.conf"), "{}").unwrap();

    jetconf()
        .env("RUST_LOG", "warn")
        .args(["check", "--name", "widget", "--prefix"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file is valid").not());
}

#[test]
fn test_verbose_overrides_rust_log() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("etc")).unwrap();
    fs::write(dir.path().join("etc/widget.conf"), "{}").unwrap();

    jetconf()
        .env("RUST_LOG", "error")
        .args(["-v", "check", "--name", "widget", "--prefix"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Reading config file"));
}
