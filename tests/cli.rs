use assert_cmd::Command;
use predicates::str::contains;
use std::fs;

const BINARY_NAME: &str = "frontdesk";

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Hospital front-desk staff dashboard"))
        .stdout(contains("snapshot"));
}

#[test]
/// Snapshot prints the seeded dashboard as JSON.
fn snapshot_prints_seed_state() {
    let tmp = temp_config_dir();
    let output = Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("snapshot")
        .arg("--config")
        .arg(tmp.path().join("missing.json"))
        .arg("--locale")
        .arg("en-GB")
        .env_remove("FRONTDESK_LOCALE")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["locale"], "en-GB");
    assert_eq!(value["queue"]["current_token"], 45);
    assert_eq!(value["queue"]["status"], "active");
    assert_eq!(value["doctors"][0]["name"], "Dr. Rajesh Kumar");
    assert_eq!(value["doctors"][2]["status"], "not-available");
    assert_eq!(value["labs"][1]["equipment"], "maintenance");
    assert_eq!(value["notification"], serde_json::Value::Null);
}

#[test]
/// The locale comes from the config file when no flag or env var is given.
fn snapshot_uses_config_locale() {
    let tmp = temp_config_dir();
    let config_path = tmp.path().join("config.json");
    fs::write(&config_path, r#"{"locale":"en-US"}"#).unwrap();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("snapshot")
        .arg("--config")
        .arg(&config_path)
        .env_remove("FRONTDESK_LOCALE")
        .assert()
        .success()
        .stdout(contains("\"locale\": \"en-US\""));
}

#[test]
/// The environment variable overrides the config file.
fn snapshot_env_locale_overrides_config() {
    let tmp = temp_config_dir();
    let config_path = tmp.path().join("config.json");
    fs::write(&config_path, r#"{"locale":"en-US"}"#).unwrap();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("snapshot")
        .arg("--config")
        .arg(&config_path)
        .env("FRONTDESK_LOCALE", "en-GB")
        .assert()
        .success()
        .stdout(contains("\"locale\": \"en-GB\""));
}

#[test]
/// A malformed config file is reported instead of silently ignored.
fn snapshot_rejects_malformed_config() {
    let tmp = temp_config_dir();
    let config_path = tmp.path().join("config.json");
    fs::write(&config_path, "invalid json").unwrap();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("snapshot")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(contains("Config"));
}

#[test]
/// Unknown locales are rejected by argument parsing.
fn snapshot_rejects_unknown_locale() {
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("snapshot")
        .arg("--locale")
        .arg("fr-FR")
        .assert()
        .failure()
        .stderr(contains("unsupported locale"));
}
