//! End-to-end CLI workflows
//!
//! Exercises the binary with an isolated config directory:
//! - config changes persist between runs
//! - the optimizer honors the configured threshold
//! - a configured key is used but never shown

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::fixtures::VALID_KEY;

fn tubeseo(config: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("tubeseo"));
    cmd.env("TUBESEO_CONFIG_DIR", config.path()).env_remove("YOUTUBE_API_KEY");
    cmd
}

#[test]
fn test_config_lifecycle() {
    let config = TempDir::new().unwrap();

    tubeseo(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    tubeseo(&config).args(["config", "set", "api.region_code", "gb"]).assert().success();
    tubeseo(&config).args(["config", "set", "api.max_results", "10"]).assert().success();
    assert!(config.path().join("config.toml").exists());

    tubeseo(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("region_code = \"GB\""))
        .stdout(predicate::str::contains("max_results = 10"));

    tubeseo(&config).args(["config", "set", "api.region_code", ""]).assert().success();
    tubeseo(&config)
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"region_code\"").not())
        .stdout(predicate::str::contains("\"max_results\": 10"));
}

#[test]
fn test_invalid_value_leaves_config_untouched() {
    let config = TempDir::new().unwrap();
    tubeseo(&config).args(["config", "set", "api.max_results", "12"]).assert().success();

    tubeseo(&config)
        .args(["config", "set", "api.max_results", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value '500'"));

    tubeseo(&config)
        .args(["config", "show"])
        .assert()
        .stdout(predicate::str::contains("max_results = 12"));
}

#[test]
fn test_threshold_controls_suggestions() {
    let config = TempDir::new().unwrap();

    tubeseo(&config)
        .args(["optimize", "jazz", "-k", "jazz", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested titles"));

    tubeseo(&config)
        .args(["config", "set", "optimizer.suggestion_threshold", "0"])
        .assert()
        .success();

    tubeseo(&config)
        .args(["optimize", "jazz", "-k", "jazz", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested titles").not())
        .stdout(predicate::str::contains("Tags:"));
}

#[test]
fn test_configured_key_is_masked() {
    let config = TempDir::new().unwrap();
    tubeseo(&config).args(["config", "set", "api.key", VALID_KEY]).assert().success();

    tubeseo(&config)
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains(VALID_KEY).not());
}

#[test]
fn test_offline_optimize_json_is_complete() {
    let config = TempDir::new().unwrap();
    let output = tubeseo(&config)
        .args(["--json", "--offline", "optimize", "How to bake bread", "-k", "bread"])
        .args(["--seed", "1", "--length", "08:00"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["keyword"], "bread");
    assert_eq!(value["candidates"].as_array().map(Vec::len), Some(5));
    assert_eq!(value["tags"][0], "bread");
    assert!(value["description"].as_str().unwrap().contains("#bread"));
}
