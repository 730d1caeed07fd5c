// file: tests/integration_test.rs
// version: 1.1.0
// guid: 31159f05-2550-4449-ad2e-ecb53ac64309

//! Integration tests for compose-ctl, driving the built binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// A command isolated from the caller's settings files and environment
fn compose_ctl(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("compose-ctl").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("COMPOSE_CTL_CONFIG")
        .env_remove("COMPOSE_CTL_PROGRAM")
        .env_remove("COMPOSE_CTL_FILE")
        .env_remove("COMPOSE_CTL_DRY_RUN")
        .env_remove("COMPOSE_CTL_LOG_LEVEL");
    cmd
}

fn entries(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_help_lists_actions() {
    let temp_dir = TempDir::new().unwrap();

    compose_ctl(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("logs"))
        .stdout(predicate::str::contains("build"));
}

#[cfg(unix)]
#[test]
fn test_unknown_action_is_rejected_before_dispatch() {
    let temp_dir = TempDir::new().unwrap();

    // `touch` would leave files behind if anything were spawned
    compose_ctl(temp_dir.path())
        .env("COMPOSE_CTL_PROGRAM", "touch")
        .arg("deploy")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("deploy"));

    assert!(entries(temp_dir.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_valid_action_spawns_compose_program() {
    let temp_dir = TempDir::new().unwrap();

    // touch -f docker-compose.dev.yml ps
    compose_ctl(temp_dir.path())
        .env("COMPOSE_CTL_PROGRAM", "touch")
        .arg("status")
        .assert()
        .success();

    let created = entries(temp_dir.path());
    assert!(created.contains(&"ps".to_string()));
}

#[cfg(unix)]
#[test]
fn test_status_success_reported() {
    let temp_dir = TempDir::new().unwrap();

    compose_ctl(temp_dir.path())
        .env("COMPOSE_CTL_PROGRAM", "true")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Listing service status succeeded"));
}

#[cfg(unix)]
#[test]
fn test_status_failure_reported() {
    let temp_dir = TempDir::new().unwrap();

    compose_ctl(temp_dir.path())
        .env("COMPOSE_CTL_PROGRAM", "false")
        .arg("status")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Listing service status failed (exit code 1)"));
}

#[test]
fn test_dry_run_prints_fixed_command() {
    let temp_dir = TempDir::new().unwrap();

    compose_ctl(temp_dir.path())
        .args(["--dry-run", "start"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DRY RUN: Would execute: docker-compose -f docker-compose.dev.yml up -d",
        ));
}

#[test]
fn test_missing_program() {
    let temp_dir = TempDir::new().unwrap();

    compose_ctl(temp_dir.path())
        .env("COMPOSE_CTL_PROGRAM", "compose-ctl-definitely-not-installed")
        .arg("stop")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Command not found"));
}

#[test]
fn test_project_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".compose-ctl.toml"),
        "[compose]\nfile = \"stack.yml\"\n\n[safety]\ndry_run = true\n",
    )
    .unwrap();

    compose_ctl(temp_dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "docker-compose -f stack.yml build --no-cache",
        ));
}

#[test]
fn test_explicit_settings_file_must_exist() {
    let temp_dir = TempDir::new().unwrap();

    compose_ctl(temp_dir.path())
        .args(["--config", "missing.toml", "logs"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_project_settings_layer_over_user_settings() {
    let temp_dir = TempDir::new().unwrap();
    let user_dir = temp_dir.path().join(".config").join("compose-ctl");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "[compose]\nprogram = \"false\"\n").unwrap();
    std::fs::write(
        temp_dir.path().join(".compose-ctl.toml"),
        "[compose]\nfile = \"stack.yml\"\n",
    )
    .unwrap();

    compose_ctl(temp_dir.path())
        .env("COMPOSE_CTL_DRY_RUN", "1")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DRY RUN: Would execute: false -f stack.yml ps",
        ));
}
