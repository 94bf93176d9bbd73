//! # ng CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `ng` binary: standard flags, unknown input and
//! configuration errors.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_main_help_flag() {
    ng_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("version").and(predicate::str::contains("new")));
}

#[test]
fn test_main_help_lists_command_descriptions() {
    ng_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Outputs the ng version.")
                .and(predicate::str::contains("Creates a new project directory."))
                .and(predicate::str::contains("Parsed options").not()),
        );
}

#[test]
fn test_help_subcommand_is_not_available() {
    ng_cmd().args(["help", "new"]).assert().failure();
}

#[test]
fn test_command_alias_runs_command() {
    ng_cmd()
        .args(["v", "--short"])
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_main_version_flag() {
    ng_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    ng_cmd().arg("serve").assert().failure();
}

#[test]
fn test_invalid_config_is_reported() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[logging]\nlevel = \"loud\"\n").unwrap();

    ng_cmd_with_config(&config)
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed"));
}

#[test]
fn test_configured_project_root_enables_in_project_commands() {
    let temp = tempdir().unwrap();
    let project = temp.path().join("shop");
    std::fs::create_dir(&project).unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        format!("[project]\nroot = {:?}\n", project.to_string_lossy()),
    )
    .unwrap();

    ng_cmd_with_config(&config)
        .args(["info", "--path-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shop"));
}
