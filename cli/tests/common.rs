//! # ng CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each helper returns an
//! `assert_cmd::Command` for the compiled `ng` binary, isolated from the
//! developer's own configuration and project environment.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get ng Command (`ng_cmd`)
///
/// Creates an `assert_cmd::Command` for the `ng` binary with `NG_CONFIG`
/// pointed at a file that does not exist and `NG_PROJECT` cleared, so tests
/// always start outside a project with default settings.
///
/// ## Panics
/// Panics if the `ng` binary cannot be found via `Command::cargo_bin`.
pub fn ng_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ng").expect("Failed to find ng binary for testing");
    cmd.env("NG_CONFIG", "/nonexistent/ng-test-config.toml")
        .env_remove("NG_PROJECT")
        .env_remove("RUST_LOG");
    cmd
}

/// `ng_cmd` using the configuration file at `config`.
pub fn ng_cmd_with_config(config: &Path) -> Command {
    let mut cmd = ng_cmd();
    cmd.env("NG_CONFIG", config);
    cmd
}
