//! # ng Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional user configuration for the `ng` binary. The
//! configuration only tunes the host around the command contract: the default
//! log level and a default project root used to build the `CommandContext`.
//!
//! ## Architecture
//!
//! - The file location is `$NG_CONFIG` when set, otherwise `config.toml` in
//!   the platform config directory (via `directories::ProjectDirs`)
//! - A missing file yields `Config::default()`
//! - Paths are expanded (`~` to home directory) after parsing
//! - The loaded configuration is validated before use
//!
//! Project roots are never discovered by walking the filesystem. A root is
//! either given with `--project` or configured under `[project]`.
//!
//! ## Examples
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [project]
//! root = "~/code/my-app"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config()?;
//! let root = config::resolve_project_root(&cfg, cli.project.as_deref())?;
//! ```
//!
use crate::core::error::{NgError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "NG_CONFIG";

/// Log levels accepted in `[logging] level`.
const KNOWN_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub project: ProjectConfig,
}

/// Diagnostic logging settings.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level used when neither `RUST_LOG` nor `-v` is given.
    pub level: Option<String>,
}

/// Default project context.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project root used when `--project` is not passed (can use ~).
    pub root: Option<String>,
}

impl LoggingConfig {
    /// Picks the log level from the `-v` count, falling back to the
    /// configured level and finally to `warn`.
    pub fn level_for(&self, verbose: u8) -> &str {
        match verbose {
            0 => self.level.as_deref().unwrap_or("warn"),
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Loads the configuration from `$NG_CONFIG` or the platform config directory.
pub fn load_config() -> Result<Config> {
    let path = config_path();
    load_config_at(path.as_deref())
}

/// Loads, expands and validates the configuration at `path`.
/// A `None` path or a path that does not exist yields the defaults.
pub fn load_config_at(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(p) if p.is_file() => {
            info!("Loading configuration from: {}", p.display());
            load_config_from_path(p)?
        }
        Some(p) => {
            debug!("Configuration file not found at {}", p.display());
            Config::default()
        }
        None => {
            debug!("Could not determine user config directory.");
            Config::default()
        }
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Chooses the project root for the command context: the explicit override
/// wins over the configured root. The chosen path must be an existing
/// directory.
pub fn resolve_project_root(config: &Config, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config.project.root.as_ref().map(PathBuf::from),
    };
    match candidate {
        Some(root) if root.is_dir() => {
            debug!("Using project root: {}", root.display());
            Ok(Some(root))
        }
        Some(root) => Err(anyhow!(NgError::Config(format!(
            "Project root '{}' does not exist or is not a directory.",
            root.display()
        )))),
        None => Ok(None),
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(explicit));
    }
    ProjectDirs::from("", "", "ng").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut Config) {
    if let Some(root) = config.project.root.as_mut() {
        *root = shellexpand::tilde(root.as_str()).into_owned();
        debug!("Expanded project root: {}", root);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(level) = &config.logging.level {
        if !KNOWN_LEVELS.contains(&level.as_str()) {
            return Err(anyhow!(NgError::Config(format!(
                "Unknown log level '{}'. Expected one of: {}.",
                level,
                KNOWN_LEVELS.join(", ")
            ))));
        }
    }
    if let Some(root) = &config.project.root {
        if root.trim().is_empty() {
            return Err(anyhow!(NgError::Config(
                "Project root cannot be an empty path.".to_string()
            )));
        }
    }
    Ok(())
}
