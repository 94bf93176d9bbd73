//! # ng Lifecycle Driver
//!
//! File: cli/src/command/lifecycle.rs
//!
//! ## Overview
//!
//! `execute` drives one command through `initialize -> validate -> run`, the
//! way a dispatcher is expected to:
//!
//! 1. Refuse to start when the command's scope excludes the current
//!    `ExecutionLocation` (`NgError::ScopeViolation`).
//! 2. Await `initialize`; an error ends the invocation.
//! 3. Await `validate`; `false` ends the invocation as `Outcome::Aborted` and
//!    `run` is never called.
//! 4. Await `run` and hand its output back in `Outcome::Completed`.
//!
//! Errors from any hook are returned untouched. Nothing is retried.
//!
use super::{Command, ExecutionLocation};
use crate::core::error::{NgError, Result};
use anyhow::anyhow;
use tracing::{debug, info};

/// How an invocation ended when no hook failed.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    /// `validate` returned `false`; `run` was not called.
    Aborted,
}

impl<T> Outcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    pub fn into_output(self) -> Option<T> {
        match self {
            Outcome::Completed(output) => Some(output),
            Outcome::Aborted => None,
        }
    }
}

/// Runs the full lifecycle of `command` with its parsed `options`.
pub async fn execute<C: Command>(
    command: &mut C,
    options: &C::Options,
    location: ExecutionLocation,
) -> Result<Outcome<C::Output>> {
    let name = command.name().to_string();
    if !command.scope().permits(location) {
        return Err(anyhow!(NgError::ScopeViolation {
            command: name,
            scope: command.scope(),
        }));
    }

    debug!("Initializing command '{}'", name);
    command.initialize(options).await?;

    debug!("Validating command '{}'", name);
    if !command.validate(options).await? {
        info!("Command '{}' did not validate; not running it.", name);
        return Ok(Outcome::Aborted);
    }

    debug!("Running command '{}'", name);
    let output = command.run(options).await?;
    debug!("Command '{}' finished", name);
    Ok(Outcome::Completed(output))
}
