//! # ng Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types shared by the command contract, the
//! lifecycle driver and the `ng` binary.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `NgError`: A custom error enum using `thiserror` for the failures this
//!   crate itself raises (configuration, scope, missing context, ...)
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so that command
//!   implementations can propagate any error from `run` untouched
//!
//! A `validate` hook returning `false` is *not* an error at this layer; the
//! lifecycle driver reports it as `Outcome::Aborted`. Only the binary turns it
//! into `NgError::ValidationFailed` to choose an exit status.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if context.is_none() {
//!     return Err(NgError::MissingContext { command: "info".into() })?;
//! }
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e) if e.downcast_ref::<NgError>().map_or(false, |ne| matches!(ne, NgError::ScopeViolation { .. })) => {
//!         eprintln!("wrong place to run this");
//!     }
//!     other => other?,
//! }
//! ```
//!
use crate::command::CommandScope;
use thiserror::Error;

/// Custom error type for the ng CLI.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NgError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("The '{command}' command can only be run {scope}.")]
    ScopeViolation {
        command: String,
        scope: CommandScope,
    },

    #[error("The '{command}' command requires a project context, but none was supplied.")]
    MissingContext { command: String },

    #[error("Validation failed for the '{command}' command.")]
    ValidationFailed { command: String },

    #[error("Invalid project name '{name}'.")]
    InvalidProjectName { name: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = NgError::Config("unknown log level 'loud'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: unknown log level 'loud'"
        );

        let scope_err = NgError::ScopeViolation {
            command: "new".into(),
            scope: CommandScope::OutsideProject,
        };
        assert_eq!(
            scope_err.to_string(),
            "The 'new' command can only be run outside a project."
        );

        let missing = NgError::MissingContext {
            command: "info".into(),
        };
        assert_eq!(
            missing.to_string(),
            "The 'info' command requires a project context, but none was supplied."
        );
    }

    #[test]
    fn test_error_downcast_through_anyhow() {
        let err: anyhow::Error = NgError::ValidationFailed {
            command: "new".into(),
        }
        .into();
        assert_eq!(
            err.downcast_ref::<NgError>(),
            Some(&NgError::ValidationFailed {
                command: "new".into()
            })
        );
    }
}
