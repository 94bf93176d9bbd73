//! # ng Subcommands
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Concrete implementations of the `Command` contract shipped with the `ng`
//! binary, plus the glue that turns a parsed clap variant into a lifecycle run:
//!
//! - `version`: prints the CLI version (runs anywhere)
//! - `new`: creates a project directory (outside a project only)
//! - `info`: describes the current project (inside a project only)
//!
//! Each module exposes a clap `Parser` struct (the parsed-options record for
//! that command), the command type itself, and a `handle_*` function called
//! from `main.rs`.
//!
//! ## Flow
//!
//! 1. `main.rs` builds an `Invocation` (logger plus optional context).
//! 2. The `handle_*` function constructs its command from the invocation.
//! 3. `invoke` either prints help (`-h/--help`) or drives the lifecycle via
//!    `command::lifecycle::execute`.
//! 4. A command that fails validation becomes `NgError::ValidationFailed`.
//!
use crate::command::{
    lifecycle::{self, Outcome},
    Command, CommandContext, ExecutionLocation, Logger,
};
use crate::core::error::{NgError, Result};
use anyhow::anyhow;
use std::sync::Arc;
use tracing::debug;

/// Implements `ng info`.
pub mod info;
/// Implements `ng new`.
pub mod new;
/// Implements `ng version`.
pub mod version;

/// Per-invocation resources the host hands to the command it constructs.
#[derive(Clone)]
pub struct Invocation {
    context: Option<CommandContext>,
    logger: Arc<dyn Logger>,
}

impl Invocation {
    pub fn new(context: Option<CommandContext>, logger: Arc<dyn Logger>) -> Self {
        Self { context, logger }
    }

    pub fn context(&self) -> Option<CommandContext> {
        self.context.clone()
    }

    pub fn logger(&self) -> Arc<dyn Logger> {
        Arc::clone(&self.logger)
    }

    /// Running inside a project exactly when a context was supplied.
    pub fn location(&self) -> ExecutionLocation {
        if self.context.is_some() {
            ExecutionLocation::InProject
        } else {
            ExecutionLocation::OutsideProject
        }
    }
}

/// Prints help when asked to, otherwise drives the full lifecycle.
pub async fn invoke<C: Command>(
    mut command: C,
    options: &C::Options,
    wants_help: bool,
    location: ExecutionLocation,
) -> Result<Option<C::Output>> {
    if wants_help {
        debug!("Printing help for '{}'", command.name());
        command.print_help(options);
        return Ok(None);
    }
    match lifecycle::execute(&mut command, options, location).await? {
        Outcome::Completed(output) => Ok(Some(output)),
        Outcome::Aborted => Err(anyhow!(NgError::ValidationFailed {
            command: command.name().to_string(),
        })),
    }
}

/// Asserts that a command's declared descriptors agree with the clap parser
/// that actually consumes its argv: same positionals in order, and for every
/// flag the same long name, short aliases and hidden state. `--help` is the
/// host's flag and is not declared as an option.
#[cfg(test)]
pub(crate) fn assert_descriptors_match_parser<A: clap::CommandFactory>(
    arguments: &[&str],
    options: &[crate::command::CommandOption],
) {
    let parser = A::command();
    let (positionals, flags): (Vec<_>, Vec<_>) = parser
        .get_arguments()
        .filter(|arg| arg.get_id().as_str() != "help")
        .partition(|arg| arg.is_positional());

    let positional_ids: Vec<&str> = positionals.iter().map(|arg| arg.get_id().as_str()).collect();
    assert_eq!(positional_ids, arguments, "positional arguments differ");

    for arg in &flags {
        let long = arg
            .get_long()
            .unwrap_or_else(|| panic!("flag '{}' has no long name", arg.get_id()));
        let option = options
            .iter()
            .find(|opt| opt.name() == long)
            .unwrap_or_else(|| panic!("--{} is parsed but not declared", long));
        let shorts: Vec<String> = arg.get_short().into_iter().map(String::from).collect();
        assert_eq!(option.aliases(), shorts.as_slice(), "aliases differ for --{}", long);
        assert_eq!(option.is_hidden(), arg.is_hide_set(), "hidden differs for --{}", long);
    }
    assert_eq!(flags.len(), options.len(), "declared options not parsed");
}
