//! # ng Info Command
//!
//! File: cli/src/commands/info.rs
//!
//! Implements `ng info`, which prints the root of the project the CLI is
//! running in. Only valid inside a project; `initialize` additionally fails
//! with `NgError::MissingContext` if the command was built without a context.
//!
use super::Invocation;
use crate::command::{
    Command, CommandBase, CommandContext, CommandOption, CommandScope, Logger, OptionType,
};
use crate::core::error::Result;
use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use std::{path::PathBuf, sync::Arc};

/// Shown by `ng info --help` and in the top-level command listing.
pub const DESCRIPTION: &str = "Prints information about the current project.";

pub const ALIASES: &[&str] = &["i"];

// Parsed options for `ng info`. A `///` comment here would replace
// `DESCRIPTION` as clap's about text.
#[derive(Parser, Debug, Default)]
#[command(about = DESCRIPTION, disable_help_flag = true)]
pub struct InfoArgs {
    /// Print only the project root path.
    #[arg(short, long)]
    pub path_only: bool,

    /// Dump the command context for debugging.
    #[arg(long, hide = true)]
    pub debug_context: bool,

    /// Print help for this command.
    #[arg(short = 'h', long)]
    pub help: bool,
}

pub struct InfoCommand {
    base: CommandBase,
    options: Vec<CommandOption>,
    root: Option<PathBuf>,
}

impl InfoCommand {
    pub fn new(context: Option<CommandContext>, logger: Arc<dyn Logger>) -> Self {
        Self {
            base: CommandBase::new(context, logger),
            options: vec![
                CommandOption::new(
                    "path-only",
                    "Print only the project root path.",
                    OptionType::Boolean,
                )
                .alias("p"),
                CommandOption::new(
                    "debug-context",
                    "Dump the command context for debugging.",
                    OptionType::Boolean,
                )
                .hidden(true),
            ],
            root: None,
        }
    }
}

#[async_trait]
impl Command for InfoCommand {
    type Options = InfoArgs;
    type Output = PathBuf;

    fn base(&self) -> &CommandBase {
        &self.base
    }

    fn name(&self) -> &str {
        "info"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn aliases(&self) -> &[&str] {
        ALIASES
    }

    fn arguments(&self) -> &[&str] {
        &[]
    }

    fn options(&self) -> &[CommandOption] {
        &self.options
    }

    fn scope(&self) -> CommandScope {
        CommandScope::InProject
    }

    async fn initialize(&mut self, _args: &InfoArgs) -> Result<()> {
        let root = self.base.require_project("info")?.root().to_path_buf();
        self.root = Some(root);
        Ok(())
    }

    async fn run(&mut self, args: &InfoArgs) -> Result<PathBuf> {
        let root = self
            .root
            .clone()
            .context("'info' was run before it was initialized")?;
        if args.path_only {
            self.base.write_line(&root.display().to_string());
        } else {
            self.base
                .write_line(&format!("Project root: {}", root.display()));
        }
        if args.debug_context {
            self.base.write_line(&format!("{:?}", self.base));
        }
        Ok(root)
    }
}

pub async fn handle_info(args: InfoArgs, invocation: &Invocation) -> Result<()> {
    let command = InfoCommand::new(invocation.context(), invocation.logger());
    super::invoke(command, &args, args.help, invocation.location()).await?;
    Ok(())
}
