//! # ng New Command
//!
//! File: cli/src/commands/new.rs
//!
//! ## Overview
//!
//! Implements `ng new <name>`, which creates the directory for a new project.
//! It may only run outside an existing project.
//!
//! ## Validation
//!
//! The project name must be present, start with an ASCII letter and contain
//! only ASCII letters, digits and `-`. A bad name is reported through the UI
//! (or the logger, outside a project) and `validate` returns `false`, so the
//! directory is never touched.
//!
//! ## Examples
//!
//! ```bash
//! ng new my-app                 # creates ./my-app
//! ng new my-app -D ~/code       # creates ~/code/my-app
//! ng new my-app --dry-run       # reports only
//! ```
//!
use super::Invocation;
use crate::command::{
    Command, CommandBase, CommandContext, CommandOption, CommandScope, Logger, OptionType,
};
use crate::core::error::{NgError, Result};
use anyhow::{bail, Context};
use async_trait::async_trait;
use clap::Parser;
use std::{fs, path::PathBuf, sync::Arc};
use tracing::{debug, info};

/// Shown by `ng new --help` and in the top-level command listing.
pub const DESCRIPTION: &str = "Creates a new project directory.";

pub const ALIASES: &[&str] = &["n"];

// Parsed options for `ng new`. A `///` comment here would replace
// `DESCRIPTION` as clap's about text.
#[derive(Parser, Debug, Default)]
#[command(about = DESCRIPTION, disable_help_flag = true)]
pub struct NewArgs {
    /// Name of the project to create.
    pub name: Option<String>,

    /// Report what would be created without writing anything.
    #[arg(short, long)]
    pub dry_run: bool,

    /// Parent directory for the new project (defaults to the current directory).
    #[arg(short = 'D', long)]
    pub directory: Option<PathBuf>,

    /// Print help for this command.
    #[arg(short = 'h', long)]
    pub help: bool,
}

pub struct NewCommand {
    base: CommandBase,
    options: Vec<CommandOption>,
}

impl NewCommand {
    pub fn new(context: Option<CommandContext>, logger: Arc<dyn Logger>) -> Self {
        Self {
            base: CommandBase::new(context, logger),
            options: vec![
                CommandOption::new(
                    "dry-run",
                    "Report what would be created without writing anything.",
                    OptionType::Boolean,
                )
                .alias("d")
                .default_value(false),
                CommandOption::new(
                    "directory",
                    "Parent directory for the new project.",
                    OptionType::String,
                )
                .alias("D"),
            ],
        }
    }
}

/// Checks a project name, returning `NgError::InvalidProjectName` when unusable.
pub fn check_project_name(name: &str) -> std::result::Result<(), NgError> {
    let mut chars = name.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
    if starts_with_letter && rest_ok {
        Ok(())
    } else {
        Err(NgError::InvalidProjectName {
            name: name.to_string(),
        })
    }
}

#[async_trait]
impl Command for NewCommand {
    type Options = NewArgs;
    type Output = PathBuf;

    fn base(&self) -> &CommandBase {
        &self.base
    }

    fn name(&self) -> &str {
        "new"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn aliases(&self) -> &[&str] {
        ALIASES
    }

    fn arguments(&self) -> &[&str] {
        &["name"]
    }

    fn options(&self) -> &[CommandOption] {
        &self.options
    }

    fn scope(&self) -> CommandScope {
        CommandScope::OutsideProject
    }

    async fn validate(&self, args: &NewArgs) -> Result<bool> {
        let Some(name) = args.name.as_deref() else {
            self.base.error_log("A project name is required: ng new <name>");
            return Ok(false);
        };
        if let Err(e) = check_project_name(name) {
            self.base.error_log(&format!(
                "{} Names must start with a letter and contain only letters, digits and '-'.",
                e
            ));
            return Ok(false);
        }
        Ok(true)
    }

    async fn run(&mut self, args: &NewArgs) -> Result<PathBuf> {
        let name = args
            .name
            .as_deref()
            .context("Project name missing after validation")?;
        let parent = match &args.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };
        let target = parent.join(name);
        debug!("Target project directory: {}", target.display());

        if target.exists() {
            bail!("Path '{}' already exists.", target.display());
        }

        if args.dry_run {
            self.base.write_line(&format!(
                "Would create project '{}' at {}",
                name,
                target.display()
            ));
            return Ok(target);
        }

        fs::create_dir_all(&target)
            .with_context(|| format!("Failed to create directory '{}'", target.display()))?;
        info!("Created project directory {}", target.display());
        self.base.write_line(&format!(
            "Created project '{}' at {}",
            name,
            target.display()
        ));
        Ok(target)
    }
}

pub async fn handle_new(args: NewArgs, invocation: &Invocation) -> Result<()> {
    let command = NewCommand::new(invocation.context(), invocation.logger());
    super::invoke(command, &args, args.help, invocation.location()).await?;
    Ok(())
}
