//! # ng Version Command
//!
//! File: cli/src/commands/version.rs
//!
//! Implements `ng version`: prints the CLI version. Runs anywhere, with or
//! without a project context.
//!
//! ```bash
//! ng version          # ng version 0.1.0
//! ng version --short  # 0.1.0
//! ```
//!
use super::Invocation;
use crate::command::{Command, CommandBase, CommandContext, CommandOption, Logger, OptionType};
use crate::core::error::Result;
use async_trait::async_trait;
use clap::Parser;
use std::sync::Arc;

/// Shown by `ng version --help` and in the top-level command listing.
pub const DESCRIPTION: &str = "Outputs the ng version.";

pub const ALIASES: &[&str] = &["v"];

// Parsed options for `ng version`. A `///` comment here would replace
// `DESCRIPTION` as clap's about text.
#[derive(Parser, Debug, Default)]
#[command(about = DESCRIPTION, disable_help_flag = true)]
pub struct VersionArgs {
    /// Print only the version number.
    #[arg(short, long)]
    pub short: bool,

    /// Also print the platform the binary was built for.
    #[arg(long = "verbose-build", hide = true)]
    pub verbose_build: bool,

    /// Print help for this command.
    #[arg(short = 'h', long)]
    pub help: bool,
}

pub struct VersionCommand {
    base: CommandBase,
    options: Vec<CommandOption>,
}

impl VersionCommand {
    pub fn new(context: Option<CommandContext>, logger: Arc<dyn Logger>) -> Self {
        Self {
            base: CommandBase::new(context, logger),
            options: vec![
                CommandOption::new("short", "Print only the version number.", OptionType::Boolean)
                    .alias("s")
                    .default_value(false),
                CommandOption::new(
                    "verbose-build",
                    "Also print the platform the binary was built for.",
                    OptionType::Boolean,
                )
                .hidden(true),
            ],
        }
    }
}

#[async_trait]
impl Command for VersionCommand {
    type Options = VersionArgs;
    type Output = String;

    fn base(&self) -> &CommandBase {
        &self.base
    }

    fn name(&self) -> &str {
        "version"
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

    async fn run(&mut self, args: &VersionArgs) -> Result<String> {
        let version = env!("CARGO_PKG_VERSION").to_string();
        if args.short {
            self.base.write_line(&version);
        } else {
            self.base.write_line(&format!("ng version {}", version));
        }
        if args.verbose_build {
            self.base.write_line(&format!(
                "built for {}-{}",
                std::env::consts::OS,
                std::env::consts::ARCH
            ));
        }
        Ok(version)
    }
}

pub async fn handle_version(args: VersionArgs, invocation: &Invocation) -> Result<()> {
    let command = VersionCommand::new(invocation.context(), invocation.logger());
    super::invoke(command, &args, args.help, invocation.location()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::context::{MemoryUi, Project};
    use crate::command::logger::MemoryLogger;
    use crate::command::CommandScope;

    #[test]
    fn test_parses_version_flags() {
        let args = VersionArgs::try_parse_from(["version", "-s"]).unwrap();
        assert!(args.short);
        assert!(!args.verbose_build);

        let args = VersionArgs::try_parse_from(["version", "--verbose-build"]).unwrap();
        assert!(args.verbose_build);
    }

    #[tokio::test]
    async fn test_run_writes_to_logger_without_context() {
        let logger = Arc::new(MemoryLogger::new());
        let mut cmd = VersionCommand::new(None, logger.clone());
        assert_eq!(cmd.scope(), CommandScope::Everywhere);

        let version = cmd.run(&VersionArgs::default()).await.unwrap();
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
        assert_eq!(logger.lines(), vec![format!("ng version {}", version)]);
    }

    #[tokio::test]
    async fn test_run_short_writes_to_ui() {
        let ui = Arc::new(MemoryUi::new());
        let ctx = CommandContext::new(ui.clone(), Project::new("/srv/app"));
        let mut cmd = VersionCommand::new(Some(ctx), Arc::new(MemoryLogger::new()));
        let args = VersionArgs {
            short: true,
            ..Default::default()
        };
        cmd.run(&args).await.unwrap();
        assert_eq!(ui.lines(), vec![env!("CARGO_PKG_VERSION").to_string()]);
    }

    #[test]
    fn test_help_hides_verbose_build() {
        let logger = Arc::new(MemoryLogger::new());
        let cmd = VersionCommand::new(None, logger.clone());
        cmd.print_help(&VersionArgs::default());
        assert_eq!(
            logger.lines(),
            vec![
                "usage: ng version [options]",
                "options:",
                "  short (-s)",
                "    Print only the version number.",
            ]
        );
    }

    #[test]
    fn test_descriptors_match_parser() {
        let cmd = VersionCommand::new(None, Arc::new(MemoryLogger::new()));
        crate::commands::assert_descriptors_match_parser::<VersionArgs>(
            cmd.arguments(),
            cmd.options(),
        );
    }

    #[test]
    fn test_identity() {
        let cmd = VersionCommand::new(None, Arc::new(MemoryLogger::new()));
        assert_eq!(cmd.name(), "version");
        assert_eq!(cmd.aliases(), ["v"]);
        assert_eq!(cmd.description(), DESCRIPTION);
    }
}
