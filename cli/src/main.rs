//! # ng Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `ng` CLI. It acts as the
//! host dispatcher for the command contract:
//! - Command-line argument parsing using Clap
//! - Loading the configuration and setting up logging
//! - Building the `CommandContext` when a project root is known
//! - Routing to the subcommand handlers, which drive the command lifecycle
//!
//! ## Examples
//!
//! ```bash
//! ng version
//! ng new my-app --dry-run
//! ng --project ~/code/my-app info
//! ng new --help
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Load configuration and configure logging
//! 3. Resolve the project root (`--project` or `[project] root`)
//! 4. Route to the subcommand handler
//! 5. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{fmt, EnvFilter};

use ng_cli::command::{
    context::{ConsoleUi, Project},
    logger::ConsoleLogger,
    CommandContext,
};
use ng_cli::commands::{self, Invocation};
use ng_cli::core::config::{self, Config, LoggingConfig};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "ng",
    about = "ng: developer tooling CLI",
    propagate_version = true,
    disable_help_subcommand = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Project root to run against. Overrides `[project] root` in the config.
    #[arg(long, global = true, env = "NG_PROJECT")]
    project: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
/// Per-command help is printed by the command itself, so clap's flag and
/// `help` subcommand are off. Listing text and aliases come from the command
/// modules so they cannot drift from `Command::description`/`Command::aliases`.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = commands::version::DESCRIPTION,
        aliases = commands::version::ALIASES.iter().copied(),
        disable_help_flag = true
    )]
    Version(commands::version::VersionArgs),
    #[command(
        about = commands::new::DESCRIPTION,
        aliases = commands::new::ALIASES.iter().copied(),
        disable_help_flag = true
    )]
    New(commands::new::NewArgs),
    #[command(
        about = commands::info::DESCRIPTION,
        aliases = commands::info::ALIASES.iter().copied(),
        disable_help_flag = true
    )]
    Info(commands::info::InfoArgs),
}

fn init_tracing(logging: &LoggingConfig, verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level_for(verbose)));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn dispatch(cli: Cli, config: anyhow::Result<Config>) -> anyhow::Result<()> {
    let config = config?;
    let context = config::resolve_project_root(&config, cli.project.as_deref())?
        .map(|root| CommandContext::new(Arc::new(ConsoleUi), Project::new(root)));
    let invocation = Invocation::new(context, Arc::new(ConsoleLogger));
    tracing::debug!("Execution location: {:?}", invocation.location());

    match cli.command {
        Commands::Version(args) => commands::version::handle_version(args, &invocation).await,
        Commands::New(args) => commands::new::handle_new(args, &invocation).await,
        Commands::Info(args) => commands::info::handle_info(args, &invocation).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load_config();
    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging, cli.verbose);

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = dispatch(cli, config).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parses_global_project_flag() {
        let cli = Cli::try_parse_from(["ng", "info", "--project", "/srv/app", "-p"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/srv/app")));
        match cli.command {
            Commands::Info(args) => assert!(args.path_only),
            _ => panic!("Incorrect subcommand parsed for 'info'"),
        }
    }

    #[test]
    fn test_subcommand_help_flag_is_ours() {
        let cli = Cli::try_parse_from(["ng", "new", "--help"]).unwrap();
        match cli.command {
            Commands::New(args) => assert!(args.help),
            _ => panic!("Incorrect subcommand parsed for 'new'"),
        }
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["ng", "serve"]).is_err());
    }

    #[test]
    fn test_no_help_subcommand() {
        assert!(Cli::command().find_subcommand("help").is_none());
        assert!(Cli::try_parse_from(["ng", "help", "new"]).is_err());
    }

    #[test]
    fn test_listing_matches_command_identity() {
        let cli = Cli::command();
        for (name, description, aliases) in [
            (
                "version",
                commands::version::DESCRIPTION,
                commands::version::ALIASES,
            ),
            ("new", commands::new::DESCRIPTION, commands::new::ALIASES),
            ("info", commands::info::DESCRIPTION, commands::info::ALIASES),
        ] {
            let sub = cli
                .find_subcommand(name)
                .unwrap_or_else(|| panic!("'{}' is not registered", name));
            assert_eq!(sub.get_about().map(|s| s.to_string()).as_deref(), Some(description));
            let registered: Vec<&str> = sub.get_all_aliases().collect();
            assert_eq!(registered, aliases);
        }
    }

    #[test]
    fn test_parses_command_alias() {
        let cli = Cli::try_parse_from(["ng", "n", "shop", "--dry-run"]).unwrap();
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name.as_deref(), Some("shop"));
                assert!(args.dry_run);
            }
            _ => panic!("Incorrect subcommand parsed for alias 'n'"),
        }
    }
}
