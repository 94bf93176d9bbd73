//! # ng Command Contract
//!
//! File: cli/src/command/mod.rs
//!
//! ## Overview
//!
//! Every `ng` subcommand implements the `Command` trait defined here. The trait
//! declares the command's identity (name, description, positional arguments,
//! options, scope, visibility flags) and its lifecycle hooks, and supplies the
//! default help printer shared by all commands.
//!
//! ## Architecture
//!
//! - `Command`: the contract. Identity accessors and `run` are required;
//!   `scope`, `aliases`, `hidden`, `unknown`, `initialize`, `validate` and the
//!   `print_help*` family have defaults that implementations may override.
//! - `CommandBase`: the state every command carries (logger plus the optional
//!   project/UI taken from a `CommandContext`). Commands embed one and return
//!   it from `Command::base`.
//! - `CommandScope`: where a command may run.
//! - `option`, `context`, `logger`, `help`, `lifecycle`: the descriptor type,
//!   host-supplied context, output sink, help renderer and the reference
//!   lifecycle driver.
//!
//! ## Lifecycle
//!
//! ```text
//! constructed -> initialized -> validated(true)  -> ran -> done
//!                            \-> validated(false) -> aborted
//! ```
//!
//! Each step is awaited before the next begins. `validate` returning `false`
//! is a normal result; the dispatcher must not call `run` afterwards.
//!
//! ## Examples
//!
//! ```rust,ignore
//! struct Greet { base: CommandBase, options: Vec<CommandOption> }
//!
//! #[async_trait]
//! impl Command for Greet {
//!     type Options = GreetArgs;
//!     type Output = ();
//!
//!     fn base(&self) -> &CommandBase { &self.base }
//!     fn name(&self) -> &str { "greet" }
//!     fn description(&self) -> &str { "Says hello." }
//!     fn arguments(&self) -> &[&str] { &["who"] }
//!     fn options(&self) -> &[CommandOption] { &self.options }
//!
//!     async fn run(&mut self, args: &GreetArgs) -> Result<()> {
//!         self.base.logger().info(&format!("hello {}", args.who));
//!         Ok(())
//!     }
//! }
//! ```
//!
use crate::core::error::{NgError, Result};
use anyhow::anyhow;
use async_trait::async_trait;
use std::{fmt, sync::Arc};

pub mod context;
pub mod help;
pub mod lifecycle;
pub mod logger;
pub mod option;

pub use context::{CommandContext, Project, Ui};
pub use help::HelpRenderer;
pub use logger::Logger;
pub use option::{CommandOption, OptionType, OptionValue};

/// Where a command is allowed to run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandScope {
    #[default]
    Everywhere,
    InProject,
    OutsideProject,
}

/// Where the CLI is actually running for this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionLocation {
    InProject,
    OutsideProject,
}

impl CommandScope {
    /// Whether a command with this scope may run at `location`.
    pub fn permits(self, location: ExecutionLocation) -> bool {
        match self {
            CommandScope::Everywhere => true,
            CommandScope::InProject => location == ExecutionLocation::InProject,
            CommandScope::OutsideProject => location == ExecutionLocation::OutsideProject,
        }
    }
}

impl fmt::Display for CommandScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CommandScope::Everywhere => "anywhere",
            CommandScope::InProject => "inside a project",
            CommandScope::OutsideProject => "outside a project",
        };
        f.write_str(text)
    }
}

/// State shared by every command implementation.
///
/// The logger is fixed for the lifetime of the command. `project` and `ui`
/// are present only when the host supplied a `CommandContext`.
#[derive(Clone)]
pub struct CommandBase {
    logger: Arc<dyn Logger>,
    project: Option<Project>,
    ui: Option<Arc<dyn Ui>>,
}

impl CommandBase {
    pub fn new(context: Option<CommandContext>, logger: Arc<dyn Logger>) -> Self {
        let (project, ui) = match context {
            Some(ctx) => (Some(ctx.project), Some(ctx.ui)),
            None => (None, None),
        };
        Self {
            logger,
            project,
            ui,
        }
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn ui(&self) -> Option<&dyn Ui> {
        self.ui.as_deref()
    }

    pub fn has_context(&self) -> bool {
        self.project.is_some()
    }

    /// The project, or `NgError::MissingContext` naming `command`.
    pub fn require_project(&self, command: &str) -> Result<&Project> {
        self.project.as_ref().ok_or_else(|| {
            anyhow!(NgError::MissingContext {
                command: command.to_string()
            })
        })
    }

    /// Writes an informational line through the UI, or the logger when no
    /// context was supplied.
    pub fn write_line(&self, message: &str) {
        match self.ui() {
            Some(ui) => ui.write_line(message),
            None => self.logger.info(message),
        }
    }

    /// Error counterpart of `write_line`.
    pub fn error_log(&self, message: &str) {
        match self.ui() {
            Some(ui) => ui.error_log(message),
            None => self.logger.error(message),
        }
    }
}

impl fmt::Debug for CommandBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandBase")
            .field("project", &self.project)
            .field("has_ui", &self.ui.is_some())
            .finish_non_exhaustive()
    }
}

/// The contract every `ng` subcommand implements.
#[async_trait]
pub trait Command: Send + Sync {
    /// Parsed options record produced by the external parser.
    type Options: Send + Sync;
    /// Value produced by a successful `run`.
    type Output: Send;

    fn base(&self) -> &CommandBase;

    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// Positional argument names, in order.
    fn arguments(&self) -> &[&str];
    fn options(&self) -> &[CommandOption];

    fn scope(&self) -> CommandScope {
        CommandScope::Everywhere
    }

    /// Alternate names the command can be invoked by.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Excluded from command listings.
    fn hidden(&self) -> bool {
        false
    }

    /// Undeclared options should be tolerated by the parser.
    fn unknown(&self) -> bool {
        false
    }

    async fn initialize(&mut self, _options: &Self::Options) -> Result<()> {
        Ok(())
    }

    /// `Ok(false)` means the command must not run.
    async fn validate(&self, _options: &Self::Options) -> Result<bool> {
        Ok(true)
    }

    async fn run(&mut self, options: &Self::Options) -> Result<Self::Output>;

    fn print_help(&self, _options: &Self::Options) {
        self.print_help_usage(self.name(), self.arguments(), self.options());
        self.print_help_options(self.options());
    }

    fn print_help_usage(&self, name: &str, args: &[&str], options: &[CommandOption]) {
        HelpRenderer::default().print_usage(self.base().logger(), name, args, options);
    }

    fn print_help_options(&self, options: &[CommandOption]) {
        HelpRenderer::default().print_options(self.base().logger(), options);
    }
}

#[cfg(test)]
mod tests {
    use super::context::MemoryUi;
    use super::logger::MemoryLogger;
    use super::*;

    struct Bare {
        base: CommandBase,
        options: Vec<CommandOption>,
        runs: usize,
    }

    impl Bare {
        fn new(logger: Arc<MemoryLogger>) -> Self {
            Self {
                base: CommandBase::new(None, logger),
                options: vec![
                    CommandOption::new("force", "Overwrite existing files.", OptionType::Boolean)
                        .alias("f")
                        .alias("x"),
                    CommandOption::new("trace", "Internal tracing.", OptionType::Boolean)
                        .hidden(true),
                    CommandOption::new("style", "Stylesheet format.", OptionType::String),
                ],
                runs: 0,
            }
        }
    }

    #[async_trait]
    impl Command for Bare {
        type Options = ();
        type Output = usize;

        fn base(&self) -> &CommandBase {
            &self.base
        }
        fn name(&self) -> &str {
            "generate"
        }
        fn description(&self) -> &str {
            "Generates files."
        }
        fn arguments(&self) -> &[&str] {
            &["schematic", "name"]
        }
        fn options(&self) -> &[CommandOption] {
            &self.options
        }

        async fn run(&mut self, _options: &()) -> Result<usize> {
            self.runs += 1;
            Ok(self.runs)
        }
    }

    #[test]
    fn test_scope_permits() {
        use ExecutionLocation::*;
        assert!(CommandScope::Everywhere.permits(InProject));
        assert!(CommandScope::Everywhere.permits(OutsideProject));
        assert!(CommandScope::InProject.permits(InProject));
        assert!(!CommandScope::InProject.permits(OutsideProject));
        assert!(CommandScope::OutsideProject.permits(OutsideProject));
        assert!(!CommandScope::OutsideProject.permits(InProject));
        assert_eq!(CommandScope::default(), CommandScope::Everywhere);
    }

    #[test]
    fn test_scope_is_closed() {
        // No wildcard arm: these three are the only variants.
        for scope in [
            CommandScope::Everywhere,
            CommandScope::InProject,
            CommandScope::OutsideProject,
        ] {
            let label = match scope {
                CommandScope::Everywhere => "anywhere",
                CommandScope::InProject => "inside a project",
                CommandScope::OutsideProject => "outside a project",
            };
            assert_eq!(scope.to_string(), label);
        }
    }

    #[tokio::test]
    async fn test_defaults() {
        let logger = Arc::new(MemoryLogger::new());
        let mut cmd = Bare::new(logger.clone());
        assert_eq!(cmd.scope(), CommandScope::Everywhere);
        assert!(cmd.aliases().is_empty());
        assert!(!cmd.hidden());
        assert!(!cmd.unknown());

        cmd.initialize(&()).await.unwrap();
        assert!(cmd.validate(&()).await.unwrap());
        assert!(logger.lines().is_empty());
        assert_eq!(cmd.runs, 0);
    }

    #[test]
    fn test_print_help_snapshot() {
        let logger = Arc::new(MemoryLogger::new());
        let cmd = Bare::new(logger.clone());
        cmd.print_help(&());
        assert_eq!(
            logger.output(),
            "usage: ng generate <schematic> <name> [options]\n\
             options:\n  force (-f -x)\n    Overwrite existing files.\n  style\n    Stylesheet format."
        );
    }

    #[test]
    fn test_base_without_context() {
        let logger = Arc::new(MemoryLogger::new());
        let base = CommandBase::new(None, logger.clone());
        assert!(base.project().is_none());
        assert!(base.ui().is_none());
        assert!(!base.has_context());

        let err = base.require_project("info").unwrap_err();
        assert_eq!(
            err.downcast_ref::<NgError>(),
            Some(&NgError::MissingContext {
                command: "info".into()
            })
        );

        base.write_line("to logger");
        assert_eq!(logger.lines(), vec!["to logger"]);
    }

    #[test]
    fn test_base_with_context() {
        let logger = Arc::new(MemoryLogger::new());
        let ui = Arc::new(MemoryUi::new());
        let ctx = CommandContext::new(ui.clone(), Project::new("/work/app"));
        let base = CommandBase::new(Some(ctx), logger.clone());

        assert_eq!(
            base.require_project("info").unwrap().root(),
            std::path::Path::new("/work/app")
        );
        base.write_line("hello");
        base.error_log("bad");
        assert_eq!(ui.lines(), vec!["hello"]);
        assert_eq!(ui.errors(), vec!["bad"]);
        assert!(logger.lines().is_empty());
    }
}
