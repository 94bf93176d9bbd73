//! # ng Help Renderer
//!
//! File: cli/src/command/help.rs
//!
//! ## Overview
//!
//! Builds the usage line and option listing shared by every command. The text
//! is produced as plain lines so that it can be snapshot-tested, and then
//! written through the command's `Logger`.
//!
//! ## Format
//!
//! ```text
//! usage: ng new <name> [options]
//! options:
//!   dry-run (-d)
//!     Report what would be created without writing anything.
//!   directory (-D)
//!     Parent directory for the new project.
//! ```
//!
//! - Positional arguments are bracketed and space-joined in declaration order.
//! - ` [options]` is appended when at least one option is declared, hidden
//!   ones included.
//! - Hidden options are never listed.
//! - The alias group is left out entirely, leading space included, when an
//!   option has no aliases.
//!
//! Whether the `options:` header is printed when *every* declared option is
//! hidden is governed by `OptionsHeader`.
//!
use super::logger::Logger;
use super::option::CommandOption;

/// Name of the executable shown in usage lines.
pub const PROGRAM_NAME: &str = "ng";

/// When the `options:` header is emitted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OptionsHeader {
    /// Only when at least one option is visible.
    #[default]
    WhenVisible,
    /// Whenever any option is declared, even if all of them are hidden.
    WhenDeclared,
}

/// Renders help text under a given header policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelpRenderer {
    header: OptionsHeader,
}

impl HelpRenderer {
    pub fn new(header: OptionsHeader) -> Self {
        Self { header }
    }

    pub fn header_policy(&self) -> OptionsHeader {
        self.header
    }

    /// `usage: ng <name>{ <arg>...}{ [options]}`
    pub fn usage_line<S: AsRef<str>>(
        &self,
        name: &str,
        args: &[S],
        options: &[CommandOption],
    ) -> String {
        let arg_display: String = args
            .iter()
            .map(|a| format!(" <{}>", a.as_ref()))
            .collect();
        let options_display = if options.is_empty() { "" } else { " [options]" };
        format!(
            "usage: {} {}{}{}",
            PROGRAM_NAME, name, arg_display, options_display
        )
    }

    /// The `options:` header followed by two lines per visible option.
    pub fn option_lines(&self, options: &[CommandOption]) -> Vec<String> {
        let visible: Vec<&CommandOption> = options.iter().filter(|o| !o.is_hidden()).collect();
        let print_header = match self.header_policy() {
            OptionsHeader::WhenVisible => !visible.is_empty(),
            OptionsHeader::WhenDeclared => !options.is_empty(),
        };
        if !print_header {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(1 + visible.len() * 2);
        lines.push("options:".to_string());
        for option in visible {
            lines.push(format!("  {}{}", option.name(), alias_group(option)));
            lines.push(format!("    {}", option.description()));
        }
        lines
    }

    pub fn print_usage<S: AsRef<str>>(
        &self,
        logger: &dyn Logger,
        name: &str,
        args: &[S],
        options: &[CommandOption],
    ) {
        logger.info(&self.usage_line(name, args, options));
    }

    pub fn print_options(&self, logger: &dyn Logger, options: &[CommandOption]) {
        for line in self.option_lines(options) {
            logger.info(&line);
        }
    }
}

/// ` (-a -b)`, or empty when there are no aliases.
fn alias_group(option: &CommandOption) -> String {
    if option.aliases().is_empty() {
        return String::new();
    }
    let aliases: Vec<String> = option.aliases().iter().map(|a| format!("-{}", a)).collect();
    format!(" ({})", aliases.join(" "))
}
