//! # ng Command Context
//!
//! File: cli/src/command/context.rs
//!
//! ## Overview
//!
//! The host builds a `CommandContext` once per invocation and hands it to the
//! command it dispatches to. The context bundles:
//! - `ui`: the informational / error output sink (`Ui`)
//! - `project`: an opaque handle on the project the CLI is running in
//!
//! Commands never mutate either. When the CLI runs outside a project the
//! host supplies no context at all, and the command's `project`/`ui` accessors
//! return `None`.
//!
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

/// Output capabilities the host exposes to commands.
pub trait Ui: Send + Sync {
    fn write_line(&self, message: &str);
    fn error_log(&self, message: &str);
}

/// `Ui` backed by stdout (lines) and stderr (errors).
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleUi;

impl Ui for ConsoleUi {
    fn write_line(&self, message: &str) {
        println!("{}", message);
    }

    fn error_log(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// `Ui` that captures output.
#[derive(Debug, Default)]
pub struct MemoryUi {
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemoryUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Ui for MemoryUi {
    fn write_line(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }

    fn error_log(&self, message: &str) {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// Handle on the project a command runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Shared context supplied by the host at command construction.
#[derive(Clone)]
pub struct CommandContext {
    pub ui: Arc<dyn Ui>,
    pub project: Project,
}

impl CommandContext {
    pub fn new(ui: Arc<dyn Ui>, project: Project) -> Self {
        Self { ui, project }
    }
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("project", &self.project)
            .finish_non_exhaustive()
    }
}
