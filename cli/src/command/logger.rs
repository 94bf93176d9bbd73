//! # ng Command Logger
//!
//! File: cli/src/command/logger.rs
//!
//! ## Overview
//!
//! The `Logger` is the write-only sink a command receives at construction and
//! uses for user-facing output such as help text. It is distinct from the
//! `tracing` diagnostics, which go to stderr and are filtered by verbosity.
//!
//! - `ConsoleLogger`: `info` to stdout, `warn`/`error` to stderr
//! - `MemoryLogger`: keeps every line in memory, for tests and for callers
//!   that want to post-process help text
//!
use std::sync::{Mutex, PoisonError};

/// Write-only output sink handed to every command.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str) {
        self.info(message);
    }

    fn error(&self, message: &str) {
        self.info(message);
    }
}

/// Logger writing to the process's standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Severity of a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Logger that records lines instead of printing them.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: Level, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }

    /// All captured lines in write order, regardless of level.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Captured lines of a single level.
    pub fn lines_at(&self, level: Level) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Captured lines joined with `\n`, handy for snapshot comparisons.
    pub fn output(&self) -> String {
        self.lines().join("\n")
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}
