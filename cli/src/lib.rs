//! # ng CLI Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! The library half of the `ng` crate. It holds everything a host needs to
//! define and drive subcommands:
//!
//! - `command`: the `Command` contract, option descriptors, context, logger,
//!   help renderer and lifecycle driver
//! - `commands`: the built-in subcommands (`version`, `new`, `info`)
//! - `core`: configuration and error types
//!
//! The `ng` binary (`main.rs`) is a thin host on top of this library.
//!
pub mod command;
pub mod commands;
pub mod core;
