//! # ng Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by the command contract and the `ng` binary:
//! - `config`: Configuration loading, expansion and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{NgError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
