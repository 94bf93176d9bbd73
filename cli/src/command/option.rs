//! # ng Option Descriptors
//!
//! File: cli/src/command/option.rs
//!
//! ## Overview
//!
//! A `CommandOption` declares one configurable flag a command accepts. It is
//! pure data: the external parser (clap, in the `ng` binary) consumes the
//! actual argv, while descriptors drive help rendering and let dispatchers
//! inspect what a command declares.
//!
//! The three required fields (`name`, `description`, `type`) are taken by
//! `CommandOption::new`, so a descriptor without them cannot be built. All
//! other fields start unset and are added with builder methods:
//!
//! ```rust
//! use ng_cli::command::{CommandOption, OptionType, OptionValue};
//!
//! let opt = CommandOption::new("dry-run", "Report without writing files.", OptionType::Boolean)
//!     .alias("d")
//!     .default_value(false);
//! assert_eq!(opt.aliases(), ["d".to_string()]);
//! assert_eq!(opt.default(), Some(&OptionValue::Boolean(false)));
//! assert!(!opt.is_hidden());
//! ```
//!
use std::fmt;

/// The value type a flag expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    String,
    Number,
    Boolean,
    Array,
}

/// A literal option value, used for defaults and allowed-value sets.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::String(s) => f.write_str(s),
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Boolean(value)
    }
}

/// Immutable descriptor of a flag a command accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOption {
    name: String,
    description: String,
    option_type: OptionType,
    aliases: Vec<String>,
    default: Option<OptionValue>,
    required: Option<bool>,
    values: Vec<OptionValue>,
    hidden: bool,
}

impl CommandOption {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        option_type: OptionType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            option_type,
            aliases: Vec::new(),
            default: None,
            required: None,
            values: Vec::new(),
            hidden: false,
        }
    }

    /// Appends a short-form name. Aliases keep their declaration order.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<OptionValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Restricts the option to the given literal values.
    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<OptionValue>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn default(&self) -> Option<&OptionValue> {
        self.default.as_ref()
    }

    /// The raw `required` flag; `None` when the declaration left it unset.
    pub fn required_flag(&self) -> Option<bool> {
        self.required
    }

    /// Unset counts as not required.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    pub fn allowed_values(&self) -> &[OptionValue] {
        &self.values
    }

    /// Whether `value` is permitted. An empty allowed-value set permits anything.
    pub fn allows(&self, value: &OptionValue) -> bool {
        self.values.is_empty() || self.values.contains(value)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
