//! Error types for StyleLens
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use thiserror::Error;

/// Main error type for StyleLens
#[derive(Error, Debug)]
pub enum StyleLensError {
    /// Rule construction errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Rule definition file errors
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tagged sentence input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Rendering and output errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors raised while constructing a rule.
///
/// A rule that fails to construct can never be matched safely, so these
/// surface at load time rather than on first use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule has no tokens at all
    #[error("rule '{rule_id}' has an empty pattern")]
    EmptyPattern {
        /// Identifier of the offending rule
        rule_id: String,
    },

    /// A token is empty once negation and quotes are stripped
    #[error("token '{token}' has an empty pattern")]
    EmptyTokenPattern {
        /// The raw token string as written
        token: String,
    },

    /// The marker points past the end of the token sequence
    #[error("rule '{rule_id}' has marker {marker} but only {tokens} tokens")]
    MarkerOutOfRange {
        /// Identifier of the offending rule
        rule_id: String,
        /// Configured marker offset
        marker: usize,
        /// Number of tokens in the pattern
        tokens: usize,
    },

    /// A token pattern is not a valid regular expression
    #[error("rule '{rule_id}' token '{token}' is not a valid expression: {message}")]
    InvalidRegex {
        /// Identifier of the offending rule
        rule_id: String,
        /// The token pattern that failed to compile
        token: String,
        /// Compiler message
        message: String,
    },
}

/// Errors raised while reading a rule definition file
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to read the rule file
    #[error("Failed to read rule file '{path}': {source}")]
    FileRead {
        /// Path to the rule file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The document is not well-formed markup
    #[error("Failed to parse rule file: {message}")]
    Parse {
        /// Parser message
        message: String,
    },

    /// A `<rule>` element has no `id` attribute
    #[error("rule at line {line} has no id")]
    MissingId {
        /// Line of the `<rule>` element
        line: u32,
    },

    /// A required element is missing from a rule
    #[error("rule '{rule_id}' is missing <{element}>")]
    MissingElement {
        /// Identifier of the offending rule
        rule_id: String,
        /// Name of the missing element
        element: &'static str,
    },

    /// An element holds a value of the wrong shape
    #[error("rule '{rule_id}' has an invalid <{element}> value '{value}'")]
    InvalidValue {
        /// Identifier of the offending rule
        rule_id: String,
        /// Name of the element
        element: &'static str,
        /// The text that failed to parse
        value: String,
    },

    /// The rule itself could not be constructed
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize configuration
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Neither the command line nor the configuration names a rule file
    #[error("No rule file given; pass --rules or set rules_file in .stylelens.toml")]
    MissingRulesFile,

    /// The configuration file exists and `--force` was not given
    #[error("Configuration file '{path}' already exists. Use --force to overwrite.")]
    AlreadyExists {
        /// Path to the existing file
        path: String,
    },
}

/// Errors related to tagged sentence input
#[derive(Error, Debug)]
pub enum InputError {
    /// Failed to read the input
    #[error("Failed to read input '{path}': {source}")]
    Read {
        /// Path of the input, or `-` for stdin
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The input is not a JSON array of tagged sentences
    #[error("Failed to parse tagged sentences: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while rendering or writing results
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to serialize to JSON
    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write an output file
    #[error("Failed to write '{path}': {source}")]
    FileWrite {
        /// Destination path
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to render the man page
    #[error("Failed to render man page: {0}")]
    Man(String),
}

impl From<toml::de::Error> for StyleLensError {
    fn from(err: toml::de::Error) -> Self {
        StyleLensError::Config(ConfigError::Parse(err))
    }
}

impl From<toml::ser::Error> for StyleLensError {
    fn from(err: toml::ser::Error) -> Self {
        StyleLensError::Config(ConfigError::Serialize(err))
    }
}

impl From<serde_json::Error> for StyleLensError {
    fn from(err: serde_json::Error) -> Self {
        StyleLensError::Output(OutputError::Json(err))
    }
}
