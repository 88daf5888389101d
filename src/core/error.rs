//! Error types and error handling for the rules server.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes)
//! is handled in the `mcp` adapter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rules operations
pub type Result<T> = std::result::Result<T, RulesError>;

/// Why a single rule file could not be turned into a `Rule`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("no front-matter delimiter at start of file")]
    MissingFrontMatter,

    #[error("front-matter not closed with ---")]
    UnclosedFrontMatter,

    #[error("invalid front-matter YAML: {0}")]
    InvalidYaml(String),

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("duplicate rule identifier")]
    DuplicateId,

    #[error("file is not valid UTF-8 or unreadable: {0}")]
    Unreadable(String),
}

/// Main error type for the rules server
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to load rule '{id}': {source}")]
    Load {
        id: String,
        #[source]
        source: LoadError,
    },

    #[error("Rule not found: {0}")]
    RuleNotFound(String),

    #[error("No rules found for scope: {0}")]
    EmptyScope(String),

    #[error("Unknown category '{value}'. Valid categories: {}", .valid.join(", "))]
    InvalidCategory { value: String, valid: Vec<String> },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Rules directory not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl RulesError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, RulesError::RuleNotFound(_) | RulesError::EmptyScope(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            RulesError::InvalidCategory { .. } | RulesError::InvalidArgument(_)
        )
    }

    /// Check if this error should stop the process at startup
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RulesError::SourceMissing(_) | RulesError::ConfigError(_) | RulesError::TomlError(_)
        )
    }
}
