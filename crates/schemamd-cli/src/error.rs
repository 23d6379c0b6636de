//! Error types and handling for the CLI
//!
//! This module provides the error type returned by every CLI step and
//! the mapping from each failure to a process exit code.

use schemamd_core::{ResolveError, TemplateError};
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `--schema` was not given
    #[error("no path to schema")]
    MissingSchema,

    /// IO error (writing output, reading files)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Loading or resolving the schema failed
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// The template could not be parsed
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSchema => 1,
            Self::Io(_) => 1,
            Self::Resolve(_) => 2,
            Self::Template(_) => 3,
            Self::FileNotFound { .. } => 4,
            Self::Config(_) => 5,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::MissingSchema)
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    let kind = match error {
        Error::Resolve(e) => Some(e.kind()),
        _ => None,
    };

    let message = match kind {
        Some(kind) => format!("{} [{}]", error, kind),
        None => error.to_string(),
    };

    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), message)
    } else {
        format!("Error: {}", message)
    }
}
