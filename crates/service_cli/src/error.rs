//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a CLI command.
///
/// Per-request domain failures inside a batch are not errors at this level;
/// they are reported inline next to the request that caused them.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Argument value not understood
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request file is not valid JSON
    #[error("Malformed request file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
