//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Tokenized-text directory contains no document files
    NoTokenFiles(String),
    /// Token file name does not carry a numeric document id
    InvalidDocumentFile(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoTokenFiles(dir) => {
                write!(f, "No token files found in directory: {dir}")
            }
            CliError::InvalidDocumentFile(path) => {
                write!(f, "Token file name is not a numeric document id: {path}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
