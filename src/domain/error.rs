//! Domain error types

use thiserror::Error;

/// Error raised when a notification cannot be delivered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("No notification backend available for platform \"{0}\"")]
    UnsupportedPlatform(String),

    #[error("Failed to run {program}: {reason}")]
    Execution { program: String, reason: String },
}

impl NotifyError {
    /// Build an execution error for the given program
    pub fn execution(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Execution {
            program: program.into(),
            reason: reason.into(),
        }
    }
}

/// Error when parsing an urgency string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid urgency: \"{input}\". Valid urgencies are: normal, critical")]
pub struct InvalidUrgencyError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
