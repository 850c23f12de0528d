//! Error types for the gacha CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The notation engine itself never fails; these cover input and configuration.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for gacha operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum GachaError {
    /// User provided invalid arguments or unusable input.
    #[error("{0}")]
    UserError(String),

    /// Configuration file could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl GachaError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GachaError::UserError(_) => exit_codes::USER_ERROR,
            GachaError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            GachaError::IoError(_) => exit_codes::IO_ERROR,
        }
    }
}

/// Result type alias for gacha operations.
pub type Result<T> = std::result::Result<T, GachaError>;
