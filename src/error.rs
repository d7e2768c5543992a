//! Error types for the promptpalette CLI.
//!
//! The text assembly itself never fails; these errors cover the outer surface
//! (config loading, input reading, host API resolution).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptpalette operations.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Reading input or writing output failed.
    #[error("I/O failed: {0}")]
    IoError(String),
}

impl PaletteError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PaletteError::UserError(_) => exit_codes::USER_ERROR,
            PaletteError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for promptpalette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
