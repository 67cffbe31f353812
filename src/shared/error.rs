use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a licence finding apart from a
/// failure to run at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every licence classified, or unknown licences tolerated
    Success = 0,
    /// Unknown licences were found and `--strict` was given
    UnknownLicencesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, malformed JSON, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnknownLicencesFound => write!(f, "Unknown Licences Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised around the licence model: reading the SPDX Licence List,
/// decoding licence expression documents, and writing reports.
///
/// The licence model itself never fails; these come from the adapters.
#[derive(Debug, Error)]
pub enum LicenceError {
    #[error("SPDX Licence List not found: {path}\n\n💡 Hint: {suggestion}")]
    LicenceListNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse SPDX Licence List: {path}\nDetails: {details}\n\n💡 Hint: Use the licenses.json file published by SPDX (https://spdx.org/licenses/licenses.json)")]
    LicenceListParseError { path: PathBuf, details: String },

    #[error("Failed to parse licence expressions: {path}\nDetails: {details}\n\n💡 Hint: Expect a licence tree object or an array of them, each tagged with \"type\"")]
    ExpressionParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
