//! Error types and handling for encoder-register
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for registration operations
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    #[error("Encoder executable not found: {path}")]
    #[diagnostic(
        code(encoder_register::environment::missing_executable),
        help("Place encoder-register next to encoder-gui.exe, or pass --exe <FILE>")
    )]
    MissingExecutable { path: String },

    #[error("Client profile '{name}' cannot be registered")]
    #[diagnostic(
        code(encoder_register::document::invalid_profile_name),
        help(
            "Rename the profile directory: no whitespace, quotes, slashes, brackets or control characters"
        )
    )]
    InvalidProfileName { name: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(encoder_register::fs::write_failed))]
    WriteFailed { path: String, reason: String },

    // Each import outcome is constructed on one platform only
    #[error("Registry import failed: {reason}")]
    #[diagnostic(
        code(encoder_register::registry::import_failed),
        help("Writing HKEY_CLASSES_ROOT requires administrator rights. Run from an elevated prompt")
    )]
    #[cfg_attr(not(windows), allow(dead_code))]
    ImportFailed { reason: String },

    #[error("Registry import is only available on Windows")]
    #[diagnostic(
        code(encoder_register::registry::unsupported_platform),
        help("Use --dry-run to preview the entries, or --export <FILE> to write the .reg file")
    )]
    #[cfg_attr(windows, allow(dead_code))]
    UnsupportedPlatform,

    #[error("IO error: {message}")]
    #[diagnostic(code(encoder_register::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SetupError {
    fn from(err: inquire::InquireError) -> Self {
        SetupError::IoError {
            message: format!("Failed to read confirmation: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SetupError>;
