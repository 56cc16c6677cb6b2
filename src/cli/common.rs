//! Shared types for CLI command handlers.

use std::fmt;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid layout file, unreadable input or unwritable output
    Failure = 1,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Input was read but is not a usable layout
    Validation,
    /// Filesystem or serialization failure
    Io,
}

/// Error reported by a subcommand, printed to stderr by `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure category
    pub kind: CliErrorKind,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    pub const fn exit_code(&self) -> ExitCode {
        ExitCode::Failure
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Maps a layout load failure onto the matching CLI error kind.
pub fn load_error(error: &anyhow::Error) -> CliError {
    let is_format = error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<crate::error::Error>())
        .any(crate::error::Error::is_format_error);
    let message = format!("{error:#}");
    if is_format {
        CliError::validation(message)
    } else {
        CliError::io(message)
    }
}
