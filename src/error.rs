//! Error types for layout import.
//!
//! Only the pre-processor can fail. The interpreter, the legend classifier and
//! the icon extractor are total and degrade gracefully on malformed input.

/// Convenience alias for library results.
pub type Result<T> = std::result::Result<T, Error>;

/// The input is not structurally a layout document.
///
/// Every variant is the same error kind to callers ("invalid layout file");
/// the variants only exist so diagnostics can tell a syntax problem apart from
/// a shape problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Trimmed input does not start with `[` or `{`.
    #[error("not array/object: layout text must start with '[' or '{{' (found {found})")]
    NotArrayOrObject {
        /// Short description of what was found instead
        found: String,
    },

    /// Neither the strict nor the permissive decoder accepted the text.
    #[error("invalid layout syntax: {permissive} (strict JSON: {strict})")]
    Syntax {
        /// Diagnostic from the strict JSON decoder
        strict: String,
        /// Diagnostic from the permissive literal decoder
        permissive: String,
    },

    /// The text decoded, but the top level is not an array of rows.
    #[error("not array/object: decoded layout is a {found}, expected an array of rows")]
    NotRows {
        /// JSON type name of the decoded top level
        found: &'static str,
    },
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Legacy layout text could not be decoded.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Normalized layout JSON could not be decoded or encoded.
    #[error("invalid normalized layout: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a layout file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true when the error means "invalid layout file" to the user.
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_) | Self::Json(_))
    }
}
