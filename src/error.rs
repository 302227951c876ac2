//! Unified error types for chatlens.
//!
//! Parsing a chat export is deliberately lossy and the statistics engine is
//! total over its input, so errors only surface at the edges: reading files,
//! decoding bytes, strict-mode validation and writing output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalyzerError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Strict parsing found timestamps that could not be parsed.
    #[error("{dropped} of {total} messages have unparseable timestamps{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    DroppedLines {
        /// Number of candidate messages that were dropped
        dropped: usize,
        /// Number of candidate messages found
        total: usize,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The export does not look like a supported chat export.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A user selection names a sender that is not in the export.
    #[error("Unknown user '{0}'")]
    UnknownUser(String),

    /// Failed to load a stop-word list.
    #[error("Failed to read stop words from {}: {source}", path.display())]
    StopWords {
        /// Path of the stop-word file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for AnalyzerError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AnalyzerError::Utf8 {
            context: "chat export".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl AnalyzerError {
    /// Creates a strict-mode error for dropped messages.
    pub fn dropped_lines(dropped: usize, total: usize, path: Option<PathBuf>) -> Self {
        AnalyzerError::DroppedLines {
            dropped,
            total,
            path,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        AnalyzerError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an unknown user error.
    pub fn unknown_user(name: impl Into<String>) -> Self {
        AnalyzerError::UnknownUser(name.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, AnalyzerError::Io(_))
    }

    /// Returns `true` if strict parsing rejected the export.
    pub fn is_dropped_lines(&self) -> bool {
        matches!(self, AnalyzerError::DroppedLines { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, AnalyzerError::InvalidFormat { .. })
    }
}
