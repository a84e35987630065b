//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers every
//! failure the library can report. Only two things are fatal during a run:
//! an unreadable input file and a matched line whose timestamp does not parse.
//! Lines that simply don't look like chat messages are skipped, never errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The chart output directory is missing
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line matched the message pattern but its timestamp is malformed.
    ///
    /// This aborts the whole run; there is no per-line recovery.
    #[error("Invalid timestamp '{input}' on line {line}: {source}")]
    Timestamp {
        /// 1-based line number in the input
        line: usize,
        /// The raw timestamp text between the brackets
        input: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// A timestamp has fewer whitespace-separated fields than the format.
    ///
    /// chrono lets a format space match no input at all, so
    /// `01/01/23,10:00:00 AM` would otherwise parse.
    #[error("Invalid timestamp '{input}' on line {line}: expected layout '{format}'")]
    TimestampLayout {
        /// 1-based line number in the input
        line: usize,
        /// The raw timestamp text between the brackets
        input: String,
        /// The configured timestamp format
        format: String,
    },

    /// The line pattern failed to compile.
    #[error("Invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A chart could not be rendered or saved.
    #[error("Failed to render chart {}: {message}", path.display())]
    Chart {
        /// Destination image path
        path: PathBuf,
        /// Backend error description
        message: String,
    },

    /// JSON serialization error (summary output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a timestamp error for the given line.
    pub fn timestamp(line: usize, input: impl Into<String>, source: chrono::ParseError) -> Self {
        ChatstatsError::Timestamp {
            line,
            input: input.into(),
            source,
        }
    }

    /// Creates a layout error for a timestamp missing a separator.
    pub fn timestamp_layout(
        line: usize,
        input: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        ChatstatsError::TimestampLayout {
            line,
            input: input.into(),
            format: format.into(),
        }
    }

    /// Creates a chart rendering error.
    pub fn chart(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ChatstatsError::Chart {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is a timestamp error of either kind.
    pub fn is_timestamp(&self) -> bool {
        matches!(
            self,
            ChatstatsError::Timestamp { .. } | ChatstatsError::TimestampLayout { .. }
        )
    }

    /// Returns `true` if this is a chart rendering error.
    pub fn is_chart(&self) -> bool {
        matches!(self, ChatstatsError::Chart { .. })
    }
}
