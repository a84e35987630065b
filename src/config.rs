//! Configuration types for parsing and reporting.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParseConfig`] - line pattern details and the exclusion filter
//! - [`ReportConfig`] - chart destinations, font family and ranking limits
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{ParseConfig, ReportConfig};
//!
//! let parse = ParseConfig::new().with_exclude_word("deleted");
//! assert!(parse.exclude_words.iter().any(|w| w == "deleted"));
//!
//! let report = ReportConfig::new()
//!     .with_font_family("Noto Sans")
//!     .with_top_words(20);
//! assert_eq!(report.chart.font_family, "Noto Sans");
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Invisible left-to-right mark that precedes message bodies in the export.
pub const DEFAULT_MARKER: char = '\u{200E}';

/// Timestamp layout inside the brackets: `dd/mm/yy, hh:mm:ss AM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%y, %I:%M:%S %p";

/// Substrings that drop a line during parsing.
///
/// These catch membership notices ("joined using this group's invite link",
/// "left") and phone-number senders. Matching is a plain case-sensitive
/// substring test, so ordinary messages containing "this" are dropped too.
pub const DEFAULT_EXCLUDE_WORDS: &[&str] = &["joined", "using", "this", "+91", "left", "~"];

/// Configuration for the log parser.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ParseConfig;
///
/// let config = ParseConfig::without_excludes().with_exclude_word("spam");
/// assert_eq!(config.exclude_words, vec!["spam".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Lines whose body contains any of these substrings are dropped.
    pub exclude_words: Vec<String>,

    /// Character separating the `Sender: ` prefix from the body (default: U+200E)
    pub marker: char,

    /// chrono format string for the bracketed timestamp
    pub timestamp_format: String,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            exclude_words: DEFAULT_EXCLUDE_WORDS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
            marker: DEFAULT_MARKER,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with the default exclusion list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with an empty exclusion list.
    pub fn without_excludes() -> Self {
        Self {
            exclude_words: Vec::new(),
            ..Self::default()
        }
    }

    /// Adds one exclusion word.
    #[must_use]
    pub fn with_exclude_word(mut self, word: impl Into<String>) -> Self {
        self.exclude_words.push(word.into());
        self
    }

    /// Replaces the exclusion list.
    #[must_use]
    pub fn with_exclude_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the marker character.
    #[must_use]
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Sets the timestamp format.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

/// Chart styling handed to the reporter at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Font family used for captions and labels (default: "DejaVu Sans")
    pub font_family: String,

    /// Sender bar chart size in pixels
    pub sender_chart_size: (u32, u32),

    /// Daily line chart size in pixels
    pub daily_chart_size: (u32, u32),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            font_family: "DejaVu Sans".to_string(),
            sender_chart_size: (1000, 600),
            daily_chart_size: (1200, 600),
        }
    }
}

/// Configuration for the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Destination of the messages-per-sender bar chart
    pub sender_chart_path: PathBuf,

    /// Destination of the messages-per-day line chart
    pub daily_chart_path: PathBuf,

    /// Chart styling
    pub chart: ChartConfig,

    /// How many senders the ranked list shows (default: 50)
    pub top_senders: usize,

    /// How many words the frequency list shows (default: 10)
    pub top_words: usize,

    /// Substring that marks a sender as "using the marker" (default: "~")
    pub sender_marker: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sender_chart_path: PathBuf::from("messages_per_sender.png"),
            daily_chart_path: PathBuf::from("message_distribution_over_time.png"),
            chart: ChartConfig::default(),
            top_senders: 50,
            top_words: 10,
            sender_marker: "~".to_string(),
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender chart destination.
    #[must_use]
    pub fn with_sender_chart_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sender_chart_path = path.into();
        self
    }

    /// Sets the daily chart destination.
    #[must_use]
    pub fn with_daily_chart_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.daily_chart_path = path.into();
        self
    }

    /// Sets the chart font family.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.chart.font_family = family.into();
        self
    }

    /// Sets the length of the ranked sender list.
    #[must_use]
    pub fn with_top_senders(mut self, n: usize) -> Self {
        self.top_senders = n;
        self
    }

    /// Sets the length of the word frequency list.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }
}
