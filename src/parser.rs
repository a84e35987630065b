//! Chat log parser.
//!
//! Turns exported chat lines of the form
//!
//! ```text
//! [01/01/23, 10:00:00 AM] Alice: \u{200E}hello world
//! ```
//!
//! into [`Record`]s. The invisible marker after `Sender: ` is what separates
//! real messages from system lines such as attachment notices, so lines
//! without it never match and are dropped silently.
//!
//! Three outcomes exist per line:
//! - no match: skipped, not an error
//! - match, body contains an exclusion word: dropped
//! - match, timestamp doesn't parse: the whole parse fails
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::parse;
//!
//! let lines = [
//!     "[01/01/23, 10:00:00 AM] Alice: \u{200E}hello world",
//!     "[01/01/23, 10:01:00 AM] Bob: \u{200E}hello left",
//! ];
//! let records = parse(lines, &["left"])?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].sender(), "Alice");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::{debug, info};

use crate::Record;
use crate::config::ParseConfig;
use crate::error::{ChatstatsError, Result};

/// Parser for exported chat logs.
///
/// The line pattern is compiled once in the constructor and reused for
/// every line.
#[derive(Debug, Clone)]
pub struct LogParser {
    config: ParseConfig,
    pattern: Regex,
}

/// Raw pieces of a line that matched the message pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Captured<'a> {
    timestamp: &'a str,
    sender: &'a str,
    message: &'a str,
}

impl LogParser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ParseConfig::default())
    }

    /// Creates a parser with a custom configuration.
    pub fn with_config(config: ParseConfig) -> Result<Self> {
        let pattern = Regex::new(&line_pattern(config.marker))?;
        Ok(Self { config, pattern })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parses a file from disk. A missing file is an IO error.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Record>> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses the full text of an export.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Record>> {
        self.parse_lines(content.lines())
    }

    /// Parses lines in order, returning one record per retained line.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Vec<Record>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut skipped = 0usize;
        let mut excluded = 0usize;

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line_no = idx + 1;

            let Some(caps) = self.capture(line) else {
                skipped += 1;
                debug!(line = line_no, "skipping line without message pattern");
                continue;
            };

            if let Some(word) = self.excluded_by(caps.message) {
                excluded += 1;
                debug!(line = line_no, word, "dropping line with excluded word");
                continue;
            }

            let format = self.config.timestamp_format.as_str();
            if !has_separators(caps.timestamp, format) {
                return Err(ChatstatsError::timestamp_layout(line_no, caps.timestamp, format));
            }
            let timestamp = NaiveDateTime::parse_from_str(caps.timestamp, format)
                .map_err(|e| ChatstatsError::timestamp(line_no, caps.timestamp, e))?;

            records.push(Record::new(timestamp, caps.sender, caps.message));
        }

        info!(
            records = records.len(),
            skipped, excluded, "parsed chat log"
        );
        Ok(records)
    }

    fn capture<'a>(&self, line: &'a str) -> Option<Captured<'a>> {
        let caps = self.pattern.captures(line)?;
        Some(Captured {
            timestamp: caps.get(1)?.as_str(),
            sender: caps.get(2)?.as_str(),
            message: caps.get(3)?.as_str(),
        })
    }

    /// Returns the first exclusion word found in `message`, if any.
    fn excluded_by(&self, message: &str) -> Option<&str> {
        self.config
            .exclude_words
            .iter()
            .map(String::as_str)
            .find(|word| message.contains(word))
    }
}

/// Each space in `format` must be matched by at least one whitespace
/// character in `input`.
fn has_separators(input: &str, format: &str) -> bool {
    input.split_whitespace().count() >= format.split_whitespace().count()
}

/// `[timestamp] sender: <marker>message`, sender ending at the first `: <marker>`.
fn line_pattern(marker: char) -> String {
    let marker = regex::escape(&marker.to_string());
    format!(r"^\[(.*?)\] (.+?): {marker}(.+)")
}

/// Parses `lines` with the default marker and timestamp format, dropping any
/// line whose body contains one of `exclude_words`.
pub fn parse<I, S, W>(lines: I, exclude_words: &[W]) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: AsRef<str>,
{
    let config = ParseConfig::default()
        .with_exclude_words(exclude_words.iter().map(|w| w.as_ref().to_string()));
    LogParser::with_config(config)?.parse_lines(lines)
}
