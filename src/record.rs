//! The parsed chat record.
//!
//! A [`Record`] is one retained chat message: when it was sent, who sent it,
//! and the body text after the invisible marker. Records are produced by the
//! [`parser`](crate::parser) in file line order and are read-only afterwards.
//!
//! # Examples
//!
//! ```
//! use chatstats::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let record = Record::new(ts, "Alice", "hello world");
//!
//! assert_eq!(record.sender(), "Alice");
//! assert_eq!(record.message(), "hello world");
//! assert_eq!(record.date(), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single parsed chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local send time as written in the export |
/// | `sender` | `String` | Display name of the author |
/// | `message` | `String` | Body text following the marker character |
///
/// Export timestamps carry no zone information, so they stay naive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    timestamp: NaiveDateTime,
    sender: String,
    message: String,
}

impl Record {
    /// Creates a record from its parts.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            message: message.into(),
        }
    }

    /// Returns the send time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date of the send time, dropping time-of-day.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the body contains `needle` (case-sensitive).
    pub fn contains(&self, needle: &str) -> bool {
        self.message.contains(needle)
    }
}
