//! # Chatstats
//!
//! Descriptive statistics for exported chat logs.
//!
//! ## Overview
//!
//! Chatstats reads a WhatsApp-style text export, one message per line:
//!
//! ```text
//! [01/01/23, 10:00:00 AM] Alice: ‎hello world
//! ```
//!
//! and produces:
//! - message counts per sender (with every tied leader reported)
//! - message counts per calendar day
//! - the most frequent words
//! - the senders who never used a given marker in their messages
//! - a bar chart and a line chart of the above (`charts` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = LogParser::with_config(ParseConfig::without_excludes())?;
//!     let records = parser.parse_str(
//!         "[01/01/23, 10:00:00 AM] Alice: \u{200E}hello world\n\
//!          [01/01/23, 10:05:00 AM] Bob: \u{200E}hello there",
//!     )?;
//!
//!     assert_eq!(count_by_sender(&records).total(), 2);
//!     assert_eq!(top_words(&records, 1), vec![("hello".to_string(), 2)]);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`LogParser`](parser::LogParser) and [`parse`](parser::parse)
//! - [`stats`] - aggregates: [`count_by_sender`](stats::count_by_sender),
//!   [`count_by_day`](stats::count_by_day), [`top_words`](stats::top_words),
//!   [`senders_without_marker`](stats::senders_without_marker), [`Summary`](stats::Summary)
//! - [`report`] - console/JSON text and charts
//! - [`config`] - [`ParseConfig`](config::ParseConfig), [`ReportConfig`](config::ReportConfig)
//! - [`record`] - the [`Record`] type
//! - [`error`] - [`ChatstatsError`], [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod record;
pub mod report;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Record;

    pub use crate::error::{ChatstatsError, Result};

    pub use crate::config::{ChartConfig, ParseConfig, ReportConfig};

    pub use crate::parser::{LogParser, parse};

    pub use crate::stats::{
        Ranking, Summary, count_by_day, count_by_sender, senders_without_marker, top_words,
    };

    pub use crate::report::Reporter;
}
