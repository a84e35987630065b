//! Reporting: charts and console output built from a [`Summary`].
//!
//! - [`to_text`] - the console report, or a "no messages" line for empty input
//! - [`to_json`] - the same summary as pretty JSON
//! - [`render_sender_chart`] / [`render_daily_chart`] - PNG/SVG charts (requires `charts` feature)
//!
//! [`Reporter`] ties these together around a [`ReportConfig`].
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::ReportConfig;
//! use chatstats::report::Reporter;
//! use chatstats::parser::parse;
//!
//! let records = parse(["[01/01/23, 10:00:00 AM] Alice: \u{200E}hello"], &[] as &[&str])?;
//! let reporter = Reporter::new(ReportConfig::new());
//! let summary = reporter.summarize(&records);
//!
//! let text = reporter.text(&summary);
//! assert!(text.contains("The sender with the highest number of messages is: Alice"));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

#[cfg(feature = "charts")]
mod chart;
mod text;

#[cfg(feature = "charts")]
pub use chart::{render_daily_chart, render_sender_chart};
pub use text::{NO_MESSAGES, to_json, to_text};

#[cfg(feature = "charts")]
use std::path::PathBuf;

use crate::Record;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::stats::Summary;

/// Produces every report artifact from one configuration.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    /// Creates a reporter.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Computes the aggregates for `records`.
    pub fn summarize(&self, records: &[Record]) -> Summary {
        Summary::from_records(records, &self.config)
    }

    /// Console report text.
    pub fn text(&self, summary: &Summary) -> String {
        to_text(summary, &self.config)
    }

    /// JSON report text.
    pub fn json(&self, summary: &Summary) -> Result<String> {
        to_json(summary)
    }

    /// Writes both charts, returning the paths actually written.
    ///
    /// An empty summary writes nothing.
    #[cfg(feature = "charts")]
    pub fn render_charts(&self, summary: &Summary) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        if render_sender_chart(
            &summary.senders,
            &self.config.sender_chart_path,
            &self.config.chart,
        )? {
            written.push(self.config.sender_chart_path.clone());
        }

        if render_daily_chart(
            &summary.days,
            &self.config.daily_chart_path,
            &self.config.chart,
        )? {
            written.push(self.config.daily_chart_path.clone());
        }

        Ok(written)
    }
}
