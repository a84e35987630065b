//! Command-line interface definition using clap.
//!
//! [`Args`] maps directly onto [`ParseConfig`] and [`ReportConfig`], so the
//! binary stays a thin shell around the library.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{ParseConfig, ReportConfig};

/// Parse an exported chat log and report who talks most, when, and about what.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats
    chatstats _chat.txt --top-words 25
    chatstats chat.txt --sender-chart senders.svg --daily-chart days.svg
    chatstats chat.txt --no-charts --json
    chatstats chat.txt --no-default-excludes --exclude deleted")]
pub struct Args {
    /// Path to the exported chat text file
    #[arg(default_value = "_chat.txt")]
    pub input: PathBuf,

    /// Where to write the messages-per-sender bar chart (.png or .svg)
    #[arg(long, value_name = "PATH", default_value = "messages_per_sender.png")]
    pub sender_chart: PathBuf,

    /// Where to write the messages-per-day line chart (.png or .svg)
    #[arg(long, value_name = "PATH", default_value = "message_distribution_over_time.png")]
    pub daily_chart: PathBuf,

    /// Font family for chart captions and labels
    #[arg(long, value_name = "FAMILY", default_value = "DejaVu Sans")]
    pub font: String,

    /// Drop lines whose message contains this text (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "WORD")]
    pub exclude: Vec<String>,

    /// Start from an empty exclusion list instead of the built-in one
    #[arg(long)]
    pub no_default_excludes: bool,

    /// How many senders to list in the ranking
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub top_senders: usize,

    /// How many of the most common words to list
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_words: usize,

    /// Skip writing chart images
    #[arg(long)]
    pub no_charts: bool,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the parser configuration.
    pub fn parse_config(&self) -> ParseConfig {
        let base = if self.no_default_excludes {
            ParseConfig::without_excludes()
        } else {
            ParseConfig::new()
        };
        self.exclude
            .iter()
            .fold(base, |config, word| config.with_exclude_word(word.clone()))
    }

    /// Builds the reporter configuration.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_sender_chart_path(self.sender_chart.clone())
            .with_daily_chart_path(self.daily_chart.clone())
            .with_font_family(self.font.clone())
            .with_top_senders(self.top_senders)
            .with_top_words(self.top_words)
    }

    /// Default tracing filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
