//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chatstats::ChatstatsError;
use chatstats::cli::Args;
use chatstats::parser::LogParser;
use chatstats::report::{NO_MESSAGES, Reporter};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let start = Instant::now();
    debug!(?args, "parsed CLI arguments");

    let parser = LogParser::with_config(args.parse_config())?;
    let records = parser.parse_file(&args.input)?;
    info!(
        input = %args.input.display(),
        records = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "loaded chat"
    );

    let reporter = Reporter::new(args.report_config());
    let summary = reporter.summarize(&records);

    if args.json {
        println!("{}", reporter.json(&summary)?);
        if summary.is_empty() {
            eprintln!("{}", NO_MESSAGES);
        }
    } else {
        print!("{}", reporter.text(&summary));
    }

    if !args.no_charts {
        write_charts(&reporter, &summary)?;
    }

    info!(elapsed_ms = start.elapsed().as_millis() as u64, "done");
    Ok(())
}

#[cfg(feature = "charts")]
fn write_charts(reporter: &Reporter, summary: &chatstats::stats::Summary) -> Result<(), ChatstatsError> {
    for path in reporter.render_charts(summary)? {
        eprintln!("📊 Chart saved to {}", path.display());
    }
    Ok(())
}

#[cfg(not(feature = "charts"))]
fn write_charts(_reporter: &Reporter, _summary: &chatstats::stats::Summary) -> Result<(), ChatstatsError> {
    tracing::warn!("built without the `charts` feature, skipping chart output");
    Ok(())
}
