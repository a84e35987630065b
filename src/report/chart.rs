//! Chart rendering with plotters.
//!
//! Output format follows the file extension: `.svg` goes through the SVG
//! backend, everything else through the bitmap backend (PNG by default).
//! Fonts come from the [`ChartConfig`] passed in, never from global state.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::config::ChartConfig;
use crate::error::{ChatstatsError, Result};
use crate::stats::Ranking;

const CAPTION_SIZE: i32 = 24;
const LABEL_SIZE: i32 = 13;

/// Draws the messages-per-sender bar chart.
///
/// Returns `Ok(false)` without touching the filesystem when there is
/// nothing to draw.
pub fn render_sender_chart(
    senders: &Ranking<String>,
    path: &Path,
    config: &ChartConfig,
) -> Result<bool> {
    if senders.is_empty() {
        return Ok(false);
    }

    let size = config.sender_chart_size;
    let drawn = if is_svg(path) {
        draw_sender_chart(&SVGBackend::new(path, size).into_drawing_area(), senders, config)
            .map_err(|e| ChatstatsError::chart(path, e.to_string()))
    } else {
        draw_sender_chart(&BitMapBackend::new(path, size).into_drawing_area(), senders, config)
            .map_err(|e| ChatstatsError::chart(path, e.to_string()))
    };
    drawn?;

    info!(path = %path.display(), senders = senders.len(), "wrote sender chart");
    Ok(true)
}

/// Draws the messages-per-day line chart.
///
/// Returns `Ok(false)` without touching the filesystem when there is
/// nothing to draw.
pub fn render_daily_chart(
    days: &BTreeMap<NaiveDate, usize>,
    path: &Path,
    config: &ChartConfig,
) -> Result<bool> {
    if days.is_empty() {
        return Ok(false);
    }

    let size = config.daily_chart_size;
    let drawn = if is_svg(path) {
        draw_daily_chart(&SVGBackend::new(path, size).into_drawing_area(), days, config)
            .map_err(|e| ChatstatsError::chart(path, e.to_string()))
    } else {
        draw_daily_chart(&BitMapBackend::new(path, size).into_drawing_area(), days, config)
            .map_err(|e| ChatstatsError::chart(path, e.to_string()))
    };
    drawn?;

    info!(path = %path.display(), days = days.len(), "wrote daily chart");
    Ok(true)
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Leaves ~10% headroom above the tallest bar or point.
fn y_upper(max: usize) -> u32 {
    let max = max as u32;
    max + max / 10 + 1
}

fn draw_sender_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    senders: &Ranking<String>,
    config: &ChartConfig,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let font = config.font_family.as_str();
    let names: Vec<&str> = senders.iter().map(|(name, _)| name.as_str()).collect();

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption("Number of Messages per Sender", (font, CAPTION_SIZE))
        .margin(10)
        .x_label_area_size(160)
        .y_label_area_size(60)
        // integer ranges are inclusive: one slot per sender
        .build_cartesian_2d(
            (0..names.len().saturating_sub(1)).into_segmented(),
            0u32..y_upper(senders.max_count()),
        )?;

    let sender_label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => names.get(*i).map(|s| (*s).to_string()).unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Sender")
        .y_desc("Message Count")
        .x_labels(names.len())
        .x_label_formatter(&sender_label)
        .x_label_style(
            (font, LABEL_SIZE)
                .into_font()
                .transform(FontTransform::Rotate270),
        )
        .y_label_style((font, LABEL_SIZE))
        .axis_desc_style((font, LABEL_SIZE + 2))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.7).filled())
            .margin(4)
            .data(
                senders
                    .iter()
                    .enumerate()
                    .map(|(i, (_, count))| (i, *count as u32)),
            ),
    )?;

    root.present()?;
    Ok(())
}

fn draw_daily_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    days: &BTreeMap<NaiveDate, usize>,
    config: &ChartConfig,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let font = config.font_family.as_str();

    // callers guarantee at least one day
    let (Some(first), Some(last)) = (days.keys().next(), days.keys().next_back()) else {
        return Ok(());
    };
    // pad one day each side so a single-day chat still has a width
    let start = first.pred_opt().unwrap_or(*first);
    let end = last.succ_opt().unwrap_or(*last);
    let max = days.values().copied().max().unwrap_or(0);

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption("Message Distribution Over Time", (font, CAPTION_SIZE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(start..end, 0u32..y_upper(max))?;

    let date_label = |d: &NaiveDate| d.format("%Y-%m-%d").to_string();

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Message Count")
        .x_labels(8)
        .x_label_formatter(&date_label)
        .label_style((font, LABEL_SIZE))
        .axis_desc_style((font, LABEL_SIZE + 2))
        .draw()?;

    chart.draw_series(LineSeries::new(
        days.iter().map(|(day, count)| (*day, *count as u32)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}
