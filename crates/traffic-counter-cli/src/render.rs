use std::fmt::Write;

use anyhow::{Context, Result};
use traffic_counter_core::{AnalysisOptions, Report};

use crate::shared::{format_record, format_timestamp, window_duration};

const NOT_AVAILABLE: &str = "<not available>";

pub fn render_text(report: &Report, options: &AnalysisOptions) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Total: {}", report.total);

    let _ = writeln!(out, "Cars per day:");
    for (day, count) in &report.per_day {
        let _ = writeln!(out, "{} {}", day.format("%Y-%m-%d"), count);
    }

    let _ = writeln!(out, "Top {} half hours:", options.top_limit);
    for record in &report.top {
        let _ = writeln!(out, "{}", format_record(record));
    }

    let _ = writeln!(
        out,
        "Least busy {} period:",
        window_duration(options.window_size)
    );
    match &report.quiet_window {
        Some(window) => {
            let _ = writeln!(out, "Start: {}", format_timestamp(&window.start));
            let _ = writeln!(out, "Total: {}", window.total);
            for record in &window.records {
                let _ = writeln!(out, "{}", format_record(record));
            }
        }
        None => {
            let _ = writeln!(out, "{}", NOT_AVAILABLE);
        }
    }

    out
}

pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report as JSON")
}
