//! Report assembly.
//!
//! Sorts the records once and runs the aggregator, ranker and quiet-window
//! finder over the same sorted list.

use std::io::BufRead;

use tracing::debug;

use crate::aggregate::{total_count, totals_by_day};
use crate::error::{Result, TrafficError};
use crate::models::{AnalysisOptions, Report, TrafficRecord};
use crate::parse::read_records;
use crate::rank::top_half_hours;
use crate::window::quietest_period;

/// Build a [`Report`] from records in any order.
///
/// The sort is stable, so records sharing a timestamp stay in input order.
pub fn analyze(mut records: Vec<TrafficRecord>, options: AnalysisOptions) -> Result<Report> {
    if options.top_limit == 0 {
        return Err(TrafficError::InvalidOption(
            "top limit must be positive".to_string(),
        ));
    }

    records.sort();

    let report = Report {
        total: total_count(&records)?,
        per_day: totals_by_day(&records)?,
        top: top_half_hours(&records, options.top_limit),
        quiet_window: quietest_period(&records, options.window_size)?,
    };

    debug!(
        records = records.len(),
        days = report.per_day.len(),
        total = report.total,
        quiet_window = report.quiet_window.is_some(),
        "Built traffic report"
    );

    Ok(report)
}

/// Parse every line of `reader` and build a [`Report`].
///
/// A malformed line fails the whole call; no partial report is produced.
pub fn analyze_reader<R: BufRead>(reader: R, options: AnalysisOptions) -> Result<Report> {
    let records = read_records(reader)?;
    analyze(records, options)
}
