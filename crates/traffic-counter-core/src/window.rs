//! Quiet-window detection over possibly gapped series.
//!
//! A window is a run of consecutive entries of a chronologically sorted slice
//! in which every neighbouring pair is exactly 30 minutes apart. Adjacency in
//! the slice says nothing about adjacency in time, so each gap is checked
//! against the timestamps themselves.

use chrono::TimeDelta;
use tracing::debug;

use crate::aggregate::sum_counts;
use crate::error::{Result, TrafficError};
use crate::models::{QuietWindow, TrafficRecord};

/// Spacing between consecutive records of an unbroken series.
pub fn half_hour() -> TimeDelta {
    TimeDelta::minutes(30)
}

/// Iterate over every contiguous window of `size` records, in ascending
/// start order.
///
/// `records` must already be sorted by timestamp. Returns
/// [`TrafficError::InvalidOption`] when `size` is zero.
pub fn contiguous_windows(
    records: &[TrafficRecord],
    size: usize,
) -> Result<impl Iterator<Item = &[TrafficRecord]>> {
    if size == 0 {
        return Err(TrafficError::InvalidOption(
            "window size must be positive".to_string(),
        ));
    }

    let step = half_hour();
    Ok(records.windows(size).filter(move |window| {
        window
            .windows(2)
            .all(|pair| pair[1].timestamp - pair[0].timestamp == step)
    }))
}

/// Find the contiguous window of `size` records with the smallest total.
///
/// Ties go to the earliest-starting window. `Ok(None)` means no window in the
/// data qualifies, which includes inputs shorter than `size`.
///
/// # Examples
///
/// ```
/// use traffic_counter_core::parse::parse_records;
/// use traffic_counter_core::window::quietest_period;
///
/// let records = parse_records([
///     "2024-01-01T00:00:00 5",
///     "2024-01-01T00:30:00 0",
///     "2024-01-01T01:00:00 3",
/// ])
/// .unwrap();
///
/// let window = quietest_period(&records, 3).unwrap().unwrap();
/// assert_eq!(window.total, 8);
/// ```
pub fn quietest_period(records: &[TrafficRecord], size: usize) -> Result<Option<QuietWindow>> {
    let mut best: Option<(u64, &[TrafficRecord])> = None;
    let mut candidates = 0usize;

    for window in contiguous_windows(records, size)? {
        candidates += 1;
        let total = sum_counts(window)?;
        // Strictly less keeps the earliest window on ties.
        if best.is_none_or(|(best_total, _)| total < best_total) {
            best = Some((total, window));
        }
    }

    debug!(size, candidates, "Scanned contiguous windows");
    Ok(best.and_then(|(total, window)| QuietWindow::new(window, total)))
}
