//! Core data types for traffic-counter.
//!
//! - [`TrafficRecord`] - One half-hour vehicle count
//! - [`QuietWindow`] - The least busy run of contiguous half hours
//! - [`Report`] - Everything derived from one dataset
//! - [`AnalysisOptions`] - Limits used when building a [`Report`]

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Default number of busiest half hours in a report.
pub const DEFAULT_TOP_LIMIT: usize = 3;

/// Default quiet window length in half hours (1.5h).
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Vehicle count for the 30-minute interval starting at `timestamp`.
///
/// Records compare and order by timestamp alone; two records at the same
/// instant are equal even when their counts differ.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrafficRecord {
    /// Start of the half hour, as a naive local date-time.
    pub timestamp: NaiveDateTime,
    /// Number of vehicles counted.
    pub count: u64,
}

impl TrafficRecord {
    pub fn new(timestamp: NaiveDateTime, count: u64) -> Self {
        Self { timestamp, count }
    }

    /// Calendar date the record belongs to.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

impl PartialEq for TrafficRecord {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp
    }
}

impl Eq for TrafficRecord {}

impl PartialOrd for TrafficRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TrafficRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

/// A run of consecutive records spaced exactly 30 minutes apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuietWindow {
    /// Timestamp of the first record in the window.
    pub start: NaiveDateTime,
    /// Sum of the counts of all records in the window.
    pub total: u64,
    /// The records making up the window, in chronological order.
    pub records: Vec<TrafficRecord>,
}

impl QuietWindow {
    pub(crate) fn new(records: &[TrafficRecord], total: u64) -> Option<Self> {
        let first = records.first()?;
        Some(Self {
            start: first.timestamp,
            total,
            records: records.to_vec(),
        })
    }
}

/// Summary analytics for a whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Sum of all counts.
    pub total: u64,
    /// Sum of counts per calendar date, in ascending date order.
    pub per_day: BTreeMap<NaiveDate, u64>,
    /// Busiest half hours: count descending, then timestamp ascending.
    pub top: Vec<TrafficRecord>,
    /// Least busy contiguous window, or `None` when no window qualifies.
    pub quiet_window: Option<QuietWindow>,
}

/// Limits applied when building a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// How many of the busiest half hours to keep.
    pub top_limit: usize,
    /// How many consecutive half-hour records form a quiet window.
    pub window_size: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_limit: DEFAULT_TOP_LIMIT,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}
