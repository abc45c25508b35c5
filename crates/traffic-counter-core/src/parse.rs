//! Record parsing.
//!
//! Input is one record per line:
//!
//! ```text
//! <ISO-8601 date-time><whitespace><non-negative integer count>
//! ```
//!
//! The timestamp is a naive local date-time (`2024-01-01T00:00:00`,
//! `2024-01-01T00:00:00.000` or `2024-01-01T00:00`); offsets are rejected.
//! The two fields are separated by any run of ASCII whitespace and a line must
//! contain exactly those two fields. Blank lines are skipped. The first bad
//! line aborts the parse.

use std::io::BufRead;

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use crate::error::{Result, TrafficError};
use crate::models::TrafficRecord;

// `%.f` also matches an absent fraction.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a single raw line.
///
/// `number` is the 1-based line number used in error messages. Returns
/// `Ok(None)` for blank lines.
///
/// # Examples
///
/// ```
/// use traffic_counter_core::parse::parse_line;
///
/// let record = parse_line("2024-01-01T00:00:00 5", 1).unwrap().unwrap();
/// assert_eq!(record.count, 5);
///
/// assert!(parse_line("   ", 2).unwrap().is_none());
/// assert!(parse_line("2024-01-01T00:00:00 -1", 3).is_err());
/// ```
pub fn parse_line(raw: &str, number: usize) -> Result<Option<TrafficRecord>> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split_ascii_whitespace();
    let (Some(timestamp_str), Some(count_str), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(TrafficError::MalformedLine {
            line: number,
            content: line.to_string(),
        });
    };

    let timestamp = parse_timestamp(timestamp_str).ok_or_else(|| TrafficError::InvalidTimestamp {
        line: number,
        value: timestamp_str.to_string(),
    })?;

    // u64 parsing rejects signs other than '+', so "-1" lands here too.
    let count: u64 = count_str.parse().map_err(|_| TrafficError::InvalidCount {
        line: number,
        value: count_str.to_string(),
    })?;

    Ok(Some(TrafficRecord::new(timestamp, count)))
}

/// Parse a naive ISO-8601 combined date-time.
///
/// Leap seconds (`:60`) are rejected; half-hour spacing is undefined
/// around them.
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .filter(|ts| ts.nanosecond() < 1_000_000_000)
}

/// Parse records from raw lines, failing on the first malformed line.
///
/// The output keeps input order; callers sort before analysis.
pub fn parse_records<I, S>(lines: I) -> Result<Vec<TrafficRecord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    for (index, raw) in lines.into_iter().enumerate() {
        if let Some(record) = parse_line(raw.as_ref(), index + 1)? {
            records.push(record);
        }
    }
    debug!(records = records.len(), "Parsed traffic records");
    Ok(records)
}

/// Read and parse every line of `reader`.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<TrafficRecord>> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    parse_records(lines)
}
