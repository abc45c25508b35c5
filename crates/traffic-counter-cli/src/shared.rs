use std::fs::File;
use std::io::{self, BufRead, BufReader};

use chrono::NaiveDateTime;
use traffic_counter_core::TrafficRecord;

use crate::error::{CliError, CliResult};

pub fn open_input(path: &str) -> CliResult<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path)
        .map_err(|e| CliError::runtime(format!("Failed to open file '{}': {}", path, e)))?;
    Ok(Box::new(BufReader::new(file)))
}

/// ISO-8601 with fractional seconds only when present.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

pub fn format_record(record: &TrafficRecord) -> String {
    format!("{} {}", format_timestamp(&record.timestamp), record.count)
}

/// Human duration of `size` half hours, e.g. `1.5h` or `2h`.
pub fn window_duration(size: usize) -> String {
    let hours = size / 2;
    if size % 2 == 0 {
        format!("{}h", hours)
    } else {
        format!("{}.5h", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_duration_labels() {
        assert_eq!(window_duration(1), "0.5h");
        assert_eq!(window_duration(3), "1.5h");
        assert_eq!(window_duration(4), "2h");
    }

    #[test]
    fn record_format() {
        let ts = NaiveDateTime::parse_from_str("2021-12-01T07:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(
            format_record(&TrafficRecord::new(ts, 25)),
            "2021-12-01T07:00:00 25"
        );
    }

    #[test]
    fn fractional_seconds_are_printed() {
        let whole =
            NaiveDateTime::parse_from_str("2024-01-01T00:00:00", "%Y-%m-%dT%H:%M:%S%.f").unwrap();
        let half =
            NaiveDateTime::parse_from_str("2024-01-01T00:00:00.5", "%Y-%m-%dT%H:%M:%S%.f").unwrap();
        assert_eq!(format_timestamp(&whole), "2024-01-01T00:00:00");
        assert_eq!(format_timestamp(&half), "2024-01-01T00:00:00.500");
    }

    #[test]
    fn missing_file_is_runtime_error() {
        let err = open_input("/nonexistent/traffic.txt").err().unwrap();
        assert_eq!(err.exit_code(), crate::error::EXIT_RUNTIME_ERROR);
    }
}
