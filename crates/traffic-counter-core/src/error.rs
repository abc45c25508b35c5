//! Error types for traffic-counter-core.
//!
//! Every parse failure carries the 1-based line number and the text that
//! could not be read, so a caller can point at the offending record.

use thiserror::Error;

/// The main error type for traffic-count parsing and analysis.
#[derive(Debug, Error)]
pub enum TrafficError {
    /// The line does not split into `<timestamp> <count>`.
    #[error("Line {line} is not in '<timestamp> <count>' format: '{content}'")]
    MalformedLine { line: usize, content: String },

    /// The first field is not an ISO-8601 date-time.
    #[error("Line {line} has invalid timestamp: '{value}'")]
    InvalidTimestamp { line: usize, value: String },

    /// The second field is not a non-negative integer.
    #[error("Line {line} has invalid car count: '{value}'")]
    InvalidCount { line: usize, value: String },

    /// A summed count does not fit in a `u64`.
    #[error("Vehicle count total exceeds {}", u64::MAX)]
    CountOverflow,

    /// An analysis option is out of range (e.g. a window size of zero).
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Reading the input source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrafficError {
    /// The input line the error refers to, if it came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            TrafficError::MalformedLine { line, .. }
            | TrafficError::InvalidTimestamp { line, .. }
            | TrafficError::InvalidCount { line, .. } => Some(*line),
            TrafficError::CountOverflow
            | TrafficError::InvalidOption(_)
            | TrafficError::Io(_) => None,
        }
    }
}

/// Result type alias for traffic-counter operations.
pub type Result<T> = std::result::Result<T, TrafficError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_report_their_line() {
        let err = TrafficError::InvalidCount {
            line: 4,
            value: "-1".to_string(),
        };
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.to_string(), "Line 4 has invalid car count: '-1'");
    }

    #[test]
    fn option_errors_have_no_line() {
        let err = TrafficError::InvalidOption("window size must be positive".to_string());
        assert_eq!(err.line(), None);
    }
}
