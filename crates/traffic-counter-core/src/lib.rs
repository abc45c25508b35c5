//! # traffic-counter-core
//!
//! Parsing and analytics for automated half-hour traffic counts.
//!
//! Each input line holds the start of a half-hour interval and the number of
//! vehicles counted during it. From a whole dataset this crate computes:
//!
//! - **Total** vehicle count.
//! - **Per-day totals**, keyed by calendar date in ascending order.
//! - **Busiest half hours**, ranked by count with the earliest timestamp
//!   winning ties.
//! - **Quietest window**: the contiguous run of half hours (1.5h by default)
//!   with the smallest total. Runs never span a recording gap.
//!
//! ## Example
//!
//! ```rust
//! use traffic_counter_core::prelude::*;
//!
//! let input = "\
//! 2024-01-01T00:00:00 5
//! 2024-01-01T00:30:00 0
//! 2024-01-01T01:00:00 3
//! ";
//!
//! let report = analyze_reader(input.as_bytes(), AnalysisOptions::default()).unwrap();
//!
//! assert_eq!(report.total, 8);
//! assert_eq!(report.top[0].count, 5);
//! assert_eq!(report.quiet_window.unwrap().total, 8);
//! ```

pub mod aggregate;
pub mod error;
pub mod models;
pub mod parse;
pub mod rank;
pub mod report;
pub mod window;

// Re-export commonly used types at the crate root
pub use aggregate::{sum_counts, total_count, totals_by_day};
pub use error::{Result, TrafficError};
pub use models::{AnalysisOptions, QuietWindow, Report, TrafficRecord};
pub use parse::{parse_line, parse_records, read_records};
pub use rank::top_half_hours;
pub use report::{analyze, analyze_reader};
pub use window::{contiguous_windows, quietest_period};

/// Prelude module for convenient imports.
///
/// ```
/// use traffic_counter_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{total_count, totals_by_day};
    pub use crate::error::{Result, TrafficError};
    pub use crate::models::*;
    pub use crate::parse::{parse_records, read_records};
    pub use crate::rank::top_half_hours;
    pub use crate::report::{analyze, analyze_reader};
    pub use crate::window::quietest_period;
}
