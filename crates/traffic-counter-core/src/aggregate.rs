//! Totals over a record set.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{Result, TrafficError};
use crate::models::TrafficRecord;

/// Sum of the counts of `records`, failing with
/// [`TrafficError::CountOverflow`] instead of wrapping.
pub fn sum_counts<'a, I>(records: I) -> Result<u64>
where
    I: IntoIterator<Item = &'a TrafficRecord>,
{
    records
        .into_iter()
        .try_fold(0u64, |acc, r| acc.checked_add(r.count))
        .ok_or(TrafficError::CountOverflow)
}

/// Sum of all counts. Zero for an empty slice.
pub fn total_count(records: &[TrafficRecord]) -> Result<u64> {
    sum_counts(records)
}

/// Sum of counts grouped by the calendar date of each timestamp.
///
/// Timestamps are naive, so grouping uses the date component as written in
/// the input with no time zone conversion.
pub fn totals_by_day(records: &[TrafficRecord]) -> Result<BTreeMap<NaiveDate, u64>> {
    let mut daily: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        let day = daily.entry(record.date()).or_insert(0);
        *day = day
            .checked_add(record.count)
            .ok_or(TrafficError::CountOverflow)?;
    }
    Ok(daily)
}
