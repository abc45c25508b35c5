//! Busiest half-hour selection.

use crate::models::TrafficRecord;

/// The `limit` records with the highest counts.
///
/// Ordered by count descending, then timestamp ascending. The sort is stable,
/// so records sharing both count and timestamp keep their input order. Fewer
/// than `limit` records are returned when the input is shorter.
pub fn top_half_hours(records: &[TrafficRecord], limit: usize) -> Vec<TrafficRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.timestamp.cmp(&b.timestamp)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn record(ts: &str, count: u64) -> TrafficRecord {
        let timestamp = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S").unwrap();
        TrafficRecord::new(timestamp, count)
    }

    fn counts(records: &[TrafficRecord]) -> Vec<u64> {
        records.iter().map(|r| r.count).collect()
    }

    #[test]
    fn picks_highest_counts() {
        let records = [
            record("2021-12-01T05:00:00", 5),
            record("2021-12-01T05:30:00", 12),
            record("2021-12-01T06:00:00", 14),
            record("2021-12-01T06:30:00", 15),
            record("2021-12-01T07:00:00", 25),
        ];
        assert_eq!(counts(&top_half_hours(&records, 3)), vec![25, 15, 14]);
    }

    #[test]
    fn tie_for_third_prefers_earlier_timestamp() {
        let records = [
            record("2021-12-01T05:00:00", 20),
            record("2021-12-01T05:30:00", 7),
            record("2021-12-01T06:00:00", 30),
            record("2021-12-01T06:30:00", 7),
        ];
        let top = top_half_hours(&records, 3);
        assert_eq!(counts(&top), vec![30, 20, 7]);
        assert_eq!(top[2].timestamp, records[1].timestamp);
    }

    #[test]
    fn tie_order_ignores_input_order() {
        let records = [
            record("2021-12-01T08:00:00", 4),
            record("2021-12-01T06:00:00", 4),
        ];
        let top = top_half_hours(&records, 3);
        assert_eq!(top[0].timestamp, records[1].timestamp);
    }

    #[test]
    fn duplicate_timestamps_are_distinct_entries() {
        let records = [
            record("2021-12-01T05:00:00", 3),
            record("2021-12-01T05:00:00", 9),
            record("2021-12-01T05:30:00", 1),
        ];
        let top = top_half_hours(&records, 3);
        assert_eq!(counts(&top), vec![9, 3, 1]);
        assert_eq!(top[0].timestamp, top[1].timestamp);
    }

    #[test]
    fn short_input_returns_everything() {
        let records = [
            record("2021-12-01T05:00:00", 1),
            record("2021-12-01T05:30:00", 2),
        ];
        assert_eq!(counts(&top_half_hours(&records, 3)), vec![2, 1]);
        assert!(top_half_hours(&[], 3).is_empty());
    }
}
