//! The impls and functions
//!
use std::collections::BTreeMap;
use log::*;
use crate::records::{AllRecords, LoadError};
use crate::stats::BasicStats;

impl BasicStats {
    /// Compute the basic statistics. The only failure is an empty record
    /// list, for which first/last timestamp are undefined.
    pub fn from_records(
        allrecords: &AllRecords,
    ) -> Result<BasicStats, LoadError>
    {
        info!("computing basic statistics");
        let first = allrecords.records.first().ok_or(LoadError::Empty)?;
        let last = allrecords.records.last().ok_or(LoadError::Empty)?;

        let mut streams: BTreeMap<String, usize> = BTreeMap::new();
        for record in &allrecords.records {
            *streams.entry(record.stream.clone()).or_insert(0) += 1;
        }

        let mut content_lengths: Vec<usize> = allrecords.records.iter()
            .map(|record| record.content.chars().count())
            .collect();
        content_lengths.sort_unstable_by(|a, b| b.cmp(a));
        content_lengths.truncate(10);

        let duration_seconds = (last.timestamp - first.timestamp).num_milliseconds() as f64 / 1000.;

        Ok(BasicStats {
            total_records: allrecords.records.len(),
            first_timestamp: first.timestamp,
            last_timestamp: last.timestamp,
            streams,
            content_lengths,
            duration_seconds,
            duration_minutes: duration_seconds / 60.,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use crate::records::LogRecord;

    fn record(timestamp: &str, stream: &str, content: &str) -> LogRecord {
        LogRecord {
            timestamp: DateTime::parse_from_rfc3339(timestamp).unwrap(),
            stream: stream.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn unit_stats_three_records() {
        let allrecords = AllRecords { records: vec![
            record("2024-01-01T00:00:00Z", "stdout", "first"),
            record("2024-01-01T00:00:10Z", "stderr", "second"),
            record("2024-01-01T00:01:10Z", "stdout", "third"),
        ]};
        let basicstats = BasicStats::from_records(&allrecords).unwrap();
        assert_eq!(basicstats.total_records, 3);
        assert_eq!(basicstats.duration_seconds, 70.);
        assert_eq!(basicstats.streams.get("stdout"), Some(&2));
        assert_eq!(basicstats.streams.get("stderr"), Some(&1));
    }
    #[test]
    fn unit_stats_single_record_zero_duration() {
        let allrecords = AllRecords { records: vec![
            record("2024-01-01T00:00:00Z", "stdout", "only"),
        ]};
        let basicstats = BasicStats::from_records(&allrecords).unwrap();
        assert_eq!(basicstats.total_records, 1);
        assert_eq!(basicstats.duration_seconds, 0.);
        assert_eq!(basicstats.first_timestamp, basicstats.last_timestamp);
    }
    #[test]
    fn unit_stats_out_of_order_input_yields_negative_duration() {
        // not defensively checked: a negative duration is the data quality signal
        let allrecords = AllRecords { records: vec![
            record("2024-01-01T00:01:00Z", "stdout", "late"),
            record("2024-01-01T00:00:00Z", "stdout", "early"),
        ]};
        let basicstats = BasicStats::from_records(&allrecords).unwrap();
        assert_eq!(basicstats.duration_seconds, -60.);
    }
    #[test]
    fn unit_stats_content_lengths_top_ten_descending() {
        let records = (1..=12)
            .map(|length| record("2024-01-01T00:00:00Z", "stdout", &"x".repeat(length)))
            .collect();
        let basicstats = BasicStats::from_records(&AllRecords { records }).unwrap();
        assert_eq!(basicstats.content_lengths, vec![12, 11, 10, 9, 8, 7, 6, 5, 4, 3]);
    }
    #[test]
    fn unit_stats_empty_input_fails() {
        let result = BasicStats::from_records(&AllRecords::new());
        assert!(matches!(result, Err(LoadError::Empty)));
    }
}
