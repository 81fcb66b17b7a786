//! The impls and functions
//!
use log::*;
use crate::gaps::{AllTimeGaps, GapBound, TimeGap};
use crate::records::{AllRecords, LogRecord};
use crate::utility;

impl AllTimeGaps {
    pub fn new() -> Self { Default::default() }
    /// Compute the pause between every pair of adjacent records and keep
    /// the ones strictly above the threshold, sorted non-increasing by gap
    /// size. Fewer than two records produce no gaps.
    pub fn find(
        allrecords: &AllRecords,
        threshold_seconds: f64,
    ) -> AllTimeGaps
    {
        info!("finding time gaps above {} seconds", threshold_seconds);
        let mut alltimegaps = AllTimeGaps::new();
        for pair in allrecords.records.windows(2) {
            let gap_seconds = (pair[1].timestamp - pair[0].timestamp).num_milliseconds() as f64 / 1000.;
            if gap_seconds > threshold_seconds {
                alltimegaps.gaps.push(TimeGap {
                    gap_seconds,
                    before: gap_bound(&pair[0]),
                    after: gap_bound(&pair[1]),
                });
            };
        }
        alltimegaps.gaps.sort_by(|a, b| b.gap_seconds.total_cmp(&a.gap_seconds));
        alltimegaps
    }
}

fn gap_bound(
    record: &LogRecord,
) -> GapBound
{
    GapBound {
        timestamp: record.timestamp,
        content: utility::truncate_chars(&record.content, 150),
    }
}
