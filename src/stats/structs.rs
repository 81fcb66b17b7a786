//! The structs
//!
use std::collections::BTreeMap;
use chrono::{DateTime, FixedOffset};

/// Basic statistics over the full record list.
///
/// First and last timestamp are taken by sequence position, not by
/// re-sorting. The duration can be zero (single record) or negative (input
/// not time-ordered); a negative duration is left visible in the output.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BasicStats {
    pub total_records: usize,
    pub first_timestamp: DateTime<FixedOffset>,
    pub last_timestamp: DateTime<FixedOffset>,
    /// Count of records per distinct stream value.
    pub streams: BTreeMap<String, usize>,
    /// The ten largest content lengths, descending, in characters.
    pub content_lengths: Vec<usize>,
    pub duration_seconds: f64,
    pub duration_minutes: f64,
}
