//! The structs
//!
use chrono::{DateTime, FixedOffset};

/// A cluster of problem records sharing a normalized content prefix.
///
/// The sample is the grouping key: the content with terminal color escapes
/// stripped, truncated to the sample length, surrounding whitespace trimmed.
/// First/last occurrence follow input order, which derives from the
/// time-ordered record scan. The example is the cleaned content of the
/// first occurrence, truncated to 300 characters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AggregatedGroup {
    pub sample: String,
    pub count: usize,
    pub first_occurrence: DateTime<FixedOffset>,
    pub last_occurrence: DateTime<FixedOffset>,
    pub example: String,
}

/// Wrapper struct for the aggregated groups, sorted descending by count.
/// Groups with equal counts keep their discovery order.
#[derive(Debug, Default)]
pub struct AllAggregatedGroups {
    pub groups: Vec<AggregatedGroup>,
}
