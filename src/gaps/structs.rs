//! The structs
//!
use chrono::{DateTime, FixedOffset};

/// Abbreviated view of the record on either side of a gap; the content is
/// truncated to 150 characters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GapBound {
    pub timestamp: DateTime<FixedOffset>,
    pub content: String,
}

/// One pause between two chronologically adjacent records that exceeded the
/// threshold.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TimeGap {
    pub gap_seconds: f64,
    pub before: GapBound,
    pub after: GapBound,
}

/// Wrapper struct for the found gaps, sorted descending by gap size.
#[derive(Debug, Default)]
pub struct AllTimeGaps {
    pub gaps: Vec<TimeGap>,
}
