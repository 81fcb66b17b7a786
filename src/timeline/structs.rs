//! The structs
//!
use chrono::{DateTime, FixedOffset};

/// One key build event: the record timestamp, the name of the pattern that
/// matched, and the content truncated to 200 characters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TimelineEvent {
    pub timestamp: DateTime<FixedOffset>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub content: String,
}

/// Wrapper struct for the chronological event list.
///
/// The events keep the original record order; the input is assumed
/// time-ordered and is not re-sorted.
#[derive(Debug, Default)]
pub struct AllTimelineEvents {
    pub events: Vec<TimelineEvent>,
}
