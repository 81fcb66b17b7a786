//! The structs
//!
use std::collections::BTreeMap;
use chrono::{DateTime, FixedOffset};
use crate::aggregate::AggregatedGroup;
use crate::gaps::TimeGap;
use crate::stats::BasicStats;
use crate::timeline::TimelineEvent;

/// Where the report text goes, one line per `emit` call.
///
/// The silent option selects the no-op sink; the summary file is written
/// either way. This replaces redirecting the global output stream.
pub trait ReportSink {
    fn emit(&mut self, text: &str);
}

/// Prints every emitted line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

/// Discards every emitted line.
#[derive(Debug, Default)]
pub struct SilentSink;

/// The summary that is serialized to the summary file.
/// All lists are bounded so the file stays small regardless of input size.
#[derive(Serialize, Debug)]
pub struct Summary {
    pub stats: BasicStats,
    pub categories: BTreeMap<String, usize>,
    pub problems: ProblemSummary,
    pub timeline: Vec<TimelineEvent>,
    pub time_gaps: Vec<TimeGap>,
    pub error_aggregated: Vec<AggregatedGroup>,
    pub deprecated_aggregated: Vec<AggregatedGroup>,
}

/// The problem counts plus bounded example lists.
#[derive(Serialize, Debug)]
pub struct ProblemSummary {
    pub errors_count: usize,
    pub errors_examples: Vec<ProblemExample>,
    pub warnings_count: usize,
    pub warnings_examples: Vec<ProblemExample>,
    pub npm_errors: usize,
    pub deprecated: usize,
    pub file_errors: usize,
    pub timeouts: usize,
}

/// One example: timestamp, cleaned content (truncated to 300 characters),
/// and the keyword that matched. Serializes as a JSON triple.
#[derive(Serialize, Debug)]
pub struct ProblemExample(
    pub DateTime<FixedOffset>,
    pub String,
    pub String,
);
