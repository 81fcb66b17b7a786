//! The structs
//!
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// One raw row of the input file.
///
/// ```text
/// [
///   {
///     "timestamp": "2024-01-01T00:00:00Z",
///     "stream": "stdout",
///     "content": "Cloning into 'frontend'..."
///   },
///   ...
/// ```
/// All three fields are required; deserialization fails when one is missing.
/// The timestamp stays a string here and is parsed into [LogRecord].
#[derive(Serialize, Deserialize, Debug)]
pub struct RecordRow {
    pub timestamp: String,
    pub stream: String,
    pub content: String,
}

/// One captured log record, immutable once loaded.
///
/// The content may contain embedded terminal color escape sequences;
/// the stages that need clean text strip them themselves.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<FixedOffset>,
    pub stream: String,
    pub content: String,
}

/// Wrapper struct for holding the loaded records.
///
/// The input sequence is assumed ordered by non-decreasing timestamp and is
/// never re-sorted. An out-of-order sequence is a data quality signal, not
/// an error: it surfaces as a negative duration or gap in the output.
#[derive(Debug, Default)]
pub struct AllRecords {
    pub records: Vec<LogRecord>,
}

/// The fatal load failures. Everything past loading only reads the records
/// and cannot fail.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file is missing, unreadable, or not a valid record array.
    #[error("malformed input: {path}")]
    Malformed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The input parsed, but holds zero records. First/last timestamp and
    /// duration are undefined without records, so this aborts the run.
    #[error("empty input: no log records to analyze")]
    Empty,
}
