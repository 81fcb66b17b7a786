//! The impls and functions
//!
use std::fs;
use chrono::DateTime;
use log::*;
use crate::records::{AllRecords, LoadError, LogRecord, RecordRow};

impl AllRecords {
    pub fn new() -> Self { Default::default() }
    /// Load the log records from a JSON file.
    ///
    /// Fails with [LoadError::Malformed] when the file cannot be read or is
    /// not a valid record array, and with [LoadError::Empty] when no records
    /// survive loading.
    pub fn from_file(
        path: &str,
    ) -> Result<AllRecords, LoadError>
    {
        info!("loading log records from {}", path);
        let data = fs::read_to_string(path)
            .map_err(|source| LoadError::Malformed { path: path.to_string(), source: Box::new(source) })?;
        let rows: Vec<RecordRow> = serde_json::from_str(&data)
            .map_err(|source| LoadError::Malformed { path: path.to_string(), source: Box::new(source) })?;
        let allrecords = AllRecords::parse_rows(rows);
        if allrecords.records.is_empty() {
            return Err(LoadError::Empty);
        };
        info!("loaded {} records", allrecords.records.len());
        Ok(allrecords)
    }
    /// Timestamps are parsed once, here, with RFC 3339 rules (the `Z` suffix
    /// is accepted). A row with an unparsable timestamp is skipped with a
    /// warning, so no later stage can trip over it.
    fn parse_rows(
        rows: Vec<RecordRow>,
    ) -> AllRecords
    {
        let mut allrecords = AllRecords::new();
        for row in rows {
            match DateTime::parse_from_rfc3339(&row.timestamp) {
                Ok(timestamp) => {
                    allrecords.records.push(LogRecord {
                        timestamp,
                        stream: row.stream,
                        content: row.content,
                    });
                },
                Err(error) => warn!("skipping record with unparsable timestamp {:?}: {}", row.timestamp, error),
            };
        }
        allrecords
    }
}
