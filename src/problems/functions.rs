//! The impls and functions
//!
use log::*;
use crate::problems::{AllProblems, ProblemMatch};
use crate::records::{AllRecords, LogRecord};

/// Tested in order; the first matching keyword is the one recorded.
const ERROR_KEYWORDS: [&str; 6] = ["ERROR", "FATAL", "EXCEPTION", "FAILED", "FAIL", "PANIC"];
const WARNING_KEYWORDS: [&str; 2] = ["WARN", "WARNING"];
/// npm/yarn/gyp print these with this exact casing, so this check is
/// deliberately case sensitive.
const NPM_ERROR_MARKERS: [&str; 3] = ["npm ERR!", "yarn ERR!", "gyp ERR!"];
const FILE_ERROR_CODES: [&str; 3] = ["ENOENT", "EACCES", "EPERM"];

impl AllProblems {
    pub fn new() -> Self { Default::default() }
    /// Run all six checks over every record.
    pub fn find(
        allrecords: &AllRecords,
    ) -> AllProblems
    {
        info!("scanning for problem patterns");
        let mut allproblems = AllProblems::new();
        for record in &allrecords.records {
            let content_upper = record.content.to_uppercase();

            if let Some(keyword) = ERROR_KEYWORDS.into_iter().find(|keyword| content_upper.contains(*keyword)) {
                allproblems.errors.push(problem_match(record, keyword));
            };
            if let Some(keyword) = WARNING_KEYWORDS.into_iter().find(|keyword| content_upper.contains(*keyword)) {
                allproblems.warnings.push(problem_match(record, keyword));
            };
            if NPM_ERROR_MARKERS.into_iter().any(|marker| record.content.contains(marker)) {
                allproblems.npm_errors.push(problem_match(record, "NPM_ERROR"));
            };
            if content_upper.contains("DEPRECATED") {
                allproblems.deprecated.push(problem_match(record, "DEPRECATED"));
            };
            if FILE_ERROR_CODES.into_iter().any(|code| content_upper.contains(code)) {
                allproblems.file_errors.push(problem_match(record, "FILE_ERROR"));
            };
            // ETIMEDOUT does not contain the word "timeout", hence the two tests
            if content_upper.contains("ETIMEDOUT") || record.content.to_lowercase().contains("timeout") {
                allproblems.timeouts.push(problem_match(record, "TIMEOUT"));
            };
        }
        allproblems
    }
}

fn problem_match(
    record: &LogRecord,
    keyword: &str,
) -> ProblemMatch
{
    ProblemMatch {
        record: record.clone(),
        keyword: keyword.to_string(),
    }
}
