//! The impls and functions
//!
use std::collections::BTreeMap;
use std::fmt;
use log::*;
use crate::categorize::{AllCategories, Category};
use crate::records::AllRecords;
use crate::utility;

/// Keywords that mark a record as docker build machinery when one of them
/// appears in the first 50 characters.
const DOCKER_KEYWORDS: [&str; 4] = ["docker", "kaniko", "building", "copying"];

// the red, yellow and cyan color escapes the build tooling uses for
// error, warning and info lines
const RED_ESCAPE: &str = "\x1b[31m";
const YELLOW_ESCAPE: &str = "\x1b[33m";
const CYAN_ESCAPE: &str = "\x1b[36m";

impl Category {
    /// Classify one record content. The rules are tested top to bottom and
    /// the first match wins.
    pub fn classify(
        content: &str,
    ) -> Category
    {
        let content_upper = content.to_uppercase();
        if content.contains(RED_ESCAPE) || content_upper.contains("ERROR") || content_upper.contains("FATAL") {
            Category::Error
        } else if content.contains(YELLOW_ESCAPE) || content_upper.contains("WARN") {
            Category::Warn
        } else if content.contains(CYAN_ESCAPE) || content_upper.contains("INFO") {
            Category::Info
        } else if utility::truncate_chars(content, 30).to_lowercase().contains("npm") {
            Category::Npm
        } else if DOCKER_KEYWORDS.iter().any(|keyword| utility::truncate_chars(content, 50).to_lowercase().contains(keyword)) {
            Category::Docker
        } else {
            Category::Other
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Error => "ERROR",
            Category::Warn => "WARN",
            Category::Info => "INFO",
            Category::Npm => "NPM",
            Category::Docker => "DOCKER",
            Category::Other => "OTHER",
        };
        write!(f, "{}", label)
    }
}

impl AllCategories {
    pub fn new() -> Self { Default::default() }
    /// Partition the records over the categories.
    pub fn categorize(
        allrecords: &AllRecords,
    ) -> AllCategories
    {
        info!("categorizing records by level");
        let mut allcategories = AllCategories::new();
        for record in &allrecords.records {
            allcategories.categories
                .entry(Category::classify(&record.content))
                .or_insert_with(Vec::new)
                .push(record.clone());
        }
        allcategories
    }
    /// The record count per category label, for the summary file.
    pub fn counts(
        &self,
    ) -> BTreeMap<String, usize>
    {
        self.categories.iter()
            .map(|(category, records)| (category.to_string(), records.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use crate::records::LogRecord;

    fn record(content: &str) -> LogRecord {
        LogRecord {
            timestamp: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap(),
            stream: "stdout".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn unit_classify_error_beats_warn() {
        assert_eq!(Category::classify("ERROR: WARN detected"), Category::Error);
    }
    #[test]
    fn unit_classify_red_escape_is_error() {
        assert_eq!(Category::classify("\x1b[31msomething went wrong\x1b[0m"), Category::Error);
    }
    #[test]
    fn unit_classify_is_case_insensitive() {
        assert_eq!(Category::classify("fatal: repository not found"), Category::Error);
        assert_eq!(Category::classify("warning: symlink ignored"), Category::Warn);
        assert_eq!(Category::classify("info: using cache"), Category::Info);
    }
    #[test]
    fn unit_classify_npm_only_within_first_30_characters() {
        assert_eq!(Category::classify("npm notice created a lockfile"), Category::Npm);
        // "npm" past the 30 character window does not count
        assert_eq!(Category::classify("...............................npm run build"), Category::Other);
    }
    #[test]
    fn unit_classify_docker_keywords_within_first_50_characters() {
        assert_eq!(Category::classify("Building stage 'build' [2/4]"), Category::Docker);
        assert_eq!(Category::classify("kaniko executor started"), Category::Docker);
        assert_eq!(Category::classify(&format!("{}copying files", " ".repeat(50))), Category::Other);
    }
    #[test]
    fn unit_classify_fallthrough_is_other() {
        assert_eq!(Category::classify("> vite build"), Category::Other);
    }
    #[test]
    fn unit_categorize_is_a_partition() {
        let allrecords = AllRecords { records: vec![
            record("ERROR: failed"),
            record("WARN: slow"),
            record("npm install"),
            record("plain line"),
            record("plain line"),
        ]};
        let allcategories = AllCategories::categorize(&allrecords);
        let total: usize = allcategories.categories.values().map(|records| records.len()).sum();
        assert_eq!(total, allrecords.records.len());
        // every record lands in exactly one list
        assert_eq!(allcategories.categories.get(&Category::Error).unwrap().len(), 1);
        assert_eq!(allcategories.categories.get(&Category::Warn).unwrap().len(), 1);
        assert_eq!(allcategories.categories.get(&Category::Npm).unwrap().len(), 1);
        assert_eq!(allcategories.categories.get(&Category::Other).unwrap().len(), 2);
    }
    #[test]
    fn unit_counts_use_display_labels() {
        let allrecords = AllRecords { records: vec![record("ERROR: failed")] };
        let counts = AllCategories::categorize(&allrecords).counts();
        assert_eq!(counts.get("ERROR"), Some(&1));
    }
}
