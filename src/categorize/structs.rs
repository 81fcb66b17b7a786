//! The structs
//!
use std::collections::BTreeMap;
use crate::records::LogRecord;

/// The exclusive classification label of a record.
///
/// The declaration order is the priority order of the classification rules:
/// the first matching rule wins, so a record reading "ERROR: WARN detected"
/// is an [Category::Error], not a [Category::Warn]. The derived `Ord`
/// follows declaration order, which keeps the category map iterating in
/// priority order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Error,
    Warn,
    Info,
    Npm,
    Docker,
    Other,
}

/// Wrapper struct for the category partition.
///
/// Every loaded record sits in exactly one category list; the union of the
/// lists is the input. Categories without records have no entry.
#[derive(Debug, Default)]
pub struct AllCategories {
    pub categories: BTreeMap<Category, Vec<LogRecord>>,
}
