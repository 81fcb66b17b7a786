//! The structs
//!
use crate::records::LogRecord;

/// One record matched by a problem check, with the keyword that matched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProblemMatch {
    pub record: LogRecord,
    pub keyword: String,
}

/// Wrapper struct for the six problem lists.
///
/// Unlike categorization the checks are independent: every record is tested
/// against all six, and one record can appear in several lists.
#[derive(Debug, Default)]
pub struct AllProblems {
    pub errors: Vec<ProblemMatch>,
    pub warnings: Vec<ProblemMatch>,
    pub npm_errors: Vec<ProblemMatch>,
    pub deprecated: Vec<ProblemMatch>,
    pub file_errors: Vec<ProblemMatch>,
    pub timeouts: Vec<ProblemMatch>,
}
