//! The impls and functions
//!
use std::collections::HashMap;
use log::*;
use crate::aggregate::{AggregatedGroup, AllAggregatedGroups};
use crate::problems::ProblemMatch;
use crate::utility;

/// The example of a group is the cleaned content of the first occurrence,
/// truncated to this many characters.
const EXAMPLE_LENGTH: usize = 300;

impl AllAggregatedGroups {
    pub fn new() -> Self { Default::default() }
    /// Group the matches of one problem kind by the first `sample_length`
    /// characters of their escape-stripped content.
    ///
    /// The groups live in the vector in discovery order and the map only
    /// indexes into it; the final sort by count is stable, so ties keep
    /// discovery order.
    pub fn aggregate(
        problem_matches: &[ProblemMatch],
        sample_length: usize,
    ) -> AllAggregatedGroups
    {
        info!("aggregating {} problem records", problem_matches.len());
        let mut allaggregatedgroups = AllAggregatedGroups::new();
        let mut group_index: HashMap<String, usize> = HashMap::new();
        for problem_match in problem_matches {
            let clean_content = utility::strip_ansi(&problem_match.record.content);
            let sample = utility::truncate_chars(&clean_content, sample_length).trim().to_string();
            match group_index.get(&sample) {
                Some(&index) => {
                    let group = &mut allaggregatedgroups.groups[index];
                    group.count += 1;
                    group.last_occurrence = problem_match.record.timestamp;
                },
                None => {
                    group_index.insert(sample.clone(), allaggregatedgroups.groups.len());
                    allaggregatedgroups.groups.push(AggregatedGroup {
                        sample,
                        count: 1,
                        first_occurrence: problem_match.record.timestamp,
                        last_occurrence: problem_match.record.timestamp,
                        example: utility::truncate_chars(&clean_content, EXAMPLE_LENGTH),
                    });
                },
            };
        }
        allaggregatedgroups.groups.sort_by(|a, b| b.count.cmp(&a.count));
        allaggregatedgroups
    }
}
