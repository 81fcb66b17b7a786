//! The impls and functions
//!
use log::*;
use regex::Regex;
use crate::records::AllRecords;
use crate::timeline::{AllTimelineEvents, TimelineEvent};
use crate::utility;

impl AllTimelineEvents {
    pub fn new() -> Self { Default::default() }
    /// Scan the records for the known build lifecycle patterns.
    ///
    /// The table order is the match priority: a record contributes at most
    /// one event, for the first pattern that matches. All matching is case
    /// insensitive.
    pub fn extract(
        allrecords: &AllRecords,
    ) -> AllTimelineEvents
    {
        info!("extracting timeline events");
        let patterns = [
            ("git_clone", Regex::new(r"(?i)Cloning into").unwrap()),
            ("git_checkout", Regex::new(r"(?i)HEAD is now at").unwrap()),
            ("npm_install_start", Regex::new(r"(?i)npm (install|ci)").unwrap()),
            ("npm_build_start", Regex::new(r"(?i)npm run build").unwrap()),
            ("docker_stage", Regex::new(r"(?i)Resolved base name|Retrieving image|Building stage").unwrap()),
            ("copying", Regex::new(r"(?i)Copying|COPY").unwrap()),
            ("completed", Regex::new(r"(?i)completed|finished|done").unwrap()),
        ];
        let mut alltimelineevents = AllTimelineEvents::new();
        for record in &allrecords.records {
            if let Some((event_type, _)) = patterns.iter().find(|(_, pattern)| pattern.is_match(&record.content)) {
                alltimelineevents.events.push(TimelineEvent {
                    timestamp: record.timestamp,
                    event_type: event_type.to_string(),
                    content: utility::truncate_chars(&record.content, 200),
                });
            };
        }
        alltimelineevents
    }
}
