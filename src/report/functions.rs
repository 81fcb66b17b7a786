//! The impls and functions
//!
use std::fs;
use anyhow::{Context, Result};
use colored::*;
use log::*;
use crate::aggregate::AllAggregatedGroups;
use crate::categorize::AllCategories;
use crate::gaps::AllTimeGaps;
use crate::problems::{AllProblems, ProblemMatch};
use crate::report::{ConsoleSink, ProblemExample, ProblemSummary, ReportSink, SilentSink, Summary};
use crate::stats::BasicStats;
use crate::timeline::AllTimelineEvents;
use crate::utility;

// report excerpt sizes
const PRINT_ERROR_SAMPLES: usize = 5;
const PRINT_WARNING_SAMPLES: usize = 3;
const PRINT_TIMELINE_EVENTS: usize = 15;
const PRINT_TIME_GAPS: usize = 5;
const PRINT_ERROR_GROUPS: usize = 10;
const PRINT_DEPRECATED_GROUPS: usize = 5;

// summary file bounds
const SUMMARY_ERROR_EXAMPLES: usize = 20;
const SUMMARY_WARNING_EXAMPLES: usize = 10;
const SUMMARY_TIMELINE_EVENTS: usize = 30;
const SUMMARY_TIME_GAPS: usize = 10;
const SUMMARY_ERROR_GROUPS: usize = 15;
const SUMMARY_DEPRECATED_GROUPS: usize = 10;

impl ReportSink for ConsoleSink {
    fn emit(&mut self, text: &str) {
        println!("{}", text);
    }
}
impl ReportSink for SilentSink {
    fn emit(&mut self, _text: &str) {}
}

/// The sink matching the silent option.
pub fn sink_for(
    silent: bool,
) -> Box<dyn ReportSink>
{
    if silent {
        Box::new(SilentSink)
    } else {
        Box::new(ConsoleSink)
    }
}

fn section(
    sink: &mut dyn ReportSink,
    title: &str,
)
{
    sink.emit("");
    sink.emit(&"=".repeat(80));
    sink.emit(title);
    sink.emit(&"=".repeat(80));
}

fn percentage(
    count: usize,
    total: usize,
) -> f64
{
    count as f64 / total as f64 * 100.
}

/// Print the full sectioned report to the sink.
/// Pure presentation: nothing upstream is recomputed or altered.
#[allow(clippy::too_many_arguments)]
pub fn print_report(
    sink: &mut dyn ReportSink,
    logfile: &str,
    basicstats: &BasicStats,
    allcategories: &AllCategories,
    allproblems: &AllProblems,
    alltimelineevents: &AllTimelineEvents,
    alltimegaps: &AllTimeGaps,
    error_aggregated: &AllAggregatedGroups,
    deprecated_aggregated: &AllAggregatedGroups,
    summary_file: &str,
)
{
    section(sink, "DOCKER BUILD LOG ANALYSIS");
    sink.emit(&format!("Input: {}", logfile));
    sink.emit(&format!("{} loaded {} records", "[OK]".green(), basicstats.total_records));

    section(sink, "1. BASIC STATISTICS");
    sink.emit(&format!("Total records: {}", basicstats.total_records));
    sink.emit("Time range:");
    sink.emit(&format!("  start: {}", basicstats.first_timestamp.to_rfc3339()));
    sink.emit(&format!("  end:   {}", basicstats.last_timestamp.to_rfc3339()));
    sink.emit(&format!("  duration: {:.2} minutes ({:.0} seconds)", basicstats.duration_minutes, basicstats.duration_seconds));
    sink.emit("Stream distribution:");
    for (stream, count) in &basicstats.streams {
        sink.emit(&format!("  {}: {} records ({:.1}%)", stream, count, percentage(*count, basicstats.total_records)));
    }
    sink.emit(&format!("Top-10 longest messages (characters): {:?}", basicstats.content_lengths));

    section(sink, "2. CATEGORIZATION BY LEVEL");
    let mut categories: Vec<(_, _)> = allcategories.categories.iter().collect();
    categories.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    for (category, records) in categories {
        sink.emit(&format!("  {}: {} records ({:.1}%)", category, records.len(), percentage(records.len(), basicstats.total_records)));
    }

    section(sink, "3. PROBLEM PATTERNS");
    sink.emit(&format!("Errors (ERROR/FATAL/EXCEPTION): {}", colored_count(allproblems.errors.len())));
    for (number, problem_match) in allproblems.errors.iter().take(PRINT_ERROR_SAMPLES).enumerate() {
        emit_problem_sample(sink, number, problem_match);
    }
    sink.emit(&format!("Warnings (WARN): {}", colored_count(allproblems.warnings.len())));
    for (number, problem_match) in allproblems.warnings.iter().take(PRINT_WARNING_SAMPLES).enumerate() {
        emit_problem_sample(sink, number, problem_match);
    }
    sink.emit(&format!("NPM errors: {}", colored_count(allproblems.npm_errors.len())));
    sink.emit(&format!("Deprecated dependencies: {}", colored_count(allproblems.deprecated.len())));
    sink.emit(&format!("File errors (ENOENT/EACCES/EPERM): {}", colored_count(allproblems.file_errors.len())));
    sink.emit(&format!("Timeouts: {}", colored_count(allproblems.timeouts.len())));

    section(sink, "4. TIMELINE");
    sink.emit(&format!("Key events: {}", alltimelineevents.events.len()));
    for (number, event) in alltimelineevents.events.iter().take(PRINT_TIMELINE_EVENTS).enumerate() {
        sink.emit(&format!("{:2}. [{}] {}", number + 1, event.timestamp.to_rfc3339(), event.event_type));
        sink.emit(&format!("    {}", utility::truncate_chars(&event.content, 150)));
    }
    sink.emit("");
    sink.emit(&format!("Anomalously long pauses: {}", alltimegaps.gaps.len()));
    for (number, gap) in alltimegaps.gaps.iter().take(PRINT_TIME_GAPS).enumerate() {
        sink.emit(&format!("{}. pause of {:.1} seconds", number + 1, gap.gap_seconds));
        sink.emit(&format!("   before: [{}] {}", gap.before.timestamp.to_rfc3339(), utility::truncate_chars(&gap.before.content, 100)));
        sink.emit(&format!("   after:  [{}] {}", gap.after.timestamp.to_rfc3339(), utility::truncate_chars(&gap.after.content, 100)));
    }

    section(sink, "5. DUPLICATE AGGREGATION");
    sink.emit(&format!("Distinct error types: {}", error_aggregated.groups.len()));
    for (number, group) in error_aggregated.groups.iter().take(PRINT_ERROR_GROUPS).enumerate() {
        sink.emit(&format!("{}. seen {} times", number + 1, group.count));
        sink.emit(&format!("   first: {}", group.first_occurrence.to_rfc3339()));
        sink.emit(&format!("   last:  {}", group.last_occurrence.to_rfc3339()));
        sink.emit(&format!("   sample: {}", utility::truncate_chars(&group.sample, 120)));
    }
    sink.emit("");
    sink.emit(&format!("Distinct deprecation warnings: {}", deprecated_aggregated.groups.len()));
    for (number, group) in deprecated_aggregated.groups.iter().take(PRINT_DEPRECATED_GROUPS).enumerate() {
        sink.emit(&format!("{}. seen {} times: {}", number + 1, group.count, utility::truncate_chars(&group.sample, 150)));
    }

    section(sink, "SAVING RESULTS");
    sink.emit(&format!("{} summary saved to: {}", "[OK]".green(), summary_file));
}

fn colored_count(
    count: usize,
) -> ColoredString
{
    if count > 0 {
        count.to_string().red()
    } else {
        count.to_string().green()
    }
}

fn emit_problem_sample(
    sink: &mut dyn ReportSink,
    number: usize,
    problem_match: &ProblemMatch,
)
{
    sink.emit(&format!("  {}. [{}] {}", number + 1, problem_match.record.timestamp.to_rfc3339(), problem_match.keyword.yellow()));
    sink.emit(&format!("     {}", utility::truncate_chars(&utility::strip_ansi(&problem_match.record.content), 200)));
}

/// Serialize the bounded summary to the summary file.
#[allow(clippy::too_many_arguments)]
pub fn save_summary(
    summary_file: &str,
    basicstats: &BasicStats,
    allcategories: &AllCategories,
    allproblems: &AllProblems,
    alltimelineevents: &AllTimelineEvents,
    alltimegaps: &AllTimeGaps,
    error_aggregated: &AllAggregatedGroups,
    deprecated_aggregated: &AllAggregatedGroups,
) -> Result<()>
{
    info!("saving summary to {}", summary_file);
    let summary = Summary {
        stats: basicstats.clone(),
        categories: allcategories.counts(),
        problems: ProblemSummary {
            errors_count: allproblems.errors.len(),
            errors_examples: problem_examples(&allproblems.errors, SUMMARY_ERROR_EXAMPLES),
            warnings_count: allproblems.warnings.len(),
            warnings_examples: problem_examples(&allproblems.warnings, SUMMARY_WARNING_EXAMPLES),
            npm_errors: allproblems.npm_errors.len(),
            deprecated: allproblems.deprecated.len(),
            file_errors: allproblems.file_errors.len(),
            timeouts: allproblems.timeouts.len(),
        },
        timeline: alltimelineevents.events.iter().take(SUMMARY_TIMELINE_EVENTS).cloned().collect(),
        time_gaps: alltimegaps.gaps.iter().take(SUMMARY_TIME_GAPS).cloned().collect(),
        error_aggregated: error_aggregated.groups.iter().take(SUMMARY_ERROR_GROUPS).cloned().collect(),
        deprecated_aggregated: deprecated_aggregated.groups.iter().take(SUMMARY_DEPRECATED_GROUPS).cloned().collect(),
    };
    fs::write(summary_file, serde_json::to_string_pretty(&summary)
        .with_context(|| "Json serialization error")?
    ).with_context(|| format!("Error saving summary: {}", summary_file))?;
    Ok(())
}

fn problem_examples(
    problem_matches: &[ProblemMatch],
    bound: usize,
) -> Vec<ProblemExample>
{
    problem_matches.iter()
        .take(bound)
        .map(|problem_match| ProblemExample(
            problem_match.record.timestamp,
            utility::truncate_chars(&utility::strip_ansi(&problem_match.record.content), 300),
            problem_match.keyword.clone(),
        ))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use chrono::DateTime;
    use crate::records::{AllRecords, LogRecord};

    #[derive(Debug, Default)]
    struct TestSink {
        lines: Vec<String>,
    }
    impl ReportSink for TestSink {
        fn emit(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }
    }

    fn record(timestamp: &str, content: &str) -> LogRecord {
        LogRecord {
            timestamp: DateTime::parse_from_rfc3339(timestamp).unwrap(),
            stream: "stdout".to_string(),
            content: content.to_string(),
        }
    }
    fn analysis_fixture() -> (BasicStats, AllCategories, AllProblems, AllTimelineEvents, AllTimeGaps, AllAggregatedGroups, AllAggregatedGroups) {
        let allrecords = AllRecords { records: vec![
            record("2024-01-01T00:00:00Z", "Cloning into 'frontend'..."),
            record("2024-01-01T00:00:05Z", "npm WARN deprecated left-pad@1.0.0"),
            record("2024-01-01T00:01:05Z", "ERROR: missing module left-pad"),
            record("2024-01-01T00:01:06Z", "ERROR: missing module left-pad"),
        ]};
        let allproblems = AllProblems::find(&allrecords);
        let error_aggregated = AllAggregatedGroups::aggregate(&allproblems.errors, 100);
        let deprecated_aggregated = AllAggregatedGroups::aggregate(&allproblems.deprecated, 100);
        (
            BasicStats::from_records(&allrecords).unwrap(),
            AllCategories::categorize(&allrecords),
            allproblems,
            AllTimelineEvents::extract(&allrecords),
            AllTimeGaps::find(&allrecords, 30.),
            error_aggregated,
            deprecated_aggregated,
        )
    }

    #[test]
    fn unit_print_report_emits_all_sections() {
        let (basicstats, allcategories, allproblems, alltimelineevents, alltimegaps, error_aggregated, deprecated_aggregated) = analysis_fixture();
        let mut sink = TestSink::default();
        print_report(&mut sink, "front.log", &basicstats, &allcategories, &allproblems, &alltimelineevents, &alltimegaps, &error_aggregated, &deprecated_aggregated, "analysis_results.json");
        let text = sink.lines.join("\n");
        assert!(text.contains("1. BASIC STATISTICS"));
        assert!(text.contains("2. CATEGORIZATION BY LEVEL"));
        assert!(text.contains("3. PROBLEM PATTERNS"));
        assert!(text.contains("4. TIMELINE"));
        assert!(text.contains("5. DUPLICATE AGGREGATION"));
        assert!(text.contains("Total records: 4"));
        assert!(text.contains("pause of 60.0 seconds"));
        assert!(text.contains("git_clone"));
    }
    #[test]
    fn unit_silent_sink_discards_everything() {
        let mut sink = SilentSink;
        sink.emit("anything");
        // nothing observable: the point is that it cannot panic or print
    }
    #[test]
    fn unit_save_summary_writes_bounded_json() {
        let (basicstats, allcategories, allproblems, alltimelineevents, alltimegaps, error_aggregated, deprecated_aggregated) = analysis_fixture();
        let path = env::temp_dir().join(format!("buildlog_stats_{}_summary.json", std::process::id()));
        let path = path.into_os_string().into_string().unwrap();
        save_summary(&path, &basicstats, &allcategories, &allproblems, &alltimelineevents, &alltimegaps, &error_aggregated, &deprecated_aggregated).unwrap();

        let summary: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(summary["stats"]["total_records"], 4);
        assert_eq!(summary["stats"]["duration_seconds"], 66.);
        assert_eq!(summary["categories"]["WARN"], 1);
        assert_eq!(summary["problems"]["errors_count"], 2);
        // examples serialize as (timestamp, content, keyword) triples
        assert_eq!(summary["problems"]["errors_examples"][0][2], "ERROR");
        assert!(summary["timeline"].as_array().unwrap().len() <= 30);
        assert!(summary["time_gaps"].as_array().unwrap().len() <= 10);
        assert_eq!(summary["error_aggregated"][0]["count"], 2);
        fs::remove_file(&path).ok();
    }
    #[test]
    fn unit_save_summary_unwritable_path_fails() {
        let (basicstats, allcategories, allproblems, alltimelineevents, alltimegaps, error_aggregated, deprecated_aggregated) = analysis_fixture();
        let result = save_summary("/nonexistent/dir/summary.json", &basicstats, &allcategories, &allproblems, &alltimelineevents, &alltimegaps, &error_aggregated, &deprecated_aggregated);
        assert!(result.is_err());
    }
}
