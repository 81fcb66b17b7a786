//! buildlog_stats
//!
//! A utility to analyze a captured docker build log, saved as a JSON array of
//! records with a `timestamp`, `stream` and `content` field.
//!
//! The analysis is a single sequential pass over the loaded records:
//! - basic statistics (count, time range, stream distribution, longest messages).
//! - categorization by log level (exclusive, priority ordered).
//! - problem pattern scan (six independent checks, a record can match several).
//! - timeline of key build events.
//! - anomalously long pauses between adjacent records.
//! - aggregation of duplicate errors and deprecation warnings.
//!
//! The results are printed as a sectioned report, and a bounded summary is
//! serialized to a JSON file for downstream consumption.
#[macro_use]
extern crate serde_derive;

use std::time::Instant;
use clap::Parser;
use log::*;
use anyhow::Result;

pub mod records;
pub mod stats;
pub mod categorize;
pub mod problems;
pub mod timeline;
pub mod gaps;
pub mod aggregate;
pub mod report;
pub mod utility;

/// A pause between two adjacent records longer than this is reported, in seconds.
pub const DEFAULT_GAP_THRESHOLD_SECONDS: f64 = 30.;
/// The number of characters of cleaned content used as the duplicate grouping key.
pub const DEFAULT_SAMPLE_LENGTH: usize = 100;

/// The commandline options.
#[derive(Debug, Parser, Clone)]
#[command(version, about)]
pub struct Opts {
    /// The JSON file with the captured log records.
    pub logfile: String,
    /// The file the analysis summary is serialized to.
    #[arg(default_value = "analysis_results.json")]
    pub summary_file: String,
    /// Suppress the printed report. The summary file is still written.
    #[arg(short, long)]
    pub silent: bool,
}

/// Perform the full analysis run: load, analyze, report, save the summary.
///
/// The stages after loading are infallible: they only read the loaded
/// records. The run fails on a missing/malformed input file, an input
/// without records, or an unwritable summary file.
pub fn run(options: &Opts) -> Result<()> {
    info!("begin analysis run");
    let timer = Instant::now();

    let allrecords = records::AllRecords::from_file(&options.logfile)?;

    let basicstats = stats::BasicStats::from_records(&allrecords)?;
    let allcategories = categorize::AllCategories::categorize(&allrecords);
    let allproblems = problems::AllProblems::find(&allrecords);
    let alltimelineevents = timeline::AllTimelineEvents::extract(&allrecords);
    let alltimegaps = gaps::AllTimeGaps::find(&allrecords, DEFAULT_GAP_THRESHOLD_SECONDS);
    let error_aggregated = aggregate::AllAggregatedGroups::aggregate(&allproblems.errors, DEFAULT_SAMPLE_LENGTH);
    let deprecated_aggregated = aggregate::AllAggregatedGroups::aggregate(&allproblems.deprecated, DEFAULT_SAMPLE_LENGTH);

    let mut sink = report::sink_for(options.silent);
    report::print_report(
        sink.as_mut(),
        &options.logfile,
        &basicstats,
        &allcategories,
        &allproblems,
        &alltimelineevents,
        &alltimegaps,
        &error_aggregated,
        &deprecated_aggregated,
        &options.summary_file,
    );
    report::save_summary(
        &options.summary_file,
        &basicstats,
        &allcategories,
        &allproblems,
        &alltimelineevents,
        &alltimegaps,
        &error_aggregated,
        &deprecated_aggregated,
    )?;

    info!("end analysis run: {:?}", timer.elapsed());
    Ok(())
}
