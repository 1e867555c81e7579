//! JSON output formatter for machine processing
//!
//! Emits the merged records and the merge events as one JSON document.

use crate::domain::MergedSet;
use crate::merge::MergeEvent;
use crate::orchestrator::RunReport;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of a run
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Report file, absent in dry-run
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a PathBuf>,
    /// Summary statistics
    summary: JsonSummary,
    /// Winning records in report order
    dependencies: &'a MergedSet,
    /// Merge events (only in verbose mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<&'a MergeEvent>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Number of manifests read
    manifests: usize,
    /// Number of manifests without dependencies
    skipped: usize,
    /// Number of distinct dependencies
    dependencies: usize,
    /// Number of version upgrades during the merge
    upgrades: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let outcome = &report.outcome;
        let events = if self.verbosity == Verbosity::Verbose {
            outcome.events.iter().collect()
        } else {
            Vec::new()
        };

        let output = JsonOutput {
            output: report.output.as_ref(),
            summary: JsonSummary {
                manifests: outcome.manifests_read,
                skipped: outcome.manifests_skipped,
                dependencies: outcome.merged.len(),
                upgrades: outcome.upgrade_count(),
            },
            dependencies: &outcome.merged,
            events,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
