//! Run orchestrator for coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: load → merge → report
//! - Dry-run mode support (report rendered, file untouched)
//! - Fail-fast handling: any manifest error aborts before the report is written

use crate::config::Settings;
use crate::error::AppError;
use crate::manifest::ManifestLoader;
use crate::merge::{merge, MergeOutcome};
use crate::output::{write_report, CsvReporter};
use std::path::PathBuf;

/// Orchestrator for coordinating a merge run
pub struct Orchestrator {
    /// Resolved settings for this run
    settings: Settings,
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Manifest paths that were read, in order
    pub inputs: Vec<PathBuf>,
    /// Merge result with events
    pub outcome: MergeOutcome,
    /// Report file that was written; `None` in dry-run
    pub output: Option<PathBuf>,
    /// Rendered CSV in dry-run
    pub preview: Option<String>,
}

impl Orchestrator {
    /// Create a new orchestrator with resolved settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the merge workflow
    pub fn run(&self) -> Result<RunReport, AppError> {
        let settings = &self.settings;

        // Step 1: Load every manifest; the first failure aborts the run
        let loader = ManifestLoader::new(settings.strict);
        let manifests = loader.load_all(&settings.manifests)?;

        // Step 2: Fold into the merged set
        let outcome = merge(&manifests);
        tracing::debug!(
            "merged {} dependencies from {} manifests",
            outcome.merged.len(),
            outcome.manifests_read
        );

        // Step 3: Write (or render) the report
        let (output, preview) = if settings.dry_run {
            let rendered = CsvReporter::new(settings.mode).render(&outcome.merged);
            (None, Some(rendered))
        } else {
            write_report(&settings.output, &outcome.merged, settings.mode)?;
            (Some(settings.output.clone()), None)
        };

        Ok(RunReport {
            inputs: settings.manifests.clone(),
            outcome,
            output,
            preview,
        })
    }
}
