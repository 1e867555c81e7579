//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per merge event (skip / new / upgrade)
//! - The resolved input list in verbose mode
//! - A closing summary line

use crate::merge::{MergeEvent, MergeOutcome};
use crate::orchestrator::RunReport;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Format a single merge event
    pub fn format_event(&self, event: &MergeEvent, writer: &mut dyn Write) -> std::io::Result<()> {
        match event {
            MergeEvent::Skipped { source } => {
                let line = format!("No dependencies found for {}", source.display());
                if self.color {
                    writeln!(writer, "{}", line.dimmed())
                } else {
                    writeln!(writer, "{}", line)
                }
            }
            MergeEvent::Added { name, version } => {
                if self.color {
                    writeln!(writer, "{} {}: {}", "+".green().bold(), name.bold(), version)
                } else {
                    writeln!(writer, "+ {}: {}", name, version)
                }
            }
            MergeEvent::Upgraded { name, from, to } => {
                if self.color {
                    writeln!(
                        writer,
                        "{} {}: {} {} {}",
                        "↑".yellow().bold(),
                        name.bold(),
                        from.as_str().dimmed(),
                        "->".dimmed(),
                        to.as_str().bright_white().bold()
                    )
                } else {
                    writeln!(writer, "↑ {}: {} -> {}", name, from, to)
                }
            }
        }
    }

    /// Format the manifests that will be read, in order
    pub fn format_inputs(&self, inputs: &[&Path], writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "Reading {} manifests:", inputs.len())?;
        for path in inputs {
            writeln!(writer, "  {}", path.display())?;
        }
        Ok(())
    }

    /// Format the closing summary line
    pub fn format_summary(
        &self,
        outcome: &MergeOutcome,
        destination: Option<&Path>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let target = match destination {
            Some(path) => format!("written to {}", path.display()),
            None => "(dry-run, nothing written)".to_string(),
        };
        let line = format!(
            "{} dependencies from {} manifests ({} skipped, {} upgraded) {}",
            outcome.merged.len(),
            outcome.manifests_read,
            outcome.manifests_skipped,
            outcome.upgrade_count(),
            target
        );

        if self.color {
            writeln!(writer, "{}", line.cyan())
        } else {
            writeln!(writer, "{}", line)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        if self.verbosity == Verbosity::Verbose {
            let inputs: Vec<&Path> = report.inputs.iter().map(|p| p.as_path()).collect();
            self.format_inputs(&inputs, writer)?;
        }

        for event in &report.outcome.events {
            self.format_event(event, writer)?;
        }

        writeln!(writer)?;
        self.format_summary(&report.outcome, report.output.as_deref(), writer)
    }
}
