//! CLI argument parsing module for depmerge

use crate::output::ReportMode;
use clap::Parser;
use std::path::PathBuf;

/// Parse a report mode: `author` or `plain`
fn parse_mode(s: &str) -> Result<ReportMode, String> {
    s.parse()
}

/// Merge package manifest dependencies into a CSV report
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depmerge",
    version,
    about = "Merge manifest dependencies into a highest-version CSV report"
)]
pub struct CliArgs {
    /// Manifest files to merge, in order (default: package/package-1.json .. package-5.json)
    pub manifests: Vec<PathBuf>,

    /// Output CSV file (default: output.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base directory that relative paths resolve against
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Config file (default: depmerge.toml in the base directory, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    // Report options
    /// Report columns: `author` (author, package name, version) or `plain` (package_name, version)
    #[arg(long, value_parser = parse_mode, conflicts_with = "plain")]
    pub mode: Option<ReportMode>,

    /// Shorthand for --mode plain
    #[arg(long)]
    pub plain: bool,

    /// Reject version strings that are not shaped like v1.2.3
    #[arg(long)]
    pub strict: bool,

    /// Dry run mode - print the CSV to stdout instead of writing the file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    // Console options
    /// Output the merge summary in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Report mode requested on the command line, if any
    pub fn requested_mode(&self) -> Option<ReportMode> {
        if self.plain {
            Some(ReportMode::Plain)
        } else {
            self.mode
        }
    }
}
