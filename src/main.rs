//! depmerge - Merge manifest dependencies into a CSV report
//!
//! Reads package manifests in order, keeps the highest `v1.2.3`-style version
//! declared for each dependency, and writes `author, package name, version`
//! rows to output.csv.

use clap::Parser;
use depmerge::cli::CliArgs;
use depmerge::config::Settings;
use depmerge::orchestrator::Orchestrator;
use depmerge::output::{create_formatter, OutputConfig};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the flag-derived filter
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("depmerge=debug")
        } else {
            EnvFilter::new("depmerge=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    let settings = Settings::from_cli(&args)?;
    let dry_run = settings.dry_run;

    let report = Orchestrator::new(settings).run()?;

    // In dry-run the CSV owns stdout, so the console report moves to stderr
    let console_is_terminal = if dry_run {
        io::stderr().is_terminal()
    } else {
        io::stdout().is_terminal()
    };
    let color = !args.no_color && console_is_terminal;
    let formatter = create_formatter(OutputConfig::from_cli(
        args.json,
        args.verbose,
        args.quiet,
        color,
    ));

    if let Some(csv) = &report.preview {
        let mut stdout = io::stdout().lock();
        stdout.write_all(csv.as_bytes())?;
        stdout.flush()?;

        let mut stderr = io::stderr().lock();
        formatter.format(&report, &mut stderr)?;
    } else {
        let mut stdout = io::stdout().lock();
        formatter.format(&report, &mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}
