//! eol-timeline - Release support timeline CLI tool
//!
//! Fetches release lifecycle data from endoflife.date and renders:
//! - A terminal timeline of supported releases
//! - A chart configuration (JSON) for a bar charting library
//! - The product menu

use clap::Parser;
use eol_timeline::cli::CliArgs;
use eol_timeline::logging;
use eol_timeline::orchestrator::{Orchestrator, Render};
use eol_timeline::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    logging::init(args.verbose, args.quiet, !args.no_color);
    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Print version info in verbose mode
    if args.verbose {
        eprintln!("eol-timeline v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.target);
        eprintln!("Today: {}", args.reference_date());
        if args.offline {
            eprintln!("Mode: offline");
        }
    }

    let orchestrator = Orchestrator::new(args.clone())?;
    let render = orchestrator.run().await?;

    // Create output formatter based on CLI options
    let output_config = OutputConfig::from_cli(
        args.json,
        args.compact,
        args.verbose,
        args.quiet,
        args.no_color,
        args.width,
    );
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&render, &mut stdout)?;
    stdout.flush()?;

    // Return appropriate exit code
    match &render {
        Render::NotFound { .. } => Ok(ExitCode::FAILURE),
        // Rendered, but live data could not be used
        Render::Timeline(report) if report.outcome.is_degraded() => Ok(ExitCode::from(2)),
        _ => Ok(ExitCode::SUCCESS),
    }
}
