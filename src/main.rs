//! depconst - Dependency constant generator CLI tool
//!
//! Reads a dependency report and prints the generated constants:
//! - Kotlin `Versions` / `Libs` objects
//! - JSON for other generators
//! - A text summary

use clap::Parser;
use depconst::cli::CliArgs;
use depconst::error::{AppError, OutputError};
use depconst::output::{create_formatter, OutputConfig};
use depconst::pipeline::Pipeline;
use depconst::report::load_report;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(&args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the tracing subscriber; RUST_LOG overrides the CLI verbosity
fn init_logging(args: &CliArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = args.configuration().map_err(AppError::from)?;
    let graph = load_report(&args.report).map_err(AppError::from)?;

    let resolution = Pipeline::new(config)
        .run(&graph)
        .map_err(AppError::from)?;

    let color = !args.no_color && args.output.is_none() && io::stdout().is_terminal();
    let output_config = OutputConfig::from_cli(args.format, args.verbose, args.quiet, color);
    let formatter = create_formatter(output_config);

    match &args.output {
        Some(path) => {
            let mut buffer = Vec::new();
            formatter.format(&resolution, &mut buffer)?;
            std::fs::write(path, buffer)
                .map_err(|e| AppError::from(OutputError::write_error(path, e)))?;
            info!("Wrote {} constants to {}", resolution.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            formatter.format(&resolution, &mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
