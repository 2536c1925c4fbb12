//! CLI argument parsing module for depconst

use crate::config::Configuration;
use crate::error::ConfigError;
use crate::output::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Default location of the Gradle versions plugin JSON report
pub const DEFAULT_REPORT_PATH: &str = "build/dependencyUpdates/report.json";

/// Generate dependency and version constants from a dependency report
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depconst",
    version,
    about = "Generate collision-free dependency constants"
)]
pub struct CliArgs {
    /// Dependency report (JSON)
    #[arg(default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    // Naming options
    /// Always use the fully-qualified identifier for this name (can be specified multiple times)
    #[arg(long = "fdqn", value_name = "NAME", action = ArgAction::Append)]
    pub fdqn: Vec<String>,

    /// Always fully-qualify common generic names (core, common, runtime, ...)
    #[arg(long)]
    pub meaningless_names: bool,

    // Output options
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Kotlin)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Build the naming configuration from the config file and CLI options
    pub fn configuration(&self) -> Result<Configuration, ConfigError> {
        let config = match &self.config {
            Some(path) => Configuration::load(path)?,
            None => Configuration::new(),
        };
        let config = config.with_fdqn_names(&self.fdqn)?;

        Ok(if self.meaningless_names {
            config.with_common_names()
        } else {
            config
        })
    }

    /// Default tracing filter when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
