//! CLI module for Disappear.
//!
//! This module provides the command-line interface: replaying close
//! animations on a simulated compositor, checking eligibility, and managing
//! the configuration file.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;
use tracing_subscriber::EnvFilter;

use crate::error::DisappearError;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter used with `--verbose`.
const VERBOSE_LOG_FILTER: &str = "warn,disappear_lib=debug";

/// Runs the CLI.
///
/// Parses command-line arguments, installs the log subscriber and executes
/// the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), DisappearError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    cli.execute()
}

/// Installs a stderr `fmt` subscriber.
///
/// `--verbose` takes precedence over `RUST_LOG`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    // A second install (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
