//! Fieldsift CLI - filter pipe-separated records from standard input.
//!
//! Reads `|`-delimited lines from stdin and prints the records in which
//! every query term matches at least one field.

use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use fieldsift::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Set up logging based on verbosity. Logs go to stderr; stdout carries
    // only the matched records.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(terms = ?cli.terms, mode = %cli.mode, "Starting fieldsift");

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}
