//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for fieldsift using
//! clap's derive API. There are no subcommands: the query terms are the
//! positional arguments, and flags select the match mode and output format.
//!
//! # Example
//!
//! ```bash
//! cat inventory.psv | fieldsift fruit red
//! cat inventory.psv | fieldsift --mode prefix fru
//! cat inventory.psv | fieldsift --json fruit
//! ```

mod execute;
mod types;

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::output::OutputMode;
use fieldsift_psv::Query;

pub use execute::{run_filter, FilterSummary};
pub use types::MatchModeArg;

/// Fieldsift - filter pipe-separated records by field match
///
/// Reads `|`-separated lines from standard input and prints the records in
/// which every query term matches at least one field. With no terms, every
/// record is printed.
#[derive(Parser, Debug)]
#[command(name = "fieldsift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Query terms; a record must match every term
    #[arg(value_name = "TERM")]
    pub terms: Vec<String>,

    /// How a term is compared against a field
    #[arg(long, value_enum, default_value = "exact")]
    pub mode: MatchModeArg,

    /// Output records as JSON arrays for programmatic use
    #[arg(long)]
    pub json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns a [`clap::Error`] if the arguments do not parse.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// The query described by the parsed arguments.
    #[must_use]
    pub fn query(&self) -> Query {
        Query::new(self.terms.iter().cloned()).with_mode(self.mode.into())
    }

    /// Run the filter from standard input to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from stdin or writing to stdout fails.
    pub fn execute(&self) -> Result<()> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        execute::run_filter(self.query(), stdin.lock(), &mut out, output_mode)?;

        Ok(())
    }
}
