//! Output formatting for matched records.
//!
//! Matched records are printed one per line in either a human-readable
//! sequence-literal format or as JSON arrays for programmatic use.

use std::io::{self, Write};

use fieldsift_psv::Record;

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable sequence-literal format, e.g. `['apple', 'fruit', 'red']`
    Text,
    /// JSON array format for programmatic use
    Json,
}

/// Write one matched record as a single output line.
///
/// Text mode reproduces each field verbatim between single quotes and does
/// not escape quotes inside fields; JSON mode emits a JSON array and is the
/// escape-correct form for downstream parsing.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_record<W: Write>(w: &mut W, record: &Record, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Text => writeln!(w, "{record}"),
        OutputMode::Json => {
            let json = serde_json::to_string(record)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(w, "{json}")
        }
    }
}
