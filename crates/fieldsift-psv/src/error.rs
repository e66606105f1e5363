//! Error types for fieldsift-psv operations.

use std::io;
use thiserror::Error;

/// The error type for fieldsift-psv operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a line from the input stream failed.
    ///
    /// Invalid UTF-8 in the input surfaces here too, wrapped in the
    /// underlying [`io::Error`].
    #[error("read error at line {line}: {source}")]
    Read {
        /// 1-based number of the line being read when the failure occurred.
        line: usize,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// A specialized Result type for fieldsift-psv operations.
pub type Result<T> = std::result::Result<T, Error>;
