//! A streaming filter library for PSV (pipe-separated values) records.
//!
//! This library splits lines of `|`-delimited text into [`Record`]s and
//! filters them against a [`Query`]: a record matches when every query term
//! matches at least one of its fields. [`FilterStream`] ties the two together
//! as a lazy iterator over any buffered reader.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod query;
pub mod record;

pub use error::{Error, Result};
pub use filter::FilterStream;
pub use query::{MatchMode, Query};
pub use record::Record;
