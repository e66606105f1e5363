//! PSV record parsing and rendering.
//!
//! A record is one input line split on the pipe separator. Parsing is
//! infallible: any line, including an empty one, produces a record.

use std::fmt;

use serde::Serialize;

/// The field separator. Split literally, never as a pattern.
const SEPARATOR: char = '|';

/// One input line, represented as its ordered pipe-split field sequence.
///
/// Fields keep their original content: duplicates and empty strings are
/// preserved positionally, and whitespace inside a field is untouched (only
/// the line as a whole is trimmed during parsing).
///
/// The `Display` implementation renders the sequence-literal output form:
/// each field wrapped in single quotes, joined by `", "`, inside square
/// brackets, as in `['apple', 'fruit', 'red']`. Field content is emitted
/// verbatim, without escaping; serialization (via [`serde::Serialize`]) is
/// transparent over the field list and is the escape-correct representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Parse a raw input line into a record.
    ///
    /// The line is trimmed of leading and trailing whitespace, then split on
    /// the literal `|` separator. An empty (or whitespace-only) line yields
    /// a single empty-string field; consecutive separators yield empty-string
    /// fields. The separator itself never appears in a field.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        Self {
            fields: line.trim().split(SEPARATOR).map(str::to_owned).collect(),
        }
    }

    /// The ordered field sequence.
    ///
    /// Never empty for a record produced by [`from_line`](Self::from_line):
    /// splitting always yields at least one field.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Consumes the record, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{field}'")?;
        }
        f.write_str("]")
    }
}
