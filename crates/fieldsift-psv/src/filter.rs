//! The streaming line filter.
//!
//! [`FilterStream`] is a lazy iterator over the matching records of a
//! buffered input stream. It reads one line at a time, so memory use is
//! bounded by the longest line, and it consumes the underlying reader once:
//! the stream is not restartable.

use std::io::{BufRead, Lines};

use crate::error::{Error, Result};
use crate::query::Query;
use crate::record::Record;

/// Lazy iterator yielding the records of a reader that match a query.
///
/// Records are yielded in input order, one per matching line; non-matching
/// lines are consumed and skipped. A read failure (including invalid UTF-8
/// from the underlying stream) is yielded as an error carrying the 1-based
/// line number at which it occurred; iteration continues with the next line
/// if the underlying reader recovers.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use fieldsift_psv::{FilterStream, Query};
///
/// let input = Cursor::new("apple|fruit|red\ncarrot|vegetable|orange\n");
/// let mut stream = FilterStream::new(Query::new(["fruit"]), input);
///
/// let record = stream.next().unwrap().unwrap();
/// assert_eq!(record.fields(), ["apple", "fruit", "red"]);
/// assert!(stream.next().is_none());
/// assert_eq!(stream.lines_read(), 2);
/// ```
pub struct FilterStream<R> {
    lines: Lines<R>,
    query: Query,
    /// 1-based number of the last line read, 0 before any line is read.
    lines_read: usize,
}

impl<R: BufRead> FilterStream<R> {
    /// Create a filter stream over `reader` for `query`.
    #[must_use]
    pub fn new(query: Query, reader: R) -> Self {
        Self {
            lines: reader.lines(),
            query,
            lines_read: 0,
        }
    }

    /// Number of input lines consumed so far, matching or not.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// The query this stream filters with.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }
}

impl<R: BufRead> Iterator for FilterStream<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.lines_read += 1;
            match line {
                Ok(line) => {
                    let record = Record::from_line(&line);
                    if self.query.matches(&record) {
                        tracing::trace!(line = self.lines_read, "record matched");
                        return Some(Ok(record));
                    }
                }
                Err(source) => {
                    return Some(Err(Error::Read {
                        line: self.lines_read,
                        source,
                    }));
                }
            }
        }
    }
}
