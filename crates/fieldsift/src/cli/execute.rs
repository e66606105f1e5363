//! Filter execution logic.
//!
//! The filter loop is generic over its reader and writer so tests can drive
//! it with in-memory buffers; the binary passes locked stdin and stdout.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::output::{self, OutputMode};
use fieldsift_psv::{FilterStream, Query};

/// Totals reported after a completed filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    /// Records that matched the query and were written.
    pub matched: usize,
    /// Input lines consumed, matching or not.
    pub lines_read: usize,
}

/// Stream records from `reader` to `writer`, keeping those matching `query`.
///
/// Matching records are written in input order, one per line. The run stops
/// at end of input, or at the first read or write failure. A completed run
/// logs its totals at debug level.
///
/// # Errors
///
/// Returns an error if a line cannot be read from `reader` or a matched
/// record cannot be written to `writer`.
pub fn run_filter<R: BufRead, W: Write>(
    query: Query,
    reader: R,
    writer: &mut W,
    mode: OutputMode,
) -> Result<FilterSummary> {
    let mut stream = FilterStream::new(query, reader);
    let mut matched = 0;

    for record in stream.by_ref() {
        output::write_record(writer, &record?, mode)?;
        matched += 1;
    }

    let summary = FilterSummary {
        matched,
        lines_read: stream.lines_read(),
    };

    tracing::debug!(
        terms = ?stream.query().terms(),
        matched = summary.matched,
        lines_read = summary.lines_read,
        "filter finished"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsift_psv::MatchMode;
    use std::io::Cursor;

    fn filter_to_string(input: &str, query: Query, mode: OutputMode) -> (String, FilterSummary) {
        let mut buffer = Vec::new();
        let summary = run_filter(query, Cursor::new(input), &mut buffer, mode)
            .expect("filter run should succeed");
        (String::from_utf8(buffer).unwrap(), summary)
    }

    #[test]
    fn writes_matching_records_in_input_order() {
        let input = "apple|fruit|red\ncarrot|vegetable|orange\ncherry|fruit|red\n";
        let (out, summary) =
            filter_to_string(input, Query::new(["fruit", "red"]), OutputMode::Text);

        assert_eq!(out, "['apple', 'fruit', 'red']\n['cherry', 'fruit', 'red']\n");
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.lines_read, 3);
    }

    #[test]
    fn no_match_writes_nothing() {
        let (out, summary) = filter_to_string("a|b\n", Query::new(["z"]), OutputMode::Text);
        assert!(out.is_empty());
        assert_eq!(summary.matched, 0);
        assert_eq!(summary.lines_read, 1);
    }

    #[test]
    fn empty_input_is_a_successful_run() {
        let (out, summary) = filter_to_string("", Query::new(["z"]), OutputMode::Text);
        assert!(out.is_empty());
        assert_eq!(summary, FilterSummary { matched: 0, lines_read: 0 });
    }

    #[test]
    fn json_mode_lines_parse_as_arrays() {
        let input = "apple|fruit|red\ncarrot|vegetable|orange\n";
        let (out, _) = filter_to_string(input, Query::new(["fruit"]), OutputMode::Json);

        let rows: Vec<Vec<String>> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(rows, [["apple", "fruit", "red"]]);
    }

    #[test]
    fn prefix_mode_query_is_honored() {
        let input = "apple|fruit|red\ncarrot|vegetable|orange\n";
        let query = Query::new(["fru"]).with_mode(MatchMode::Prefix);
        let (out, _) = filter_to_string(input, query, OutputMode::Text);
        assert_eq!(out, "['apple', 'fruit', 'red']\n");
    }

    #[test]
    fn read_failure_aborts_with_the_line_number() {
        let input = Cursor::new(&b"x|ok\n\xff\xfe\n"[..]);
        let mut buffer = Vec::new();
        let err = run_filter(Query::new(["x"]), input, &mut buffer, OutputMode::Text)
            .expect_err("invalid UTF-8 should fail the run");

        assert!(err.to_string().contains("line 2"), "unexpected error: {err}");
        // The record before the failure was already written.
        assert_eq!(buffer, b"['x', 'ok']\n");
    }
}
