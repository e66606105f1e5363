//! Query terms and the record match policy.
//!
//! A query is the ordered list of terms taken from the invocation arguments.
//! Matching is logical AND across terms: every term must match at least one
//! field of a record for the record to pass. An empty query passes every
//! record (vacuous AND).

use crate::record::Record;

/// Field comparison rule applied when testing a query term against a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// A term matches a field iff the two strings are equal. Case-sensitive,
    /// no normalization, no substring matching.
    #[default]
    Exact,
    /// A term matches a field iff the field starts with the term. The empty
    /// term is a prefix of every field.
    Prefix,
}

impl MatchMode {
    /// Test one field against one query term under this mode.
    #[must_use]
    pub fn field_matches(self, term: &str, field: &str) -> bool {
        match self {
            Self::Exact => field == term,
            Self::Prefix => field.starts_with(term),
        }
    }
}

/// An ordered sequence of query terms plus the mode they are matched under.
///
/// Term order is preserved for iteration but does not affect the match
/// result. Duplicate terms are kept and checked independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
    mode: MatchMode,
}

impl Query {
    /// Create a query over the given terms, matching in [`MatchMode::Exact`].
    #[must_use]
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
            mode: MatchMode::default(),
        }
    }

    /// Replace the match mode.
    #[must_use]
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// The query terms, in invocation order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// The active match mode.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// `true` if the query has no terms (and therefore matches every record).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Test a record against the query.
    ///
    /// Every term must match at least one field; the scan of a record's
    /// fields stops at the first match for each term. A term matching several
    /// fields still counts once, and duplicate terms can be satisfied by the
    /// same field.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.terms.iter().all(|term| {
            record
                .fields()
                .iter()
                .any(|field| self.mode.field_matches(term, field))
        })
    }
}
