//! CLI value enums and library type conversions.

use clap::ValueEnum;

use fieldsift_psv::MatchMode;

/// Match mode for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchModeArg {
    /// A term matches a field only when the two strings are equal
    #[default]
    Exact,
    /// A term matches a field that starts with it
    Prefix,
}

impl std::fmt::Display for MatchModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Prefix => write!(f, "prefix"),
        }
    }
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Exact => MatchMode::Exact,
            MatchModeArg::Prefix => MatchMode::Prefix,
        }
    }
}

impl From<MatchMode> for MatchModeArg {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Exact => MatchModeArg::Exact,
            MatchMode::Prefix => MatchModeArg::Prefix,
        }
    }
}
