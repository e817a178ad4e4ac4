//! Cleaning options and top-level error types.

use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Where a retained column takes its output name from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumColumnNameRule {
    /// Use the CSV header name (default).
    #[default]
    Header,
    /// Use the stringified first-row value; null falls back to the header.
    FirstRow,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `clean_table`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecCleanOptions {
    /// Keep placeholder columns even when they hold no data.
    pub if_allow_nan: bool,
    /// Column naming rule.
    pub rule_column_name: EnumColumnNameRule,
}

/// Load/clean failures. All of them abort the run.
#[derive(Debug)]
pub enum CleanTableError {
    /// Source could not be opened or tokenized.
    ReadFailed {
        /// Source path (or `<reader>` for in-memory input).
        path: PathBuf,
        /// Underlying IO/CSV error text.
        message: String,
    },
    /// A required column is absent after cleaning.
    MissingColumn(String),
    /// Table assembly failed inside polars.
    BuildFailed(String),
}

impl fmt::Display for CleanTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed { path, message } => {
                write!(f, "Failed to read csv {}: {message}", path.display())
            }
            Self::MissingColumn(name) => {
                write!(f, "Required column is missing from the source: {name:?}")
            }
            Self::BuildFailed(msg) => write!(f, "Failed to build table: {msg}"),
        }
    }
}

impl std::error::Error for CleanTableError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
