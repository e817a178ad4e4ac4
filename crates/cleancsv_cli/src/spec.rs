//! Pipeline options and the run-level error type.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use cleancsv_table::conf::derive_default_col_order;
use cleancsv_table::{CleanTableError, SpecCleanOptions};
use cleancsv_xlsx::SpecSheetPlacement;

use crate::conf::{L_COLS_WIDTH_BY_VALUE, L_COLS_WIDTH_BY_WORD, L_COLS_WIDTH_FIXED};

////////////////////////////////////////////////////////////////////////////////
// #region PipelineOptions

/// Everything one run needs besides the two paths.
#[derive(Debug, Clone)]
pub struct SpecPipelineOptions {
    /// Output column order; every name must exist in the source.
    pub col_order: Vec<String>,
    /// Where the table lands in the workbook.
    pub placement: SpecSheetPlacement,
    /// Column cleaning options.
    pub clean_options: SpecCleanOptions,
    /// Columns sized by the longest word of their name.
    pub cols_width_by_word: BTreeSet<String>,
    /// Columns sized by their longest value.
    pub cols_width_by_value: BTreeSet<String>,
    /// Columns given the fixed URL-label width.
    pub cols_width_fixed: BTreeSet<String>,
}

impl Default for SpecPipelineOptions {
    fn default() -> Self {
        Self {
            col_order: derive_default_col_order(),
            placement: SpecSheetPlacement::default(),
            clean_options: SpecCleanOptions::default(),
            cols_width_by_word: collect_names(&L_COLS_WIDTH_BY_WORD),
            cols_width_by_value: collect_names(&L_COLS_WIDTH_BY_VALUE),
            cols_width_fixed: collect_names(&L_COLS_WIDTH_FIXED),
        }
    }
}

fn collect_names(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(ToString::to_string).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Fatal run errors. Argument errors are reported by the parser itself.
#[derive(Debug)]
pub enum CleanCsvError {
    /// Source path does not end with `.csv`.
    InvalidSource(PathBuf),
    /// Destination path has an extension other than `.xlsx`/`.xls`/`.xlsm`.
    InvalidDestination(PathBuf),
    /// A required column is absent from the source.
    MissingColumn(String),
    /// Source could not be read or parsed.
    ReadFailed(String),
    /// Workbook could not be written or saved.
    WriteFailed(String),
}

impl fmt::Display for CleanCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSource(path) => write!(
                f,
                "Source file must be a csv file: ends with \".csv\" (got {})",
                path.display()
            ),
            Self::InvalidDestination(path) => write!(
                f,
                "Destination file must be an excel file: ends with \".xlsx\" or \".xls\" or \".xlsm\" (got {})",
                path.display()
            ),
            Self::MissingColumn(name) => {
                write!(f, "Required column is missing from the source: {name:?}")
            }
            Self::ReadFailed(msg) => write!(f, "{msg}"),
            Self::WriteFailed(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CleanCsvError {}

impl From<CleanTableError> for CleanCsvError {
    fn from(err: CleanTableError) -> Self {
        match err {
            CleanTableError::MissingColumn(name) => Self::MissingColumn(name),
            other => Self::ReadFailed(other.to_string()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_cover_default_order() {
        let options = SpecPipelineOptions::default();
        let set_order: BTreeSet<&String> = options.col_order.iter().collect();

        assert_eq!(options.col_order.len(), 36);
        assert_eq!(set_order.len(), 36);
        for name in options
            .cols_width_by_word
            .iter()
            .chain(&options.cols_width_by_value)
            .chain(&options.cols_width_fixed)
        {
            assert!(set_order.contains(name), "{name} not in column order");
        }
    }

    #[test]
    fn test_missing_column_maps_through() {
        let err: CleanCsvError = CleanTableError::MissingColumn("Website".to_string()).into();
        assert!(matches!(err, CleanCsvError::MissingColumn(ref name) if name == "Website"));
    }
}
