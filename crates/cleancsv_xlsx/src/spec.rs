//! Shared XLSX specification models.

use std::collections::{BTreeMap, BTreeSet};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Bold style.
    pub bold: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,
    /// Text wrap.
    pub text_wrap: Option<bool>,

    /// Background fill color.
    pub bg_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            text_wrap: other.text_wrap.or(self.text_wrap),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
        }
    }
}

/// Normalized cell value during the write pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value (null or NaN).
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetPlacement

/// Anchor of a table inside its sheet.
///
/// The header row sits at `row_start`; the writer's index column sits at
/// `col_start`, so data column `i` lands at `col_start + 1 + i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetPlacement {
    /// Target sheet name.
    pub sheet_name: String,
    /// Zero-based header row.
    pub row_start: usize,
    /// Zero-based index column.
    pub col_start: usize,
}

impl Default for SpecSheetPlacement {
    fn default() -> Self {
        Self {
            sheet_name: "newly_cleaned".to_string(),
            row_start: 1,
            col_start: 2,
        }
    }
}

impl SpecSheetPlacement {
    /// Sheet row of body row `n_row` (zero-based within the table).
    pub fn row_of_body(&self, n_row: usize) -> usize {
        self.row_start + 1 + n_row
    }

    /// Sheet column of data column `n_col` (zero-based within the table).
    pub fn col_of_data(&self, n_col: usize) -> usize {
        self.col_start + 1 + n_col
    }

    /// Sheet column targeted by highlight passes for data column `n_col`.
    ///
    /// Offsets from `row_start`; equals [`Self::col_of_data`] when
    /// `row_start + 1 == col_start`, which holds for the default placement.
    pub fn col_of_highlight(&self, n_col: usize) -> usize {
        self.row_start + 2 + n_col
    }

    /// Freeze-pane anchor `(row, col)`: below the header, right of the index
    /// column and the first data column.
    pub fn freeze_cell(&self) -> (usize, usize) {
        (self.row_start + 1, self.col_start + 2)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Record of what was written/applied to one sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecXlsxReport {
    /// Sheet the report belongs to.
    pub sheet_name: String,
    /// Body rows written.
    pub n_rows: usize,
    /// Data columns written (index column excluded).
    pub n_cols: usize,
    /// Final width per sheet column index.
    pub widths_by_col: BTreeMap<usize, f64>,
    /// Sheet cells rewritten with a highlight format.
    pub cells_highlighted: BTreeSet<(usize, usize)>,
    /// Sheet columns whose header cell was rewritten with wrap styling.
    pub cols_header_wrapped: BTreeSet<usize>,
    /// Freeze-pane anchor, once applied.
    pub cell_freeze: Option<(usize, usize)>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_right_side_values() {
        let base = SpecCellFormat {
            bold: Some(true),
            bg_color: Some("#ffffff".to_string()),
            ..Default::default()
        };
        let merged = base.with_(SpecCellFormat {
            bg_color: Some("#fff2cc".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.bg_color.as_deref(), Some("#fff2cc"));
    }

    #[test]
    fn test_default_placement_offsets() {
        let placement = SpecSheetPlacement::default();
        assert_eq!(placement.sheet_name, "newly_cleaned");
        assert_eq!(placement.row_of_body(0), 2);
        assert_eq!(placement.col_of_data(0), 3);
        assert_eq!(placement.col_of_highlight(0), placement.col_of_data(0));
        assert_eq!(placement.freeze_cell(), (2, 4));
    }

    #[test]
    fn test_highlight_offset_tracks_row_start() {
        let placement = SpecSheetPlacement {
            sheet_name: "s".to_string(),
            row_start: 4,
            col_start: 0,
        };
        assert_eq!(placement.col_of_data(1), 2);
        assert_eq!(placement.col_of_highlight(1), 7);
    }
}
