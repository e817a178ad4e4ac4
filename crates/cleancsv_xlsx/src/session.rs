//! Formatting passes over a table already written by [`XlsxWriter::write_table`].

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use rust_xlsxwriter::Format;
use tracing::debug;

use crate::conf::{STR_COLOR_HIGHLIGHT_DEFAULT, derive_header_wrap_format, derive_highlight_format};
use crate::spec::{SpecCellFormat, SpecSheetPlacement};
use crate::util::{
    cast_col_num, cast_row_num, derive_cell_value_from_any_value, derive_xlsx_error_text,
};
use crate::writer::{XlsxWriter, derive_rust_xlsx_format, write_cell_with_format};

/// Write context for one placed table.
///
/// Holds the writer exclusively, so the workbook cannot be closed while
/// formatting passes are pending.
pub struct WriteSession<'a> {
    writer: &'a mut XlsxWriter,
    df: &'a DataFrame,
    col_order: Vec<String>,
    placement: SpecSheetPlacement,
    fmt_header_wrap: SpecCellFormat,
}

impl<'a> WriteSession<'a> {
    pub(crate) fn new(
        writer: &'a mut XlsxWriter,
        df: &'a DataFrame,
        col_order: Vec<String>,
        placement: SpecSheetPlacement,
    ) -> Self {
        Self {
            writer,
            df,
            col_order,
            placement,
            fmt_header_wrap: derive_header_wrap_format(),
        }
    }

    /// Cleaned table behind this session.
    pub fn table(&self) -> &'a DataFrame {
        self.df
    }

    /// Column order the table was written in.
    pub fn col_order(&self) -> &[String] {
        &self.col_order
    }

    /// Resolved placement (sanitized sheet name).
    pub fn placement(&self) -> &SpecSheetPlacement {
        &self.placement
    }

    /// [`Self::highlight`] with the default fill.
    pub fn highlight_default<P>(&mut self, predicate: P) -> Result<(), String>
    where
        P: Fn(&str) -> bool,
    {
        self.highlight(predicate, STR_COLOR_HIGHLIGHT_DEFAULT)
    }

    /// Rewrite every body cell of the columns matching `predicate` with a
    /// `color` background. Missing/NaN cells become empty highlighted cells.
    pub fn highlight<P>(&mut self, predicate: P, color: &str) -> Result<(), String>
    where
        P: Fn(&str) -> bool,
    {
        let fmt_highlight = derive_rust_xlsx_format(&derive_highlight_format(color));
        let (worksheet, report) = self
            .writer
            .sheet_and_report_mut(&self.placement.sheet_name)?;

        for (n_idx_col, name) in self.col_order.iter().enumerate() {
            if !predicate(name.as_str()) {
                continue;
            }
            let col = self
                .df
                .column(name)
                .map_err(|err| format!("Column not found: {name:?} ({err})"))?;
            let n_col_sheet = self.placement.col_of_highlight(n_idx_col);

            for n_row in 0..self.df.height() {
                let value = derive_cell_value_from_any_value(
                    col.get(n_row)
                        .map_err(|err| format!("Failed to access cell value: {err}"))?,
                );
                let n_row_sheet = self.placement.row_of_body(n_row);
                write_cell_with_format(
                    worksheet,
                    n_row_sheet,
                    n_col_sheet,
                    &value,
                    &fmt_highlight,
                )?;
                report.cells_highlighted.insert((n_row_sheet, n_col_sheet));
            }
            debug!(column = %name, color, "column highlighted");
        }
        Ok(())
    }

    /// Set the width of every column named in `names` to `width_fn(name) + delta`.
    ///
    /// With `wrap_header`, the header cell is rewritten wrapped, bold, grey.
    pub fn widen<F>(
        &mut self,
        names: &BTreeSet<String>,
        width_fn: F,
        wrap_header: bool,
        delta: f64,
    ) -> Result<(), String>
    where
        F: Fn(&str) -> f64,
    {
        let fmt_header_wrap: Format = derive_rust_xlsx_format(&self.fmt_header_wrap);
        let (worksheet, report) = self
            .writer
            .sheet_and_report_mut(&self.placement.sheet_name)?;
        let n_row_header = cast_row_num(self.placement.row_start)?;

        for (n_idx_col, name) in self.col_order.iter().enumerate() {
            if !names.contains(name) {
                continue;
            }
            let n_col_sheet = self.placement.col_of_data(n_idx_col);

            if wrap_header {
                worksheet
                    .write_string_with_format(
                        n_row_header,
                        cast_col_num(n_col_sheet)?,
                        name,
                        &fmt_header_wrap,
                    )
                    .map_err(derive_xlsx_error_text)?;
                report.cols_header_wrapped.insert(n_col_sheet);
            }

            let n_width = width_fn(name.as_str()) + delta;
            worksheet
                .set_column_width(cast_col_num(n_col_sheet)?, n_width)
                .map_err(derive_xlsx_error_text)?;
            report.widths_by_col.insert(n_col_sheet, n_width);
        }
        Ok(())
    }

    /// Freeze the header row, the index column and the first data column.
    pub fn freeze(&mut self) -> Result<(), String> {
        let (n_row, n_col) = self.placement.freeze_cell();
        let (worksheet, report) = self
            .writer
            .sheet_and_report_mut(&self.placement.sheet_name)?;
        worksheet
            .set_freeze_panes(cast_row_num(n_row)?, cast_col_num(n_col)?)
            .map_err(derive_xlsx_error_text)?;
        report.cell_freeze = Some((n_row, n_col));
        Ok(())
    }
}
