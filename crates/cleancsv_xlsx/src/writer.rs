//! XLSX writer kernel: owns the workbook and writes the base table.

use std::collections::BTreeMap;
use std::path::PathBuf;

use polars::prelude::DataFrame;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use tracing::{debug, warn};

use crate::conf::derive_header_format;
use crate::session::WriteSession;
use crate::spec::{EnumCellValue, SpecCellFormat, SpecSheetPlacement, SpecXlsxReport};
use crate::util::{
    cast_col_num, cast_row_num, derive_cell_value_from_any_value, derive_xlsx_error_text,
    sanitize_sheet_name, validate_table_fits,
};

/// Stateful workbook writer.
///
/// The workbook is buffered in memory until [`Self::close`] is called, so an
/// aborted run leaves no file behind.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_header: SpecCellFormat,
    dict_reports: BTreeMap<String, SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path.
    pub fn new(path_file_out: PathBuf) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_header: derive_header_format(),
            dict_reports: BTreeMap::new(),
            if_closed: false,
        }
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return snapshot of per-sheet reports, ordered by sheet name.
    pub fn report(&self) -> Vec<SpecXlsxReport> {
        self.dict_reports.values().cloned().collect()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), String> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(derive_xlsx_error_text)?;
        self.if_closed = true;
        debug!(path = %self.path_file_out.display(), "workbook saved");
        Ok(())
    }

    /// Write `df` (header, index column, body) at `placement` and open a
    /// formatting session on it.
    ///
    /// `col_order` must equal the column sequence of `df`.
    pub fn write_table<'a>(
        &'a mut self,
        df: &'a DataFrame,
        col_order: &[String],
        placement: &SpecSheetPlacement,
    ) -> Result<WriteSession<'a>, String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }

        let l_colnames_df: Vec<String> = df
            .get_column_names_str()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        if l_colnames_df.as_slice() != col_order {
            return Err(format!(
                "Table columns do not match the column order: {l_colnames_df:?} vs {col_order:?}"
            ));
        }

        let sheet_name = sanitize_sheet_name(&placement.sheet_name, "_");
        let warning_rename = (sheet_name != placement.sheet_name).then(|| {
            format!(
                "Sheet name {:?} was adjusted to {sheet_name:?}",
                placement.sheet_name
            )
        });
        let placement = SpecSheetPlacement {
            sheet_name,
            ..placement.clone()
        };
        if self.dict_reports.contains_key(&placement.sheet_name) {
            return Err(format!("Sheet already written: {:?}", placement.sheet_name));
        }

        let n_height_df = df.height();
        let n_width_df = df.width();
        validate_table_fits(n_height_df, n_width_df, &placement)?;

        let fmt_header = derive_rust_xlsx_format(&self.fmt_header);
        let fmt_body = Format::new();

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&placement.sheet_name)
            .map_err(derive_xlsx_error_text)?;

        let n_row_header = cast_row_num(placement.row_start)?;
        worksheet
            .write_blank(n_row_header, cast_col_num(placement.col_start)?, &fmt_header)
            .map_err(derive_xlsx_error_text)?;
        for (n_idx_col, name) in col_order.iter().enumerate() {
            worksheet
                .write_string_with_format(
                    n_row_header,
                    cast_col_num(placement.col_of_data(n_idx_col))?,
                    name,
                    &fmt_header,
                )
                .map_err(derive_xlsx_error_text)?;
        }

        // Row labels continue the source numbering: the dropped label row was 0.
        for n_row in 0..n_height_df {
            worksheet
                .write_number_with_format(
                    cast_row_num(placement.row_of_body(n_row))?,
                    cast_col_num(placement.col_start)?,
                    (n_row + 1) as f64,
                    &fmt_header,
                )
                .map_err(derive_xlsx_error_text)?;
        }

        for (n_idx_col, col) in df.get_columns().iter().enumerate() {
            let n_col_sheet = placement.col_of_data(n_idx_col);
            for n_row in 0..n_height_df {
                let value = derive_cell_value_from_any_value(
                    col.get(n_row)
                        .map_err(|err| format!("Failed to access cell value: {err}"))?,
                );
                if matches!(value, EnumCellValue::None) {
                    continue;
                }
                write_cell_with_format(
                    worksheet,
                    placement.row_of_body(n_row),
                    n_col_sheet,
                    &value,
                    &fmt_body,
                )?;
            }
        }

        debug!(
            sheet = %placement.sheet_name,
            n_rows = n_height_df,
            n_cols = n_width_df,
            "table written"
        );
        let mut report = SpecXlsxReport {
            sheet_name: placement.sheet_name.clone(),
            n_rows: n_height_df,
            n_cols: n_width_df,
            ..Default::default()
        };
        if let Some(msg) = warning_rename {
            warn!("{msg}");
            report.warn(msg);
        }
        self.dict_reports
            .insert(placement.sheet_name.clone(), report);

        Ok(WriteSession::new(self, df, col_order.to_vec(), placement))
    }

    /// Borrow one sheet together with its report.
    pub(crate) fn sheet_and_report_mut(
        &mut self,
        sheet_name: &str,
    ) -> Result<(&mut Worksheet, &mut SpecXlsxReport), String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }
        let report = self
            .dict_reports
            .get_mut(sheet_name)
            .ok_or_else(|| format!("Sheet not written by this writer: {sheet_name:?}"))?;
        let worksheet = self
            .workbook
            .worksheet_from_name(sheet_name)
            .map_err(derive_xlsx_error_text)?;
        Ok((worksheet, report))
    }

    #[cfg(test)]
    pub(crate) fn save_to_buffer(&mut self) -> Result<Vec<u8>, String> {
        self.workbook
            .save_to_buffer()
            .map_err(derive_xlsx_error_text)
    }
}

pub(crate) fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
) -> Result<(), String> {
    match value {
        EnumCellValue::None => {
            worksheet
                .write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::String(val) => {
            worksheet
                .write_string_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    val,
                    format,
                )
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Number(val) => {
            worksheet
                .write_number_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    *val,
                    format,
                )
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Boolean(val) => {
            worksheet
                .write_boolean_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    *val,
                    format,
                )
                .map_err(derive_xlsx_error_text)?;
        }
    }
    Ok(())
}

pub(crate) fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }
    if spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        5 => FormatBorder::Thick,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}
