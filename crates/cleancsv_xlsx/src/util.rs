//! Stateless helper utilities used by the writer and the formatting passes.

use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::XlsxError;

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_RATIO_DATA_FONT_WIDTH,
    TUP_EXCEL_ILLEGAL,
};
use crate::spec::{EnumCellValue, SpecSheetPlacement};

////////////////////////////////////////////////////////////////////////////////
// #region CellValueConversion

/// Normalize a polars cell; null and NaN both become [`EnumCellValue::None`].
pub fn derive_cell_value_from_any_value(value: AnyValue<'_>) -> EnumCellValue {
    match value {
        AnyValue::Null => EnumCellValue::None,
        AnyValue::String(val) => EnumCellValue::String(val.to_string()),
        AnyValue::StringOwned(val) => EnumCellValue::String(val.to_string()),
        AnyValue::Boolean(val) => EnumCellValue::Boolean(val),
        AnyValue::UInt8(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt16(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt32(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int8(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int16(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int128(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float32(val) => derive_cell_value_from_f64(val as f64),
        AnyValue::Float64(val) => derive_cell_value_from_f64(val),
        _ => EnumCellValue::String(value.to_string()),
    }
}

fn derive_cell_value_from_f64(x: f64) -> EnumCellValue {
    if x.is_nan() {
        EnumCellValue::None
    } else {
        EnumCellValue::Number(x)
    }
}

/// Display text of a normalized cell; missing renders as empty text.
///
/// Whole numbers keep one decimal (`5.0`), matching how the source data
/// prints its floats.
pub fn convert_cell_value_to_text(value: &EnumCellValue) -> String {
    match value {
        EnumCellValue::None => String::new(),
        EnumCellValue::String(s) => s.clone(),
        EnumCellValue::Boolean(b) => if *b { "True" } else { "False" }.to_string(),
        EnumCellValue::Number(n) => {
            if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
                format!("{n:.1}")
            } else {
                n.to_string()
            }
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnWidthRules

/// Width = character count of the full column name.
pub fn derive_width_by_name_len(name: &str) -> f64 {
    name.chars().count() as f64
}

/// Width = character count of the longest space-delimited word in the name.
pub fn derive_width_by_longest_word(name: &str) -> f64 {
    name.split(' ')
        .map(|word| word.chars().count())
        .max()
        .unwrap_or(0) as f64
}

/// Width = longest displayed cell value in column `name`, scaled to the data font.
///
/// Null and NaN cells count as empty text, not as `nan`, so a column with no
/// values yields `0.0`, as does a missing column.
pub fn derive_width_by_longest_value(df: &DataFrame, name: &str) -> Result<f64, String> {
    let Ok(col) = df.column(name) else {
        return Ok(0.0);
    };

    let mut n_len_max = 0usize;
    for n_idx_row in 0..col.len() {
        let value = col
            .get(n_idx_row)
            .map_err(|err| format!("Failed to access cell value: {err}"))?;
        let n_len = convert_cell_value_to_text(&derive_cell_value_from_any_value(value))
            .chars()
            .count();
        n_len_max = usize::max(n_len_max, n_len);
    }

    Ok(n_len_max as f64 * N_RATIO_DATA_FONT_WIDTH)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Check that a `height_df` x `width_df` table fits at `placement`.
pub fn validate_table_fits(
    height_df: usize,
    width_df: usize,
    placement: &SpecSheetPlacement,
) -> Result<(), String> {
    let n_row_last = placement.row_of_body(height_df);
    if n_row_last > N_NROWS_EXCEL_MAX {
        return Err(format!(
            "Table too tall: {height_df} rows from row {} exceed Excel limit {N_NROWS_EXCEL_MAX}.",
            placement.row_start
        ));
    }

    let n_col_last = usize::max(
        placement.col_of_data(width_df),
        placement.col_of_highlight(width_df),
    );
    if n_col_last > N_NCOLS_EXCEL_MAX {
        return Err(format!(
            "Table too wide: {width_df} columns from column {} exceed Excel limit {N_NCOLS_EXCEL_MAX}.",
            placement.col_start
        ));
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Casting

pub(crate) fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

pub(crate) fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

pub(crate) fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, PlSmallStr};

    use super::*;

    #[test]
    fn test_width_by_name_len_counts_chars() {
        assert_eq!(derive_width_by_name_len("AB"), 2.0);
        assert_eq!(derive_width_by_name_len("Company Name"), 12.0);
    }

    #[test]
    fn test_width_by_longest_word() {
        assert_eq!(
            derive_width_by_longest_word("Secondary Industry Hierarchical Category"),
            12.0
        );
        assert_eq!(derive_width_by_longest_word("Employees"), 9.0);
    }

    #[test]
    fn test_width_by_longest_value_scales_to_data_font() {
        let df = DataFrame::new(vec![
            Column::new(
                PlSmallStr::from("Company Name"),
                vec![Some("Acme"), None, Some("Bolt Industries")],
            ),
            Column::new(
                PlSmallStr::from("Employees"),
                vec![Some(5.0f64), Some(f64::NAN), None],
            ),
            Column::new(PlSmallStr::from("Website"), vec![None::<f64>, None, None]),
        ])
        .expect("build df");

        let n_width = derive_width_by_longest_value(&df, "Company Name").expect("width");
        assert!((n_width - 15.0 * 10.0 / 11.0).abs() < 1e-9);

        let n_width = derive_width_by_longest_value(&df, "Employees").expect("width");
        assert!((n_width - 3.0 * 10.0 / 11.0).abs() < 1e-9);

        assert_eq!(derive_width_by_longest_value(&df, "Website").expect("width"), 0.0);
        assert_eq!(derive_width_by_longest_value(&df, "Absent").expect("width"), 0.0);
    }

    #[test]
    fn test_nan_normalizes_to_missing() {
        assert_eq!(
            derive_cell_value_from_any_value(AnyValue::Float64(f64::NAN)),
            EnumCellValue::None
        );
        assert_eq!(convert_cell_value_to_text(&EnumCellValue::None), "");
    }

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("a/b:c", "_"), "a_b_c");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40), "_").len(), 31);
    }

    #[test]
    fn test_validate_table_fits_rejects_overflow() {
        let placement = SpecSheetPlacement::default();
        assert!(validate_table_fits(10, 36, &placement).is_ok());
        assert!(validate_table_fits(N_NROWS_EXCEL_MAX, 1, &placement).is_err());
        assert!(validate_table_fits(1, N_NCOLS_EXCEL_MAX, &placement).is_err());
    }
}
