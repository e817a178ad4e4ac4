//! XLSX constants and format preset factories.

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Default highlight fill for matched columns.
pub const STR_COLOR_HIGHLIGHT_DEFAULT: &str = "#fff2cc";
/// Fill of word-wrapped header cells.
pub const STR_COLOR_HEADER_WRAP: &str = "#cccccc";

/// Padding added by `widen` unless overridden.
pub const N_WIDTH_DELTA_DEFAULT: f64 = 3.0;
/// Data cells use a 10pt font while width units are based on 11pt.
pub const N_RATIO_DATA_FONT_WIDTH: f64 = 10.0 / 11.0;

/// Header/index cell format written with the base table.
pub fn derive_header_format() -> SpecCellFormat {
    SpecCellFormat {
        bold: Some(true),
        border: Some(1),
        align: Some("center".to_string()),
        valign: Some("top".to_string()),
        ..Default::default()
    }
}

/// Header format applied by `widen(.., wrap_header = true, ..)`.
pub fn derive_header_wrap_format() -> SpecCellFormat {
    derive_header_format().with_(SpecCellFormat {
        text_wrap: Some(true),
        bg_color: Some(STR_COLOR_HEADER_WRAP.to_string()),
        ..Default::default()
    })
}

/// Body cell format for highlighted columns.
pub fn derive_highlight_format(color: &str) -> SpecCellFormat {
    SpecCellFormat {
        bg_color: Some(color.to_string()),
        ..Default::default()
    }
}
