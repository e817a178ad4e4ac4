//! `cleancsv_xlsx` v1:
//! Workbook writer and formatting passes for cleaned tables.
//!
//! Modules:
//! - `conf`    : Excel limits, colors, format presets
//! - `spec`    : formats/placement/cell models
//! - `util`    : pure helpers (sheet names, cell conversion, width rules)
//! - `writer`  : workbook owner and base table write
//! - `session` : per-sheet formatting passes (highlight/widen/freeze)
pub mod conf;
pub mod session;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_RATIO_DATA_FONT_WIDTH,
    N_WIDTH_DELTA_DEFAULT, STR_COLOR_HEADER_WRAP, STR_COLOR_HIGHLIGHT_DEFAULT,
};
pub use session::WriteSession;
pub use spec::{EnumCellValue, SpecCellFormat, SpecSheetPlacement, SpecXlsxReport};
pub use util::{
    derive_width_by_longest_value, derive_width_by_longest_word, derive_width_by_name_len,
    sanitize_sheet_name,
};
pub use writer::XlsxWriter;
