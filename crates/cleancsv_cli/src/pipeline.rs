//! One run: read -> clean -> write -> format -> close.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use cleancsv_table::{clean_table, read_csv_table};
use cleancsv_xlsx::{
    N_WIDTH_DELTA_DEFAULT, SpecXlsxReport, WriteSession, XlsxWriter,
    derive_width_by_longest_value, derive_width_by_longest_word, derive_width_by_name_len,
};
use tracing::{debug, info};

use crate::conf::{STR_SUFFIX_URL_COLUMN, STR_URL_WIDTH_LABEL};
use crate::spec::{CleanCsvError, SpecPipelineOptions};

/// Clean `path_source` and write the formatted workbook to `path_dest`.
///
/// Nothing is written to disk unless every step succeeds.
pub fn run(
    path_source: &Path,
    path_dest: &Path,
    options: &SpecPipelineOptions,
) -> Result<SpecXlsxReport, CleanCsvError> {
    info!(source = %path_source.display(), "reading csv");
    let df_raw = read_csv_table(path_source)?;
    debug!(n_rows = df_raw.height(), n_cols = df_raw.width(), "csv loaded");

    let df = clean_table(&df_raw, &options.col_order, &options.clean_options)?;
    info!(n_rows = df.height(), n_cols = df.width(), "table cleaned");

    let mut writer = XlsxWriter::new(path_dest.to_path_buf());
    {
        let mut session = writer
            .write_table(&df, &options.col_order, &options.placement)
            .map_err(CleanCsvError::WriteFailed)?;
        apply_default_formatting(&mut session, options)?;
    }
    writer.close().map_err(CleanCsvError::WriteFailed)?;
    info!(dest = %writer.file_out(), "workbook written");

    writer
        .report()
        .into_iter()
        .next()
        .ok_or_else(|| CleanCsvError::WriteFailed("No sheet was written.".to_string()))
}

/// Highlight link columns, size every column, then freeze panes.
///
/// Later width rules override earlier ones for the same column.
pub fn apply_default_formatting(
    session: &mut WriteSession<'_>,
    options: &SpecPipelineOptions,
) -> Result<(), CleanCsvError> {
    session
        .highlight_default(|name| name.to_lowercase().ends_with(STR_SUFFIX_URL_COLUMN))
        .map_err(CleanCsvError::WriteFailed)?;

    let set_all: BTreeSet<String> = session.col_order().iter().cloned().collect();
    session
        .widen(&set_all, derive_width_by_name_len, true, N_WIDTH_DELTA_DEFAULT)
        .map_err(CleanCsvError::WriteFailed)?;
    session
        .widen(
            &options.cols_width_by_word,
            derive_width_by_longest_word,
            false,
            0.0,
        )
        .map_err(CleanCsvError::WriteFailed)?;

    let df = session.table();
    let mut dict_width_by_value: BTreeMap<&str, f64> = BTreeMap::new();
    for name in &options.cols_width_by_value {
        let n_width =
            derive_width_by_longest_value(df, name).map_err(CleanCsvError::WriteFailed)?;
        dict_width_by_value.insert(name.as_str(), n_width);
    }
    session
        .widen(
            &options.cols_width_by_value,
            |name| dict_width_by_value.get(name).copied().unwrap_or(0.0),
            false,
            N_WIDTH_DELTA_DEFAULT,
        )
        .map_err(CleanCsvError::WriteFailed)?;

    let n_width_url = derive_width_by_name_len(STR_URL_WIDTH_LABEL);
    session
        .widen(
            &options.cols_width_fixed,
            |_| n_width_url,
            false,
            N_WIDTH_DELTA_DEFAULT,
        )
        .map_err(CleanCsvError::WriteFailed)?;

    session.freeze().map_err(CleanCsvError::WriteFailed)?;
    debug!("default formatting applied");
    Ok(())
}
