//! Column cleaning: drop empty placeholder columns, trim the label row, reorder.

use std::collections::BTreeMap;

use polars::prelude::{Column, DataFrame, PlSmallStr};
use tracing::debug;

use crate::conf::STR_PREFIX_UNNAMED;
use crate::spec::{CleanTableError, EnumColumnNameRule, SpecCleanOptions};
use crate::util::{convert_any_value_to_text, is_truthy_any_value};

/// Clean `df` into a table whose columns are exactly `col_order`.
///
/// Steps:
/// 1. drop columns that are both placeholder-named and empty (unless
///    `options.if_allow_nan`),
/// 2. drop row 0 of every retained column (secondary label row),
/// 3. re-project onto `col_order`.
///
/// Fails with [`CleanTableError::MissingColumn`] on the first absent name.
pub fn clean_table(
    df: &DataFrame,
    col_order: &[String],
    options: &SpecCleanOptions,
) -> Result<DataFrame, CleanTableError> {
    let mut dict_cols_by_name: BTreeMap<String, Column> = BTreeMap::new();

    for col in df.get_columns() {
        let name_header = col.name().as_str();
        if !options.if_allow_nan && is_unnamed(name_header) && is_column_empty(col)? {
            debug!(column = name_header, "dropping empty placeholder column");
            continue;
        }

        let name_out = match options.rule_column_name {
            EnumColumnNameRule::Header => name_header.to_string(),
            EnumColumnNameRule::FirstRow => {
                derive_first_row_name(col)?.unwrap_or_else(|| name_header.to_string())
            }
        };

        let mut col_trimmed = col.slice(1, col.len().saturating_sub(1));
        col_trimmed.rename(PlSmallStr::from(name_out.as_str()));
        dict_cols_by_name.entry(name_out).or_insert(col_trimmed);
    }

    let mut l_cols_out = Vec::with_capacity(col_order.len());
    for name in col_order {
        let col = dict_cols_by_name
            .get(name)
            .ok_or_else(|| CleanTableError::MissingColumn(name.clone()))?;
        l_cols_out.push(col.clone());
    }

    let df_clean =
        DataFrame::new(l_cols_out).map_err(|err| CleanTableError::BuildFailed(err.to_string()))?;
    debug!(
        n_cols_in = df.width(),
        n_cols_out = df_clean.width(),
        n_rows_out = df_clean.height(),
        "table cleaned"
    );
    Ok(df_clean)
}

/// Whether a header was synthesized as a positional placeholder.
pub fn is_unnamed(name: &str) -> bool {
    name.starts_with(STR_PREFIX_UNNAMED)
}

/// Whether a column holds no truthy cell (all null/NaN/empty/zero/false).
pub fn is_column_empty(col: &Column) -> Result<bool, CleanTableError> {
    for n_idx_row in 0..col.len() {
        let value = col
            .get(n_idx_row)
            .map_err(|err| CleanTableError::BuildFailed(err.to_string()))?;
        if is_truthy_any_value(&value) {
            return Ok(false);
        }
    }
    Ok(true)
}

fn derive_first_row_name(col: &Column) -> Result<Option<String>, CleanTableError> {
    if col.len() == 0 {
        return Ok(None);
    }
    let value = col
        .get(0)
        .map_err(|err| CleanTableError::BuildFailed(err.to_string()))?;
    Ok(convert_any_value_to_text(&value))
}
