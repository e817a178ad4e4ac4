//! CSV source loader.
//!
//! Tokenizing is done by `csv`; headers and dtypes follow the conventions the
//! cleaning rules rely on: blank headers become `Unnamed: {i}`, repeated
//! headers get a `.{k}` suffix, and every column gets one inferred dtype.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, PlSmallStr};
use tracing::debug;

use crate::conf::{STR_PREFIX_UNNAMED, TUP_NA_TOKENS};
use crate::spec::CleanTableError;

/// Inferred storage type of one CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnumColumnKind {
    Integer,
    Float,
    Boolean,
    Text,
}

/// Read a CSV file into a `DataFrame`.
pub fn read_csv_table(path: &Path) -> Result<DataFrame, CleanTableError> {
    let file = File::open(path).map_err(|err| CleanTableError::ReadFailed {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let df = read_records(file, path)?;
    debug!(
        path = %path.display(),
        n_rows = df.height(),
        n_cols = df.width(),
        "csv loaded"
    );
    Ok(df)
}

/// Read CSV text from any reader into a `DataFrame`.
pub fn read_csv_table_from_reader<R: Read>(reader: R) -> Result<DataFrame, CleanTableError> {
    read_records(reader, Path::new("<reader>"))
}

fn read_records<R: Read>(reader: R, path: &Path) -> Result<DataFrame, CleanTableError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut l_header_raw: Vec<String> = Vec::new();
    let mut l_rows: Vec<Vec<String>> = Vec::new();
    for (n_idx_record, record) in rdr.records().enumerate() {
        let record = record.map_err(|err| CleanTableError::ReadFailed {
            path: PathBuf::from(path),
            message: err.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if n_idx_record == 0 {
            l_header_raw = row;
        } else {
            l_rows.push(row);
        }
    }

    let n_width = l_rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(l_header_raw.len()))
        .max()
        .unwrap_or(0);
    l_header_raw.resize(n_width, String::new());
    let l_colnames = derive_header_names(&l_header_raw);

    let mut l_columns = Vec::with_capacity(n_width);
    for (n_idx_col, name) in l_colnames.iter().enumerate() {
        let l_cells: Vec<&str> = l_rows
            .iter()
            .map(|row| row.get(n_idx_col).map_or("", String::as_str))
            .collect();
        l_columns.push(derive_column_from_cells(name, &l_cells));
    }

    DataFrame::new(l_columns).map_err(|err| CleanTableError::BuildFailed(err.to_string()))
}

/// Name header cells: blank -> `Unnamed: {i}`, repeats -> `{name}.{k}`.
pub fn derive_header_names(header_raw: &[String]) -> Vec<String> {
    let mut set_names_seen: BTreeSet<String> = BTreeSet::new();
    let mut l_names = Vec::with_capacity(header_raw.len());

    for (n_idx, name_raw) in header_raw.iter().enumerate() {
        let name_base = if name_raw.trim().is_empty() {
            format!("{STR_PREFIX_UNNAMED}{n_idx}")
        } else {
            name_raw.clone()
        };

        let mut name = name_base.clone();
        let mut n_suffix = 1usize;
        while set_names_seen.contains(&name) {
            name = format!("{name_base}.{n_suffix}");
            n_suffix += 1;
        }
        set_names_seen.insert(name.clone());
        l_names.push(name);
    }

    l_names
}

fn derive_column_kind(cells: &[&str]) -> EnumColumnKind {
    let l_filled: Vec<&str> = cells.iter().filter_map(|s| select_filled(s)).collect();
    if l_filled.is_empty() {
        return EnumColumnKind::Float;
    }
    if l_filled.iter().all(|s| s.parse::<i64>().is_ok()) {
        return EnumColumnKind::Integer;
    }
    if l_filled.iter().all(|s| s.parse::<f64>().is_ok()) {
        return EnumColumnKind::Float;
    }
    if l_filled.iter().all(|s| parse_bool_literal(s).is_some()) {
        return EnumColumnKind::Boolean;
    }
    EnumColumnKind::Text
}

fn parse_bool_literal(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn derive_column_from_cells(name: &str, cells: &[&str]) -> Column {
    let name = PlSmallStr::from(name);

    match derive_column_kind(cells) {
        EnumColumnKind::Integer => {
            let l_values: Vec<Option<i64>> = cells
                .iter()
                .map(|s| select_filled(s).and_then(|s| s.parse().ok()))
                .collect();
            Column::new(name, l_values)
        }
        EnumColumnKind::Float => {
            let l_values: Vec<Option<f64>> = cells
                .iter()
                .map(|s| select_filled(s).and_then(|s| s.parse().ok()))
                .collect();
            Column::new(name, l_values)
        }
        EnumColumnKind::Boolean => {
            let l_values: Vec<Option<bool>> = cells
                .iter()
                .map(|s| select_filled(s).and_then(parse_bool_literal))
                .collect();
            Column::new(name, l_values)
        }
        EnumColumnKind::Text => {
            let l_values: Vec<Option<String>> = cells
                .iter()
                .map(|s| select_filled(s).map(str::to_string))
                .collect();
            Column::new(name, l_values)
        }
    }
}

/// `None` for empty cells and missing-value tokens (`NA`, `null`, `#N/A`, ...).
fn select_filled(cell: &str) -> Option<&str> {
    if cell.is_empty() || TUP_NA_TOKENS.contains(&cell) {
        None
    } else {
        Some(cell)
    }
}
