//! Source/destination path validation.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::conf::{STR_EXT_SOURCE, STR_SUFFIX_DEST_DEFAULT, TUP_EXT_DEST};
use crate::spec::CleanCsvError;

/// Accept `source` only when it ends with `.csv`.
pub fn verify_source(source: &str) -> Result<PathBuf, CleanCsvError> {
    let path = PathBuf::from(source);
    if path.extension().and_then(|ext| ext.to_str()) != Some(STR_EXT_SOURCE) {
        return Err(CleanCsvError::InvalidSource(path));
    }
    Ok(path)
}

/// Resolve the output workbook path.
///
/// - `None` -> `<source dir>/<source stem>_cleaned.xlsx`
/// - no extension (or a bare trailing dot) -> treated as a directory, joined
///   with the default name
/// - otherwise the extension must be `xlsx`, `xls` or `xlsm`
pub fn verify_dest(dest: Option<&str>, path_source: &Path) -> Result<PathBuf, CleanCsvError> {
    let name_default = derive_default_dest_name(path_source);
    let Some(dest) = dest else {
        let path_dir = path_source.parent().unwrap_or_else(|| Path::new(""));
        return Ok(path_dir.join(name_default));
    };

    let path = PathBuf::from(dest);
    match path.extension().and_then(|ext| ext.to_str()) {
        None | Some("") => Ok(path.join(name_default)),
        Some(ext) if TUP_EXT_DEST.contains(&ext) => {
            if ext != "xlsx" {
                warn!(
                    path = %path.display(),
                    "destination extension is .{ext}; the file content is xlsx"
                );
            }
            Ok(path)
        }
        Some(_) => Err(CleanCsvError::InvalidDestination(path)),
    }
}

fn derive_default_dest_name(path_source: &Path) -> String {
    let stem = path_source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{stem}{STR_SUFFIX_DEST_DEFAULT}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_source_requires_csv() {
        assert_eq!(
            verify_source("data/export.csv").expect("csv"),
            PathBuf::from("data/export.csv")
        );
        assert!(matches!(
            verify_source("data/export.txt"),
            Err(CleanCsvError::InvalidSource(_))
        ));
        assert!(matches!(
            verify_source("data/export.CSV"),
            Err(CleanCsvError::InvalidSource(_))
        ));
        assert!(verify_source("data/export").is_err());
    }

    #[test]
    fn test_verify_dest_defaults_next_to_source() {
        let path_source = Path::new("data/export.csv");
        assert_eq!(
            verify_dest(None, path_source).expect("default dest"),
            PathBuf::from("data/export_cleaned.xlsx")
        );
        assert_eq!(
            verify_dest(None, Path::new("export.csv")).expect("default dest"),
            PathBuf::from("export_cleaned.xlsx")
        );
    }

    #[test]
    fn test_verify_dest_joins_directory() {
        let path_source = Path::new("data/export.csv");
        assert_eq!(
            verify_dest(Some("out/reports"), path_source).expect("dir dest"),
            PathBuf::from("out/reports/export_cleaned.xlsx")
        );
        assert_eq!(
            verify_dest(Some("out/reports."), path_source).expect("trailing dot dest"),
            PathBuf::from("out/reports./export_cleaned.xlsx")
        );
    }

    #[test]
    fn test_verify_dest_checks_extension() {
        let path_source = Path::new("data/export.csv");
        assert_eq!(
            verify_dest(Some("out/final.xlsm"), path_source).expect("xlsm"),
            PathBuf::from("out/final.xlsm")
        );
        assert!(verify_dest(Some("out/final.xls"), path_source).is_ok());
        assert!(matches!(
            verify_dest(Some("out/final.ods"), path_source),
            Err(CleanCsvError::InvalidDestination(_))
        ));
    }
}
