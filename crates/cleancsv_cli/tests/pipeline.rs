use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use calamine::{Data, Reader, Xlsx, open_workbook};
use cleancsv_cli::{CleanCsvError, SpecPipelineOptions, run, verify_dest};
use cleancsv_table::L_COL_ORDER_DEFAULT;

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let n = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("cleancsv_test_{tag}_{n}"));
        std::fs::create_dir_all(&path).expect("create test dir");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn write_text(path: &Path, txt: &str) {
    std::fs::write(path, txt).expect("write text");
}

fn text(value: &str) -> Data {
    Data::String(value.to_string())
}

fn quote(value: &str) -> String {
    if value.contains(',') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// Export with a blank leading index column and every default column.
fn make_full_export() -> String {
    let mut l_lines = Vec::new();

    let mut l_header = vec![String::new()];
    l_header.extend(L_COL_ORDER_DEFAULT.iter().map(|name| quote(name)));
    l_lines.push(l_header.join(","));

    let mut l_labels = vec![String::new()];
    l_labels.extend(L_COL_ORDER_DEFAULT.iter().map(|_| "label".to_string()));
    l_lines.push(l_labels.join(","));

    for (n_idx_row, company) in ["Acme Holdings", "Bolt"].iter().enumerate() {
        let mut l_row = vec![String::new()];
        for name in L_COL_ORDER_DEFAULT {
            let value = match name {
                "Company Name" => company.to_string(),
                "Employees" => format!("{}", 10 * (n_idx_row + 1)),
                "Website" => format!("www.{}.com", n_idx_row),
                "ZoomInfo Company Profile URL" if n_idx_row == 1 => String::new(),
                _ => format!("v{n_idx_row}"),
            };
            l_row.push(value);
        }
        l_lines.push(l_row.join(","));
    }
    l_lines.join("\n") + "\n"
}

#[test]
fn test_run_drops_placeholder_and_label_row() {
    let dir = TestDir::new("basic");
    let path_source = dir.path().join("export.csv");
    write_text(
        &path_source,
        "Unnamed: 0,Company Name,Employees\n,Secondary,Label\n,Acme,12\n,Bolt,7\n",
    );
    let path_dest = verify_dest(None, &path_source).expect("dest");
    let options = SpecPipelineOptions {
        col_order: vec!["Company Name".to_string()],
        ..SpecPipelineOptions::default()
    };

    let report = run(&path_source, &path_dest, &options).expect("run");

    assert_eq!(path_dest, dir.path().join("export_cleaned.xlsx"));
    assert!(path_dest.is_file());
    assert_eq!(report.sheet_name, "newly_cleaned");
    assert_eq!(report.n_rows, 2);
    assert_eq!(report.n_cols, 1);

    let mut workbook: Xlsx<_> = open_workbook(&path_dest).expect("open xlsx");
    let range = workbook.worksheet_range("newly_cleaned").expect("sheet");
    assert_eq!(range.get_value((1, 3)), Some(&text("Company Name")));
    assert_eq!(range.get_value((2, 3)), Some(&text("Acme")));
    assert_eq!(range.get_value((3, 3)), Some(&text("Bolt")));
    assert_eq!(range.get_value((2, 2)), Some(&Data::Float(1.0)));
    assert!(
        range
            .used_cells()
            .all(|(_, _, value)| *value != text("Unnamed: 0") && *value != text("Secondary"))
    );
}

#[test]
fn test_run_missing_column_writes_nothing() {
    let dir = TestDir::new("missing");
    let path_source = dir.path().join("export.csv");
    write_text(&path_source, "Company Name\nlabel\nAcme\n");
    let path_dest = dir.path().join("out.xlsx");

    let result = run(&path_source, &path_dest, &SpecPipelineOptions::default());

    assert!(matches!(
        result,
        Err(CleanCsvError::MissingColumn(ref name)) if name == "ZoomInfo Company ID"
    ));
    assert!(!path_dest.exists());
}

#[test]
fn test_run_default_recipe_on_full_export() {
    let dir = TestDir::new("full");
    let path_source = dir.path().join("companies.csv");
    write_text(&path_source, &make_full_export());
    let path_dest = verify_dest(Some(dir.path().join("book.xlsx").to_str().expect("utf8")), &path_source)
        .expect("dest");

    let report = run(&path_source, &path_dest, &SpecPipelineOptions::default()).expect("run");

    assert_eq!(report.n_rows, 2);
    assert_eq!(report.n_cols, 36);
    assert_eq!(report.cell_freeze, Some((2, 4)));
    // Every header is wrapped; data columns start at sheet column 3.
    assert_eq!(
        report.cols_header_wrapped.iter().copied().collect::<Vec<_>>(),
        (3..39).collect::<Vec<_>>()
    );

    // Website: fixed URL-label width plus delta.
    assert_eq!(report.widths_by_col.get(&11), Some(&31.0));
    // Number of Locations: longest word, no delta.
    assert_eq!(report.widths_by_col.get(&8), Some(&9.0));
    // Company Name: longest value rule runs last.
    let n_width_name = report.widths_by_col.get(&4).copied().expect("name width");
    assert!((n_width_name - (13.0 * 10.0 / 11.0 + 3.0)).abs() < 1e-9);
    // Company HQ Phone: header length plus delta.
    assert_eq!(report.widths_by_col.get(&13), Some(&19.0));

    // Four URL columns, two body rows each.
    assert_eq!(report.cells_highlighted.len(), 8);
    assert!(report.cells_highlighted.contains(&(2, 14)));
    assert!(report.cells_highlighted.contains(&(3, 17)));
    assert!(!report.cells_highlighted.iter().any(|(_, n_col)| *n_col == 11));

    let mut workbook: Xlsx<_> = open_workbook(&path_dest).expect("open xlsx");
    let range = workbook.worksheet_range("newly_cleaned").expect("sheet");
    assert_eq!(range.get_value((1, 3)), Some(&text("ZoomInfo Company ID")));
    assert_eq!(range.get_value((1, 38)), Some(&text("Relationship (Immediate Parent)")));
    assert_eq!(range.get_value((2, 4)), Some(&text("Acme Holdings")));
    assert_eq!(range.get_value((3, 11)), Some(&text("www.1.com")));
    assert!(matches!(range.get_value((3, 14)), None | Some(Data::Empty)));
}
