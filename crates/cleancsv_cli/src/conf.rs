//! Default formatting recipe and user-facing texts.

/// Columns sized by the longest word of their (wrapped) header.
pub const L_COLS_WIDTH_BY_WORD: [&str; 10] = [
    "Total Funding Amount (in 000s USD)",
    "Recent Funding Amount (in 000s USD)",
    "Certified Active Company",
    "Business Model",
    "Industry Hierarchical Category",
    "Secondary Industry Hierarchical Category",
    "Company Name",
    "Founded Year",
    "Number of Locations",
    "Company Zip Code",
];

/// Columns sized by their longest value.
pub const L_COLS_WIDTH_BY_VALUE: [&str; 6] = [
    "ZoomInfo Company ID",
    "Company Name",
    "Revenue (in 000s USD)",
    "Revenue Range (in USD)",
    "Employees",
    "Company City",
];

/// Columns given the fixed URL-label width.
pub const L_COLS_WIDTH_FIXED: [&str; 1] = ["Website"];

/// Label whose length sets the fixed URL-column width.
pub const STR_URL_WIDTH_LABEL: &str = "ZoomInfo Company Profile URL";

/// Suffix highlighted (case-insensitive) as a link column.
pub const STR_SUFFIX_URL_COLUMN: &str = "url";

/// Accepted source extension.
pub const STR_EXT_SOURCE: &str = "csv";
/// Accepted destination extensions.
pub const TUP_EXT_DEST: [&str; 3] = ["xlsx", "xls", "xlsm"];
/// Appended to the source stem when no destination file is given.
pub const STR_SUFFIX_DEST_DEFAULT: &str = "_cleaned.xlsx";

/// Printed before the parser error on malformed arguments.
pub const STR_HINT_QUOTING: &str = "\n\tArguments are denoted by dashes \"-\".\n\
\tIf either your source file or destination folder/file contain dashes surround them in double quotes\n\
\tsyntax: cleancsv \"source\" [-d \"dest\"] [-args]\n";

/// Printed on success.
pub const STR_MESSAGE_DONE: &str =
    "Your csv has been successfully cleaned and converted to an excel file!";
