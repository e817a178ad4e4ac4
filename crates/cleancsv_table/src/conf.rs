//! Cleaning constants.

/// Prefix given to positional placeholder headers (blank header cells).
pub const STR_PREFIX_UNNAMED: &str = "Unnamed: ";

/// Cell texts read as missing values (besides the empty string).
pub const TUP_NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Canonical column order of a cleaned company export.
pub const L_COL_ORDER_DEFAULT: [&str; 36] = [
    "ZoomInfo Company ID",
    "Company Name",
    "Revenue (in 000s USD)",
    "Revenue Range (in USD)",
    "Employees",
    "Number of Locations",
    "Company City",
    "Company Zip Code",
    "Website",
    "Founded Year",
    "Company HQ Phone",
    "ZoomInfo Company Profile URL",
    "LinkedIn Company Profile URL",
    "Facebook Company Profile URL",
    "Twitter Company Profile URL",
    "Primary Industry",
    "Primary Sub-Industry",
    "All Industries",
    "All Sub-Industries",
    "Industry Hierarchical Category",
    "Secondary Industry Hierarchical Category",
    "Ownership Type",
    "Business Model",
    "Certified Active Company",
    "Certification Date",
    "Total Funding Amount (in 000s USD)",
    "Recent Funding Amount (in 000s USD)",
    "Recent Funding Round",
    "Recent Funding Date",
    "Recent Investors",
    "All Investors",
    "Full Address",
    "Company Is Acquired",
    "Company ID (Ultimate Parent)",
    "Entity Name (Ultimate Parent)",
    "Relationship (Immediate Parent)",
];

/// Build the default column order as owned strings.
pub fn derive_default_col_order() -> Vec<String> {
    L_COL_ORDER_DEFAULT
        .iter()
        .map(ToString::to_string)
        .collect()
}
