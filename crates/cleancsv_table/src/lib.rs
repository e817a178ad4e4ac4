//! `cleancsv_table` v1:
//! CSV loading and column-cleaning kernel.
//!
//! Architecture:
//! - `conf`  : canonical column order and reserved names
//! - `spec`  : options/enums/errors
//! - `util`  : cell-level helpers (truthiness, stringification)
//! - `read`  : CSV -> `DataFrame` loader
//! - `clean` : drop/trim/reorder transform
pub mod clean;
pub mod conf;
pub mod read;
pub mod spec;
pub mod util;

pub use clean::{clean_table, is_column_empty, is_unnamed};
pub use conf::{L_COL_ORDER_DEFAULT, STR_PREFIX_UNNAMED, TUP_NA_TOKENS};
pub use read::{read_csv_table, read_csv_table_from_reader};
pub use spec::{CleanTableError, EnumColumnNameRule, SpecCleanOptions};
pub use util::{convert_any_value_to_text, is_truthy_any_value};
