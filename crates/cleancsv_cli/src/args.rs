//! Command-line arguments.

use std::ffi::OsString;

use clap::Parser;
use cleancsv_table::{EnumColumnNameRule, SpecCleanOptions};
use cleancsv_xlsx::SpecSheetPlacement;

use crate::spec::SpecPipelineOptions;

const TUP_FLAGS_LEGACY: [&str; 3] = ["-sn", "-sr", "-sc"];

#[derive(Debug, Parser)]
#[command(name = "cleancsv")]
#[command(about = "Clean a company-export csv and convert it to a formatted excel file")]
#[command(version)]
pub struct Args {
    /// Source csv file
    pub source: String,

    /// Destination excel file or folder
    #[arg(value_name = "DEST", conflicts_with = "dest")]
    pub dest_positional: Option<String>,

    /// Destination excel file or folder
    #[arg(short = 'd', long = "dest")]
    pub dest: Option<String>,

    /// Sheet name
    #[arg(long = "sn", default_value = "newly_cleaned")]
    pub sheet_name: String,

    /// Zero-based row of the header
    #[arg(long = "sr", default_value_t = 1)]
    pub row_start: usize,

    /// Zero-based column of the index
    #[arg(long = "sc", default_value_t = 2)]
    pub col_start: usize,

    /// Keep placeholder columns even when they hold no data
    #[arg(long)]
    pub allow_nan: bool,

    /// Name columns by their first-row value instead of the header
    #[arg(long)]
    pub names_from_first_row: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Destination from either spelling.
    pub fn dest(&self) -> Option<&str> {
        self.dest.as_deref().or(self.dest_positional.as_deref())
    }

    /// Pipeline options with the default column order and width recipe.
    pub fn to_pipeline_options(&self) -> SpecPipelineOptions {
        SpecPipelineOptions {
            placement: SpecSheetPlacement {
                sheet_name: self.sheet_name.clone(),
                row_start: self.row_start,
                col_start: self.col_start,
            },
            clean_options: SpecCleanOptions {
                if_allow_nan: self.allow_nan,
                rule_column_name: if self.names_from_first_row {
                    EnumColumnNameRule::FirstRow
                } else {
                    EnumColumnNameRule::Header
                },
            },
            ..SpecPipelineOptions::default()
        }
    }
}

/// Parse `args` (program name first), accepting `-sn`/`-sr`/`-sc`.
pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Args::try_parse_from(args.into_iter().map(|arg| normalize_legacy_flag(arg.into())))
}

/// Rewrite `-sn`, `-sn=value` (and the `sr`/`sc` forms) to their long spelling.
fn normalize_legacy_flag(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    for flag in TUP_FLAGS_LEGACY {
        let if_match = text == flag
            || text
                .strip_prefix(flag)
                .is_some_and(|rest| rest.starts_with('='));
        if if_match {
            return OsString::from(format!("-{text}"));
        }
    }
    arg
}
