//! `cleancsv_cli` v1:
//! Command-line front end: csv in, formatted xlsx out.
//!
//! Modules:
//! - `conf`     : default formatting recipe and CLI texts
//! - `spec`     : pipeline options and the run-level error type
//! - `args`     : argument parsing
//! - `paths`    : source/destination validation
//! - `pipeline` : read -> clean -> write -> format -> close
pub mod args;
pub mod conf;
pub mod paths;
pub mod pipeline;
pub mod spec;

pub use args::{Args, parse_args};
pub use paths::{verify_dest, verify_source};
pub use pipeline::{apply_default_formatting, run};
pub use spec::{CleanCsvError, SpecPipelineOptions};
