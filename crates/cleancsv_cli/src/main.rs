use std::process::ExitCode;

use clap::error::ErrorKind;
use cleancsv_cli::conf::{STR_HINT_QUOTING, STR_MESSAGE_DONE};
use cleancsv_cli::{Args, CleanCsvError, parse_args, run, verify_dest, verify_source};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(args: &Args) -> Result<String, CleanCsvError> {
    let path_source = verify_source(&args.source)?;
    let path_dest = verify_dest(args.dest(), &path_source)?;
    run(&path_source, &path_dest, &args.to_pipeline_options())?;
    Ok(path_dest.display().to_string())
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            if !matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) {
                eprintln!("{STR_HINT_QUOTING}");
            }
            err.exit();
        }
    };

    init_logging(&args.log_level);

    match execute(&args) {
        Ok(path_dest) => {
            println!("{STR_MESSAGE_DONE}\n{path_dest}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
