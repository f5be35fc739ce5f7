use prefetch_core::logging;
use std::process::ExitCode;

mod cli;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    // Initialize logging as early as possible; the CLI still works without a log file.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match CliCommand::run_from_args() {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("prefetch error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
