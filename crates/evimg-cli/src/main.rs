use evimg_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Stdout is for asset paths and stderr for the one failure line; events go to the log file.
    if logging::init_file_logging().is_err() {
        logging::init_quiet();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("evimg error: {:#}", err);
        std::process::exit(1);
    }
}
