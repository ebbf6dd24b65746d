use shotname_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; an unwritable state dir must not stop a rename.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch. Usage errors exit with code 2 from clap.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("shotname error: {:#}", err);
        std::process::exit(1);
    }
}
