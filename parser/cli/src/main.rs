pub mod logger;

use std::process::ExitCode;

use txmeta_cli::cli::Cli;

fn main() -> ExitCode {
    if let Err(err) = logger::setup_logger() {
        eprintln!("Error: failed to set up logging: {err}");
    }

    Cli::execute()
}
