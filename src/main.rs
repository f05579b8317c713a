//! Branch-sweep: delete local branches whose remote branch is gone.
//!
//! This is the main entry point for the `branch-sweep` CLI. It parses
//! arguments, installs logging, runs the sweep, and maps errors to exit codes.

use branch_sweep::cli::Cli;
use branch_sweep::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_tracing(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
