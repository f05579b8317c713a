//! Command implementations for branch-sweep.
//!
//! The CLI has a single operation, so dispatch just routes the parsed
//! arguments to the sweep run.

mod sweep;

pub use sweep::{
    Confirmation, JsonReport, RunStage, SweepRun, SweepSettings, TerminalPrompt, cmd_sweep,
    run_sweep,
};

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    cmd_sweep(cli.directory.as_deref(), cli.sweep)
}
