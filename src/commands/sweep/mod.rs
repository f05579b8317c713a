//! Implementation of the sweep run.
//!
//! Finds local branches whose remote branch is gone and optionally deletes them.
//!
//! # Safety
//!
//! - Default behavior is a dry run (prints what would be removed)
//! - `--delete` removes merged branches only, through git's non-force delete
//! - `--force` removes every stale branch
//! - Destructive runs ask for confirmation unless `--yes` is given
//! - The checked-out branch is never a candidate

mod confirm;
mod display;
mod report;
mod types;


pub use confirm::{Confirmation, TerminalPrompt};
pub use report::JsonReport;
pub use types::{RunStage, SweepRun, SweepSettings};

use crate::cli::{OutputFormat, SweepArgs};
use crate::config::Config;
use crate::context::RepoContext;
use crate::engine::SweepEngine;
use crate::error::{Result, SweepError};
use crate::gateway::{GitCliGateway, VcsGateway};
use std::path::Path;
use tracing::info;

/// Execute a sweep in the repository containing `directory` (or the cwd).
///
/// # Behavior
///
/// - Without `--delete`/`--force`: lists stale branches and their merge status
/// - With `--delete`: deletes merged stale branches after confirmation
/// - With `--force`: deletes all stale branches after confirmation
///
/// Returns `SweepError::PartialFailure` if any deletion failed.
pub fn cmd_sweep(directory: Option<&Path>, args: SweepArgs) -> Result<()> {
    let ctx = RepoContext::resolve(directory)?;
    let config = Config::load_or_default(ctx.config_path())?;
    let settings = SweepSettings::resolve(&args, &config)?;

    let engine = SweepEngine::new(
        GitCliGateway::new(&ctx.repo_root),
        settings.options.clone(),
    );

    let run = run_sweep(&engine, &settings, &TerminalPrompt)?;
    finish(&run, &settings)
}

/// Detect, plan, confirm, and execute.
///
/// Text output prints the plan before the prompt. A declined prompt stops
/// the run before anything is deleted. Destructive runs always end in
/// `RunStage::Executed`, even with nothing marked for deletion.
pub fn run_sweep<G: VcsGateway, C: Confirmation + ?Sized>(
    engine: &SweepEngine<G>,
    settings: &SweepSettings,
    confirmation: &C,
) -> Result<SweepRun> {
    let detection = engine.run_detection()?;
    let plan = engine.run_plan(&detection, settings.mode);

    if settings.format == OutputFormat::Text {
        display::print_plan(engine, &detection, &plan, settings);
    }

    if !settings.mode.is_destructive() {
        return Ok(SweepRun {
            detection,
            plan,
            stage: RunStage::Planned,
        });
    }

    // Nothing to confirm when nothing will be deleted; the executor still
    // runs so the summary reports zero counts.
    let to_delete = plan.deletion_count();
    if to_delete > 0 && !settings.skip_confirmation {
        let question = format!("Delete {} branch(es)?", to_delete);
        if !confirmation.confirm(&question)? {
            info!("deletion declined");
            return Ok(SweepRun {
                detection,
                plan,
                stage: RunStage::Declined,
            });
        }
    }

    let outcome = engine.run_execution(&plan);
    info!(
        attempted = outcome.attempted,
        succeeded = outcome.succeeded,
        failed = outcome.failed,
        "sweep finished"
    );

    Ok(SweepRun {
        detection,
        plan,
        stage: RunStage::Executed(outcome),
    })
}

/// Report the run and turn deletion failures into the exit status.
fn finish(run: &SweepRun, settings: &SweepSettings) -> Result<()> {
    match settings.format {
        OutputFormat::Json => {
            println!("{}", JsonReport::new(run, &settings.options.remote).to_json()?);
        }
        OutputFormat::Text => match &run.stage {
            RunStage::Planned => {}
            RunStage::Declined => display::print_declined(),
            RunStage::Executed(outcome) => display::print_outcome(outcome),
        },
    }

    match run.stage.outcome() {
        Some(outcome) if !outcome.is_clean() => Err(SweepError::PartialFailure {
            failed: outcome.failed,
            attempted: outcome.attempted,
        }),
        _ => Ok(()),
    }
}
