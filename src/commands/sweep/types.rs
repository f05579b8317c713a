//! Data types for the sweep command.

use crate::cli::{OutputFormat, SweepArgs};
use crate::config::Config;
use crate::engine::{DeletionMode, DeletionPlan, Detection, RunOutcome, SweepOptions};
use crate::error::{Result, SweepError};

/// Flags and config merged into the settings for one run.
#[derive(Debug, Clone)]
pub struct SweepSettings {
    pub options: SweepOptions,
    pub mode: DeletionMode,
    /// `--yes`, or `confirm: false` in config.
    pub skip_confirmation: bool,
    pub format: OutputFormat,
    pub show_commit_details: bool,
}

impl SweepSettings {
    /// Merge flags over config. Flags win.
    pub fn resolve(args: &SweepArgs, config: &Config) -> Result<Self> {
        let remote = args.remote.clone().unwrap_or_else(|| config.remote.clone());
        if remote.trim().is_empty() {
            return Err(SweepError::UserError("--remote must not be empty".to_string()));
        }

        let base = args.base.clone().or_else(|| config.base_branch.clone());
        if base.as_deref().is_some_and(|b| b.trim().is_empty()) {
            return Err(SweepError::UserError("--base must not be empty".to_string()));
        }

        let mode = args.mode();
        let skip_confirmation = args.yes || !config.confirm;

        if args.format == OutputFormat::Json && mode.is_destructive() && !skip_confirmation {
            return Err(SweepError::UserError(
                "--format json cannot prompt for confirmation.\n\n\
                 Pass --yes together with --delete or --force to delete without a prompt."
                    .to_string(),
            ));
        }

        Ok(Self {
            options: SweepOptions { remote, base },
            mode,
            skip_confirmation,
            format: args.format,
            show_commit_details: config.show_commit_details,
        })
    }
}

/// Where a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStage {
    /// Dry run: the plan was built and nothing executed.
    Planned,
    /// The confirmation was declined; nothing was deleted.
    Declined,
    /// The plan was applied.
    Executed(RunOutcome),
}

impl RunStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStage::Planned => "planned",
            RunStage::Declined => "declined",
            RunStage::Executed(_) => "executed",
        }
    }

    pub fn outcome(&self) -> Option<&RunOutcome> {
        match self {
            RunStage::Executed(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct SweepRun {
    pub detection: Detection,
    pub plan: DeletionPlan,
    pub stage: RunStage,
}
