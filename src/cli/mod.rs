//! CLI argument parsing for branch-sweep.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the flags; the run itself is in the `commands` module.

use crate::engine::DeletionMode;
use clap::{ArgAction, Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Branch-sweep: delete local branches whose remote branch is gone.
///
/// Fetches with prune, lists local branches that no longer exist on the
/// remote, and checks whether each is merged into the current branch.
/// Without flags nothing is deleted:
/// - `--delete` removes merged branches (git still refuses unmerged work)
/// - `--force` removes every stale branch
/// - the current branch is never touched
#[derive(Parser, Debug)]
#[command(name = "branch-sweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if started in PATH.
    #[arg(short = 'C', value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub sweep: SweepArgs,
}

/// Arguments that shape a single sweep.
#[derive(Args, Debug, Clone, Default)]
pub struct SweepArgs {
    /// Only list stale branches (the default).
    #[arg(long, conflicts_with_all = ["delete", "force"])]
    pub dry_run: bool,

    /// Delete stale branches that are fully merged.
    #[arg(short, long)]
    pub delete: bool,

    /// Delete every stale branch, merged or not. Implies --delete.
    #[arg(short, long)]
    pub force: bool,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Remote to compare against (default from config, else "origin").
    #[arg(long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Check merge status against BRANCH instead of the current branch.
    #[arg(long, value_name = "BRANCH")]
    pub base: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SweepArgs {
    /// The deletion mode selected by the flags.
    pub fn mode(&self) -> DeletionMode {
        if self.force {
            DeletionMode::ForceDelete
        } else if self.delete {
            DeletionMode::SafeDelete
        } else {
            DeletionMode::DryRun
        }
    }
}

/// How results are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_defaults_to_dry_run() {
        let cli = Cli::try_parse_from(["branch-sweep"]).unwrap();
        assert_eq!(cli.sweep.mode(), DeletionMode::DryRun);
        assert!(!cli.sweep.yes);
        assert_eq!(cli.sweep.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
        assert!(cli.directory.is_none());
    }

    #[test]
    fn parse_delete() {
        let cli = Cli::try_parse_from(["branch-sweep", "--delete"]).unwrap();
        assert_eq!(cli.sweep.mode(), DeletionMode::SafeDelete);

        let cli = Cli::try_parse_from(["branch-sweep", "-d", "-y"]).unwrap();
        assert_eq!(cli.sweep.mode(), DeletionMode::SafeDelete);
        assert!(cli.sweep.yes);
    }

    #[test]
    fn parse_force_wins_over_delete() {
        let cli = Cli::try_parse_from(["branch-sweep", "--delete", "--force"]).unwrap();
        assert_eq!(cli.sweep.mode(), DeletionMode::ForceDelete);

        let cli = Cli::try_parse_from(["branch-sweep", "-f"]).unwrap();
        assert_eq!(cli.sweep.mode(), DeletionMode::ForceDelete);
    }

    #[test]
    fn parse_dry_run_conflicts_with_delete() {
        assert!(Cli::try_parse_from(["branch-sweep", "--dry-run", "--delete"]).is_err());
        assert!(Cli::try_parse_from(["branch-sweep", "--dry-run", "--force"]).is_err());

        let cli = Cli::try_parse_from(["branch-sweep", "--dry-run"]).unwrap();
        assert_eq!(cli.sweep.mode(), DeletionMode::DryRun);
    }

    #[test]
    fn parse_remote_base_and_format() {
        let cli = Cli::try_parse_from([
            "branch-sweep",
            "--remote",
            "upstream",
            "--base",
            "develop",
            "--format",
            "json",
            "-C",
            "/tmp/repo",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.sweep.remote.as_deref(), Some("upstream"));
        assert_eq!(cli.sweep.base.as_deref(), Some("develop"));
        assert_eq!(cli.sweep.format, OutputFormat::Json);
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp/repo")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["branch-sweep", "--format", "xml"]).is_err());
    }
}
