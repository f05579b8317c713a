//! Display and formatting utilities for sweep output.

use super::types::SweepSettings;
use crate::engine::{
    CommitSummary, DeletionMode, DeletionPlan, Detection, PlanEntry, RunOutcome, SweepEngine,
};
use crate::gateway::VcsGateway;

/// Print the plan in a readable format.
///
/// Commit details are looked up here, only for display.
pub fn print_plan<G: VcsGateway>(
    engine: &SweepEngine<G>,
    detection: &Detection,
    plan: &DeletionPlan,
    settings: &SweepSettings,
) {
    if plan.is_empty() {
        println!(
            "No stale branches: every local branch exists on '{}'.",
            settings.options.remote
        );
        return;
    }

    println!("{}", plan_header(detection, plan, &settings.options.remote));
    println!();

    let width = plan
        .entries
        .iter()
        .map(|e| e.candidate.name().len())
        .max()
        .unwrap_or(0);

    for entry in &plan.entries {
        println!("  {}", format_entry(entry, plan.mode, width));
        if settings.show_commit_details
            && let Some(summary) = engine.describe(&entry.candidate)
        {
            println!("      {}", format_summary(&summary));
        }
    }
    println!();

    if plan.mode == DeletionMode::DryRun {
        println!("Dry-run mode: no changes made.");
        println!("Run with --delete to remove merged branches, or --force to remove all of them.");
    } else if plan.deletion_count() == 0 {
        println!("Nothing to delete.");
    }
}

/// Print the result of an executed plan.
pub fn print_outcome(outcome: &RunOutcome) {
    println!();
    println!("{}", format_outcome(outcome));
}

/// The run summary: counts first, then each deleted and failed branch.
pub fn format_outcome(outcome: &RunOutcome) -> String {
    let mut lines = vec![
        "Sweep complete:".to_string(),
        format!("  Attempted: {} branch(es)", outcome.attempted),
        format!("  Deleted:   {} branch(es)", outcome.succeeded),
    ];
    for branch in &outcome.deleted {
        lines.push(format!("    - {}", branch));
    }
    lines.push(format!("  Failed:    {} branch(es)", outcome.failed));
    for failure in &outcome.failures {
        lines.push(format!("    - {}: {}", failure.branch, failure.reason));
    }
    lines.join("\n")
}

/// Print the message for a declined confirmation.
pub fn print_declined() {
    println!("Aborted: no branches were deleted.");
}

pub fn plan_header(detection: &Detection, plan: &DeletionPlan, remote: &str) -> String {
    let base = detection
        .base
        .as_ref()
        .map(|b| b.name.as_str())
        .unwrap_or("(none, detached HEAD)");
    format!(
        "Stale branches not on '{}' ({}), merge base: {}",
        remote,
        plan.entries.len(),
        base
    )
}

/// One line per plan entry: name, status, and what happens to it.
pub fn format_entry(entry: &PlanEntry, mode: DeletionMode, width: usize) -> String {
    let status = format!("[{}]", entry.status.as_str());
    let action = match (mode, entry.will_delete) {
        (DeletionMode::DryRun, _) => String::new(),
        (_, true) => "will delete".to_string(),
        (_, false) => format!("keep: {}", entry.reason),
    };

    format!(
        "{:<width$}  {:<10}  {}",
        entry.candidate.name(),
        status,
        action,
        width = width
    )
    .trim_end()
    .to_string()
}

pub fn format_summary(summary: &CommitSummary) -> String {
    format!(
        "{}  {}  {}",
        summary.short_hash,
        summary.relative_age(),
        summary.subject
    )
    .trim_end()
    .to_string()
}
