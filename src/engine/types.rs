//! Data types shared by the detection, planning, and execution stages.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// A local branch as seen in one run's snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRef {
    /// Short branch name (e.g., `feature/x`).
    pub name: String,
    /// Whether this branch was checked out when the snapshot was taken.
    pub is_current: bool,
}

impl BranchRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_current: false,
        }
    }

    pub fn current(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_current: true,
        }
    }
}

/// Branch names present on the remote, taken once per run after fetch/prune.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemoteBranchSet {
    names: BTreeSet<String>,
}

impl RemoteBranchSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RemoteBranchSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A local branch with no counterpart on the remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleCandidate {
    pub branch: BranchRef,
}

impl StaleCandidate {
    pub fn name(&self) -> &str {
        &self.branch.name
    }
}

/// Last-commit details for display. Never consulted when deciding deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    pub short_hash: String,
    pub subject: String,
    pub committed_at: DateTime<Utc>,
}

impl CommitSummary {
    /// Format the commit age as a human-readable string.
    pub fn relative_age(&self) -> String {
        self.relative_age_at(Utc::now())
    }

    pub(crate) fn relative_age_at(&self, now: DateTime<Utc>) -> String {
        let age = now.signed_duration_since(self.committed_at);
        let minutes = age.num_minutes().max(0);
        let hours = age.num_hours().max(0);
        let days = age.num_days().max(0);

        if days > 0 {
            format!("{}d {}h ago", days, hours % 24)
        } else if hours > 0 {
            format!("{}h {}m ago", hours, minutes % 60)
        } else {
            format!("{}m ago", minutes)
        }
    }
}

/// Whether a stale branch is fully contained in the merge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStatus {
    Merged,
    Unmerged,
    /// The ancestry check itself failed. Handled like `Unmerged`.
    Unknown,
}

impl MergeStatus {
    pub fn is_merged(self) -> bool {
        matches!(self, MergeStatus::Merged)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MergeStatus::Merged => "merged",
            MergeStatus::Unmerged => "unmerged",
            MergeStatus::Unknown => "unknown",
        }
    }
}

/// How aggressively a run may delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionMode {
    /// Report only.
    DryRun,
    /// Delete merged branches; git refuses unmerged ones as well.
    SafeDelete,
    /// Delete every stale branch regardless of merge status.
    ForceDelete,
}

impl DeletionMode {
    /// Whether running this mode can delete anything.
    pub fn is_destructive(self) -> bool {
        !matches!(self, DeletionMode::DryRun)
    }

    /// Whether deletions should bypass git's own unmerged check.
    pub fn is_force(self) -> bool {
        matches!(self, DeletionMode::ForceDelete)
    }
}

/// One row of a deletion plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub candidate: StaleCandidate,
    pub status: MergeStatus,
    pub will_delete: bool,
    pub reason: String,
}

/// The ordered, side-effect-free decision for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionPlan {
    pub mode: DeletionMode,
    pub entries: Vec<PlanEntry>,
}

impl DeletionPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that will be deleted, in plan order.
    pub fn deletions(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.will_delete)
    }

    pub fn deletion_count(&self) -> usize {
        self.deletions().count()
    }
}

/// A branch the executor could not delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionFailure {
    pub branch: String,
    pub reason: String,
}

/// Aggregated result of applying a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Number of `will_delete` entries the executor tried.
    pub attempted: usize,
    /// Number of branches actually deleted.
    pub succeeded: usize,
    /// Number of deletions that failed.
    pub failed: usize,
    /// Names of deleted branches, in plan order.
    pub deleted: Vec<String>,
    /// Failed branches with the reason git gave.
    pub failures: Vec<DeletionFailure>,
}

impl RunOutcome {
    pub(crate) fn record_deleted(&mut self, branch: &str) {
        self.attempted += 1;
        self.succeeded += 1;
        self.deleted.push(branch.to_string());
    }

    pub(crate) fn record_failure(&mut self, branch: &str, reason: impl Into<String>) {
        self.attempted += 1;
        self.failed += 1;
        self.failures.push(DeletionFailure {
            branch: branch.to_string(),
            reason: reason.into(),
        });
    }

    /// True when no deletion failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
