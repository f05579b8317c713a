//! The stale-branch sweep engine.
//!
//! A run moves through fixed stages:
//!
//! 1. fetch with prune
//! 2. snapshot the current branch, local branches, and remote branches (once)
//! 3. detect stale candidates
//! 4. classify each candidate against the merge base
//! 5. build a plan for the chosen [`DeletionMode`]
//! 6. (caller obtains confirmation for destructive modes)
//! 7. execute the plan and report a [`RunOutcome`]
//!
//! # Safety
//!
//! - Any snapshot failure aborts before anything is deleted
//! - The current branch is never a candidate
//! - Safe deletion uses git's non-force delete, so git refuses unmerged
//!   work even if classification was wrong
//! - Classification and deletion failures are per-branch and never abort a run

mod classify;
mod detect;
mod execution;
mod planning;
mod types;


pub use classify::{classify, try_classify};
pub use detect::detect_stale;
pub use execution::apply;
pub use planning::{
    REASON_DRY_RUN, REASON_FORCED, REASON_MERGED, REASON_UNKNOWN, REASON_UNMERGED, build_plan,
};
pub use types::{
    BranchRef, CommitSummary, DeletionFailure, DeletionMode, DeletionPlan, MergeStatus, PlanEntry,
    RemoteBranchSet, RunOutcome, StaleCandidate,
};

use crate::error::Result;
use crate::gateway::VcsGateway;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Settings that stay fixed for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    /// Remote whose branch list defines "not stale".
    pub remote: String,
    /// Merge base override. `None` means the current branch.
    pub base: Option<String>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            base: None,
        }
    }
}

/// Read-only state captured right after the fetch.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub current: Option<BranchRef>,
    pub local: Vec<BranchRef>,
    pub remote: RemoteBranchSet,
}

/// Stale candidates and their merge status.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    pub snapshot: Snapshot,
    /// The branch candidates were classified against, if any.
    pub base: Option<BranchRef>,
    /// Candidates in local listing order.
    pub candidates: Vec<StaleCandidate>,
    /// Merge status keyed by branch name.
    pub statuses: HashMap<String, MergeStatus>,
}

impl Detection {
    pub fn status_of(&self, candidate: &StaleCandidate) -> MergeStatus {
        self.statuses
            .get(candidate.name())
            .copied()
            .unwrap_or(MergeStatus::Unknown)
    }
}

/// Drives detection, planning, and execution through a [`VcsGateway`].
#[derive(Debug)]
pub struct SweepEngine<G> {
    gateway: G,
    options: SweepOptions,
}

impl<G: VcsGateway> SweepEngine<G> {
    pub fn new(gateway: G, options: SweepOptions) -> Self {
        Self { gateway, options }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetch, snapshot, detect, and classify.
    ///
    /// Fails with the gateway's error if the fetch or any listing fails; no
    /// partial detection is returned.
    pub fn run_detection(&self) -> Result<Detection> {
        let snapshot = self.take_snapshot()?;
        let candidates = detect_stale(&snapshot.local, &snapshot.remote, snapshot.current.as_ref());
        debug!(
            local = snapshot.local.len(),
            remote = snapshot.remote.len(),
            stale = candidates.len(),
            "detected stale branches"
        );

        let base = self.merge_base(&snapshot);
        let statuses = candidates
            .iter()
            .map(|c| (c.name().to_string(), classify(&self.gateway, c, base.as_ref())))
            .collect();

        Ok(Detection {
            snapshot,
            base,
            candidates,
            statuses,
        })
    }

    /// Build the plan for `mode`. Pure; safe to preview.
    pub fn run_plan(&self, detection: &Detection, mode: DeletionMode) -> DeletionPlan {
        build_plan(&detection.candidates, mode, &detection.statuses)
    }

    /// Apply a plan. The caller obtains confirmation first.
    pub fn run_execution(&self, plan: &DeletionPlan) -> RunOutcome {
        apply(&self.gateway, plan)
    }

    /// Best-effort commit details for display.
    pub fn describe(&self, candidate: &StaleCandidate) -> Option<CommitSummary> {
        self.gateway.commit_summary(&candidate.branch).ok()
    }

    fn take_snapshot(&self) -> Result<Snapshot> {
        self.gateway.fetch_and_prune(&self.options.remote)?;
        let current = self.gateway.current_branch()?;
        let mut local = self.gateway.local_branches()?;
        let remote = self.gateway.remote_branch_names(&self.options.remote)?;

        // is_current comes from this run's HEAD lookup, never from a listing
        let current_name = current.as_ref().map(|c| c.name.as_str());
        for branch in &mut local {
            branch.is_current = Some(branch.name.as_str()) == current_name;
        }

        Ok(Snapshot {
            current,
            local,
            remote,
        })
    }

    fn merge_base(&self, snapshot: &Snapshot) -> Option<BranchRef> {
        match &self.options.base {
            Some(name) => Some(BranchRef {
                name: name.clone(),
                is_current: snapshot.current.as_ref().is_some_and(|c| &c.name == name),
            }),
            None => snapshot.current.clone(),
        }
    }
}
