//! In-memory gateway for engine tests.

use super::VcsGateway;
use crate::engine::{BranchRef, CommitSummary, RemoteBranchSet};
use crate::error::{Result, SweepError};
use chrono::{TimeZone, Utc};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Default)]
pub(crate) struct FakeGateway {
    current: Option<String>,
    local: RefCell<Vec<String>>,
    remote: BTreeSet<String>,
    merged: HashSet<String>,
    broken_ancestry: HashSet<String>,
    failing_deletes: HashSet<String>,
    fail_fetch: bool,
    pub(crate) fetch_calls: Cell<usize>,
    pub(crate) remote_listings: Cell<usize>,
    pub(crate) summary_calls: Cell<usize>,
    /// `(candidate, base)` for every ancestry query.
    pub(crate) ancestry_checks: RefCell<Vec<(String, String)>>,
    pub(crate) deletions: RefCell<Vec<(String, bool)>>,
}

impl FakeGateway {
    pub(crate) fn new(current: Option<&str>, local: &[&str], remote: &[&str]) -> Self {
        Self {
            current: current.map(str::to_string),
            local: RefCell::new(local.iter().map(|s| s.to_string()).collect()),
            remote: remote.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Branches reported as ancestors of any base.
    pub(crate) fn with_merged(mut self, names: &[&str]) -> Self {
        self.merged.extend(names.iter().map(|s| s.to_string()));
        self
    }

    /// Branches whose ancestry check errors out.
    pub(crate) fn with_broken_ancestry(mut self, names: &[&str]) -> Self {
        self.broken_ancestry
            .extend(names.iter().map(|s| s.to_string()));
        self
    }

    pub(crate) fn with_failing_deletes(mut self, names: &[&str]) -> Self {
        self.failing_deletes
            .extend(names.iter().map(|s| s.to_string()));
        self
    }

    pub(crate) fn with_failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub(crate) fn local_names(&self) -> Vec<String> {
        self.local.borrow().clone()
    }
}

impl VcsGateway for FakeGateway {
    fn fetch_and_prune(&self, remote: &str) -> Result<()> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        if self.fail_fetch {
            return Err(SweepError::GatewayError(format!(
                "could not read from remote '{}'",
                remote
            )));
        }
        Ok(())
    }

    fn current_branch(&self) -> Result<Option<BranchRef>> {
        Ok(self.current.as_deref().map(BranchRef::current))
    }

    fn local_branches(&self) -> Result<Vec<BranchRef>> {
        Ok(self
            .local
            .borrow()
            .iter()
            .map(|name| BranchRef {
                name: name.clone(),
                is_current: self.current.as_deref() == Some(name.as_str()),
            })
            .collect())
    }

    fn remote_branch_names(&self, _remote: &str) -> Result<RemoteBranchSet> {
        self.remote_listings.set(self.remote_listings.get() + 1);
        Ok(self.remote.iter().cloned().collect())
    }

    fn is_ancestor(&self, candidate: &BranchRef, base: &BranchRef) -> Result<bool> {
        self.ancestry_checks
            .borrow_mut()
            .push((candidate.name.clone(), base.name.clone()));
        if self.broken_ancestry.contains(&candidate.name) {
            return Err(SweepError::GatewayError(format!(
                "bad object {}",
                candidate.name
            )));
        }
        Ok(self.merged.contains(&candidate.name))
    }

    fn commit_summary(&self, branch: &BranchRef) -> Result<CommitSummary> {
        self.summary_calls.set(self.summary_calls.get() + 1);
        Ok(CommitSummary {
            short_hash: "1234abc".to_string(),
            subject: format!("Work on {}", branch.name),
            committed_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        })
    }

    fn delete_branch(&self, branch: &BranchRef, force: bool) -> Result<()> {
        self.deletions
            .borrow_mut()
            .push((branch.name.clone(), force));

        if self.failing_deletes.contains(&branch.name) {
            return Err(SweepError::DeletionError {
                branch: branch.name.clone(),
                message: "cannot lock ref".to_string(),
            });
        }

        let mut local = self.local.borrow_mut();
        let Some(pos) = local.iter().position(|n| n == &branch.name) else {
            return Err(SweepError::DeletionError {
                branch: branch.name.clone(),
                message: format!("branch '{}' not found", branch.name),
            });
        };
        if !force && !self.merged.contains(&branch.name) {
            return Err(SweepError::DeletionError {
                branch: branch.name.clone(),
                message: format!("the branch '{}' is not fully merged", branch.name),
            });
        }
        local.remove(pos);
        Ok(())
    }
}
