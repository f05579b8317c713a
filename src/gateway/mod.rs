//! The capability boundary between the sweep engine and a version-control backend.
//!
//! The engine only ever talks to a [`VcsGateway`]. [`GitCliGateway`] drives the
//! `git` executable; tests substitute an in-memory fake.

mod git_cli;

#[cfg(test)]
pub(crate) mod fake;

pub use git_cli::GitCliGateway;

use crate::engine::{BranchRef, CommitSummary, RemoteBranchSet};
use crate::error::Result;

/// Branch-level operations the sweep engine needs from a backend.
///
/// Listing and lookup failures are `SweepError::GatewayError`; a refused or
/// failed deletion is `SweepError::DeletionError`.
pub trait VcsGateway {
    /// Fetch from `remote` and drop tracking refs for branches it no longer has.
    fn fetch_and_prune(&self, remote: &str) -> Result<()>;

    /// The checked-out branch, or `None` on a detached HEAD.
    fn current_branch(&self) -> Result<Option<BranchRef>>;

    /// All local branches in the backend's listing order.
    fn local_branches(&self) -> Result<Vec<BranchRef>>;

    /// Branch names currently known for `remote`.
    fn remote_branch_names(&self, remote: &str) -> Result<RemoteBranchSet>;

    /// Whether every commit of `candidate` is reachable from `base`.
    fn is_ancestor(&self, candidate: &BranchRef, base: &BranchRef) -> Result<bool>;

    /// Last-commit details for display.
    fn commit_summary(&self, branch: &BranchRef) -> Result<CommitSummary>;

    /// Delete a local branch. Without `force` the backend refuses unmerged work.
    fn delete_branch(&self, branch: &BranchRef, force: bool) -> Result<()>;
}

impl<G: VcsGateway + ?Sized> VcsGateway for &G {
    fn fetch_and_prune(&self, remote: &str) -> Result<()> {
        (**self).fetch_and_prune(remote)
    }

    fn current_branch(&self) -> Result<Option<BranchRef>> {
        (**self).current_branch()
    }

    fn local_branches(&self) -> Result<Vec<BranchRef>> {
        (**self).local_branches()
    }

    fn remote_branch_names(&self, remote: &str) -> Result<RemoteBranchSet> {
        (**self).remote_branch_names(remote)
    }

    fn is_ancestor(&self, candidate: &BranchRef, base: &BranchRef) -> Result<bool> {
        (**self).is_ancestor(candidate, base)
    }

    fn commit_summary(&self, branch: &BranchRef) -> Result<CommitSummary> {
        (**self).commit_summary(branch)
    }

    fn delete_branch(&self, branch: &BranchRef, force: bool) -> Result<()> {
        (**self).delete_branch(branch, force)
    }
}
