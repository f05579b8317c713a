//! Merge classification of stale candidates.

use super::types::{BranchRef, MergeStatus, StaleCandidate};
use crate::error::{Result, SweepError};
use crate::gateway::VcsGateway;
use tracing::{debug, warn};

/// Ask the gateway whether `candidate` is fully contained in `base`.
///
/// A failed ancestry query becomes a `ClassificationError`.
pub fn try_classify<G: VcsGateway + ?Sized>(
    gateway: &G,
    candidate: &StaleCandidate,
    base: &BranchRef,
) -> Result<MergeStatus> {
    match gateway.is_ancestor(&candidate.branch, base) {
        Ok(true) => Ok(MergeStatus::Merged),
        Ok(false) => Ok(MergeStatus::Unmerged),
        Err(e) => Err(SweepError::ClassificationError(format!(
            "{}: {}",
            candidate.name(),
            e
        ))),
    }
}

/// Classify a candidate, degrading any failure to `Unknown`.
///
/// Without a base (detached HEAD and no configured base) nothing can be
/// proven merged, so the answer is `Unknown`.
pub fn classify<G: VcsGateway + ?Sized>(
    gateway: &G,
    candidate: &StaleCandidate,
    base: Option<&BranchRef>,
) -> MergeStatus {
    let Some(base) = base else {
        debug!(branch = candidate.name(), "no merge base; status unknown");
        return MergeStatus::Unknown;
    };

    match try_classify(gateway, candidate, base) {
        Ok(status) => {
            debug!(
                branch = candidate.name(),
                base = %base.name,
                status = status.as_str(),
                "classified"
            );
            status
        }
        Err(e) => {
            warn!(error = %e, "treating branch as unmerged");
            MergeStatus::Unknown
        }
    }
}
