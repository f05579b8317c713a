//! Stale branch detection.

use super::types::{BranchRef, RemoteBranchSet, StaleCandidate};

/// Local branches with no branch of the same name on the remote.
///
/// The current branch is never returned. Order follows `local`. Matching is
/// plain name equality; upstream-tracking configuration is not consulted.
pub fn detect_stale(
    local: &[BranchRef],
    remote: &RemoteBranchSet,
    current: Option<&BranchRef>,
) -> Vec<StaleCandidate> {
    let current_name = current.map(|c| c.name.as_str());

    local
        .iter()
        .filter(|b| Some(b.name.as_str()) != current_name)
        .filter(|b| !remote.contains(&b.name))
        .map(|b| StaleCandidate { branch: b.clone() })
        .collect()
}
