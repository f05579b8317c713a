//! Deletion plan building: a pure decision table over mode and merge status.

use super::types::{DeletionMode, DeletionPlan, MergeStatus, PlanEntry, StaleCandidate};
use std::collections::HashMap;

pub const REASON_DRY_RUN: &str = "dry-run";
pub const REASON_MERGED: &str = "merged";
pub const REASON_UNMERGED: &str = "unmerged; rerun with force";
pub const REASON_UNKNOWN: &str = "merge status unknown; rerun with force";
pub const REASON_FORCED: &str = "forced";

/// Build the plan for `candidates` in their given order.
///
/// A candidate missing from `statuses` is treated as `Unknown`.
pub fn build_plan(
    candidates: &[StaleCandidate],
    mode: DeletionMode,
    statuses: &HashMap<String, MergeStatus>,
) -> DeletionPlan {
    let entries = candidates
        .iter()
        .map(|candidate| {
            let status = statuses
                .get(candidate.name())
                .copied()
                .unwrap_or(MergeStatus::Unknown);
            let (will_delete, reason) = decide(mode, status);
            PlanEntry {
                candidate: candidate.clone(),
                status,
                will_delete,
                reason: reason.to_string(),
            }
        })
        .collect();

    DeletionPlan { mode, entries }
}

fn decide(mode: DeletionMode, status: MergeStatus) -> (bool, &'static str) {
    match (mode, status) {
        (DeletionMode::DryRun, _) => (false, REASON_DRY_RUN),
        (DeletionMode::ForceDelete, _) => (true, REASON_FORCED),
        (DeletionMode::SafeDelete, MergeStatus::Merged) => (true, REASON_MERGED),
        (DeletionMode::SafeDelete, MergeStatus::Unmerged) => (false, REASON_UNMERGED),
        (DeletionMode::SafeDelete, MergeStatus::Unknown) => (false, REASON_UNKNOWN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::BranchRef;

    fn candidates(names: &[&str]) -> Vec<StaleCandidate> {
        names
            .iter()
            .map(|n| StaleCandidate {
                branch: BranchRef::new(*n),
            })
            .collect()
    }

    fn statuses(pairs: &[(&str, MergeStatus)]) -> HashMap<String, MergeStatus> {
        pairs.iter().map(|(n, s)| (n.to_string(), *s)).collect()
    }

    #[test]
    fn test_mode_law_holds_for_every_status() {
        let all = [MergeStatus::Merged, MergeStatus::Unmerged, MergeStatus::Unknown];
        let cands = candidates(&["a", "b", "c"]);
        let st = statuses(&[("a", all[0]), ("b", all[1]), ("c", all[2])]);

        let dry = build_plan(&cands, DeletionMode::DryRun, &st);
        assert!(dry.entries.iter().all(|e| !e.will_delete && e.reason == REASON_DRY_RUN));

        let force = build_plan(&cands, DeletionMode::ForceDelete, &st);
        assert!(force.entries.iter().all(|e| e.will_delete && e.reason == REASON_FORCED));

        let safe = build_plan(&cands, DeletionMode::SafeDelete, &st);
        for entry in &safe.entries {
            assert_eq!(entry.will_delete, entry.status == MergeStatus::Merged);
        }
    }

    #[test]
    fn test_will_delete_implies_force_or_merged() {
        let cands = candidates(&["a", "b"]);
        let st = statuses(&[("a", MergeStatus::Merged), ("b", MergeStatus::Unmerged)]);
        for mode in [
            DeletionMode::DryRun,
            DeletionMode::SafeDelete,
            DeletionMode::ForceDelete,
        ] {
            let plan = build_plan(&cands, mode, &st);
            assert_eq!(plan.mode, mode);
            for entry in plan.deletions() {
                assert!(mode.is_force() || entry.status.is_merged());
            }
        }
    }

    #[test]
    fn test_safe_delete_reasons() {
        let cands = candidates(&["merged", "unmerged", "unknown"]);
        let st = statuses(&[
            ("merged", MergeStatus::Merged),
            ("unmerged", MergeStatus::Unmerged),
        ]);

        let plan = build_plan(&cands, DeletionMode::SafeDelete, &st);
        let reasons: Vec<&str> = plan.entries.iter().map(|e| e.reason.as_str()).collect();
        assert_eq!(reasons, vec![REASON_MERGED, REASON_UNMERGED, REASON_UNKNOWN]);
        assert_eq!(plan.entries[2].status, MergeStatus::Unknown);
        assert_eq!(plan.deletion_count(), 1);
    }

    #[test]
    fn test_order_matches_candidates() {
        let cands = candidates(&["zeta", "alpha", "mid"]);
        let plan = build_plan(&cands, DeletionMode::ForceDelete, &HashMap::new());
        let order: Vec<&str> = plan.entries.iter().map(|e| e.candidate.name()).collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_candidates_make_empty_plan() {
        let plan = build_plan(&[], DeletionMode::ForceDelete, &HashMap::new());
        assert!(plan.is_empty());
        assert_eq!(plan.deletion_count(), 0);
    }
}
