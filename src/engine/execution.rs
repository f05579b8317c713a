//! Plan execution.

use super::types::{DeletionPlan, RunOutcome};
use crate::gateway::VcsGateway;
use tracing::{info, warn};

/// Delete every `will_delete` entry of `plan`, one at a time.
///
/// Force deletion is used only for `ForceDelete` plans. A failed deletion is
/// recorded in the outcome and the loop moves on to the next entry.
pub fn apply<G: VcsGateway + ?Sized>(gateway: &G, plan: &DeletionPlan) -> RunOutcome {
    let force = plan.mode.is_force();
    let mut outcome = RunOutcome::default();

    for entry in plan.deletions() {
        let branch = &entry.candidate.branch;
        match gateway.delete_branch(branch, force) {
            Ok(()) => {
                info!(branch = %branch.name, force, "deleted branch");
                outcome.record_deleted(&branch.name);
            }
            Err(e) => {
                warn!(branch = %branch.name, error = %e, "branch deletion failed");
                outcome.record_failure(&branch.name, e.reason());
            }
        }
    }

    outcome
}
