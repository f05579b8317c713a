//! Machine-readable run report for `--format json`.

use super::types::SweepRun;
use crate::engine::{DeletionMode, PlanEntry, RunOutcome};
use crate::error::{Result, SweepError};
use serde::Serialize;

/// The JSON document written for one run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub remote: &'a str,
    pub mode: DeletionMode,
    pub current: Option<&'a str>,
    pub base: Option<&'a str>,
    pub stage: &'static str,
    pub plan: &'a [PlanEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'a RunOutcome>,
}

impl<'a> JsonReport<'a> {
    pub fn new(run: &'a SweepRun, remote: &'a str) -> Self {
        Self {
            remote,
            mode: run.plan.mode,
            current: run
                .detection
                .snapshot
                .current
                .as_ref()
                .map(|b| b.name.as_str()),
            base: run.detection.base.as_ref().map(|b| b.name.as_str()),
            stage: run.stage.as_str(),
            plan: &run.plan.entries,
            outcome: run.stage.outcome(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SweepError::UserError(format!("failed to serialize report: {}", e)))
    }
}
