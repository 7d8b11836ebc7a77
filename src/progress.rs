//! Progress summary — the shared derivation behind the wizard's step list
//! and the progress banner.
//!
//! Both views read completion through `steps::completion`, so they can
//! never disagree about which sections are done.

use serde::Serialize;

use crate::draft::VendorProfileDraft;
use crate::steps::{StepId, StepRegistry, is_complete};

/// Completion of a single step, computed on demand — never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepCompletion {
    pub step_id: StepId,
    pub required: bool,
    pub complete: bool,
}

/// Derived overview of the whole workflow.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    pub steps: Vec<StepCompletion>,
    pub completed: usize,
    pub total: usize,
    pub required_remaining: usize,
}

impl ProgressSummary {
    /// Compute the summary for the current draft.
    pub fn compute(registry: &StepRegistry, draft: &VendorProfileDraft) -> Self {
        let steps: Vec<StepCompletion> = registry
            .steps()
            .iter()
            .map(|def| StepCompletion {
                step_id: def.id,
                required: def.required,
                complete: is_complete(def.id, draft),
            })
            .collect();
        let completed = steps.iter().filter(|s| s.complete).count();
        let required_remaining = steps
            .iter()
            .filter(|s| s.required && !s.complete)
            .count();
        Self {
            completed,
            total: steps.len(),
            required_remaining,
            steps,
        }
    }

    /// Whether every required step is complete (publishable profile).
    pub fn all_required_complete(&self) -> bool {
        self.required_remaining == 0
    }

    /// The incomplete sections, for the "complete this section" summary.
    pub fn incomplete_steps(&self) -> impl Iterator<Item = &StepCompletion> {
        self.steps.iter().filter(|s| !s.complete)
    }
}
