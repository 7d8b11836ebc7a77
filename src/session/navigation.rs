//! Navigation controller — the step-pointer state machine.
//!
//! States are registry indices; transitions are `next`, `back`, `skip`, and
//! `jump_to`. Only `next` is validation-gated: reviewing previous input and
//! deliberate jumps are always allowed.

use crate::draft::VendorProfileDraft;
use crate::error::NavigationError;
use crate::steps::{StepDefinition, StepId, StepRegistry, validate_step};

use super::model::{OnboardingSession, ResumeHint};

#[derive(Debug)]
pub struct NavigationController {
    registry: StepRegistry,
    current_index: usize,
}

impl NavigationController {
    /// Start a controller at the session's resolved initial step.
    ///
    /// Resume precedence, highest first: an explicit marker hint, a step id
    /// from the entry URL, then the session default — the account step when
    /// unauthenticated, the welcome/progress position for a returning vendor
    /// with an existing profile, otherwise the first content step.
    pub fn start(
        registry: StepRegistry,
        session: &OnboardingSession,
        hint: Option<ResumeHint>,
    ) -> Self {
        let current_index = Self::resolve_initial(&registry, session, hint);
        Self {
            registry,
            current_index,
        }
    }

    fn resolve_initial(
        registry: &StepRegistry,
        session: &OnboardingSession,
        hint: Option<ResumeHint>,
    ) -> usize {
        if let Some(hint) = hint {
            match registry.step_index_of_str(hint.step_id()) {
                Some(index) => return index,
                None => {
                    tracing::warn!(hint = hint.step_id(), "resume hint names an unknown step, ignoring");
                }
            }
        }
        if !session.is_authenticated {
            return 0;
        }
        if session.is_existing_profile {
            // Stay on the welcome/progress position so the summary of
            // incomplete sections renders before content steps.
            return 0;
        }
        registry.first_content_index()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &'static StepDefinition {
        self.registry
            .get(self.current_index)
            .expect("current index always within registry bounds")
    }

    /// Whether the pointer is on the final step.
    pub fn at_final_step(&self) -> bool {
        self.current_index == self.registry.last_index()
    }

    /// Advance one step. Required, non-skippable steps are validator-gated;
    /// on failure the pointer does not move and the error names the missing
    /// field. Clamped at the last step.
    pub fn next(&mut self, draft: &VendorProfileDraft) -> Result<usize, NavigationError> {
        let step = self.current();
        if step.required && !step.skippable {
            validate_step(step.id, draft)?;
        }
        self.current_index = (self.current_index + 1).min(self.registry.last_index());
        Ok(self.current_index)
    }

    /// Go back one step. Never validated; clamped at the first step.
    pub fn back(&mut self) -> usize {
        self.current_index = self.current_index.saturating_sub(1);
        self.current_index
    }

    /// Skip the current step. Only legal when the step is skippable.
    pub fn skip(&mut self) -> Result<usize, NavigationError> {
        let step = self.current();
        if !step.skippable {
            return Err(NavigationError::NotSkippable { step: step.id });
        }
        self.current_index = (self.current_index + 1).min(self.registry.last_index());
        Ok(self.current_index)
    }

    /// Jump directly to a registered step. Deliberate navigation — always
    /// allowed, regardless of any step's completion state.
    pub fn jump_to(&mut self, id: StepId) -> Result<usize, NavigationError> {
        match self.registry.step_index_of(id) {
            Some(index) => {
                self.current_index = index;
                Ok(index)
            }
            None => Err(NavigationError::UnknownStep { id: id.to_string() }),
        }
    }

    /// Jump by raw step id string (deep links).
    pub fn jump_to_str(&mut self, id: &str) -> Result<usize, NavigationError> {
        match self.registry.step_index_of_str(id) {
            Some(index) => {
                self.current_index = index;
                Ok(index)
            }
            None => Err(NavigationError::UnknownStep { id: id.to_string() }),
        }
    }
}
