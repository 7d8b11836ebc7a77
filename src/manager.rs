//! OnboardingManager — coordinates identity bootstrap, draft state,
//! navigation, and remote reconciliation for one session.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::draft::{DraftPatch, DraftStore, RemoteProfileSnapshot, VendorProfileDraft};
use crate::error::{Error, IdentityError, NavigationError, Result};
use crate::identity::{Credentials, IdentityProvider, bootstrap};
use crate::progress::ProgressSummary;
use crate::reconcile::{ReconciliationService, SaveOutcome};
use crate::session::{NavigationController, OnboardingSession, ResumeHint};
use crate::steps::{StepDefinition, StepRegistry};

/// Session-scoped mutable state behind one lock: the step pointer, the
/// draft, and the session flags move together.
struct SessionState {
    session: OnboardingSession,
    nav: NavigationController,
    drafts: DraftStore,
    submitted_at: Option<DateTime<Utc>>,
}

/// Snapshot of the workflow for the UI: current step, completion, session.
#[derive(Debug, serde::Serialize)]
pub struct OnboardingStatus {
    pub session: OnboardingSession,
    pub current_index: usize,
    pub current_step: StepDefinition,
    pub at_final_step: bool,
    pub progress: ProgressSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Coordinates the onboarding workflow for a single vendor session.
pub struct OnboardingManager {
    registry: StepRegistry,
    identity: Arc<dyn IdentityProvider>,
    reconciler: Arc<ReconciliationService>,
    state: RwLock<SessionState>,
}

impl OnboardingManager {
    /// Create a manager for a not-yet-authenticated session, positioned at
    /// the account step.
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        reconciler: Arc<ReconciliationService>,
    ) -> Self {
        let registry = StepRegistry::new();
        let session = OnboardingSession::unauthenticated();
        let nav = NavigationController::start(registry, &session, None);
        Self {
            registry,
            identity,
            reconciler,
            state: RwLock::new(SessionState {
                session,
                nav,
                drafts: DraftStore::new(),
                submitted_at: None,
            }),
        }
    }

    /// Authenticate and initialize the session.
    ///
    /// Runs identity bootstrap, re-resolves the initial step (consuming the
    /// resume hint), and merges any existing remote profile into the draft.
    /// The remote load fails soft — a missing or unreachable profile leaves
    /// the draft empty rather than blocking onboarding.
    pub async fn begin_session(
        &self,
        credentials: Credentials,
        hint: Option<ResumeHint>,
    ) -> Result<OnboardingStatus> {
        let outcome = bootstrap(self.identity.as_ref(), credentials)
            .await
            .map_err(Error::Identity)?;

        let session = OnboardingSession::authenticated(&outcome);
        let nav = NavigationController::start(self.registry, &session, hint);

        let snapshot = self.reconciler.load_existing(outcome.identity_id).await;

        let mut state = self.state.write().await;
        state.session = session;
        state.nav = nav;
        state.submitted_at = None;
        state.drafts = DraftStore::new();
        if let Some(snapshot) = snapshot {
            state.session.profile_id = Some(snapshot.profile_id);
            state.drafts.replace_all(snapshot);
        }
        Ok(self.status_locked(&state))
    }

    /// Apply a partial edit to the draft. No validation here; partial input
    /// is validated only when leaving the step.
    pub async fn patch(&self, patch: DraftPatch) {
        let mut state = self.state.write().await;
        state.drafts.patch(patch);
    }

    /// The current draft (cloned; the store stays exclusively owned).
    pub async fn draft(&self) -> VendorProfileDraft {
        self.state.read().await.drafts.get().clone()
    }

    /// Advance to the next step, validator-gated.
    pub async fn next(&self) -> std::result::Result<usize, NavigationError> {
        let mut state = self.state.write().await;
        let draft = state.drafts.get().clone();
        state.nav.next(&draft)
    }

    /// Go back one step. Always allowed.
    pub async fn back(&self) -> usize {
        self.state.write().await.nav.back()
    }

    /// Skip the current step, if skippable.
    pub async fn skip(&self) -> std::result::Result<usize, NavigationError> {
        self.state.write().await.nav.skip()
    }

    /// Jump to a step by id string (deep link or summary shortcut).
    pub async fn jump_to(&self, step_id: &str) -> std::result::Result<usize, NavigationError> {
        self.state.write().await.nav.jump_to_str(step_id)
    }

    /// Persist the draft without moving the step pointer.
    pub async fn save(&self) -> Result<SaveOutcome> {
        self.persist(false).await
    }

    /// Submit the finished draft — the same idempotent upsert as `save`,
    /// marking the session's terminal confirmation.
    pub async fn submit(&self) -> Result<SaveOutcome> {
        self.persist(true).await
    }

    /// Refresh the payment-linkage flag from the payment collaborator into
    /// the draft. Fails soft; on error the last-known value stands.
    pub async fn refresh_payment_status(&self) {
        let identity_id = {
            let state = self.state.read().await;
            state.session.identity_id
        };
        let Some(identity_id) = identity_id else {
            return;
        };
        if let Some(linked) = self.reconciler.payment_status(identity_id).await {
            let mut state = self.state.write().await;
            state.drafts.get_mut().payment.linked = linked;
        }
    }

    /// Current workflow status for rendering.
    pub async fn status(&self) -> OnboardingStatus {
        let state = self.state.read().await;
        self.status_locked(&state)
    }

    async fn persist(&self, final_submit: bool) -> Result<SaveOutcome> {
        let (identity_id, draft, last_known) = {
            let state = self.state.read().await;
            let identity_id = state
                .session
                .identity_id
                .ok_or(Error::Identity(IdentityError::NotAuthenticated))?;
            (
                identity_id,
                state.drafts.get().clone(),
                state.drafts.snapshot().cloned(),
            )
        };

        let outcome = if final_submit {
            self.reconciler
                .submit_final(identity_id, &draft, last_known.as_ref())
                .await
        } else {
            self.reconciler
                .save_progress(identity_id, &draft, last_known.as_ref())
                .await
        }
        .map_err(Error::Persistence)?;

        // Write the persisted ids back so subsequent saves target the same
        // remote entity. The draft itself is untouched — failed secondary
        // aspects keep their attempted data for retry.
        let mut state = self.state.write().await;
        state.session.profile_id = Some(outcome.profile_id);
        state.drafts.record_snapshot(RemoteProfileSnapshot {
            profile_id: outcome.profile_id,
            revision: outcome.revision,
            profile: draft,
            fetched_at: Utc::now(),
        });
        if final_submit {
            state.submitted_at = Some(Utc::now());
        }
        Ok(outcome)
    }

    fn status_locked(&self, state: &SessionState) -> OnboardingStatus {
        OnboardingStatus {
            session: state.session.clone(),
            current_index: state.nav.current_index(),
            current_step: *state.nav.current(),
            at_final_step: state.nav.at_final_step(),
            progress: ProgressSummary::compute(&self.registry, state.drafts.get()),
            submitted_at: state.submitted_at,
        }
    }
}
