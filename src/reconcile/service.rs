//! Remote reconciliation — fail-soft load, idempotent upsert save/submit.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use uuid::Uuid;

use crate::draft::{RemoteProfileSnapshot, VendorProfileDraft};
use crate::error::{AspectError, PersistenceError};

use super::aspects::{AspectWriter, PaymentStatusSource};
use super::snapshot::{ProfileRecord, UpsertReceipt};

/// Repository for the primary profile entity.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch the profile owned by `identity_id`, if one exists.
    async fn fetch_profile(
        &self,
        identity_id: Uuid,
    ) -> Result<Option<RemoteProfileSnapshot>, PersistenceError>;

    /// Create-or-update the profile for `identity_id`. Keyed by identity, so
    /// repeated calls with the same draft collapse to one persisted profile.
    async fn upsert_profile(
        &self,
        identity_id: Uuid,
        record: ProfileRecord,
    ) -> Result<UpsertReceipt, PersistenceError>;
}

/// Why a save was triggered. Same remote operation either way; only the
/// caller-facing confirmation differs (progress banner vs success banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveIntent {
    Progress,
    Final,
}

/// Result of a save: the persisted ids plus any secondary-aspect failures.
///
/// Secondary failures are reported distinctly from primary failures; the
/// primary write has already committed when they appear.
#[derive(Debug)]
pub struct SaveOutcome {
    pub profile_id: Uuid,
    pub revision: u64,
    pub intent: SaveIntent,
    pub secondary_failures: Vec<AspectError>,
}

impl SaveOutcome {
    pub fn fully_succeeded(&self) -> bool {
        self.secondary_failures.is_empty()
    }
}

/// Loads an existing remote profile into the session and persists the draft
/// back to the remote on save or final submit.
pub struct ReconciliationService {
    repository: Arc<dyn ProfileRepository>,
    writers: Vec<Arc<dyn AspectWriter>>,
    payment: Arc<dyn PaymentStatusSource>,
}

impl ReconciliationService {
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        writers: Vec<Arc<dyn AspectWriter>>,
        payment: Arc<dyn PaymentStatusSource>,
    ) -> Self {
        Self {
            repository,
            writers,
            payment,
        }
    }

    /// Load an existing remote profile, if any.
    ///
    /// Fails soft: an unreachable remote or a not-found both yield `None`
    /// so the session proceeds with an empty draft instead of blocking
    /// onboarding. Errors are logged, not surfaced.
    pub async fn load_existing(&self, identity_id: Uuid) -> Option<RemoteProfileSnapshot> {
        match self.repository.fetch_profile(identity_id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(%identity_id, error = %e, "profile fetch failed, starting with an empty draft");
                None
            }
        }
    }

    /// Persist partial progress without changing the step pointer.
    pub async fn save_progress(
        &self,
        identity_id: Uuid,
        draft: &VendorProfileDraft,
        last_known: Option<&RemoteProfileSnapshot>,
    ) -> Result<SaveOutcome, PersistenceError> {
        self.save(identity_id, draft, last_known, SaveIntent::Progress)
            .await
    }

    /// Submit the finished draft. Semantically the same upsert as
    /// `save_progress`; the intent only changes what the caller shows.
    pub async fn submit_final(
        &self,
        identity_id: Uuid,
        draft: &VendorProfileDraft,
        last_known: Option<&RemoteProfileSnapshot>,
    ) -> Result<SaveOutcome, PersistenceError> {
        self.save(identity_id, draft, last_known, SaveIntent::Final)
            .await
    }

    /// Query the payment collaborator for the current linkage status.
    /// Fails soft; the draft keeps its last-known value on error.
    pub async fn payment_status(&self, identity_id: Uuid) -> Option<bool> {
        match self.payment.is_linked(identity_id).await {
            Ok(linked) => Some(linked),
            Err(e) => {
                tracing::warn!(%identity_id, error = %e, "payment status query failed");
                None
            }
        }
    }

    async fn save(
        &self,
        identity_id: Uuid,
        draft: &VendorProfileDraft,
        last_known: Option<&RemoteProfileSnapshot>,
        intent: SaveIntent,
    ) -> Result<SaveOutcome, PersistenceError> {
        let record = ProfileRecord {
            profile_id: last_known.map(|s| s.profile_id),
            revision: last_known.map(|s| s.revision),
            profile: draft.clone(),
        };

        // Primary write first. A failure here is the caller's to surface and
        // retry; the draft is untouched.
        let receipt = self.repository.upsert_profile(identity_id, record).await?;
        tracing::info!(
            %identity_id,
            profile_id = %receipt.profile_id,
            revision = receipt.revision,
            ?intent,
            "profile upsert committed"
        );

        // Secondary aspects are independent writes; run them concurrently
        // and collect per-aspect failures. The committed primary stands.
        let writes = self
            .writers
            .iter()
            .map(|w| w.write(receipt.profile_id, draft));
        let secondary_failures: Vec<AspectError> = join_all(writes)
            .await
            .into_iter()
            .filter_map(Result::err)
            .collect();

        for failure in &secondary_failures {
            tracing::warn!(profile_id = %receipt.profile_id, aspect = %failure.aspect, error = %failure, "secondary aspect write failed");
        }

        Ok(SaveOutcome {
            profile_id: receipt.profile_id,
            revision: receipt.revision,
            intent,
            secondary_failures,
        })
    }
}
