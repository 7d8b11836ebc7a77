//! Draft store — holds the working draft and the last-known remote snapshot.

use super::model::{RemoteProfileSnapshot, VendorProfileDraft};
use super::patch::DraftPatch;

/// In-memory store for the evolving profile.
///
/// Performs no validation at write time; the navigation controller validates
/// at transition time, so partial input is always representable here.
#[derive(Debug, Default)]
pub struct DraftStore {
    draft: VendorProfileDraft,
    snapshot: Option<RemoteProfileSnapshot>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft.
    pub fn get(&self) -> &VendorProfileDraft {
        &self.draft
    }

    /// Mutable access for field-level edits that bypass the patch shape
    /// (e.g. mirroring the payment-linkage signal).
    pub fn get_mut(&mut self) -> &mut VendorProfileDraft {
        &mut self.draft
    }

    /// Apply a partial update.
    pub fn patch(&mut self, patch: DraftPatch) {
        patch.apply(&mut self.draft);
    }

    /// Overwrite the draft in bulk. Used only by reconciliation on initial
    /// load of an existing remote profile.
    pub fn replace_all(&mut self, snapshot: RemoteProfileSnapshot) {
        self.draft = snapshot.profile.clone();
        self.snapshot = Some(snapshot);
    }

    /// Record a fresh snapshot without touching the draft (post-save
    /// confirmation of persisted ids and revision).
    pub fn record_snapshot(&mut self, snapshot: RemoteProfileSnapshot) {
        self.snapshot = Some(snapshot);
    }

    /// The last-known remote state, if any.
    pub fn snapshot(&self) -> Option<&RemoteProfileSnapshot> {
        self.snapshot.as_ref()
    }

    /// Whether the draft has diverged from the last-known remote state.
    pub fn is_dirty(&self) -> bool {
        match &self.snapshot {
            Some(snapshot) => snapshot.profile != self.draft,
            None => self.draft != VendorProfileDraft::default(),
        }
    }
}
