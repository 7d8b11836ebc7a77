//! End-to-end onboarding scenarios driven through the manager with
//! in-memory collaborator fakes.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use secrecy::SecretString;
use tokio::sync::Mutex;
use uuid::Uuid;

use vendor_onboard::draft::{
    BadgeSelections, DraftPatch, RemoteProfileSnapshot, ServiceEntry, VendorProfileDraft,
};
use vendor_onboard::error::{AspectError, Error, IdentityError, NavigationError, PersistenceError};
use vendor_onboard::identity::{AuthResponse, Credentials, IdentityProvider};
use vendor_onboard::manager::OnboardingManager;
use vendor_onboard::reconcile::{
    Aspect, AspectWriter, PaymentStatusSource, ProfileRecord, ProfileRepository,
    ReconciliationService, UpsertReceipt,
};
use vendor_onboard::session::ResumeHint;
use vendor_onboard::steps::StepId;

// ── Fakes ───────────────────────────────────────────────────────────

#[derive(Default)]
struct InMemoryRepository {
    // identity -> (profile_id, revision, profile)
    profiles: Mutex<HashMap<Uuid, (Uuid, u64, VendorProfileDraft)>>,
    upserts: AtomicUsize,
    fail_fetch: bool,
}

impl InMemoryRepository {
    async fn seed(&self, identity_id: Uuid, profile: VendorProfileDraft) -> Uuid {
        let profile_id = Uuid::new_v4();
        self.profiles
            .lock()
            .await
            .insert(identity_id, (profile_id, 1, profile));
        profile_id
    }

    async fn bump_revision(&self, identity_id: Uuid) {
        let mut profiles = self.profiles.lock().await;
        if let Some((_, revision, _)) = profiles.get_mut(&identity_id) {
            *revision += 1;
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryRepository {
    async fn fetch_profile(
        &self,
        identity_id: Uuid,
    ) -> Result<Option<RemoteProfileSnapshot>, PersistenceError> {
        if self.fail_fetch {
            return Err(PersistenceError::Network {
                reason: "connection refused".to_string(),
            });
        }
        Ok(self.profiles.lock().await.get(&identity_id).map(
            |(profile_id, revision, profile)| RemoteProfileSnapshot {
                profile_id: *profile_id,
                revision: *revision,
                profile: profile.clone(),
                fetched_at: Utc::now(),
            },
        ))
    }

    async fn upsert_profile(
        &self,
        identity_id: Uuid,
        record: ProfileRecord,
    ) -> Result<UpsertReceipt, PersistenceError> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        let mut profiles = self.profiles.lock().await;
        match profiles.get_mut(&identity_id) {
            Some((profile_id, revision, profile)) => {
                if let Some(expected) = record.revision {
                    if expected != *revision {
                        return Err(PersistenceError::Conflict {
                            profile_id: *profile_id,
                            expected,
                            found: *revision,
                        });
                    }
                }
                *revision += 1;
                *profile = record.profile;
                Ok(UpsertReceipt {
                    profile_id: *profile_id,
                    revision: *revision,
                })
            }
            None => {
                let profile_id = Uuid::new_v4();
                profiles.insert(identity_id, (profile_id, 1, record.profile));
                Ok(UpsertReceipt {
                    profile_id,
                    revision: 1,
                })
            }
        }
    }
}

struct RecordingWriter {
    aspect: Aspect,
    writes: AtomicUsize,
}

impl RecordingWriter {
    fn new(aspect: Aspect) -> Self {
        Self {
            aspect,
            writes: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AspectWriter for RecordingWriter {
    fn aspect(&self) -> Aspect {
        self.aspect
    }

    async fn write(&self, _: Uuid, _: &VendorProfileDraft) -> Result<(), AspectError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FailingWriter {
    aspect: Aspect,
}

#[async_trait]
impl AspectWriter for FailingWriter {
    fn aspect(&self) -> Aspect {
        self.aspect
    }

    async fn write(&self, _: Uuid, _: &VendorProfileDraft) -> Result<(), AspectError> {
        Err(AspectError::new(self.aspect, "503 from aspect service"))
    }
}

struct ScriptedIdentity {
    identity_id: Uuid,
    existing_profile: bool,
}

#[async_trait]
impl IdentityProvider for ScriptedIdentity {
    async fn register(
        &self,
        _: &str,
        _: &str,
        _: &SecretString,
    ) -> Result<AuthResponse, IdentityError> {
        Ok(AuthResponse {
            identity_id: self.identity_id,
            token: SecretString::from("tok"),
            has_existing_profile: self.existing_profile,
        })
    }

    async fn login(&self, _: &str, _: &SecretString) -> Result<AuthResponse, IdentityError> {
        Ok(AuthResponse {
            identity_id: self.identity_id,
            token: SecretString::from("tok"),
            has_existing_profile: self.existing_profile,
        })
    }
}

struct FixedPayment {
    linked: bool,
}

#[async_trait]
impl PaymentStatusSource for FixedPayment {
    async fn is_linked(&self, _: Uuid) -> Result<bool, AspectError> {
        Ok(self.linked)
    }
}

// ── Harness ─────────────────────────────────────────────────────────

struct Harness {
    manager: OnboardingManager,
    repository: Arc<InMemoryRepository>,
    identity_id: Uuid,
}

fn harness_with(
    repository: Arc<InMemoryRepository>,
    existing_profile: bool,
    writers: Vec<Arc<dyn AspectWriter>>,
    payment_linked: bool,
) -> Harness {
    let identity_id = Uuid::new_v4();
    let identity = Arc::new(ScriptedIdentity {
        identity_id,
        existing_profile,
    });
    let reconciler = Arc::new(ReconciliationService::new(
        repository.clone(),
        writers,
        Arc::new(FixedPayment {
            linked: payment_linked,
        }),
    ));
    Harness {
        manager: OnboardingManager::new(identity, reconciler),
        repository,
        identity_id,
    }
}

fn harness(existing_profile: bool) -> Harness {
    harness_with(
        Arc::new(InMemoryRepository::default()),
        existing_profile,
        vec![],
        false,
    )
}

fn signup() -> Credentials {
    Credentials::Register {
        name: "Willow Hall".to_string(),
        email: "events@willowhall.ca".to_string(),
        secret: SecretString::from("hunter2!"),
    }
}

fn login() -> Credentials {
    Credentials::Login {
        email: "events@willowhall.ca".to_string(),
        secret: SecretString::from("hunter2!"),
    }
}

fn seeded_profile() -> VendorProfileDraft {
    let mut profile = VendorProfileDraft::default();
    profile.contact.email = "events@willowhall.ca".to_string();
    profile.business.legal_name = "Willow Hall Events Inc.".to_string();
    profile.business.display_name = "Willow Hall".to_string();
    profile.categories.primary_category = "Venue".to_string();
    profile
}

// ── Scenarios ───────────────────────────────────────────────────────

#[tokio::test]
async fn fresh_signup_starts_at_first_content_step() {
    let h = harness(false);
    let status = h.manager.begin_session(signup(), None).await.unwrap();

    assert!(status.session.is_authenticated);
    assert!(!status.session.is_existing_profile);
    assert_eq!(status.current_index, 1);
    assert_eq!(status.current_step.id, StepId::BusinessDetails);
}

#[tokio::test]
async fn existing_profile_resumes_at_welcome_with_merged_draft() {
    let repository = Arc::new(InMemoryRepository::default());
    let h = harness_with(repository.clone(), true, vec![], false);
    let profile_id = repository.seed(h.identity_id, seeded_profile()).await;

    let status = h.manager.begin_session(login(), None).await.unwrap();

    // Welcome/progress position, never the first content step.
    assert_eq!(status.current_index, 0);
    assert_eq!(status.session.profile_id, Some(profile_id));

    // Remote data merged into the draft, completion derived from it.
    let draft = h.manager.draft().await;
    assert_eq!(draft.business.display_name, "Willow Hall");
    let complete: Vec<StepId> = status
        .progress
        .steps
        .iter()
        .filter(|s| s.complete)
        .map(|s| s.step_id)
        .collect();
    assert!(complete.contains(&StepId::BusinessDetails));
    assert!(complete.contains(&StepId::Categories));
    assert!(!complete.contains(&StepId::Location));
}

#[tokio::test]
async fn unreachable_remote_fails_soft_with_empty_draft() {
    let repository = Arc::new(InMemoryRepository {
        fail_fetch: true,
        ..Default::default()
    });
    let h = harness_with(repository, true, vec![], false);

    let status = h.manager.begin_session(login(), None).await.unwrap();
    assert!(status.session.is_authenticated);
    assert_eq!(h.manager.draft().await, VendorProfileDraft::default());
}

#[tokio::test]
async fn resume_hint_outranks_session_default() {
    let h = harness(false);
    let status = h
        .manager
        .begin_session(signup(), Some(ResumeHint::EntryUrl("services".to_string())))
        .await
        .unwrap();
    assert_eq!(status.current_step.id, StepId::Services);
}

#[tokio::test]
async fn next_on_location_without_city_blocks_and_names_the_field() {
    let h = harness(false);
    h.manager.begin_session(signup(), None).await.unwrap();
    h.manager.jump_to("location").await.unwrap();

    h.manager
        .patch(serde_json::from_str::<DraftPatch>(
            r#"{"location": {"region": "Ontario", "service_areas": ["GTA"]}}"#,
        ).unwrap())
        .await;

    let err = h.manager.next().await.unwrap_err();
    match err {
        NavigationError::Blocked(v) => {
            assert_eq!(v.step, StepId::Location);
            assert_eq!(v.field, "city");
        }
        other => panic!("expected validation block, got {other:?}"),
    }
    assert_eq!(h.manager.status().await.current_step.id, StepId::Location);

    h.manager
        .patch(serde_json::from_str::<DraftPatch>(r#"{"location": {"city": "Toronto"}}"#).unwrap())
        .await;
    h.manager.next().await.unwrap();
    assert_eq!(h.manager.status().await.current_step.id, StepId::Services);
}

#[tokio::test]
async fn save_progress_twice_produces_one_profile() {
    let h = harness(false);
    h.manager.begin_session(signup(), None).await.unwrap();
    h.manager
        .patch(
            serde_json::from_str::<DraftPatch>(
                r#"{"business": {"legal_name": "Willow Hall Events Inc.", "display_name": "Willow Hall"}}"#,
            )
            .unwrap(),
        )
        .await;

    let first = h.manager.save().await.unwrap();
    let second = h.manager.save().await.unwrap();

    assert_eq!(first.profile_id, second.profile_id);
    assert_eq!(h.repository.profiles.lock().await.len(), 1);
    assert_eq!(h.repository.upserts.load(Ordering::SeqCst), 2);
    // Step pointer did not move on save.
    assert_eq!(h.manager.status().await.current_step.id, StepId::BusinessDetails);
    // Profile id written back into the session.
    assert_eq!(
        h.manager.status().await.session.profile_id,
        Some(first.profile_id)
    );
}

#[tokio::test]
async fn badges_writer_failure_is_scoped_and_draft_keeps_selection() {
    let services_writer = Arc::new(RecordingWriter::new(Aspect::Services));
    let h = harness_with(
        Arc::new(InMemoryRepository::default()),
        false,
        vec![
            services_writer.clone(),
            Arc::new(FailingWriter {
                aspect: Aspect::Badges,
            }),
        ],
        false,
    );
    h.manager.begin_session(signup(), None).await.unwrap();
    h.manager
        .patch(DraftPatch {
            badges: Some(BadgeSelections {
                selected: vec!["award-winner".to_string()],
            }),
            ..Default::default()
        })
        .await;

    let outcome = h.manager.save().await.unwrap();

    // Primary succeeded; exactly the badges aspect is reported failed.
    assert!(!outcome.fully_succeeded());
    assert_eq!(outcome.secondary_failures.len(), 1);
    assert_eq!(outcome.secondary_failures[0].aspect, Aspect::Badges);
    assert_eq!(services_writer.writes.load(Ordering::SeqCst), 1);

    // Attempted selections stay in the draft for retry.
    let draft = h.manager.draft().await;
    assert_eq!(draft.badges.selected, vec!["award-winner".to_string()]);
}

#[tokio::test]
async fn submit_final_is_the_same_upsert_and_marks_terminal() {
    let h = harness(false);
    h.manager.begin_session(signup(), None).await.unwrap();
    h.manager.jump_to("policies").await.unwrap();
    assert!(h.manager.status().await.at_final_step);

    let outcome = h.manager.submit().await.unwrap();
    assert!(outcome.fully_succeeded());
    assert_eq!(h.repository.profiles.lock().await.len(), 1);
    assert!(h.manager.status().await.submitted_at.is_some());
}

#[tokio::test]
async fn stale_revision_surfaces_a_conflict() {
    let h = harness(false);
    h.manager.begin_session(signup(), None).await.unwrap();
    h.manager.save().await.unwrap();

    // Another tab saved in the meantime.
    h.repository.bump_revision(h.identity_id).await;

    let err = h.manager.save().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Persistence(PersistenceError::Conflict { .. })
    ));
    // Draft retained unmodified for the retry.
    assert_eq!(h.manager.status().await.session.is_authenticated, true);
}

#[tokio::test]
async fn save_without_authentication_is_an_identity_error() {
    let h = harness(false);
    let err = h.manager.save().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Identity(IdentityError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn payment_refresh_completes_the_payment_step() {
    let h = harness_with(
        Arc::new(InMemoryRepository::default()),
        false,
        vec![],
        true,
    );
    h.manager.begin_session(signup(), None).await.unwrap();

    let before = h.manager.status().await;
    assert!(
        !before
            .progress
            .steps
            .iter()
            .any(|s| s.step_id == StepId::Payment && s.complete)
    );

    h.manager.refresh_payment_status().await;

    let after = h.manager.status().await;
    assert!(
        after
            .progress
            .steps
            .iter()
            .any(|s| s.step_id == StepId::Payment && s.complete)
    );
}

#[tokio::test]
async fn full_walkthrough_completes_every_required_step() {
    let h = harness(false);
    h.manager.begin_session(signup(), None).await.unwrap();

    h.manager
        .patch(
            serde_json::from_str::<DraftPatch>(
                r#"{
                    "contact": {"email": "events@willowhall.ca", "contact_name": "Dana"},
                    "business": {"legal_name": "Willow Hall Events Inc.", "display_name": "Willow Hall"},
                    "categories": {"primary_category": "Venue"},
                    "location": {"city": "Toronto", "region": "Ontario", "service_areas": ["GTA"]}
                }"#,
            )
            .unwrap(),
        )
        .await;
    h.manager
        .patch(DraftPatch {
            services: Some(vendor_onboard::draft::patch::ServicesPatch {
                entries: Some(vec![ServiceEntry {
                    name: "Full-day rental".to_string(),
                    price: None,
                    description: None,
                }]),
                ..Default::default()
            }),
            ..Default::default()
        })
        .await;

    // business-details → categories → location → services
    for _ in 0..3 {
        h.manager.next().await.unwrap();
    }
    assert_eq!(h.manager.status().await.current_step.id, StepId::Services);
    h.manager.next().await.unwrap();

    // Remaining steps are skippable.
    while !h.manager.status().await.at_final_step {
        h.manager.skip().await.unwrap();
    }

    let status = h.manager.status().await;
    assert!(status.progress.all_required_complete());

    h.manager.submit().await.unwrap();
    assert!(h.manager.status().await.submitted_at.is_some());
}
