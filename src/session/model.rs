//! Onboarding session state.

use serde::Serialize;
use uuid::Uuid;

use crate::identity::BootstrapOutcome;

/// An externally supplied instruction for where to position the user on
/// session start. Explicit value, consumed once — the engine never reaches
/// into URL hashes or browser storage itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeHint {
    /// Short-lived marker stored for the duration of a single save
    /// round-trip ("resume at this step"). Highest precedence.
    Marker(String),
    /// Step identifier carried on the entry URL (deep link).
    EntryUrl(String),
}

impl ResumeHint {
    pub fn step_id(&self) -> &str {
        match self {
            Self::Marker(id) | Self::EntryUrl(id) => id,
        }
    }
}

/// One logical onboarding session.
///
/// `is_authenticated` / `is_existing_profile` / `identity_id` are set once
/// by identity bootstrap and read-only thereafter; the step pointer lives in
/// the navigation controller.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OnboardingSession {
    pub is_authenticated: bool,
    pub is_existing_profile: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<Uuid>,
    /// Persisted profile id, written back after the first successful save so
    /// subsequent saves target the same remote entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<Uuid>,
}

impl OnboardingSession {
    /// A session that has not been through identity bootstrap.
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// Adopt the result of identity bootstrap.
    pub fn authenticated(outcome: &BootstrapOutcome) -> Self {
        Self {
            is_authenticated: outcome.is_authenticated,
            is_existing_profile: outcome.is_existing_profile,
            identity_id: Some(outcome.identity_id),
            profile_id: None,
        }
    }
}
