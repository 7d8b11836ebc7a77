//! Secondary aspect collaborators.
//!
//! Each aspect of the profile (services, badges, FAQs, …) is persisted via
//! its own write operation, independently callable and independently
//! failable. A failed aspect write never rolls back the primary profile
//! write and never blocks navigation.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::draft::VendorProfileDraft;
use crate::error::AspectError;

/// The secondary profile sub-resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Services,
    Features,
    Badges,
    Faqs,
    SocialLinks,
    Media,
    Payment,
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Services => "services",
            Self::Features => "features",
            Self::Badges => "badges",
            Self::Faqs => "faqs",
            Self::SocialLinks => "social links",
            Self::Media => "media",
            Self::Payment => "payment",
        };
        write!(f, "{s}")
    }
}

/// Writer for one secondary aspect of the profile.
#[async_trait]
pub trait AspectWriter: Send + Sync {
    /// Which aspect this writer persists.
    fn aspect(&self) -> Aspect;

    /// Persist this aspect's slice of the draft for `profile_id`.
    async fn write(&self, profile_id: Uuid, draft: &VendorProfileDraft)
    -> Result<(), AspectError>;
}

/// Read-only query for the payment-linkage status.
///
/// The payment provider flow itself is an external collaborator; the engine
/// only mirrors the resulting boolean into the draft.
#[async_trait]
pub trait PaymentStatusSource: Send + Sync {
    async fn is_linked(&self, identity_id: Uuid) -> Result<bool, AspectError>;
}
