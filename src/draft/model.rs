//! Vendor profile draft — the single mutable aggregate under construction.
//!
//! Every field has a well-defined default so an absent or partial remote
//! profile never produces an undefined field. Intermediate invalid states
//! (a half-typed phone number, an empty legal name) are always
//! representable; validation happens at navigation time, not here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and contact details for the vendor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub contact_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Legal and display naming for the business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessDetails {
    pub legal_name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Marketplace categorization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categorization {
    /// Primary category; empty string means not yet chosen.
    pub primary_category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_categories: Vec<String>,
}

/// Physical location and coverage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    pub city: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Areas the vendor will travel to or serve.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_areas: Vec<String>,
}

/// One offered service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A feature/questionnaire selection attached to the service catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSelection {
    /// Stable feature key, e.g. "outdoor-capable", "licensed-bar".
    pub key: String,
    pub selected: bool,
}

/// Service catalogue plus feature selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalogue {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<ServiceEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<FeatureSelection>,
}

/// Day of week, Monday-first like the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// Opening hours for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub day: Weekday,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

/// Weekly availability; always seven entries, all unavailable by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub days: Vec<DayHours>,
}

impl Default for WeeklyAvailability {
    fn default() -> Self {
        Self {
            days: Weekday::ALL
                .into_iter()
                .map(|day| DayHours {
                    day,
                    available: false,
                    open: None,
                    close: None,
                })
                .collect(),
        }
    }
}

impl WeeklyAvailability {
    /// Mark a day available, optionally with hours.
    pub fn set_day(&mut self, day: Weekday, available: bool) {
        if let Some(entry) = self.days.iter_mut().find(|d| d.day == day) {
            entry.available = available;
        }
    }

    pub fn any_available(&self) -> bool {
        self.days.iter().any(|d| d.available)
    }
}

/// Gallery of uploaded media, held as URLs (upload mechanics live elsewhere).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaGallery {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl SocialLinks {
    pub fn any_set(&self) -> bool {
        self.instagram.is_some()
            || self.facebook.is_some()
            || self.tiktok.is_some()
            || self.youtube.is_some()
    }
}

/// Badge / search-filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeSelections {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected: Vec<String>,
}

/// Payment linkage status, mirrored from the payment collaborator.
///
/// The engine never talks to the payment provider itself; `linked` is an
/// external signal refreshed into the draft before the predicate reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLinkage {
    pub linked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_account: Option<String>,
}

/// A frequently-asked question on the vendor's public page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Booking policies, deposit, and FAQs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policies {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<FaqEntry>,
}

impl Policies {
    pub fn any_set(&self) -> bool {
        self.policy_text.is_some()
            || self.deposit_percent.is_some()
            || self.payment_terms.is_some()
            || !self.faqs.is_empty()
    }
}

/// The full vendor profile under construction.
///
/// Exclusively owned by the current onboarding session; never shared across
/// concurrent sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorProfileDraft {
    pub contact: ContactInfo,
    pub business: BusinessDetails,
    pub categories: Categorization,
    pub location: LocationInfo,
    pub services: ServiceCatalogue,
    pub availability: WeeklyAvailability,
    pub media: MediaGallery,
    pub social: SocialLinks,
    pub badges: BadgeSelections,
    pub payment: PaymentLinkage,
    pub policies: Policies,
}

/// Last-fetched (or last-saved) server representation, held read-only
/// beside the draft for diffing and for carrying persisted identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteProfileSnapshot {
    pub profile_id: Uuid,
    /// Optimistic-concurrency token echoed back on upsert.
    pub revision: u64,
    pub profile: VendorProfileDraft,
    pub fetched_at: DateTime<Utc>,
}
