//! Remote profile records and the wire-to-canonical mapping layer.
//!
//! The remote API grew out of several clients and serves the same fields
//! under inconsistent casings (`businessName` vs `business_name`). All of
//! that tolerance lives here, in serde aliases on the wire record; the
//! canonical draft and the predicates never see a second spelling.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draft::{
    BadgeSelections, Categorization, DayHours, FaqEntry, FeatureSelection, MediaGallery,
    PaymentLinkage, RemoteProfileSnapshot, ServiceEntry, SocialLinks, VendorProfileDraft,
    WeeklyAvailability,
};

/// Canonical record exchanged with the profile repository.
///
/// `profile_id`/`revision` are `None` until the first successful upsert
/// returns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<Uuid>,
    /// Optimistic-concurrency token; echoed from the last fetch or save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    pub profile: VendorProfileDraft,
}

/// Receipt of a successful upsert.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpsertReceipt {
    pub profile_id: Uuid,
    pub revision: u64,
}

/// Wire shape of a fetched profile, tolerant of legacy key casings.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteProfileRecord {
    #[serde(alias = "profileId", alias = "id")]
    pub profile_id: Uuid,
    #[serde(default)]
    pub revision: u64,
    #[serde(default, alias = "contactEmail", alias = "email")]
    pub contact_email: String,
    #[serde(default, alias = "contactName")]
    pub contact_name: String,
    #[serde(default, alias = "phoneNumber")]
    pub phone: Option<String>,
    #[serde(default, alias = "legalName", alias = "businessLegalName")]
    pub legal_name: String,
    #[serde(default, alias = "displayName", alias = "businessName")]
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, alias = "primaryCategory", alias = "category")]
    pub primary_category: String,
    #[serde(default, alias = "secondaryCategories")]
    pub secondary_categories: Vec<String>,
    #[serde(default, alias = "addressLine", alias = "address")]
    pub address_line: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default, alias = "province", alias = "state")]
    pub region: String,
    #[serde(default, alias = "postalCode", alias = "zip")]
    pub postal_code: Option<String>,
    #[serde(default, alias = "serviceAreas")]
    pub service_areas: Vec<String>,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    #[serde(default)]
    pub features: Vec<FeatureSelection>,
    #[serde(default, alias = "businessHours")]
    pub availability: Option<Vec<DayHours>>,
    #[serde(default, alias = "mediaUrls", alias = "photos")]
    pub media_urls: Vec<String>,
    #[serde(default, alias = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(default, alias = "socialLinks")]
    pub social: Option<SocialLinks>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default, alias = "paymentsLinked", alias = "stripeConnected")]
    pub payments_linked: bool,
    #[serde(default, alias = "providerAccount")]
    pub provider_account: Option<String>,
    #[serde(default, alias = "policyText", alias = "bookingPolicy")]
    pub policy_text: Option<String>,
    #[serde(default, alias = "depositPercent")]
    pub deposit_percent: Option<Decimal>,
    #[serde(default, alias = "paymentTerms")]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

impl RemoteProfileRecord {
    /// Map the wire record into a canonical snapshot.
    pub fn into_snapshot(self) -> RemoteProfileSnapshot {
        let mut profile = VendorProfileDraft::default();
        profile.contact.email = self.contact_email;
        profile.contact.contact_name = self.contact_name;
        profile.contact.phone = self.phone;
        profile.business.legal_name = self.legal_name;
        profile.business.display_name = self.display_name;
        profile.business.description = self.description;
        profile.business.website = self.website;
        profile.categories = Categorization {
            primary_category: self.primary_category,
            secondary_categories: self.secondary_categories,
        };
        profile.location.address_line = self.address_line;
        profile.location.city = self.city;
        profile.location.region = self.region;
        profile.location.postal_code = self.postal_code;
        profile.location.service_areas = self.service_areas;
        profile.services.entries = self.services;
        profile.services.features = self.features;
        if let Some(days) = self.availability {
            profile.availability = WeeklyAvailability { days };
        }
        profile.media = MediaGallery {
            urls: self.media_urls,
            cover_url: self.cover_url,
        };
        profile.social = self.social.unwrap_or_default();
        profile.badges = BadgeSelections {
            selected: self.badges,
        };
        profile.payment = PaymentLinkage {
            linked: self.payments_linked,
            provider_account: self.provider_account,
        };
        profile.policies.policy_text = self.policy_text;
        profile.policies.deposit_percent = self.deposit_percent;
        profile.policies.payment_terms = self.payment_terms;
        profile.policies.faqs = self.faqs;

        RemoteProfileSnapshot {
            profile_id: self.profile_id,
            revision: self.revision,
            profile,
            fetched_at: Utc::now(),
        }
    }
}
