//! Partial updates to the draft.
//!
//! A patch carries only the groups the caller touched; within a group, only
//! the fields explicitly present are written. Sibling fields are never
//! implicitly dropped, and collections are replaced only when the patch
//! names them.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::model::{
    BadgeSelections, DayHours, FaqEntry, FeatureSelection, MediaGallery, PaymentLinkage,
    ServiceEntry, SocialLinks, VendorProfileDraft,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPatch {
    pub email: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessPatch {
    pub legal_name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesPatch {
    pub primary_category: Option<String>,
    pub secondary_categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationPatch {
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub service_areas: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServicesPatch {
    pub entries: Option<Vec<ServiceEntry>>,
    pub features: Option<Vec<FeatureSelection>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityPatch {
    pub days: Option<Vec<DayHours>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoliciesPatch {
    pub policy_text: Option<String>,
    pub deposit_percent: Option<Decimal>,
    pub payment_terms: Option<String>,
    pub faqs: Option<Vec<FaqEntry>>,
}

/// A partial update to the draft. Absent groups are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftPatch {
    pub contact: Option<ContactPatch>,
    pub business: Option<BusinessPatch>,
    pub categories: Option<CategoriesPatch>,
    pub location: Option<LocationPatch>,
    pub services: Option<ServicesPatch>,
    pub availability: Option<AvailabilityPatch>,
    pub media: Option<MediaGallery>,
    pub social: Option<SocialLinks>,
    pub badges: Option<BadgeSelections>,
    pub payment: Option<PaymentLinkage>,
    pub policies: Option<PoliciesPatch>,
}

impl DraftPatch {
    /// Apply this patch to a draft in place.
    pub fn apply(self, draft: &mut VendorProfileDraft) {
        if let Some(p) = self.contact {
            if let Some(email) = p.email {
                draft.contact.email = email;
            }
            if let Some(name) = p.contact_name {
                draft.contact.contact_name = name;
            }
            if let Some(phone) = p.phone {
                draft.contact.phone = Some(phone);
            }
        }
        if let Some(p) = self.business {
            if let Some(legal) = p.legal_name {
                draft.business.legal_name = legal;
            }
            if let Some(display) = p.display_name {
                draft.business.display_name = display;
            }
            if let Some(description) = p.description {
                draft.business.description = Some(description);
            }
            if let Some(website) = p.website {
                draft.business.website = Some(website);
            }
        }
        if let Some(p) = self.categories {
            if let Some(primary) = p.primary_category {
                draft.categories.primary_category = primary;
            }
            if let Some(secondary) = p.secondary_categories {
                draft.categories.secondary_categories = secondary;
            }
        }
        if let Some(p) = self.location {
            if let Some(address) = p.address_line {
                draft.location.address_line = Some(address);
            }
            if let Some(city) = p.city {
                draft.location.city = city;
            }
            if let Some(region) = p.region {
                draft.location.region = region;
            }
            if let Some(postal) = p.postal_code {
                draft.location.postal_code = Some(postal);
            }
            if let Some(areas) = p.service_areas {
                draft.location.service_areas = areas;
            }
        }
        if let Some(p) = self.services {
            if let Some(entries) = p.entries {
                draft.services.entries = entries;
            }
            if let Some(features) = p.features {
                draft.services.features = features;
            }
        }
        if let Some(p) = self.availability {
            if let Some(days) = p.days {
                draft.availability.days = days;
            }
        }
        if let Some(media) = self.media {
            draft.media = media;
        }
        if let Some(social) = self.social {
            draft.social = social;
        }
        if let Some(badges) = self.badges {
            draft.badges = badges;
        }
        if let Some(payment) = self.payment {
            draft.payment = payment;
        }
        if let Some(p) = self.policies {
            if let Some(text) = p.policy_text {
                draft.policies.policy_text = Some(text);
            }
            if let Some(deposit) = p.deposit_percent {
                draft.policies.deposit_percent = Some(deposit);
            }
            if let Some(terms) = p.payment_terms {
                draft.policies.payment_terms = Some(terms);
            }
            if let Some(faqs) = p.faqs {
                draft.policies.faqs = faqs;
            }
        }
    }
}
