//! Per-step forward-navigation validators.
//!
//! Run by the navigation controller before `next()` leaves a required,
//! non-skippable step. Overlaps with the completion predicates but reports
//! the first missing field by name instead of a bare boolean.

use crate::draft::VendorProfileDraft;
use crate::error::ValidationError;

use super::registry::StepId;

/// Validate that the draft may leave `step` going forward.
///
/// Skippable steps always pass; gating them would defeat the skip flag.
pub fn validate_step(step: StepId, draft: &VendorProfileDraft) -> Result<(), ValidationError> {
    match step {
        StepId::Account => {
            if draft.contact.email.trim().is_empty() {
                return Err(ValidationError::missing(
                    step,
                    "email",
                    "Enter an email address for your account",
                ));
            }
        }
        StepId::BusinessDetails => {
            if draft.business.legal_name.trim().is_empty() {
                return Err(ValidationError::missing(
                    step,
                    "legal_name",
                    "Enter the registered legal name of the business",
                ));
            }
            if draft.business.display_name.trim().is_empty() {
                return Err(ValidationError::missing(
                    step,
                    "display_name",
                    "Enter the name shown to couples on the marketplace",
                ));
            }
        }
        StepId::Categories => {
            if draft.categories.primary_category.trim().is_empty() {
                return Err(ValidationError::missing(
                    step,
                    "primary_category",
                    "Choose a primary category",
                ));
            }
        }
        StepId::Location => {
            if draft.location.city.trim().is_empty() {
                return Err(ValidationError::missing(step, "city", "Enter a city"));
            }
            if draft.location.region.trim().is_empty() {
                return Err(ValidationError::missing(
                    step,
                    "region",
                    "Enter a province or state",
                ));
            }
            if draft.location.service_areas.is_empty() {
                return Err(ValidationError::missing(
                    step,
                    "service_areas",
                    "Add at least one service area",
                ));
            }
        }
        StepId::Services => {
            if draft.services.entries.is_empty() {
                return Err(ValidationError::missing(
                    step,
                    "entries",
                    "Add at least one service",
                ));
            }
        }
        // Skippable steps are not forward-gated.
        StepId::BusinessHours
        | StepId::Media
        | StepId::SocialLinks
        | StepId::Badges
        | StepId::Payment
        | StepId::Policies => {}
    }
    Ok(())
}
