//! Completion predicate engine.
//!
//! One pure predicate per step, derived on demand from the draft — never
//! persisted, so it can never disagree with the data the user can see. Both
//! the wizard and the progress banner read completion through this module.

use crate::draft::VendorProfileDraft;

use super::registry::StepId;

/// Whether the step's data is sufficient for the step to count as done.
///
/// Each predicate inspects only its own field group. Idempotent and
/// side-effect-free: identical input always yields identical output.
pub fn is_complete(step: StepId, draft: &VendorProfileDraft) -> bool {
    match step {
        StepId::Account => !draft.contact.email.trim().is_empty(),
        StepId::BusinessDetails => {
            !draft.business.legal_name.trim().is_empty()
                && !draft.business.display_name.trim().is_empty()
        }
        StepId::Categories => !draft.categories.primary_category.trim().is_empty(),
        StepId::Location => {
            !draft.location.city.trim().is_empty()
                && !draft.location.region.trim().is_empty()
                && !draft.location.service_areas.is_empty()
        }
        StepId::Services => !draft.services.entries.is_empty(),
        StepId::BusinessHours => draft.availability.any_available(),
        StepId::Media => !draft.media.urls.is_empty(),
        StepId::SocialLinks => draft.social.any_set(),
        StepId::Badges => !draft.badges.selected.is_empty(),
        StepId::Payment => draft.payment.linked,
        StepId::Policies => draft.policies.any_set(),
    }
}

/// String-keyed lookup for callers holding raw ids (deep links, banner
/// payloads). Unknown ids evaluate to `false`, never an error.
pub fn is_complete_by_id(step_id: &str, draft: &VendorProfileDraft) -> bool {
    match step_id.parse::<StepId>() {
        Ok(step) => is_complete(step, draft),
        Err(()) => false,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::draft::{FaqEntry, ServiceEntry, Weekday};
    use crate::steps::StepRegistry;

    #[test]
    fn empty_draft_completes_nothing() {
        let draft = VendorProfileDraft::default();
        for def in StepRegistry::new().steps() {
            assert!(
                !is_complete(def.id, &draft),
                "{} should be incomplete on an empty draft",
                def.id
            );
        }
    }

    #[test]
    fn categories_requires_primary_category() {
        let mut draft = VendorProfileDraft::default();
        assert!(!is_complete(StepId::Categories, &draft));
        draft.categories.primary_category = "Venue".to_string();
        assert!(is_complete(StepId::Categories, &draft));
    }

    #[test]
    fn business_details_requires_both_names() {
        let mut draft = VendorProfileDraft::default();
        draft.business.legal_name = "Willow Hall Events Inc.".to_string();
        assert!(!is_complete(StepId::BusinessDetails, &draft));
        draft.business.display_name = "Willow Hall".to_string();
        assert!(is_complete(StepId::BusinessDetails, &draft));
    }

    #[test]
    fn location_requires_city_region_and_a_service_area() {
        let mut draft = VendorProfileDraft::default();
        draft.location.city = "Toronto".to_string();
        draft.location.region = "Ontario".to_string();
        assert!(!is_complete(StepId::Location, &draft));
        draft.location.service_areas.push("GTA".to_string());
        assert!(is_complete(StepId::Location, &draft));
    }

    #[test]
    fn services_requires_one_entry() {
        let mut draft = VendorProfileDraft::default();
        assert!(!is_complete(StepId::Services, &draft));
        draft.services.entries.push(ServiceEntry {
            name: "Full-day rental".to_string(),
            price: None,
            description: None,
        });
        assert!(is_complete(StepId::Services, &draft));
    }

    #[test]
    fn business_hours_requires_any_available_day() {
        let mut draft = VendorProfileDraft::default();
        assert!(!is_complete(StepId::BusinessHours, &draft));
        draft.availability.set_day(Weekday::Saturday, true);
        assert!(is_complete(StepId::BusinessHours, &draft));
    }

    #[test]
    fn payment_follows_external_signal() {
        let mut draft = VendorProfileDraft::default();
        assert!(!is_complete(StepId::Payment, &draft));
        draft.payment.linked = true;
        assert!(is_complete(StepId::Payment, &draft));
    }

    #[test]
    fn policies_is_any_of() {
        let mut draft = VendorProfileDraft::default();
        draft.policies.deposit_percent = Some(dec!(25));
        assert!(is_complete(StepId::Policies, &draft));

        let mut draft = VendorProfileDraft::default();
        draft.policies.faqs.push(FaqEntry {
            question: "Is parking included?".to_string(),
            answer: "Yes.".to_string(),
        });
        assert!(is_complete(StepId::Policies, &draft));
    }

    #[test]
    fn whitespace_does_not_count_as_presence() {
        let mut draft = VendorProfileDraft::default();
        draft.categories.primary_category = "   ".to_string();
        assert!(!is_complete(StepId::Categories, &draft));
    }

    #[test]
    fn unknown_id_is_false_not_an_error() {
        let draft = VendorProfileDraft::default();
        assert!(!is_complete_by_id("venue-tour", &draft));
        assert!(!is_complete_by_id("", &draft));
    }

    #[test]
    fn predicates_are_pure() {
        let mut draft = VendorProfileDraft::default();
        draft.categories.primary_category = "Venue".to_string();
        let before = draft.clone();
        for _ in 0..3 {
            assert!(is_complete(StepId::Categories, &draft));
        }
        assert_eq!(draft, before, "predicates must never mutate the draft");
    }
}
