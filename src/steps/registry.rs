//! Step catalogue — the ordered, immutable sequence of onboarding steps.

use serde::{Deserialize, Serialize};

/// Stable, URL-safe identifier for an onboarding step.
///
/// Identifiers are used for deep-linking and resume hints, so the string
/// form must never change once shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    /// Account creation / login. For an authenticated returning vendor this
    /// position renders as the welcome-and-progress summary.
    Account,
    BusinessDetails,
    Categories,
    Location,
    Services,
    BusinessHours,
    Media,
    SocialLinks,
    Badges,
    Payment,
    Policies,
}

impl StepId {
    /// The URL-safe string form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::BusinessDetails => "business-details",
            Self::Categories => "categories",
            Self::Location => "location",
            Self::Services => "services",
            Self::BusinessHours => "business-hours",
            Self::Media => "media",
            Self::SocialLinks => "social-links",
            Self::Badges => "badges",
            Self::Payment => "payment",
            Self::Policies => "policies",
        }
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StepId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .map(|d| d.id)
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

/// One step of the onboarding sequence.
///
/// `required`/`skippable` are first-class data so navigation logic never
/// special-cases step identifiers by name. Order is the position in the
/// registry slice, never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub id: StepId,
    pub required: bool,
    pub skippable: bool,
}

const fn required(id: StepId) -> StepDefinition {
    StepDefinition {
        id,
        required: true,
        skippable: false,
    }
}

const fn skippable(id: StepId) -> StepDefinition {
    StepDefinition {
        id,
        required: false,
        skippable: true,
    }
}

/// Canonical step order. Insertion order here IS the onboarding order.
const REGISTRY: &[StepDefinition] = &[
    required(StepId::Account),
    required(StepId::BusinessDetails),
    required(StepId::Categories),
    required(StepId::Location),
    required(StepId::Services),
    skippable(StepId::BusinessHours),
    skippable(StepId::Media),
    skippable(StepId::SocialLinks),
    skippable(StepId::Badges),
    skippable(StepId::Payment),
    skippable(StepId::Policies),
];

/// Ordered, immutable catalogue of all onboarding steps.
///
/// Stateless and shared — both the navigation controller and the completion
/// engine reference the same sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepRegistry;

impl StepRegistry {
    pub fn new() -> Self {
        Self
    }

    /// All steps in canonical order.
    pub fn steps(&self) -> &'static [StepDefinition] {
        REGISTRY
    }

    pub fn len(&self) -> usize {
        REGISTRY.len()
    }

    pub fn is_empty(&self) -> bool {
        REGISTRY.is_empty()
    }

    /// The step at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&'static StepDefinition> {
        REGISTRY.get(index)
    }

    /// Resolve a step id to its index. `None` signals a caller programming
    /// error (an id that was never registered), not a runtime condition.
    pub fn step_index_of(&self, id: StepId) -> Option<usize> {
        REGISTRY.iter().position(|d| d.id == id)
    }

    /// Resolve a raw string (deep link, resume hint) to an index.
    pub fn step_index_of_str(&self, id: &str) -> Option<usize> {
        REGISTRY.iter().position(|d| d.id.as_str() == id)
    }

    /// Index of the first content step (the step after the account step).
    pub fn first_content_index(&self) -> usize {
        1
    }

    /// Index of the final step, where `submit_final` fires.
    pub fn last_index(&self) -> usize {
        REGISTRY.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_is_first_and_policies_last() {
        let registry = StepRegistry::new();
        assert_eq!(registry.get(0).unwrap().id, StepId::Account);
        assert_eq!(
            registry.get(registry.last_index()).unwrap().id,
            StepId::Policies
        );
    }

    #[test]
    fn step_index_of_matches_position() {
        let registry = StepRegistry::new();
        for (i, def) in registry.steps().iter().enumerate() {
            assert_eq!(registry.step_index_of(def.id), Some(i));
            assert_eq!(registry.step_index_of_str(def.id.as_str()), Some(i));
        }
    }

    #[test]
    fn unknown_string_resolves_to_none() {
        let registry = StepRegistry::new();
        assert_eq!(registry.step_index_of_str("no-such-step"), None);
        assert_eq!(registry.step_index_of_str(""), None);
    }

    #[test]
    fn required_steps_are_never_skippable() {
        for def in StepRegistry::new().steps() {
            assert_ne!(
                def.required, def.skippable,
                "{} must be exactly one of required/skippable",
                def.id
            );
        }
    }

    #[test]
    fn ids_are_unique() {
        let registry = StepRegistry::new();
        for (i, def) in registry.steps().iter().enumerate() {
            assert_eq!(
                registry.step_index_of(def.id),
                Some(i),
                "duplicate id {} in registry",
                def.id
            );
        }
    }

    #[test]
    fn display_matches_serde() {
        for def in StepRegistry::new().steps() {
            let display = format!("{}", def.id);
            let json = serde_json::to_string(&def.id).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }

    #[test]
    fn from_str_roundtrips() {
        for def in StepRegistry::new().steps() {
            let parsed: StepId = def.id.as_str().parse().unwrap();
            assert_eq!(parsed, def.id);
        }
        assert!("venue-tour".parse::<StepId>().is_err());
    }
}
