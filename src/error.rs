//! Error types for the vendor onboarding engine.

use uuid::Uuid;

use crate::reconcile::Aspect;
use crate::steps::StepId;

/// Top-level error type for the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// A forward-navigation validation failure.
///
/// User-correctable: blocks `next()` only, never `back()`, `skip()`, or
/// `jump_to()`. Names the first missing field so the caller can focus it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Step {step} is incomplete: {message} (field: {field})")]
pub struct ValidationError {
    /// The step whose validator rejected the transition.
    pub step: StepId,
    /// Canonical field name of the first missing input.
    pub field: &'static str,
    /// Human-readable message for display next to the field.
    pub message: String,
}

impl ValidationError {
    pub fn missing(step: StepId, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            step,
            field,
            message: message.into(),
        }
    }
}

/// Navigation (step-pointer) errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Step {step} is required and cannot be skipped")]
    NotSkippable { step: StepId },

    #[error("Unknown step id: {id}")]
    UnknownStep { id: String },

    #[error("Cannot leave step {}: {}", .0.step, .0.message)]
    Blocked(#[from] ValidationError),
}

/// Primary persistence errors from the remote profile repository.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Profile upsert failed: {reason}")]
    Upsert { reason: String },

    #[error(
        "Profile {profile_id} was modified remotely (expected revision {expected}, found {found})"
    )]
    Conflict {
        profile_id: Uuid,
        expected: u64,
        found: u64,
    },

    #[error("Remote unreachable: {reason}")]
    Network { reason: String },
}

/// A secondary-aspect write failure, scoped to the aspect that failed.
///
/// Never rolls back the primary write and never blocks navigation; the
/// draft keeps the attempted data so the user can retry just this aspect.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{aspect} failed to save: {reason}")]
pub struct AspectError {
    pub aspect: Aspect,
    pub reason: String,
}

impl AspectError {
    pub fn new(aspect: Aspect, reason: impl Into<String>) -> Self {
        Self {
            aspect,
            reason: reason.into(),
        }
    }
}

/// Identity provider errors, surfaced at the account step only.
///
/// Each kind is reported precisely — the engine never guesses whether a
/// login failure means "try again" or "sign up instead".
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("An account already exists for {email} — try logging in instead")]
    DuplicateAccount { email: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    #[error("No authenticated identity for this session")]
    NotAuthenticated,

    #[error("Could not reach the identity service: {reason}")]
    Network { reason: String },
}

/// Result type alias for the engine.
pub type Result<T> = std::result::Result<T, Error>;
