//! Identity bootstrap — resolves who is onboarding and whether they
//! already own a profile.
//!
//! Runs before anything else. An account that already has a profile is
//! always routed into resume behavior, even if the user arrived through a
//! "create new" entry point.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use secrecy::SecretString;
use serde::Serialize;
use uuid::Uuid;

use crate::error::IdentityError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Result of a successful register or login call.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub identity_id: Uuid,
    pub token: SecretString,
    /// Whether this identity already owns a vendor profile.
    pub has_existing_profile: bool,
}

/// External identity collaborator.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a new account. Fails with `DuplicateAccount` if the email is
    /// already registered.
    async fn register(
        &self,
        name: &str,
        email: &str,
        secret: &SecretString,
    ) -> Result<AuthResponse, IdentityError>;

    /// Log into an existing account.
    async fn login(&self, email: &str, secret: &SecretString)
    -> Result<AuthResponse, IdentityError>;
}

/// How the user is entering the workflow.
#[derive(Debug, Clone)]
pub enum Credentials {
    Register {
        name: String,
        email: String,
        secret: SecretString,
    },
    Login {
        email: String,
        secret: SecretString,
    },
}

impl Credentials {
    fn email(&self) -> &str {
        match self {
            Self::Register { email, .. } | Self::Login { email, .. } => email,
        }
    }
}

/// Authentication state for the session, set once by bootstrap and
/// read-only thereafter.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BootstrapOutcome {
    pub identity_id: Uuid,
    pub is_authenticated: bool,
    /// True iff the identity already owns a profile entity, independent of
    /// whether the caller intended to sign up fresh.
    pub is_existing_profile: bool,
}

/// Authenticate against the identity provider and classify the session.
///
/// All failure kinds are recoverable and reported precisely: a duplicate
/// account on register suggests logging in instead; invalid credentials and
/// network failures are each their own kind — never an ambiguous default.
pub async fn bootstrap(
    provider: &dyn IdentityProvider,
    credentials: Credentials,
) -> Result<BootstrapOutcome, IdentityError> {
    let email = credentials.email();
    if !EMAIL_RE.is_match(email) {
        return Err(IdentityError::InvalidEmail {
            email: email.to_string(),
        });
    }

    let response = match &credentials {
        Credentials::Register {
            name,
            email,
            secret,
        } => provider.register(name, email, secret).await?,
        Credentials::Login { email, secret } => provider.login(email, secret).await?,
    };

    tracing::info!(
        identity_id = %response.identity_id,
        existing_profile = response.has_existing_profile,
        "identity bootstrap complete"
    );

    Ok(BootstrapOutcome {
        identity_id: response.identity_id,
        is_authenticated: true,
        is_existing_profile: response.has_existing_profile,
    })
}
