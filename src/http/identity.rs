//! HTTP-backed identity provider.

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IdentityError;
use crate::identity::{AuthResponse, IdentityProvider};

pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthBody {
    identity_id: Uuid,
    token: String,
    #[serde(default, alias = "hasExistingProfile")]
    has_existing_profile: bool,
}

impl From<AuthBody> for AuthResponse {
    fn from(body: AuthBody) -> Self {
        Self {
            identity_id: body.identity_id,
            token: SecretString::from(body.token),
            has_existing_profile: body.has_existing_profile,
        }
    }
}

impl HttpIdentityProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn decode(
        response: reqwest::Response,
        email: &str,
    ) -> Result<AuthResponse, IdentityError> {
        match response.status() {
            StatusCode::CONFLICT => Err(IdentityError::DuplicateAccount {
                email: email.to_string(),
            }),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(IdentityError::InvalidCredentials)
            }
            status if status.is_success() => {
                let body: AuthBody = response.json().await.map_err(|e| IdentityError::Network {
                    reason: format!("malformed auth body: {e}"),
                })?;
                Ok(body.into())
            }
            status => Err(IdentityError::Network {
                reason: format!("identity service returned {status}"),
            }),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn register(
        &self,
        name: &str,
        email: &str,
        secret: &SecretString,
    ) -> Result<AuthResponse, IdentityError> {
        let response = self
            .client
            .post(format!("{}/auth/register", self.base_url))
            .json(&RegisterRequest {
                name,
                email,
                password: secret.expose_secret(),
            })
            .send()
            .await
            .map_err(|e| IdentityError::Network {
                reason: e.to_string(),
            })?;
        Self::decode(response, email).await
    }

    async fn login(
        &self,
        email: &str,
        secret: &SecretString,
    ) -> Result<AuthResponse, IdentityError> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest {
                email,
                password: secret.expose_secret(),
            })
            .send()
            .await
            .map_err(|e| IdentityError::Network {
                reason: e.to_string(),
            })?;
        Self::decode(response, email).await
    }
}
