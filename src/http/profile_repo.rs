//! HTTP-backed profile repository.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use crate::draft::RemoteProfileSnapshot;
use crate::error::PersistenceError;
use crate::reconcile::{ProfileRecord, ProfileRepository, RemoteProfileRecord, UpsertReceipt};

/// Profile repository speaking JSON to the marketplace backend.
pub struct HttpProfileRepository {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ConflictBody {
    profile_id: Uuid,
    expected: u64,
    found: u64,
}

impl HttpProfileRepository {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn profile_url(&self, identity_id: Uuid) -> String {
        format!("{}/vendors/{identity_id}/profile", self.base_url)
    }
}

#[async_trait]
impl ProfileRepository for HttpProfileRepository {
    async fn fetch_profile(
        &self,
        identity_id: Uuid,
    ) -> Result<Option<RemoteProfileSnapshot>, PersistenceError> {
        let response = self
            .client
            .get(self.profile_url(identity_id))
            .send()
            .await
            .map_err(|e| PersistenceError::Network {
                reason: e.to_string(),
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let record: RemoteProfileRecord =
                    response.json().await.map_err(|e| PersistenceError::Network {
                        reason: format!("malformed profile body: {e}"),
                    })?;
                Ok(Some(record.into_snapshot()))
            }
            status => Err(PersistenceError::Network {
                reason: format!("profile fetch returned {status}"),
            }),
        }
    }

    async fn upsert_profile(
        &self,
        identity_id: Uuid,
        record: ProfileRecord,
    ) -> Result<UpsertReceipt, PersistenceError> {
        let response = self
            .client
            .put(self.profile_url(identity_id))
            .json(&record)
            .send()
            .await
            .map_err(|e| PersistenceError::Network {
                reason: e.to_string(),
            })?;

        match response.status() {
            StatusCode::CONFLICT => {
                let body: ConflictBody =
                    response.json().await.map_err(|e| PersistenceError::Upsert {
                        reason: format!("revision conflict with malformed body: {e}"),
                    })?;
                Err(PersistenceError::Conflict {
                    profile_id: body.profile_id,
                    expected: body.expected,
                    found: body.found,
                })
            }
            status if status.is_success() => {
                response.json().await.map_err(|e| PersistenceError::Upsert {
                    reason: format!("malformed upsert receipt: {e}"),
                })
            }
            status => Err(PersistenceError::Upsert {
                reason: format!("profile upsert returned {status}"),
            }),
        }
    }
}
