//! HTTP-backed secondary aspect writers and the payment status query.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::draft::VendorProfileDraft;
use crate::error::AspectError;
use crate::reconcile::{Aspect, AspectWriter, PaymentStatusSource};

/// Writes one aspect's slice of the draft to its own endpoint.
pub struct HttpAspectWriter {
    client: reqwest::Client,
    base_url: String,
    aspect: Aspect,
}

impl HttpAspectWriter {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, aspect: Aspect) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            aspect,
        }
    }

    /// The full set of writers for all HTTP-persisted aspects.
    pub fn all(client: &reqwest::Client, base_url: &str) -> Vec<std::sync::Arc<dyn AspectWriter>> {
        [
            Aspect::Services,
            Aspect::Features,
            Aspect::Badges,
            Aspect::Faqs,
            Aspect::SocialLinks,
            Aspect::Media,
        ]
        .into_iter()
        .map(|aspect| {
            std::sync::Arc::new(Self::new(client.clone(), base_url, aspect))
                as std::sync::Arc<dyn AspectWriter>
        })
        .collect()
    }

    fn path_segment(&self) -> &'static str {
        match self.aspect {
            Aspect::Services => "services",
            Aspect::Features => "features",
            Aspect::Badges => "badges",
            Aspect::Faqs => "faqs",
            Aspect::SocialLinks => "social-links",
            Aspect::Media => "media",
            Aspect::Payment => "payment",
        }
    }

    fn payload(&self, draft: &VendorProfileDraft) -> serde_json::Value {
        match self.aspect {
            Aspect::Services => json!({ "entries": draft.services.entries }),
            Aspect::Features => json!({ "features": draft.services.features }),
            Aspect::Badges => json!({ "selected": draft.badges.selected }),
            Aspect::Faqs => json!({ "faqs": draft.policies.faqs }),
            Aspect::SocialLinks => json!(draft.social),
            Aspect::Media => json!(draft.media),
            Aspect::Payment => json!(draft.payment),
        }
    }
}

#[async_trait]
impl AspectWriter for HttpAspectWriter {
    fn aspect(&self) -> Aspect {
        self.aspect
    }

    async fn write(
        &self,
        profile_id: Uuid,
        draft: &VendorProfileDraft,
    ) -> Result<(), AspectError> {
        let url = format!(
            "{}/profiles/{profile_id}/{}",
            self.base_url,
            self.path_segment()
        );
        let response = self
            .client
            .put(url)
            .json(&self.payload(draft))
            .send()
            .await
            .map_err(|e| AspectError::new(self.aspect, e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AspectError::new(
                self.aspect,
                format!("writer returned {}", response.status()),
            ))
        }
    }
}

/// Queries the payment collaborator for linkage status.
pub struct HttpPaymentStatusSource {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PaymentStatusBody {
    linked: bool,
}

impl HttpPaymentStatusSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PaymentStatusSource for HttpPaymentStatusSource {
    async fn is_linked(&self, identity_id: Uuid) -> Result<bool, AspectError> {
        let url = format!("{}/payments/{identity_id}/status", self.base_url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AspectError::new(Aspect::Payment, e.to_string()))?;

        if !response.status().is_success() {
            return Err(AspectError::new(
                Aspect::Payment,
                format!("status query returned {}", response.status()),
            ));
        }
        let body: PaymentStatusBody = response
            .json()
            .await
            .map_err(|e| AspectError::new(Aspect::Payment, format!("malformed status body: {e}")))?;
        Ok(body.linked)
    }
}
