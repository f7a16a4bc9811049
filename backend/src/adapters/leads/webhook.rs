//! Webhook lead submitter.
//!
//! POSTs each lead as JSON to a configured URL. When a secret is set the
//! raw body is signed with HMAC-SHA256 and the hex digest is sent as
//! `X-CarbonBridge-Signature: sha256=<hex>`.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::{header, Client};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use std::time::Duration;

use crate::domain::leads::Lead;
use crate::ports::{LeadDeliveryError, LeadSubmitter};

pub const SIGNATURE_HEADER: &str = "X-CarbonBridge-Signature";
pub const LEAD_ID_HEADER: &str = "X-CarbonBridge-Lead-Id";

#[derive(Debug, Clone)]
pub struct WebhookLeadConfig {
    pub url: String,
    secret: Option<Secret<String>>,
    pub timeout: Duration,
}

impl WebhookLeadConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the signing secret.
    pub fn with_secret(mut self, secret: Secret<String>) -> Self {
        self.secret = Some(secret);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_signed(&self) -> bool {
        self.secret.is_some()
    }
}

pub struct WebhookLeadSubmitter {
    config: WebhookLeadConfig,
    client: Client,
}

impl WebhookLeadSubmitter {
    pub fn new(config: WebhookLeadConfig) -> Result<Self, LeadDeliveryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LeadDeliveryError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

/// Hex HMAC-SHA256 of `body` under `secret`.
pub fn sign_payload(secret: &str, body: &[u8]) -> Result<String, LeadDeliveryError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| LeadDeliveryError::Serialization(format!("invalid signing key: {}", e)))?;
    mac.update(body);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[async_trait]
impl LeadSubmitter for WebhookLeadSubmitter {
    async fn submit(&self, lead: &Lead) -> Result<(), LeadDeliveryError> {
        let body = serde_json::to_vec(lead)
            .map_err(|e| LeadDeliveryError::Serialization(e.to_string()))?;

        let mut request = self
            .client
            .post(&self.config.url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(LEAD_ID_HEADER, lead.id.to_string());

        if let Some(secret) = &self.config.secret {
            let signature = sign_payload(secret.expose_secret(), &body)?;
            request = request.header(SIGNATURE_HEADER, format!("sha256={}", signature));
        }

        let response = request.body(body).send().await.map_err(|e| {
            if e.is_timeout() {
                LeadDeliveryError::Timeout
            } else if e.is_connect() {
                LeadDeliveryError::Transport(format!("Connection failed: {}", e))
            } else {
                LeadDeliveryError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LeadDeliveryError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(lead_id = %lead.id, status = status.as_u16(), "lead webhook accepted");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}
