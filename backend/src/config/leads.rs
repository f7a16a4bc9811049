//! Lead delivery configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Where submitted leads go
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadDelivery {
    /// Structured log line only
    #[default]
    Log,
    /// Signed JSON POST to `webhook_url`
    Webhook,
}

/// Lead delivery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LeadsConfig {
    #[serde(default)]
    pub delivery: LeadDelivery,

    /// Endpoint for webhook delivery
    pub webhook_url: Option<String>,

    /// HMAC-SHA256 key for the signature header
    pub webhook_secret: Option<Secret<String>>,

    /// Webhook request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl LeadsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate lead delivery configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.delivery != LeadDelivery::Webhook {
            return Ok(());
        }

        let url = self
            .webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ValidationError::MissingRequired("LEADS__WEBHOOK_URL"))?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidWebhookUrl(url.to_string()));
        }
        if *environment == Environment::Production {
            if !url.starts_with("https://") {
                return Err(ValidationError::WebhookMustBeHttps);
            }
            if self.webhook_secret.is_none() {
                return Err(ValidationError::MissingRequired("LEADS__WEBHOOK_SECRET"));
            }
        }
        Ok(())
    }
}

impl Default for LeadsConfig {
    fn default() -> Self {
        Self {
            delivery: LeadDelivery::default(),
            webhook_url: None,
            webhook_secret: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
