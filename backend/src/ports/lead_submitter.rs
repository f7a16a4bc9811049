//! Lead delivery port.
//!
//! Every lead form on the site ends in a single `submit(lead)` call. What
//! happens after that (a log line, a CRM webhook, an in-memory list in
//! tests) is the adapter's business.

use async_trait::async_trait;

use crate::domain::leads::Lead;

/// Port for handing captured leads to whoever follows them up.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Deliver one lead.
    ///
    /// # Errors
    ///
    /// - `Rejected` if the receiving side refused the payload
    /// - `Transport` / `Timeout` if it could not be reached
    async fn submit(&self, lead: &Lead) -> Result<(), LeadDeliveryError>;

    /// Short adapter name for logs.
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadDeliveryError {
    #[error("lead rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("lead delivery failed: {0}")]
    Transport(String),

    #[error("lead delivery timed out")]
    Timeout,

    #[error("lead could not be encoded: {0}")]
    Serialization(String),
}

impl LeadDeliveryError {
    /// Whether a later attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            LeadDeliveryError::Rejected { status, .. } => *status >= 500 || *status == 429,
            LeadDeliveryError::Transport(_) | LeadDeliveryError::Timeout => true,
            LeadDeliveryError::Serialization(_) => false,
        }
    }
}
