//! In-memory lead submitter for tests and local runs.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::leads::Lead;
use crate::ports::{LeadDeliveryError, LeadSubmitter};

/// Keeps every accepted lead; optionally fails every submission.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadSubmitter {
    leads: Arc<RwLock<Vec<Lead>>>,
    failure: Option<LeadDeliveryError>,
}

impl InMemoryLeadSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A submitter that rejects everything with `error`.
    pub fn failing(error: LeadDeliveryError) -> Self {
        Self {
            leads: Arc::new(RwLock::new(Vec::new())),
            failure: Some(error),
        }
    }

    pub async fn submitted(&self) -> Vec<Lead> {
        self.leads.read().await.clone()
    }

    pub async fn clear(&self) {
        self.leads.write().await.clear();
    }
}

#[async_trait]
impl LeadSubmitter for InMemoryLeadSubmitter {
    async fn submit(&self, lead: &Lead) -> Result<(), LeadDeliveryError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.leads.write().await.push(lead.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}
