//! CalculateEstimateHandler - the paced "Calculate" button.
//!
//! The result appears after a fixed delay. The flow is
//! begin (issue ticket) -> sleep -> compute -> complete, and no store lock
//! is held across the sleep. An input edit or a newer calculation made
//! during the delay supersedes the ticket and its result is dropped.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::calculator::CalculatorSession;
use crate::domain::estimation::{estimate, IndustryCatalog};
use crate::domain::foundation::{CalculatorSessionId, DomainError};
use crate::ports::CalculatorSessionStore;

use super::update_session;

#[derive(Debug, Clone)]
pub struct CalculateEstimateCommand {
    pub session_id: CalculatorSessionId,
}

/// How a calculation request ended. Each variant carries the session as it
/// stands afterwards.
#[derive(Debug, Clone)]
pub enum CalculationOutcome {
    /// The result was published.
    Completed(CalculatorSession),
    /// A newer edit or calculation won; nothing was published.
    Superseded(CalculatorSession),
    /// The tonnage is not a positive number; the result was cleared.
    NotComputed(CalculatorSession),
}

impl CalculationOutcome {
    pub fn session(&self) -> &CalculatorSession {
        match self {
            CalculationOutcome::Completed(s)
            | CalculationOutcome::Superseded(s)
            | CalculationOutcome::NotComputed(s) => s,
        }
    }

    pub fn into_session(self) -> CalculatorSession {
        match self {
            CalculationOutcome::Completed(s)
            | CalculationOutcome::Superseded(s)
            | CalculationOutcome::NotComputed(s) => s,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationOutcome::Completed(_) => "completed",
            CalculationOutcome::Superseded(_) => "superseded",
            CalculationOutcome::NotComputed(_) => "not_computed",
        }
    }
}

pub struct CalculateEstimateHandler {
    store: Arc<dyn CalculatorSessionStore>,
    catalog: &'static IndustryCatalog,
    delay: Duration,
}

impl CalculateEstimateHandler {
    pub fn new(
        store: Arc<dyn CalculatorSessionStore>,
        catalog: &'static IndustryCatalog,
        delay: Duration,
    ) -> Self {
        Self {
            store,
            catalog,
            delay,
        }
    }

    pub async fn handle(&self, cmd: CalculateEstimateCommand) -> Result<CalculationOutcome, DomainError> {
        // 1. Issue a ticket for the current inputs
        let mut issued = None;
        let session = update_session(self.store.as_ref(), &cmd.session_id, |s| {
            issued = s.begin_calculation();
            Ok(())
        })
        .await?;

        let Some(ticket) = issued else {
            tracing::debug!(session_id = %cmd.session_id, "tonnage not positive, nothing to calculate");
            return Ok(CalculationOutcome::NotComputed(session));
        };

        // 2. Pace the result
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        // 3. Compute and publish unless superseded meanwhile; the ticket
        //    check and the write happen in one store step
        let result = estimate(self.catalog, &ticket.request);
        let mut published = false;
        let session = update_session(self.store.as_ref(), &cmd.session_id, |s| {
            published = s.complete_calculation(&ticket, result);
            Ok(())
        })
        .await?;

        if !published {
            tracing::debug!(
                session_id = %cmd.session_id,
                generation = ticket.generation,
                "calculation superseded"
            );
            return Ok(CalculationOutcome::Superseded(session));
        }

        tracing::info!(
            session_id = %cmd.session_id,
            industry = %ticket.request.industry,
            credits = result.credits,
            "estimate calculated"
        );
        Ok(CalculationOutcome::Completed(session))
    }
}
