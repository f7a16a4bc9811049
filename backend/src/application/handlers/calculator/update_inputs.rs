//! Input edits on the calculator page.
//!
//! Either edit clears the shown result and invalidates any calculation
//! still waiting on its delay.

use std::sync::Arc;

use crate::domain::calculator::CalculatorSession;
use crate::domain::foundation::{CalculatorSessionId, DomainError};
use crate::ports::CalculatorSessionStore;

use super::update_session;

#[derive(Debug, Clone)]
pub struct SelectIndustryCommand {
    pub session_id: CalculatorSessionId,
    pub industry: String,
}

pub struct SelectIndustryHandler {
    store: Arc<dyn CalculatorSessionStore>,
}

impl SelectIndustryHandler {
    pub fn new(store: Arc<dyn CalculatorSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SelectIndustryCommand) -> Result<CalculatorSession, DomainError> {
        let session = update_session(self.store.as_ref(), &cmd.session_id, |s| {
            s.select_industry(&cmd.industry)?;
            Ok(())
        })
        .await?;
        tracing::debug!(session_id = %cmd.session_id, industry = %session.industry(), "industry selected");
        Ok(session)
    }
}

#[derive(Debug, Clone)]
pub struct SetTonnageCommand {
    pub session_id: CalculatorSessionId,
    /// Raw text from the tonnage field; not validated until calculation.
    pub annual_tons: String,
}

pub struct SetTonnageHandler {
    store: Arc<dyn CalculatorSessionStore>,
}

impl SetTonnageHandler {
    pub fn new(store: Arc<dyn CalculatorSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SetTonnageCommand) -> Result<CalculatorSession, DomainError> {
        update_session(self.store.as_ref(), &cmd.session_id, |s| {
            s.set_tonnage_input(cmd.annual_tons);
            Ok(())
        })
        .await
    }
}
