//! OpenContactFormHandler - reveals the report form under a result.

use std::sync::Arc;

use crate::domain::calculator::CalculatorSession;
use crate::domain::foundation::{CalculatorSessionId, DomainError};
use crate::ports::CalculatorSessionStore;

use super::update_session;

#[derive(Debug, Clone)]
pub struct OpenContactFormCommand {
    pub session_id: CalculatorSessionId,
}

pub struct OpenContactFormHandler {
    store: Arc<dyn CalculatorSessionStore>,
}

impl OpenContactFormHandler {
    pub fn new(store: Arc<dyn CalculatorSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: OpenContactFormCommand) -> Result<CalculatorSession, DomainError> {
        update_session(self.store.as_ref(), &cmd.session_id, |s| {
            s.open_contact_form()?;
            Ok(())
        })
        .await
    }
}
