//! GetCalculatorSessionHandler - current state of a calculator session.

use std::sync::Arc;

use crate::domain::calculator::CalculatorSession;
use crate::domain::foundation::{CalculatorSessionId, DomainError};
use crate::ports::CalculatorSessionStore;

use super::load_session;

pub struct GetCalculatorSessionHandler {
    store: Arc<dyn CalculatorSessionStore>,
}

impl GetCalculatorSessionHandler {
    pub fn new(store: Arc<dyn CalculatorSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: CalculatorSessionId) -> Result<CalculatorSession, DomainError> {
        load_session(self.store.as_ref(), &id).await
    }
}
