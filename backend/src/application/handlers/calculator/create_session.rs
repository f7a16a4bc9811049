//! CreateCalculatorSessionHandler - opens a calculator page session.

use std::sync::Arc;

use crate::domain::calculator::CalculatorSession;
use crate::domain::foundation::{CalculatorSessionId, DomainError};
use crate::ports::CalculatorSessionStore;

pub struct CreateCalculatorSessionHandler {
    store: Arc<dyn CalculatorSessionStore>,
}

impl CreateCalculatorSessionHandler {
    pub fn new(store: Arc<dyn CalculatorSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<CalculatorSession, DomainError> {
        let session = CalculatorSession::new(CalculatorSessionId::new());
        self.store.insert(session.clone()).await?;
        tracing::info!(session_id = %session.id(), "calculator session created");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::calculator::InMemoryCalculatorSessionStore;
    use crate::domain::estimation::DEFAULT_INDUSTRY;

    #[tokio::test]
    async fn new_session_starts_with_defaults_and_is_stored() {
        let store = Arc::new(InMemoryCalculatorSessionStore::with_defaults());
        let handler = CreateCalculatorSessionHandler::new(store.clone());

        let session = handler.handle().await.unwrap();

        assert_eq!(session.industry(), DEFAULT_INDUSTRY);
        assert!(session.tonnage_input().is_empty());
        assert!(session.result().is_none());
        assert!(store.find(session.id()).await.unwrap().is_some());
    }
}
