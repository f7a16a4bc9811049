//! In-memory calculator session store.
//!
//! Sessions expire after `ttl_secs` without activity. Expired entries read
//! as missing and are purged on the next insert; when the store is full the
//! least recently touched session is evicted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::CalculatorConfig;
use crate::domain::calculator::{CalculatorError, CalculatorSession};
use crate::domain::foundation::{CalculatorSessionId, DomainError, Timestamp};
use crate::ports::{CalculatorSessionStore, SessionUpdate};

#[derive(Debug, Clone)]
pub struct InMemoryCalculatorSessionStore {
    sessions: Arc<RwLock<HashMap<CalculatorSessionId, CalculatorSession>>>,
    ttl_secs: u64,
    max_sessions: usize,
}

impl InMemoryCalculatorSessionStore {
    pub fn new(ttl_secs: u64, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl_secs,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.session_ttl_secs, config.max_sessions)
    }

    pub fn with_defaults() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }

    /// Number of stored sessions, expired ones included.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for InMemoryCalculatorSessionStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl CalculatorSessionStore for InMemoryCalculatorSessionStore {
    async fn insert(&self, session: CalculatorSession) -> Result<(), DomainError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(&now, self.ttl_secs));
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::debug!(purged, "expired calculator sessions purged");
        }

        if sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| *s.touched_at())
                .map(|s| *s.id());
            if let Some(id) = oldest {
                sessions.remove(&id);
                tracing::warn!(session_id = %id, "calculator session store full, evicted oldest");
            }
        }

        sessions.insert(*session.id(), session);
        Ok(())
    }

    async fn find(&self, id: &CalculatorSessionId) -> Result<Option<CalculatorSession>, DomainError> {
        let now = Timestamp::now();
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(id)
            .filter(|s| !s.is_expired(&now, self.ttl_secs))
            .cloned())
    }

    async fn update<'a>(
        &self,
        id: &CalculatorSessionId,
        apply: SessionUpdate<'a>,
    ) -> Result<CalculatorSession, DomainError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let stored = match sessions.get_mut(id) {
            Some(stored) if !stored.is_expired(&now, self.ttl_secs) => stored,
            _ => return Err(CalculatorError::NotFound(*id).into()),
        };

        let mut next = stored.clone();
        apply(&mut next)?;
        *stored = next.clone();
        Ok(next)
    }

    async fn remove(&self, id: &CalculatorSessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use std::time::Duration;

    fn new_session() -> CalculatorSession {
        CalculatorSession::new(CalculatorSessionId::new())
    }

    #[tokio::test]
    async fn insert_then_find() {
        let store = InMemoryCalculatorSessionStore::with_defaults();
        let session = new_session();
        store.insert(session.clone()).await.unwrap();

        let found = store.find(session.id()).await.unwrap().unwrap();
        assert_eq!(found.id(), session.id());
    }

    #[tokio::test]
    async fn update_replaces_stored_state() {
        let store = InMemoryCalculatorSessionStore::with_defaults();
        let session = new_session();
        store.insert(session.clone()).await.unwrap();

        let updated = store
            .update(
                session.id(),
                Box::new(|s| {
                    s.set_tonnage_input("750");
                    Ok(())
                }),
            )
            .await
            .unwrap();

        assert_eq!(updated.tonnage_input(), "750");
        let found = store.find(session.id()).await.unwrap().unwrap();
        assert_eq!(found.tonnage_input(), "750");
    }

    #[tokio::test]
    async fn failed_update_writes_nothing() {
        let store = InMemoryCalculatorSessionStore::with_defaults();
        let session = new_session();
        store.insert(session.clone()).await.unwrap();

        let err = store
            .update(
                session.id(),
                Box::new(|s| {
                    s.set_tonnage_input("750");
                    s.open_contact_form()?;
                    Ok(())
                }),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EstimateMissing);
        let found = store.find(session.id()).await.unwrap().unwrap();
        assert_eq!(found.tonnage_input(), "");
    }

    #[tokio::test]
    async fn update_of_unknown_session_fails() {
        let store = InMemoryCalculatorSessionStore::with_defaults();
        let err = store
            .update(&CalculatorSessionId::new(), Box::new(|_| Ok(())))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn concurrent_updates_are_not_lost() {
        let store = InMemoryCalculatorSessionStore::with_defaults();
        let session = new_session();
        let id = *session.id();
        store.insert(session).await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..20 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store
                    .update(
                        &id,
                        Box::new(|s| {
                            let next = s.tonnage_input().len() + 1;
                            s.set_tonnage_input("1".repeat(next));
                            Ok(())
                        }),
                    )
                    .await
                    .unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let found = store.find(&id).await.unwrap().unwrap();
        assert_eq!(found.tonnage_input().len(), 20);
    }

    #[tokio::test]
    async fn remove_reports_existence() {
        let store = InMemoryCalculatorSessionStore::with_defaults();
        let session = new_session();
        store.insert(session.clone()).await.unwrap();

        assert!(store.remove(session.id()).await.unwrap());
        assert!(!store.remove(session.id()).await.unwrap());
        assert!(store.find(session.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn full_store_evicts_least_recently_touched() {
        let store = InMemoryCalculatorSessionStore::new(3600, 2);
        let first = new_session();
        store.insert(first.clone()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = new_session();
        store.insert(second.clone()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let third = new_session();
        store.insert(third.clone()).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert!(store.find(first.id()).await.unwrap().is_none());
        assert!(store.find(third.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn idle_sessions_expire() {
        let store = InMemoryCalculatorSessionStore::new(0, 10);
        let session = new_session();
        store.insert(session.clone()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert!(store.find(session.id()).await.unwrap().is_none());
        assert!(store.update(session.id(), Box::new(|_| Ok(()))).await.is_err());

        store.insert(new_session()).await.unwrap();
        assert_eq!(store.len().await, 1);
    }
}
