//! Calculator session store port.
//!
//! Sessions live for one view of the calculator page. The store holds them
//! between requests and forgets them once they go idle.

use async_trait::async_trait;

use crate::domain::calculator::CalculatorSession;
use crate::domain::foundation::{CalculatorSessionId, DomainError};

/// A change to one stored session. It runs while the store holds the
/// session exclusively, so no other change can interleave with it.
pub type SessionUpdate<'a> =
    Box<dyn FnOnce(&mut CalculatorSession) -> Result<(), DomainError> + Send + 'a>;

#[async_trait]
pub trait CalculatorSessionStore: Send + Sync {
    /// Store a new session.
    async fn insert(&self, session: CalculatorSession) -> Result<(), DomainError>;

    /// Find a live session. Expired sessions are reported as `None`.
    async fn find(&self, id: &CalculatorSessionId) -> Result<Option<CalculatorSession>, DomainError>;

    /// Apply `apply` to the stored session as one atomic step and return
    /// the resulting state. When `apply` fails nothing is written.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session expired or was removed
    /// - whatever `apply` returns
    async fn update<'a>(
        &self,
        id: &CalculatorSessionId,
        apply: SessionUpdate<'a>,
    ) -> Result<CalculatorSession, DomainError>;

    /// Drop a session. Returns whether it existed.
    async fn remove(&self, id: &CalculatorSessionId) -> Result<bool, DomainError>;
}
