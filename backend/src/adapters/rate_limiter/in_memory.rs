//! In-memory rate limiter.
//!
//! Uses a fixed-window counter algorithm with an in-memory HashMap.
//! Counts are per process; a multi-server deployment needs a shared store.
//! Once the map holds `prune_threshold` keys, expired windows are dropped.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope,
    RateLimitStatus, RateLimiter,
};

use super::config::{RateLimitConfig, WindowLimits};

/// Tracked keys before expired windows are swept.
const DEFAULT_PRUNE_THRESHOLD: usize = 10_000;

#[derive(Debug)]
pub struct InMemoryRateLimiter {
    config: RateLimitConfig,
    windows: Arc<RwLock<HashMap<String, WindowState>>>,
    prune_threshold: usize,
}

/// State for a single rate limit window.
#[derive(Debug, Clone)]
struct WindowState {
    count: u32,
    window_start: u64,
    window_secs: u32,
}

impl WindowState {
    fn is_expired(&self, now: u64) -> bool {
        now >= self.window_start + self.window_secs as u64
    }
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Arc::new(RwLock::new(HashMap::new())),
            prune_threshold: DEFAULT_PRUNE_THRESHOLD,
        }
    }

    pub fn with_prune_threshold(mut self, threshold: usize) -> Self {
        self.prune_threshold = threshold.max(1);
        self
    }

    /// Number of keys currently holding a window.
    pub async fn tracked_keys(&self) -> usize {
        self.windows.read().await.len()
    }

    pub fn with_defaults() -> Self {
        Self::new(RateLimitConfig::default())
    }

    fn limits_for(&self, key: &RateLimitKey) -> WindowLimits {
        match key.scope {
            RateLimitScope::Global => self.config.global,
            RateLimitScope::Ip => self.config.limits_for_resource(key.resource.as_deref()),
        }
    }

    fn now_secs() -> u64 {
        Timestamp::now().as_unix_secs()
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError> {
        let storage_key = key.storage_key();
        let limits = self.limits_for(&key);
        let limit = limits.requests_per_window;
        let now = Self::now_secs();

        let mut windows = self.windows.write().await;

        if windows.len() >= self.prune_threshold && !windows.contains_key(&storage_key) {
            let before = windows.len();
            windows.retain(|_, state| !state.is_expired(now));
            tracing::debug!(
                pruned = before - windows.len(),
                remaining = windows.len(),
                "pruned expired rate limit windows"
            );
        }

        let state = windows.entry(storage_key).or_insert_with(|| WindowState {
            count: 0,
            window_start: now,
            window_secs: limits.window_secs,
        });

        // Window expired
        if state.is_expired(now) {
            state.count = 0;
            state.window_start = now;
        }

        if state.count >= limit {
            let retry_after = (state.window_start + state.window_secs as u64)
                .saturating_sub(now) as u32;

            return Ok(RateLimitResult::Denied(RateLimitDenied {
                limit,
                retry_after_secs: retry_after.max(1),
                scope: key.scope,
                message: format!(
                    "Rate limit exceeded for {}. Retry after {} seconds.",
                    key.scope,
                    retry_after.max(1)
                ),
            }));
        }

        state.count += 1;
        let remaining = limit.saturating_sub(state.count);
        let reset_at = Timestamp::from_unix_secs(state.window_start + state.window_secs as u64);

        Ok(RateLimitResult::Allowed(RateLimitStatus {
            limit,
            remaining,
            reset_at,
            window_secs: state.window_secs,
        }))
    }

    async fn status(&self, key: RateLimitKey) -> Result<RateLimitStatus, RateLimitError> {
        let storage_key = key.storage_key();
        let limits = self.limits_for(&key);
        let now = Self::now_secs();

        let windows = self.windows.read().await;

        let (count, window_start) = windows
            .get(&storage_key)
            .map(|state| {
                let window_end = state.window_start + state.window_secs as u64;
                if now >= window_end {
                    (0, now)
                } else {
                    (state.count, state.window_start)
                }
            })
            .unwrap_or((0, now));

        Ok(RateLimitStatus {
            limit: limits.requests_per_window,
            remaining: limits.requests_per_window.saturating_sub(count),
            reset_at: Timestamp::from_unix_secs(window_start + limits.window_secs as u64),
            window_secs: limits.window_secs,
        })
    }

    async fn reset(&self, key: RateLimitKey) -> Result<(), RateLimitError> {
        let mut windows = self.windows.write().await;
        windows.remove(&key.storage_key());
        Ok(())
    }
}
