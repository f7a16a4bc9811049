//! Calculator configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for the artificial result delay.
const MAX_RESULT_DELAY_MS: u64 = 10_000;

/// Calculator page behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Pause before a calculated result is shown
    #[serde(default = "default_result_delay_ms")]
    pub result_delay_ms: u64,

    /// Idle lifetime of a calculator session
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,

    /// Sessions kept in memory before the oldest is evicted
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl CalculatorConfig {
    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }

    /// Validate calculator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.result_delay_ms > MAX_RESULT_DELAY_MS {
            return Err(ValidationError::InvalidResultDelay);
        }
        if self.session_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.max_sessions == 0 {
            return Err(ValidationError::InvalidSessionCapacity);
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            result_delay_ms: default_result_delay_ms(),
            session_ttl_secs: default_session_ttl_secs(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_result_delay_ms() -> u64 {
    800
}

fn default_session_ttl_secs() -> u64 {
    3600
}

fn default_max_sessions() -> usize {
    10_000
}
