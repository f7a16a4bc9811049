//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CARBONBRIDGE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so the service starts with an empty environment.
//!
//! # Example
//!
//! ```no_run
//! use carbonbridge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on port {}", config.server.port);
//! ```

mod calculator;
mod error;
mod leads;
mod rate_limit;
mod server;

pub use calculator::CalculatorConfig;
pub use error::{ConfigError, ValidationError};
pub use leads::{LeadDelivery, LeadsConfig};
pub use rate_limit::RateLimitSettings;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Calculator pacing and session lifetime
    #[serde(default)]
    pub calculator: CalculatorConfig,

    /// Lead delivery (log or webhook)
    #[serde(default)]
    pub leads: LeadsConfig,

    /// Limits on the lead forms
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CARBONBRIDGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CARBONBRIDGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CARBONBRIDGE__LEADS__DELIVERY=webhook` -> `leads.delivery = webhook`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CARBONBRIDGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.calculator.validate()?;
        self.leads.validate(&self.server.environment)?;
        self.rate_limit.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; tests touching them run one at a time
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "CARBONBRIDGE__SERVER__PORT",
        "CARBONBRIDGE__SERVER__ENVIRONMENT",
        "CARBONBRIDGE__CALCULATOR__RESULT_DELAY_MS",
        "CARBONBRIDGE__LEADS__DELIVERY",
        "CARBONBRIDGE__LEADS__WEBHOOK_URL",
        "CARBONBRIDGE__RATE_LIMIT__LEAD_REQUESTS_PER_MINUTE",
        "CARBONBRIDGE__RATE_LIMIT__TRUST_FORWARDED_HEADERS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.calculator.result_delay_ms, 800);
        assert_eq!(config.leads.delivery, LeadDelivery::Log);
        assert!(!config.rate_limit.trust_forwarded_headers);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_forwarded_header_trust_is_opt_in() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBONBRIDGE__RATE_LIMIT__TRUST_FORWARDED_HEADERS", "true");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().rate_limit.trust_forwarded_headers);
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBONBRIDGE__SERVER__PORT", "3000");
        env::set_var("CARBONBRIDGE__CALCULATOR__RESULT_DELAY_MS", "0");
        env::set_var("CARBONBRIDGE__RATE_LIMIT__LEAD_REQUESTS_PER_MINUTE", "2");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.calculator.result_delay_ms, 0);
        assert_eq!(config.rate_limit.lead_requests_per_minute, 2);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBONBRIDGE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_webhook_without_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBONBRIDGE__LEADS__DELIVERY", "webhook");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("LEADS__WEBHOOK_URL"))
        );
    }

    #[test]
    fn test_webhook_with_url_validates() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBONBRIDGE__LEADS__DELIVERY", "webhook");
        env::set_var("CARBONBRIDGE__LEADS__WEBHOOK_URL", "http://localhost:9000/leads");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().validate().is_ok());
    }
}
