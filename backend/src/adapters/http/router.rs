//! Application router: wires adapters into handlers and mounts every API.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::calculator::InMemoryCalculatorSessionStore;
use crate::adapters::leads::{LoggingLeadSubmitter, WebhookLeadConfig, WebhookLeadSubmitter};
use crate::adapters::rate_limiter::{InMemoryRateLimiter, RateLimitConfig, LEADS_RESOURCE};
use crate::application::handlers::{
    CalculateEstimateHandler, CreateCalculatorSessionHandler, EstimateHandler,
    GetCalculatorSessionHandler, ListIndustriesHandler, OnboardingProgressHandler,
    OpenContactFormHandler, RequestReportHandler, SelectIndustryHandler, SetTonnageHandler,
    SubmitContactHandler,
};
use crate::config::{AppConfig, LeadDelivery, ServerConfig, ValidationError};
use crate::domain::estimation::IndustryCatalog;
use crate::ports::{CalculatorSessionStore, LeadDeliveryError, LeadSubmitter, RateLimiter};

use super::calculator::{calculator_routes, CalculatorHandlers};
use super::estimation::{estimation_routes, EstimationHandlers};
use super::health::health;
use super::leads::{lead_routes, LeadHandlers};
use super::middleware::{rate_limit_middleware, RateLimitGuard};
use super::onboarding::{onboarding_routes, OnboardingHandlers};

/// Errors raised while assembling the service graph.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("lead submitter could not be built: {0}")]
    LeadSubmitter(#[from] LeadDeliveryError),
}

/// Adapters shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: &'static IndustryCatalog,
    pub session_store: Arc<dyn CalculatorSessionStore>,
    pub lead_submitter: Arc<dyn LeadSubmitter>,
    /// `None` disables rate limiting.
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
    /// Key limits by proxy headers instead of the peer address.
    pub trust_forwarded_headers: bool,
    pub result_delay: Duration,
}

impl AppServices {
    /// Builds the production adapters described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, WiringError> {
        let lead_submitter: Arc<dyn LeadSubmitter> = match config.leads.delivery {
            LeadDelivery::Log => Arc::new(LoggingLeadSubmitter::new()),
            LeadDelivery::Webhook => {
                let url = config
                    .leads
                    .webhook_url
                    .clone()
                    .ok_or(ValidationError::MissingRequired("leads.webhook_url"))?;
                let mut webhook = WebhookLeadConfig::new(url).with_timeout(config.leads.timeout());
                if let Some(secret) = config.leads.webhook_secret.clone() {
                    webhook = webhook.with_secret(secret);
                }
                Arc::new(WebhookLeadSubmitter::new(webhook)?)
            }
        };

        let rate_limiter: Option<Arc<dyn RateLimiter>> = if config.rate_limit.enabled {
            Some(Arc::new(InMemoryRateLimiter::new(RateLimitConfig::from(
                &config.rate_limit,
            ))))
        } else {
            None
        };

        tracing::info!(
            lead_submitter = lead_submitter.name(),
            rate_limited = rate_limiter.is_some(),
            trust_forwarded_headers = config.rate_limit.trust_forwarded_headers,
            result_delay_ms = config.calculator.result_delay_ms,
            "services wired"
        );

        Ok(Self {
            catalog: IndustryCatalog::standard(),
            session_store: Arc::new(InMemoryCalculatorSessionStore::from_config(&config.calculator)),
            lead_submitter,
            rate_limiter,
            trust_forwarded_headers: config.rate_limit.trust_forwarded_headers,
            result_delay: config.calculator.result_delay(),
        })
    }

    /// In-process adapters with no result delay and default limits keyed by
    /// peer address.
    pub fn in_memory(lead_submitter: Arc<dyn LeadSubmitter>) -> Self {
        Self {
            catalog: IndustryCatalog::standard(),
            session_store: Arc::new(InMemoryCalculatorSessionStore::with_defaults()),
            lead_submitter,
            rate_limiter: Some(Arc::new(InMemoryRateLimiter::with_defaults())),
            trust_forwarded_headers: false,
            result_delay: Duration::ZERO,
        }
    }

    pub fn with_result_delay(mut self, delay: Duration) -> Self {
        self.result_delay = delay;
        self
    }

    pub fn with_rate_limiter(mut self, limiter: Option<Arc<dyn RateLimiter>>) -> Self {
        self.rate_limiter = limiter;
        self
    }

    pub fn with_forwarded_headers_trusted(mut self, trust: bool) -> Self {
        self.trust_forwarded_headers = trust;
        self
    }

    fn rate_limit_guard(&self, resource: &'static str) -> Option<RateLimitGuard> {
        self.rate_limiter.clone().map(|limiter| {
            RateLimitGuard::new(limiter, resource)
                .trusting_forwarded_headers(self.trust_forwarded_headers)
        })
    }

    fn estimation_handlers(&self) -> EstimationHandlers {
        EstimationHandlers::new(
            Arc::new(EstimateHandler::new(self.catalog)),
            Arc::new(ListIndustriesHandler::new(self.catalog)),
        )
    }

    fn calculator_handlers(&self) -> CalculatorHandlers {
        let store = self.session_store.clone();
        CalculatorHandlers {
            catalog: self.catalog,
            create_handler: Arc::new(CreateCalculatorSessionHandler::new(store.clone())),
            get_handler: Arc::new(GetCalculatorSessionHandler::new(store.clone())),
            select_industry_handler: Arc::new(SelectIndustryHandler::new(store.clone())),
            set_tonnage_handler: Arc::new(SetTonnageHandler::new(store.clone())),
            calculate_handler: Arc::new(CalculateEstimateHandler::new(
                store.clone(),
                self.catalog,
                self.result_delay,
            )),
            open_contact_handler: Arc::new(OpenContactFormHandler::new(store.clone())),
            report_handler: Arc::new(RequestReportHandler::new(store, self.lead_submitter.clone())),
        }
    }

    fn lead_handlers(&self) -> LeadHandlers {
        LeadHandlers::new(Arc::new(SubmitContactHandler::new(self.lead_submitter.clone())))
    }
}

/// Every API route, without transport layers.
///
/// # Routes
/// - `GET /health`
/// - `/api/industries`, `/api/estimate`
/// - `/api/calculator/sessions/...` (creation and reports rate limited)
/// - `/api/onboarding/:track`, `/api/onboarding/:track/progress`
/// - `/api/leads/contact`, `/api/leads/reasons` (rate limited)
pub fn api_router(services: &AppServices) -> Router {
    let guard = services.rate_limit_guard(LEADS_RESOURCE);
    let mut leads = lead_routes(services.lead_handlers());
    if let Some(guard) = guard.clone() {
        leads = leads.layer(middleware::from_fn_with_state(guard, rate_limit_middleware));
    }

    Router::new()
        .route("/health", get(health))
        .nest("/api", estimation_routes(services.estimation_handlers()))
        .nest(
            "/api/calculator",
            calculator_routes(services.calculator_handlers(), guard),
        )
        .nest(
            "/api/onboarding",
            onboarding_routes(OnboardingHandlers::new(Arc::new(OnboardingProgressHandler::new()))),
        )
        .nest("/api/leads", leads)
}

/// The full application: routes plus tracing, request ids, timeout and CORS.
pub fn build_router(services: &AppServices, server: &ServerConfig) -> Router {
    api_router(services)
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Any origin when none are configured or `*` is listed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::leads::InMemoryLeadSubmitter;
    use crate::config::LeadsConfig;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    #[test]
    fn default_config_wires_log_delivery_and_limits() {
        let services = AppServices::from_config(&AppConfig::default()).unwrap();
        assert_eq!(services.lead_submitter.name(), "log");
        assert!(services.rate_limiter.is_some());
        assert!(!services.trust_forwarded_headers);
    }

    #[test]
    fn webhook_delivery_without_url_fails() {
        let config = AppConfig {
            leads: LeadsConfig {
                delivery: LeadDelivery::Webhook,
                ..LeadsConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(matches!(
            AppServices::from_config(&config),
            Err(WiringError::Config(ValidationError::MissingRequired(_)))
        ));
    }

    #[tokio::test]
    async fn health_and_request_id_are_served() {
        let services = AppServices::in_memory(Arc::new(InMemoryLeadSubmitter::new()));
        let app = build_router(&services, &ServerConfig::default());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    async fn allowed_origin(layer: CorsLayer, origin: &'static str) -> Option<String> {
        let app = Router::new()
            .route("/health", get(health))
            .layer(layer);
        let response = app
            .oneshot(
                Request::get("/health")
                    .header("origin", origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn configured_origins_are_allowed_and_invalid_ones_skipped() {
        let origins = ["https://carbonbridge.in".to_string(), "bad\norigin".to_string()];

        assert_eq!(
            allowed_origin(cors_layer(&origins), "https://carbonbridge.in").await.as_deref(),
            Some("https://carbonbridge.in")
        );
        assert_eq!(allowed_origin(cors_layer(&origins), "https://other.example").await, None);
    }

    #[tokio::test]
    async fn no_configured_origins_allows_any() {
        assert_eq!(
            allowed_origin(cors_layer(&[]), "https://other.example").await.as_deref(),
            Some("*")
        );
    }
}
