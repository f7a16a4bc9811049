//! HTTP routes for calculator session endpoints.

use axum::{
    middleware,
    routing::{get, post, put, MethodRouter},
    Router,
};

use crate::adapters::http::middleware::{rate_limit_middleware, RateLimitGuard};
use crate::adapters::rate_limiter::{LEADS_RESOURCE, SESSIONS_RESOURCE};

use super::handlers::{
    calculate, create_session, get_session, open_contact_form, request_report, select_industry,
    set_tonnage, CalculatorHandlers,
};

/// Routes under `/api/calculator`.
///
/// With a guard, session creation and report requests are rate limited.
/// Reports share the `leads` window with the contact form.
pub fn calculator_routes(handlers: CalculatorHandlers, guard: Option<RateLimitGuard>) -> Router {
    let mut create: MethodRouter<CalculatorHandlers> = post(create_session);
    let mut report: MethodRouter<CalculatorHandlers> = post(request_report);
    if let Some(guard) = guard {
        create = create.layer(middleware::from_fn_with_state(
            guard.for_resource(SESSIONS_RESOURCE),
            rate_limit_middleware,
        ));
        report = report.layer(middleware::from_fn_with_state(
            guard.for_resource(LEADS_RESOURCE),
            rate_limit_middleware,
        ));
    }

    Router::new()
        .route("/sessions", create)
        .route("/sessions/:id", get(get_session))
        .route("/sessions/:id/industry", put(select_industry))
        .route("/sessions/:id/tonnage", put(set_tonnage))
        .route("/sessions/:id/calculate", post(calculate))
        .route("/sessions/:id/contact", post(open_contact_form))
        .route("/sessions/:id/report", report)
        .with_state(handlers)
}
