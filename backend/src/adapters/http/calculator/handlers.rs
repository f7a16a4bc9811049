//! HTTP handlers for calculator session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::handlers::calculator::{
    CalculateEstimateCommand, CalculateEstimateHandler, CreateCalculatorSessionHandler,
    GetCalculatorSessionHandler, OpenContactFormCommand, OpenContactFormHandler,
    RequestReportCommand, RequestReportHandler, SelectIndustryCommand, SelectIndustryHandler,
    SetTonnageCommand, SetTonnageHandler,
};
use crate::domain::calculator::{CalculatorSession, REPORT_CONTENT_TYPE};
use crate::domain::estimation::IndustryCatalog;
use crate::domain::foundation::{CalculatorSessionId, DomainError};

use super::dto::{
    CalculateResponse, ReportRequest, SelectIndustryRequest, SessionView, SetTonnageRequest,
};

/// Set on report downloads: id of the forwarded lead.
pub static X_LEAD_ID: HeaderName = HeaderName::from_static("x-lead-id");
/// Set on report downloads: whether the lead reached its destination.
pub static X_LEAD_DELIVERED: HeaderName = HeaderName::from_static("x-lead-delivered");

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CalculatorHandlers {
    pub catalog: &'static IndustryCatalog,
    pub create_handler: Arc<CreateCalculatorSessionHandler>,
    pub get_handler: Arc<GetCalculatorSessionHandler>,
    pub select_industry_handler: Arc<SelectIndustryHandler>,
    pub set_tonnage_handler: Arc<SetTonnageHandler>,
    pub calculate_handler: Arc<CalculateEstimateHandler>,
    pub open_contact_handler: Arc<OpenContactFormHandler>,
    pub report_handler: Arc<RequestReportHandler>,
}

impl CalculatorHandlers {
    fn view(&self, session: &CalculatorSession) -> SessionView {
        SessionView::new(session, self.catalog)
    }

    fn view_response(&self, status: StatusCode, result: Result<CalculatorSession, DomainError>) -> Response {
        match result {
            Ok(session) => (status, Json(self.view(&session))).into_response(),
            Err(e) => domain_error_response(e),
        }
    }
}

fn parse_session_id(raw: &str) -> Result<CalculatorSessionId, Response> {
    raw.parse().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid session id: {}", raw))),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/calculator/sessions
pub async fn create_session(State(handlers): State<CalculatorHandlers>) -> Response {
    let result = handlers.create_handler.handle().await;
    handlers.view_response(StatusCode::CREATED, result)
}

/// GET /api/calculator/sessions/:id
pub async fn get_session(State(handlers): State<CalculatorHandlers>, Path(id): Path<String>) -> Response {
    let id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let result = handlers.get_handler.handle(id).await;
    handlers.view_response(StatusCode::OK, result)
}

/// PUT /api/calculator/sessions/:id/industry
pub async fn select_industry(
    State(handlers): State<CalculatorHandlers>,
    Path(id): Path<String>,
    Json(req): Json<SelectIndustryRequest>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = SelectIndustryCommand {
        session_id,
        industry: req.industry,
    };
    let result = handlers.select_industry_handler.handle(cmd).await;
    handlers.view_response(StatusCode::OK, result)
}

/// PUT /api/calculator/sessions/:id/tonnage
pub async fn set_tonnage(
    State(handlers): State<CalculatorHandlers>,
    Path(id): Path<String>,
    Json(req): Json<SetTonnageRequest>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = SetTonnageCommand {
        session_id,
        annual_tons: req.annual_tons.into_text(),
    };
    let result = handlers.set_tonnage_handler.handle(cmd).await;
    handlers.view_response(StatusCode::OK, result)
}

/// POST /api/calculator/sessions/:id/calculate
///
/// Responds once the paced calculation settles.
pub async fn calculate(State(handlers): State<CalculatorHandlers>, Path(id): Path<String>) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match handlers
        .calculate_handler
        .handle(CalculateEstimateCommand { session_id })
        .await
    {
        Ok(outcome) => {
            let response = CalculateResponse {
                outcome: outcome.as_str(),
                session: handlers.view(outcome.session()),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/calculator/sessions/:id/contact
pub async fn open_contact_form(
    State(handlers): State<CalculatorHandlers>,
    Path(id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let result = handlers
        .open_contact_handler
        .handle(OpenContactFormCommand { session_id })
        .await;
    handlers.view_response(StatusCode::OK, result)
}

/// POST /api/calculator/sessions/:id/report
///
/// Returns the plain-text report as a download.
pub async fn request_report(
    State(handlers): State<CalculatorHandlers>,
    Path(id): Path<String>,
    Json(req): Json<ReportRequest>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = RequestReportCommand {
        session_id,
        email: req.email,
        phone: req.phone,
    };

    match handlers.report_handler.handle(cmd).await {
        Ok(result) => {
            let disposition = format!("attachment; filename=\"{}\"", result.report.filename());
            let mut response = (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, REPORT_CONTENT_TYPE.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                result.report.render(),
            )
                .into_response();

            let headers = response.headers_mut();
            if let Ok(value) = HeaderValue::from_str(&result.lead_id.to_string()) {
                headers.insert(X_LEAD_ID.clone(), value);
            }
            headers.insert(
                X_LEAD_DELIVERED.clone(),
                HeaderValue::from_static(if result.lead_delivered { "true" } else { "false" }),
            );
            response
        }
        Err(e) => domain_error_response(e),
    }
}
