//! Integration tests for the stateless HTTP endpoints.
//!
//! Exercises the full router (transport layers included) for:
//! 1. The industry list and quick estimate
//! 2. The onboarding walkthrough
//! 3. The contact form, its delivery failures and its rate limit

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::ConnectInfo,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use carbonbridge::adapters::http::{build_router, AppServices};
use carbonbridge::adapters::leads::InMemoryLeadSubmitter;
use carbonbridge::config::ServerConfig;
use carbonbridge::domain::leads::LeadPayload;
use carbonbridge::ports::LeadDeliveryError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with(submitter: Arc<InMemoryLeadSubmitter>) -> Router {
    let services = AppServices::in_memory(submitter);
    build_router(&services, &ServerConfig::default())
}

fn app() -> Router {
    app_with(Arc::new(InMemoryLeadSubmitter::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    post_json_from("198.51.100.20:52000", uri, body)
}

fn post_json_from(peer: &str, uri: &str, body: Value) -> Request<Body> {
    let mut request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let peer: SocketAddr = peer.parse().unwrap();
    request.extensions_mut().insert(ConnectInfo(peer));
    request
}

fn contact_body() -> Value {
    json!({
        "name": "Meera Iyer",
        "email": "meera@steelworks.example",
        "reason": "partnership",
        "message": "We'd like to list credits from our waste heat project."
    })
}

// =============================================================================
// Estimation
// =============================================================================

#[tokio::test]
async fn industries_are_listed_with_default() {
    let (status, body) = send(&app(), get("/api/industries")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["default_industry"], "Renewable Energy");
    let industries = body["industries"].as_array().unwrap();
    assert_eq!(industries.len(), 6);
    assert_eq!(industries[0]["name"], "Renewable Energy");
    assert_eq!(industries[0]["conversion_factor"], 0.85);
}

#[tokio::test]
async fn estimate_for_renewable_energy() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/estimate",
            json!({"industry": "Renewable Energy", "annual_tons": 5000}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["known_industry"], true);
    assert_eq!(body["estimate"]["credits"], 4250);
    assert_eq!(body["estimate"]["value_low"], 1_275_000);
    assert_eq!(body["estimate"]["value_high"], 10_625_000);
    assert_eq!(body["estimate"]["value_range"], "₹1,275,000 - ₹10,625,000");
}

#[tokio::test]
async fn estimate_accepts_tonnage_as_text() {
    let (_, body) = send(
        &app(),
        post_json("/api/estimate", json!({"industry": "Transportation", "annual_tons": "200"})),
    )
    .await;
    assert_eq!(body["estimate"]["credits"], 70);
}

#[tokio::test]
async fn non_positive_tonnage_yields_no_estimate() {
    for tons in [json!(0), json!(-5), json!(""), json!("abc")] {
        let (status, body) = send(
            &app(),
            post_json("/api/estimate", json!({"industry": "Construction", "annual_tons": tons})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["estimate"].is_null(), "expected no estimate for {}", tons);
    }
}

#[tokio::test]
async fn unknown_industry_uses_fallback_factor() {
    let (_, body) = send(
        &app(),
        post_json("/api/estimate", json!({"industry": "Space Mining", "annual_tons": 100})),
    )
    .await;
    assert_eq!(body["known_industry"], false);
    assert_eq!(body["conversion_factor"], 0.5);
    assert_eq!(body["estimate"]["credits"], 50);
}

// =============================================================================
// Onboarding
// =============================================================================

#[tokio::test]
async fn onboarding_track_lists_steps() {
    let (status, body) = send(&app(), get("/api/onboarding/buyer")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "For Buyers");
    assert_eq!(body["steps"].as_array().unwrap().len(), 6);
    assert_eq!(body["steps"][4]["title"], "Purchase & Retire");
}

#[tokio::test]
async fn onboarding_progress_follows_visibility() {
    let (status, body) = send(&app(), get("/api/onboarding/seller/progress?visible=1,3")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_index"], 3);
    assert_eq!(body["label"], "Step 4 of 6");
    assert!((body["progress_percent"].as_f64().unwrap() - 60.0).abs() < 1e-9);
    assert_eq!(body["is_complete"], false);
    assert_eq!(body["steps"][2]["state"], "completed");
}

#[tokio::test]
async fn onboarding_tab_switch_rewinds_only_for_a_new_track() {
    let app = app();

    let (status, body) = send(&app, get("/api/onboarding/buyer/progress?from=seller&from_index=4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["track"], "buyer");
    assert_eq!(body["active_index"], 0);

    let (_, body) = send(&app, get("/api/onboarding/seller/progress?from=seller&from_index=4")).await;
    assert_eq!(body["active_index"], 4);
}

#[tokio::test]
async fn onboarding_progress_rejects_bad_input() {
    let (status, _) = send(&app(), get("/api/onboarding/seller/progress?active=6")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app(), get("/api/onboarding/investors")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TRACK_NOT_FOUND");
}

// =============================================================================
// Leads
// =============================================================================

#[tokio::test]
async fn contact_form_is_delivered_and_acknowledged() {
    let submitter = Arc::new(InMemoryLeadSubmitter::new());
    let app = app_with(submitter.clone());

    let (status, body) = send(&app, post_json("/api/leads/contact", contact_body())).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "submitted");
    assert_eq!(body["title"], "Thank You!");
    assert_eq!(body["message"], "We've received your message and will respond soon.");

    let leads = submitter.submitted().await;
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].id.to_string(), body["lead_id"].as_str().unwrap());
    assert!(matches!(leads[0].payload, LeadPayload::Contact(_)));
}

#[tokio::test]
async fn contact_form_validation_errors_are_bad_requests() {
    let submitter = Arc::new(InMemoryLeadSubmitter::new());
    let app = app_with(submitter.clone());

    let mut body = contact_body();
    body["email"] = json!("not-an-email");
    let (status, _) = send(&app, post_json("/api/leads/contact", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(submitter.submitted().await.is_empty());
}

#[tokio::test]
async fn contact_delivery_failure_is_bad_gateway() {
    let app = app_with(Arc::new(InMemoryLeadSubmitter::failing(LeadDeliveryError::Timeout)));

    let (status, body) = send(&app, post_json("/api/leads/contact", contact_body())).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "DELIVERY_FAILED");
    assert_eq!(body["details"]["retryable"], "true");
}

#[tokio::test]
async fn contact_form_is_rate_limited_per_ip() {
    let app = app();

    for _ in 0..5 {
        let (status, _) = send(&app, post_json("/api/leads/contact", contact_body())).await;
        assert_eq!(status, StatusCode::ACCEPTED);
    }

    let response = app
        .clone()
        .oneshot(post_json("/api/leads/contact", contact_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));

    let (status, _) = send(
        &app,
        post_json_from("198.51.100.21:52000", "/api/leads/contact", contact_body()),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
}

#[tokio::test]
async fn forwarded_for_is_ignored_unless_trusted() {
    let app = app();

    for n in 0..6 {
        let mut request = post_json("/api/leads/contact", contact_body());
        request.headers_mut().insert(
            "x-forwarded-for",
            format!("192.0.2.{}", n + 1).parse().unwrap(),
        );
        let (status, _) = send(&app, request).await;
        let expected = if n < 5 {
            StatusCode::ACCEPTED
        } else {
            StatusCode::TOO_MANY_REQUESTS
        };
        assert_eq!(status, expected, "submission {}", n + 1);
    }
}

#[tokio::test]
async fn trusted_proxy_limits_by_forwarded_client() {
    let services = AppServices::in_memory(Arc::new(InMemoryLeadSubmitter::new()))
        .with_forwarded_headers_trusted(true);
    let app = build_router(&services, &ServerConfig::default());

    let from_client = |client: &'static str| {
        let mut request = post_json_from("10.0.0.2:443", "/api/leads/contact", contact_body());
        request
            .headers_mut()
            .insert("x-forwarded-for", client.parse().unwrap());
        request
    };

    for _ in 0..5 {
        assert_eq!(send(&app, from_client("192.0.2.10")).await.0, StatusCode::ACCEPTED);
    }
    assert_eq!(
        send(&app, from_client("192.0.2.10")).await.0,
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(send(&app, from_client("192.0.2.11")).await.0, StatusCode::ACCEPTED);
}

#[tokio::test]
async fn contact_reasons_are_listed() {
    let (status, body) = send(&app(), get("/api/leads/reasons")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reasons"][1]["label"], "General inquiry about services");
}
