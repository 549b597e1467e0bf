use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::scoring::domain::CreditHistory;
use crate::scoring::evaluation::FormulaVersion;
use crate::scoring::router::{self, BatchScoreRequest};
use crate::scoring::service::ScoringService;

#[tokio::test]
async fn score_handler_returns_decision_view() {
    let (service, _) = build_service(FormulaVersion::V3);
    let service = Arc::new(service);

    let response = router::score_handler::<MemoryPublisher>(
        State(service),
        axum::Json(request(1200, 500, 25, CreditHistory::NoHistory)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("decision"), Some(&json!("approved")));
    assert_eq!(payload.get("risk_tier"), Some(&json!("low")));
    assert!(payload
        .get("banner")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("PRE-APPROVED"));
}

#[tokio::test]
async fn score_handler_rejects_out_of_domain_profile() {
    let (service, publisher) = build_service(FormulaVersion::V3);
    let service = Arc::new(service);

    let response = router::score_handler::<MemoryPublisher>(
        State(service),
        axum::Json(request(10, 500, 25, CreditHistory::Good)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("monthly income"));
    assert!(publisher.events().is_empty());
}

#[tokio::test]
async fn score_handler_reports_publisher_outage() {
    let service = Arc::new(ScoringService::new(
        Arc::new(FailingPublisher),
        FormulaVersion::V3,
    ));

    let response = router::score_handler::<FailingPublisher>(
        State(service),
        axum::Json(request(1200, 500, 25, CreditHistory::NoHistory)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn score_route_accepts_json_payloads() {
    let (service, _) = build_service(FormulaVersion::V3);
    let router = score_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/score")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&request(1200, 500, 25, CreditHistory::NoHistory)).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("formula_version"), Some(&json!("v3")));
}

#[tokio::test]
async fn batch_handler_summarizes_rows() {
    let (service, _) = build_service(FormulaVersion::V3);
    let service = Arc::new(service);

    let csv = "monthly_income,total_debt,age,credit_history\n\
               1200,500,25,no_history\n\
               200,20000,18,bad\n";
    let response = router::batch_handler::<MemoryPublisher>(
        State(service),
        axum::Json(BatchScoreRequest {
            profiles_csv: csv.to_string(),
            formula_version: Some(FormulaVersion::V1),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total"), Some(&json!(2)));
    assert_eq!(payload.get("approved"), Some(&json!(1)));
    assert_eq!(payload.get("rejected"), Some(&json!(1)));
    assert_eq!(payload.get("invalid"), Some(&json!(0)));
}

#[tokio::test]
async fn batch_handler_rejects_malformed_csv() {
    let (service, _) = build_service(FormulaVersion::V3);
    let service = Arc::new(service);

    let response = router::batch_handler::<MemoryPublisher>(
        State(service),
        axum::Json(BatchScoreRequest {
            profiles_csv: "monthly_income,total_debt,age,credit_history\nplenty,1,2,good\n"
                .to_string(),
            formula_version: None,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
