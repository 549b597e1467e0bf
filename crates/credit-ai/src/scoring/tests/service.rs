use std::sync::Arc;

use super::common::*;
use crate::scoring::domain::{CreditHistory, Decision};
use crate::scoring::evaluation::FormulaVersion;
use crate::scoring::service::{ScoreServiceError, ScoringService};

#[test]
fn service_scores_with_its_default_version() {
    let (service, _) = build_service(FormulaVersion::V1);

    let outcome = service
        .evaluate(&request(1200, 500, 25, CreditHistory::NoHistory))
        .expect("evaluation succeeds");

    assert_eq!(outcome.formula_version, FormulaVersion::V1);
    assert_close(outcome.raw_score, 520.0);
}

#[test]
fn request_version_overrides_the_default() {
    let (service, _) = build_service(FormulaVersion::V1);

    let outcome = service
        .evaluate(&versioned_request(
            1200,
            500,
            25,
            CreditHistory::NoHistory,
            FormulaVersion::V3,
        ))
        .expect("evaluation succeeds");

    assert_eq!(outcome.formula_version, FormulaVersion::V3);
    assert_close(outcome.raw_score, 645.0);
}

#[test]
fn publisher_fires_on_approval_only() {
    let (service, publisher) = build_service(FormulaVersion::V3);

    let approved = service
        .evaluate(&request(1200, 500, 25, CreditHistory::NoHistory))
        .expect("evaluation succeeds");
    assert_eq!(approved.decision, Decision::Approved);

    let rejected = service
        .evaluate(&request(200, 20_000, 18, CreditHistory::Bad))
        .expect("evaluation succeeds");
    assert_eq!(rejected.decision, Decision::Rejected);

    let events = publisher.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, "applicant_approved");
    assert_eq!(events[0].formula_version, FormulaVersion::V3);
}

#[test]
fn publisher_failure_surfaces_as_alert_error() {
    let service = ScoringService::new(Arc::new(FailingPublisher), FormulaVersion::V3);

    let error = service
        .evaluate(&request(1200, 500, 25, CreditHistory::NoHistory))
        .expect_err("publisher failure propagates");

    assert!(matches!(error, ScoreServiceError::Alert(_)));
}

#[test]
fn invalid_request_never_reaches_the_publisher() {
    let (service, publisher) = build_service(FormulaVersion::V3);

    let error = service
        .evaluate(&request(10, 500, 25, CreditHistory::Good))
        .expect_err("out-of-domain income rejected");

    assert!(matches!(error, ScoreServiceError::Invalid(_)));
    assert!(publisher.events().is_empty());
}

#[test]
fn batch_tallies_decisions_and_skips_the_publisher() {
    let (service, publisher) = build_service(FormulaVersion::V3);

    let requests = vec![
        request(1200, 500, 25, CreditHistory::NoHistory),
        request(200, 20_000, 18, CreditHistory::Bad),
        request(9999, 500, 25, CreditHistory::Good),
    ];

    let batch = service.evaluate_batch(&requests);

    assert_eq!(batch.total, 3);
    assert_eq!(batch.approved, 1);
    assert_eq!(batch.rejected, 1);
    assert_eq!(batch.invalid, 1);
    assert_eq!(batch.rows[0].line, 1);
    assert_eq!(batch.rows[2].line, 3);
    assert!(batch.rows[2].outcome.is_err());
    assert!(publisher.events().is_empty());
}
