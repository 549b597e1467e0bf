use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::scoring::domain::{CreditHistory, CustomerProfile, ScoreRequest};
use crate::scoring::evaluation::{EvaluationEngine, FormulaVersion};
use crate::scoring::publisher::{AlertError, DecisionAlert, DecisionPublisher};
use crate::scoring::router::score_router;
use crate::scoring::service::ScoringService;

pub(super) fn request(
    monthly_income: i64,
    total_debt: i64,
    age: i64,
    credit_history: CreditHistory,
) -> ScoreRequest {
    ScoreRequest {
        monthly_income,
        total_debt,
        age,
        credit_history,
        formula_version: None,
    }
}

pub(super) fn versioned_request(
    monthly_income: i64,
    total_debt: i64,
    age: i64,
    credit_history: CreditHistory,
    version: FormulaVersion,
) -> ScoreRequest {
    ScoreRequest {
        formula_version: Some(version),
        ..request(monthly_income, total_debt, age, credit_history)
    }
}

pub(super) fn profile(
    monthly_income: u32,
    total_debt: u32,
    age: u8,
    credit_history: CreditHistory,
) -> CustomerProfile {
    CustomerProfile {
        monthly_income,
        total_debt,
        age,
        credit_history,
    }
}

pub(super) fn engine(version: FormulaVersion) -> EvaluationEngine {
    EvaluationEngine::new(version)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn build_service(
    default_version: FormulaVersion,
) -> (ScoringService<MemoryPublisher>, Arc<MemoryPublisher>) {
    let publisher = Arc::new(MemoryPublisher::default());
    let service = ScoringService::new(publisher.clone(), default_version);
    (service, publisher)
}

pub(super) fn score_router_with_service(
    service: ScoringService<MemoryPublisher>,
) -> axum::Router {
    score_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryPublisher {
    events: Arc<Mutex<Vec<DecisionAlert>>>,
}

impl MemoryPublisher {
    pub(super) fn events(&self) -> Vec<DecisionAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl DecisionPublisher for MemoryPublisher {
    fn publish(&self, alert: DecisionAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct FailingPublisher;

impl DecisionPublisher for FailingPublisher {
    fn publish(&self, _alert: DecisionAlert) -> Result<(), AlertError> {
        Err(AlertError::Transport("notifier offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
