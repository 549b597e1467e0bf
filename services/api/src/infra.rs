use credit_ai::scoring::{
    AlertError, CreditHistory, DecisionAlert, DecisionPublisher, FormulaVersion,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Publisher used by the CLI paths so demo output can list dispatched alerts.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDecisionPublisher {
    events: Arc<Mutex<Vec<DecisionAlert>>>,
}

impl InMemoryDecisionPublisher {
    pub(crate) fn events(&self) -> Vec<DecisionAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl DecisionPublisher for InMemoryDecisionPublisher {
    fn publish(&self, alert: DecisionAlert) -> Result<(), AlertError> {
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

/// Publisher used by the HTTP server: approvals land in the structured log.
#[derive(Default, Clone)]
pub(crate) struct TracingDecisionPublisher;

impl DecisionPublisher for TracingDecisionPublisher {
    fn publish(&self, alert: DecisionAlert) -> Result<(), AlertError> {
        tracing::info!(
            template = %alert.template,
            decision = %alert.decision.label(),
            raw_score = alert.raw_score,
            formula_version = %alert.formula_version,
            "decision alert dispatched"
        );
        Ok(())
    }
}

pub(crate) fn parse_history(raw: &str) -> Result<CreditHistory, String> {
    raw.parse()
}

pub(crate) fn parse_formula_version(raw: &str) -> Result<FormulaVersion, String> {
    raw.parse()
}
