use super::super::domain::{Decision, RiskTier};
use super::config::EvaluationConfig;

/// Approval requires the raw score to clear the threshold strictly.
pub(crate) fn decide_outcome(raw_score: f64, config: &EvaluationConfig) -> Decision {
    if raw_score > config.approval_threshold {
        Decision::Approved
    } else {
        Decision::Rejected
    }
}

pub(crate) fn risk_tier_for(decision: Decision) -> RiskTier {
    match decision {
        Decision::Approved => RiskTier::Low,
        Decision::Rejected => RiskTier::High,
    }
}
