use serde::{Deserialize, Serialize};

use super::domain::{Decision, RiskTier};
use super::evaluation::{EvaluationOutcome, FormulaVersion};

// Fixed display copy carried over from the marketing mock. None of it is
// derived from the raw score.
const APPROVAL_CODE: &str = "#A-8921";
const APPROVED_FICO_LABEL: &str = "APPROVED (A+)";
const DENIED_FICO_LABEL: &str = "DENIED (D-)";
const REJECTION_CAPTION: &str = "Reason: debt capacity exceeded.";

/// Presentation payload for one scored request.
///
/// `decision`, `risk_tier`, and `raw_score` are authoritative; the banner,
/// approval code, and simulated FICO label are illustrative constants for the
/// output surface and carry no computed meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionView {
    pub decision: Decision,
    pub risk_tier: RiskTier,
    pub raw_score: f64,
    pub formula_version: FormulaVersion,
    pub banner: String,
    pub simulated_fico_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl DecisionView {
    pub fn from_outcome(outcome: &EvaluationOutcome) -> Self {
        let (banner, simulated_fico_label, caption) = match outcome.decision {
            Decision::Approved => (
                format!("CREDIT PRE-APPROVED | Code: {APPROVAL_CODE}"),
                APPROVED_FICO_LABEL.to_string(),
                None,
            ),
            Decision::Rejected => (
                "APPLICATION DECLINED".to_string(),
                DENIED_FICO_LABEL.to_string(),
                Some(REJECTION_CAPTION.to_string()),
            ),
        };

        Self {
            decision: outcome.decision,
            risk_tier: outcome.risk_tier,
            raw_score: outcome.raw_score,
            formula_version: outcome.formula_version,
            banner,
            simulated_fico_label,
            caption,
        }
    }
}
