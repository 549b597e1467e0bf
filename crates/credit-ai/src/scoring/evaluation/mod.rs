mod config;
mod policy;
mod rules;

pub use config::{EvaluationConfig, FormulaVersion};

use super::domain::{CustomerProfile, Decision, RiskTier};
use policy::{decide_outcome, risk_tier_for};
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying one formula release to a validated profile.
///
/// Scoring is a deterministic pure function of the profile and the selected
/// version; there is no hidden state and no randomness.
pub struct EvaluationEngine {
    version: FormulaVersion,
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(version: FormulaVersion) -> Self {
        Self {
            version,
            config: version.config(),
        }
    }

    pub fn version(&self) -> FormulaVersion {
        self.version
    }

    pub fn score(&self, profile: &CustomerProfile) -> EvaluationOutcome {
        let (components, raw_score) = rules::score_profile(profile, &self.config);
        let decision = decide_outcome(raw_score, &self.config);
        let risk_tier = risk_tier_for(decision);

        EvaluationOutcome {
            formula_version: self.version,
            raw_score,
            decision,
            risk_tier,
            components,
        }
    }
}

/// Discrete contribution to a raw score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub amount: f64,
    pub notes: String,
}

/// Inputs permitted to move the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    MonthlyIncome,
    TotalDebt,
    CreditHistory,
    Age,
}

/// Evaluation output describing the score, decision, and audit trail.
///
/// Exists only for the duration of one evaluation; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub formula_version: FormulaVersion,
    pub raw_score: f64,
    pub decision: Decision,
    pub risk_tier: RiskTier,
    pub components: Vec<ScoreComponent>,
}
