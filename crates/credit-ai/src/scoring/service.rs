use std::collections::BTreeMap;
use std::sync::Arc;

use super::domain::{Decision, ScoreRequest};
use super::evaluation::{EvaluationEngine, EvaluationOutcome, FormulaVersion};
use super::guard::{InvalidProfile, ProfileGuard};
use super::publisher::{AlertError, DecisionAlert, DecisionPublisher};

/// Service composing the profile guard, evaluator, and outbound publisher.
///
/// Stateless between evaluations: each call validates, scores, and returns.
pub struct ScoringService<P> {
    guard: ProfileGuard,
    default_version: FormulaVersion,
    publisher: Arc<P>,
}

impl<P> ScoringService<P>
where
    P: DecisionPublisher + 'static,
{
    pub fn new(publisher: Arc<P>, default_version: FormulaVersion) -> Self {
        Self {
            guard: ProfileGuard::default(),
            default_version,
            publisher,
        }
    }

    pub fn default_version(&self) -> FormulaVersion {
        self.default_version
    }

    /// Validate and score a single request.
    ///
    /// Approvals are announced through the decision publisher; the publisher
    /// never influences the outcome.
    pub fn evaluate(&self, request: &ScoreRequest) -> Result<EvaluationOutcome, ScoreServiceError> {
        let version = request.formula_version.unwrap_or(self.default_version);
        let profile = self.guard.profile_from_request(request)?;
        let outcome = EvaluationEngine::new(version).score(&profile);

        if outcome.decision == Decision::Approved {
            let mut details = BTreeMap::new();
            details.insert("decision".to_string(), outcome.decision.label().to_string());
            details.insert("formula_version".to_string(), version.label().to_string());
            self.publisher.publish(DecisionAlert {
                template: "applicant_approved".to_string(),
                decision: outcome.decision,
                raw_score: outcome.raw_score,
                formula_version: version,
                details,
            })?;
        }

        Ok(outcome)
    }

    /// Score a slice of requests, tallying decisions per row.
    ///
    /// Batch runs are reporting sweeps, not interactive evaluations, so they
    /// skip the decision publisher. Rows that fail validation are tallied as
    /// invalid instead of aborting the sweep.
    pub fn evaluate_batch(&self, requests: &[ScoreRequest]) -> BatchOutcome {
        let mut rows = Vec::with_capacity(requests.len());
        let mut approved = 0;
        let mut rejected = 0;
        let mut invalid = 0;

        for (index, request) in requests.iter().enumerate() {
            let version = request.formula_version.unwrap_or(self.default_version);
            let outcome = self
                .guard
                .profile_from_request(request)
                .map(|profile| EvaluationEngine::new(version).score(&profile));

            match &outcome {
                Ok(scored) if scored.decision == Decision::Approved => approved += 1,
                Ok(_) => rejected += 1,
                Err(_) => invalid += 1,
            }

            rows.push(BatchRow {
                line: index + 1,
                outcome,
            });
        }

        BatchOutcome {
            total: rows.len(),
            approved,
            rejected,
            invalid,
            rows,
        }
    }
}

/// Aggregated result of one batch sweep.
#[derive(Debug)]
pub struct BatchOutcome {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub invalid: usize,
    pub rows: Vec<BatchRow>,
}

/// Per-row result of a batch sweep, keyed by 1-based input position.
#[derive(Debug)]
pub struct BatchRow {
    pub line: usize,
    pub outcome: Result<EvaluationOutcome, InvalidProfile>,
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoreServiceError {
    #[error(transparent)]
    Invalid(#[from] InvalidProfile),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
