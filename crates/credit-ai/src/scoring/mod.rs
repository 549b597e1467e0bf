//! Credit decision intake, evaluation, and reporting surfaces.
//!
//! The evaluator is a deterministic pure function of a validated profile and
//! a formula version; every other surface (views, publishers, the static
//! report) layers presentation on top without feeding back into it.

pub mod batch;
pub mod domain;
pub(crate) mod evaluation;
pub mod guard;
pub mod publisher;
pub mod report;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use batch::{BatchImportError, BatchProfileImporter};
pub use domain::{
    CreditHistory, CustomerProfile, Decision, RiskTier, ScoreRequest, AGE_RANGE,
    MONTHLY_INCOME_RANGE, TOTAL_DEBT_RANGE,
};
pub use evaluation::{
    EvaluationConfig, EvaluationEngine, EvaluationOutcome, FormulaVersion, ScoreComponent,
    ScoreFactor,
};
pub use guard::{InvalidProfile, ProfileGuard};
pub use publisher::{AlertError, DecisionAlert, DecisionPublisher};
pub use report::{ModelAccuracyEntry, ModelCard, ValidationReport};
pub use router::{score_router, BatchScoreRequest};
pub use service::{BatchOutcome, BatchRow, ScoreServiceError, ScoringService};
pub use views::DecisionView;
