use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::batch::BatchProfileImporter;
use super::domain::{Decision, ScoreRequest};
use super::evaluation::FormulaVersion;
use super::publisher::DecisionPublisher;
use super::service::{BatchRow, ScoreServiceError, ScoringService};
use super::views::DecisionView;

/// Router builder exposing HTTP endpoints for scoring.
pub fn score_router<P>(service: Arc<ScoringService<P>>) -> Router
where
    P: DecisionPublisher + 'static,
{
    Router::new()
        .route("/api/v1/score", post(score_handler::<P>))
        .route("/api/v1/score/batch", post(batch_handler::<P>))
        .with_state(service)
}

pub(crate) async fn score_handler<P>(
    State(service): State<Arc<ScoringService<P>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    P: DecisionPublisher + 'static,
{
    match service.evaluate(&request) {
        Ok(outcome) => {
            let view = DecisionView::from_outcome(&outcome);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ScoreServiceError::Invalid(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Batch scoring request carrying an inline CSV export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchScoreRequest {
    pub profiles_csv: String,
    #[serde(default)]
    pub formula_version: Option<FormulaVersion>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchScoreResponse {
    pub(crate) total: usize,
    pub(crate) approved: usize,
    pub(crate) rejected: usize,
    pub(crate) invalid: usize,
    pub(crate) rows: Vec<BatchRowView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchRowView {
    pub(crate) line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) decision: Option<Decision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) raw_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl From<&BatchRow> for BatchRowView {
    fn from(row: &BatchRow) -> Self {
        match &row.outcome {
            Ok(outcome) => Self {
                line: row.line,
                decision: Some(outcome.decision),
                raw_score: Some(outcome.raw_score),
                error: None,
            },
            Err(error) => Self {
                line: row.line,
                decision: None,
                raw_score: None,
                error: Some(error.to_string()),
            },
        }
    }
}

pub(crate) async fn batch_handler<P>(
    State(service): State<Arc<ScoringService<P>>>,
    axum::Json(request): axum::Json<BatchScoreRequest>,
) -> Response
where
    P: DecisionPublisher + 'static,
{
    let reader = Cursor::new(request.profiles_csv.into_bytes());
    let requests = match BatchProfileImporter::from_reader(reader, request.formula_version) {
        Ok(requests) => requests,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let batch = service.evaluate_batch(&requests);
    let response = BatchScoreResponse {
        total: batch.total,
        approved: batch.approved,
        rejected: batch.rejected,
        invalid: batch.invalid,
        rows: batch.rows.iter().map(BatchRowView::from).collect(),
    };

    (StatusCode::OK, axum::Json(response)).into_response()
}
