use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::Decision;
use super::evaluation::FormulaVersion;

/// Trait describing outbound decision hooks (banners, notifications, logs).
///
/// Publishers consume decisions; nothing they do feeds back into scoring.
pub trait DecisionPublisher: Send + Sync {
    fn publish(&self, alert: DecisionAlert) -> Result<(), AlertError>;
}

/// Payload handed to the presentation boundary when a decision lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionAlert {
    pub template: String,
    pub decision: Decision,
    pub raw_score: f64,
    pub formula_version: FormulaVersion,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}
