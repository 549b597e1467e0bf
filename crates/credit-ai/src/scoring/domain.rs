use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::evaluation::FormulaVersion;

/// Allowed domain for monthly income, identical across all formula versions.
pub const MONTHLY_INCOME_RANGE: RangeInclusive<u32> = 200..=5000;

/// Allowed domain for total outstanding debt.
pub const TOTAL_DEBT_RANGE: RangeInclusive<u32> = 0..=20_000;

/// Allowed domain for applicant age.
pub const AGE_RANGE: RangeInclusive<u8> = 18..=70;

/// Untrusted scoring input as received from the HTTP or CLI boundary.
///
/// Numeric fields are wide integers so out-of-domain values survive
/// deserialization and reach the guard, which rejects them with a precise
/// error instead of letting narrow types truncate or wrap them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub monthly_income: i64,
    pub total_debt: i64,
    pub age: i64,
    pub credit_history: CreditHistory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula_version: Option<FormulaVersion>,
}

/// Validated customer attributes used as evaluator input.
///
/// Constructed per evaluation by the guard and discarded afterwards; no
/// identity or history is retained between evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub monthly_income: u32,
    pub total_debt: u32,
    pub age: u8,
    pub credit_history: CreditHistory,
}

/// Credit history bands offered by the intake surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditHistory {
    NoHistory,
    Good,
    Bad,
    Excellent,
}

impl CreditHistory {
    pub const fn label(self) -> &'static str {
        match self {
            CreditHistory::NoHistory => "no_history",
            CreditHistory::Good => "good",
            CreditHistory::Bad => "bad",
            CreditHistory::Excellent => "excellent",
        }
    }
}

impl FromStr for CreditHistory {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "no_history" | "no-history" | "none" => Ok(CreditHistory::NoHistory),
            "good" => Ok(CreditHistory::Good),
            "bad" => Ok(CreditHistory::Bad),
            "excellent" => Ok(CreditHistory::Excellent),
            other => Err(format!(
                "unknown credit history '{other}' (expected no_history, good, bad, or excellent)"
            )),
        }
    }
}

/// Binary adjudication outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Approved => "approved",
            Decision::Rejected => "rejected",
        }
    }
}

/// Display-only qualitative band derived from the decision.
///
/// Carries no computed meaning beyond the decision it mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    High,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "low risk",
            RiskTier::High => "high risk",
        }
    }
}
