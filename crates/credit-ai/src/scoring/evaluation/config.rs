use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Successive releases of the scoring formula.
///
/// V1 and V2 shipped identical coefficients. V3 raised both history
/// adjustments, introduced the age term, and moved the approval threshold
/// from 0 to 100. All three stay selectable so the drift between releases is
/// a named, tested parameter instead of three parallel implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaVersion {
    V1,
    V2,
    #[default]
    V3,
}

impl FormulaVersion {
    pub const ALL: [FormulaVersion; 3] =
        [FormulaVersion::V1, FormulaVersion::V2, FormulaVersion::V3];

    pub const fn label(self) -> &'static str {
        match self {
            FormulaVersion::V1 => "v1",
            FormulaVersion::V2 => "v2",
            FormulaVersion::V3 => "v3",
        }
    }

    /// Coefficients and threshold for this release.
    pub const fn config(self) -> EvaluationConfig {
        match self {
            FormulaVersion::V1 | FormulaVersion::V2 => EvaluationConfig {
                income_weight: 0.6,
                debt_weight: 0.4,
                bad_history_penalty: 1000.0,
                excellent_history_bonus: 500.0,
                age_weight: 0.0,
                approval_threshold: 0.0,
            },
            FormulaVersion::V3 => EvaluationConfig {
                income_weight: 0.6,
                debt_weight: 0.4,
                bad_history_penalty: 1200.0,
                excellent_history_bonus: 600.0,
                age_weight: 5.0,
                approval_threshold: 100.0,
            },
        }
    }
}

impl fmt::Display for FormulaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FormulaVersion {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(FormulaVersion::V1),
            "v2" | "2" => Ok(FormulaVersion::V2),
            "v3" | "3" => Ok(FormulaVersion::V3),
            other => Err(format!(
                "unknown formula version '{other}' (expected v1, v2, or v3)"
            )),
        }
    }
}

/// Linear-formula coefficients and approval threshold backing one release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub income_weight: f64,
    pub debt_weight: f64,
    pub bad_history_penalty: f64,
    pub excellent_history_bonus: f64,
    pub age_weight: f64,
    pub approval_threshold: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_releases_share_coefficients() {
        assert_eq!(FormulaVersion::V1.config(), FormulaVersion::V2.config());
        assert_ne!(FormulaVersion::V2.config(), FormulaVersion::V3.config());
    }

    #[test]
    fn latest_release_is_the_default() {
        assert_eq!(FormulaVersion::default(), FormulaVersion::V3);
    }

    #[test]
    fn versions_parse_from_short_and_long_forms() {
        assert_eq!("v1".parse(), Ok(FormulaVersion::V1));
        assert_eq!("2".parse(), Ok(FormulaVersion::V2));
        assert_eq!("V3".parse(), Ok(FormulaVersion::V3));
        assert!("v4".parse::<FormulaVersion>().is_err());
    }
}
