use super::super::domain::{CreditHistory, CustomerProfile};
use super::config::EvaluationConfig;
use super::{ScoreComponent, ScoreFactor};

pub(crate) fn score_profile(
    profile: &CustomerProfile,
    config: &EvaluationConfig,
) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::new();
    let mut raw_score = 0.0;

    let income_term = config.income_weight * f64::from(profile.monthly_income);
    components.push(ScoreComponent {
        factor: ScoreFactor::MonthlyIncome,
        amount: income_term,
        notes: format!(
            "{} x monthly income {}",
            config.income_weight, profile.monthly_income
        ),
    });
    raw_score += income_term;

    let debt_term = -(config.debt_weight * f64::from(profile.total_debt));
    components.push(ScoreComponent {
        factor: ScoreFactor::TotalDebt,
        amount: debt_term,
        notes: format!(
            "-{} x total debt {}",
            config.debt_weight, profile.total_debt
        ),
    });
    raw_score += debt_term;

    // Exactly one history adjustment per evaluation; Bad and Excellent are
    // mutually exclusive by the enum domain.
    let (adjustment, note) = match profile.credit_history {
        CreditHistory::Bad => (
            -config.bad_history_penalty,
            format!("bad history penalty {}", config.bad_history_penalty),
        ),
        CreditHistory::Excellent => (
            config.excellent_history_bonus,
            format!(
                "excellent history bonus {}",
                config.excellent_history_bonus
            ),
        ),
        CreditHistory::NoHistory | CreditHistory::Good => (
            0.0,
            format!(
                "no adjustment for {} history",
                profile.credit_history.label()
            ),
        ),
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::CreditHistory,
        amount: adjustment,
        notes: note,
    });
    raw_score += adjustment;

    // Releases before v3 collect age but give it no weight and no component.
    if config.age_weight != 0.0 {
        let age_term = config.age_weight * f64::from(profile.age);
        components.push(ScoreComponent {
            factor: ScoreFactor::Age,
            amount: age_term,
            notes: format!("{} x age {}", config.age_weight, profile.age),
        });
        raw_score += age_term;
    }

    (components, raw_score)
}
