use std::ops::RangeInclusive;

use super::domain::{
    CustomerProfile, ScoreRequest, AGE_RANGE, MONTHLY_INCOME_RANGE, TOTAL_DEBT_RANGE,
};

/// Validation errors raised by the profile guard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidProfile {
    #[error("monthly income {found} outside allowed domain {min}..={max}")]
    MonthlyIncome { found: i64, min: u32, max: u32 },
    #[error("total debt {found} outside allowed domain {min}..={max}")]
    TotalDebt { found: i64, min: u32, max: u32 },
    #[error("age {found} outside allowed domain {min}..={max}")]
    Age { found: i64, min: u8, max: u8 },
}

/// Guard responsible for producing `CustomerProfile` values.
///
/// The interactive surfaces bound every control to the same domains, so the
/// guard only trips for callers bypassing those controls. An out-of-set
/// credit history cannot reach this point: unknown labels fail at the
/// serde or CLI parse boundary.
#[derive(Debug, Clone, Default)]
pub struct ProfileGuard;

impl ProfileGuard {
    /// Convert an inbound request into a validated customer profile.
    pub fn profile_from_request(
        &self,
        request: &ScoreRequest,
    ) -> Result<CustomerProfile, InvalidProfile> {
        let monthly_income = bounded_u32(request.monthly_income, &MONTHLY_INCOME_RANGE).ok_or(
            InvalidProfile::MonthlyIncome {
                found: request.monthly_income,
                min: *MONTHLY_INCOME_RANGE.start(),
                max: *MONTHLY_INCOME_RANGE.end(),
            },
        )?;

        let total_debt =
            bounded_u32(request.total_debt, &TOTAL_DEBT_RANGE).ok_or(InvalidProfile::TotalDebt {
                found: request.total_debt,
                min: *TOTAL_DEBT_RANGE.start(),
                max: *TOTAL_DEBT_RANGE.end(),
            })?;

        let age = bounded_u8(request.age, &AGE_RANGE).ok_or(InvalidProfile::Age {
            found: request.age,
            min: *AGE_RANGE.start(),
            max: *AGE_RANGE.end(),
        })?;

        Ok(CustomerProfile {
            monthly_income,
            total_debt,
            age,
            credit_history: request.credit_history,
        })
    }
}

fn bounded_u32(value: i64, range: &RangeInclusive<u32>) -> Option<u32> {
    let value = u32::try_from(value).ok()?;
    range.contains(&value).then_some(value)
}

fn bounded_u8(value: i64, range: &RangeInclusive<u8>) -> Option<u8> {
    let value = u8::try_from(value).ok()?;
    range.contains(&value).then_some(value)
}
