//! Savings projection engine
//!
//! Compound future value of a principal plus a recurring monthly
//! contribution, using the ordinary-annuity formula (contributions at period
//! end). Inputs are not validated: negative years or contributions produce
//! degenerate output rather than errors, and the functions never panic.

use chrono::{DateTime, Utc};

use crate::messages::MessageCatalog;
use crate::models::Money;

/// Result of a future-value calculation
#[derive(Debug, Clone)]
pub struct Projection {
    pub future_value: Money,
    /// The formula applied, with inputs substituted
    pub formula: String,
    pub generated_at: DateTime<Utc>,
}

/// Optional context for `generate_recommendation`
///
/// The emergency-fund remark is only produced when both `emergency_fund_months`
/// and `monthly_living_expense` are present.
#[derive(Debug, Clone, Default)]
pub struct RecommendationContext {
    /// Fraction of income saved per month, e.g. 0.15
    pub savings_rate: Option<f64>,
    pub emergency_fund_months: Option<f64>,
    pub monthly_living_expense: Option<Money>,
}

/// Savings rate below this fraction draws a remark
const SAVINGS_RATE_GUIDELINE: f64 = 0.20;

/// Emergency funds below this many months of expenses draw a remark
const EMERGENCY_FUND_MONTHS_GUIDELINE: f64 = 6.0;

/// Compute the future value of `principal` plus `monthly_contribution` per
/// month at `annual_rate`, over `years`
///
/// Years are converted to whole months by rounding. Zero months returns the
/// principal unchanged; a zero rate grows contributions linearly. The result
/// is rounded to the cent.
pub fn calculate_future_value(
    principal: Money,
    monthly_contribution: Money,
    annual_rate: f64,
    years: f64,
    generated_at: DateTime<Utc>,
) -> Projection {
    let monthly_rate = annual_rate / 12.0;
    let months = (years * 12.0).round() as i32;

    if months == 0 {
        return Projection {
            future_value: principal,
            formula: format!("FV = P = {:.2} (n = 0 months)", principal.to_major_units()),
            generated_at,
        };
    }

    let p = principal.to_major_units();
    let c = monthly_contribution.to_major_units();

    let (future_value, formula) = if monthly_rate == 0.0 {
        let fv = p + c * months as f64;
        let formula = format!("FV = P + C*n = {:.2} + {:.2}*{} (r = 0)", p, c, months);
        (fv, formula)
    } else {
        let growth = (1.0 + monthly_rate).powi(months);
        let contributions_fv = c * (growth - 1.0) / monthly_rate;
        let principal_fv = p * growth;
        let fv = contributions_fv + principal_fv;
        let formula = format!(
            "FV = P*(1+r)^n + C*((1+r)^n - 1)/r, P = {:.2}, C = {:.2}, r = {:.6}, n = {}",
            p, c, monthly_rate, months
        );
        (fv, formula)
    };

    Projection {
        future_value: Money::from_major_f64(future_value),
        formula,
        generated_at,
    }
}

/// Compose a textual recommendation for a projected value against a goal
///
/// States the achievement percentage (0 when the goal is not positive), then
/// optionally remarks on the savings rate and the emergency fund.
pub fn generate_recommendation(
    future_value: Money,
    goal_amount: Money,
    ctx: &RecommendationContext,
    catalog: &MessageCatalog,
) -> String {
    let percent = if goal_amount.is_positive() {
        (future_value.ratio_of(goal_amount) * 100.0).round() as i64
    } else {
        0
    };

    let mut parts = vec![catalog.render(
        "projection.overview",
        &[
            ("future_value", future_value.to_string()),
            ("percent", percent.to_string()),
            ("goal_amount", goal_amount.to_string()),
        ],
    )];

    if let Some(rate) = ctx.savings_rate {
        let key = if rate < SAVINGS_RATE_GUIDELINE {
            "projection.savings-rate.low"
        } else {
            "projection.savings-rate.ok"
        };
        parts.push(catalog.render(
            key,
            &[("rate_percent", format!("{:.0}", rate * 100.0))],
        ));
    }

    if let (Some(months), Some(_living)) = (ctx.emergency_fund_months, ctx.monthly_living_expense)
    {
        let key = if months < EMERGENCY_FUND_MONTHS_GUIDELINE {
            "projection.emergency-fund.low"
        } else {
            "projection.emergency-fund.ok"
        };
        parts.push(catalog.render(key, &[("months", format!("{:.1}", months))]));
    }

    parts.join(" ")
}
