//! Savings tip model
//!
//! Tips are ephemeral: each generation run replaces the stored set wholesale
//! with the top five suggestions by score.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::TipId;
use super::money::Money;

/// What kind of action a tip suggests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipAction {
    ReduceCategory,
    AdjustBudget,
    FundGoal,
    ReviewTrend,
}

impl fmt::Display for TipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ReduceCategory => "reduce-category",
            Self::AdjustBudget => "adjust-budget",
            Self::FundGoal => "fund-goal",
            Self::ReviewTrend => "review-trend",
        };
        write!(f, "{}", s)
    }
}

/// A generated savings tip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    pub id: TipId,
    pub text: String,

    /// Estimated yearly savings if the tip is followed
    pub impact_yearly: Money,

    /// Heuristic reliability weight, 0-1
    pub confidence: f64,

    pub related_category: Option<ExpenseCategory>,
    pub action: TipAction,

    /// Suggested monthly reduction backing the impact estimate
    pub suggested_reduction: Money,
}

impl Tip {
    /// Create a tip; confidence is clamped to [0, 1]
    pub fn new(
        text: impl Into<String>,
        impact_yearly: Money,
        confidence: f64,
        related_category: Option<ExpenseCategory>,
        action: TipAction,
        suggested_reduction: Money,
    ) -> Self {
        Self {
            id: TipId::new(),
            text: text.into(),
            impact_yearly,
            confidence: confidence.clamp(0.0, 1.0),
            related_category,
            action,
            suggested_reduction,
        }
    }

    /// Ranking score: confidence × yearly impact
    pub fn score(&self) -> f64 {
        self.confidence * self.impact_yearly.to_major_units()
    }
}
