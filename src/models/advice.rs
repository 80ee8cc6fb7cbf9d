//! Advisor output model
//!
//! "Advisor" is a label for a deterministic rule engine; no model or network
//! call is involved anywhere. Advice records are cached briefly and replaced
//! wholesale on regeneration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::AdviceId;
use super::money::Money;

/// How urgent a piece of advice is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvicePriority {
    High,
    Medium,
    Low,
}

impl AdvicePriority {
    /// Sort weight; higher sorts first
    pub fn weight(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl fmt::Display for AdvicePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        write!(f, "{}", s)
    }
}

/// The rule that produced a piece of advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdviceKind {
    BoostSavings,
    SpendingSpike,
    GoalShortfall,
    GoalSurplus,
    BudgetOverrun,
    BudgetLoad,
    CategoryBenchmark,
}

/// Estimated effect of following a piece of advice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdviceImpact {
    pub monthly_savings: Money,
    pub yearly_savings: Money,

    /// Months shaved off a goal deadline, where applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_time_reduction_months: Option<u32>,
}

/// A single advisor recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advice {
    pub id: AdviceId,
    pub kind: AdviceKind,
    pub title: String,
    pub message: String,
    pub impact: AdviceImpact,
    pub priority: AdvicePriority,
    #[serde(default)]
    pub action_items: Vec<String>,
    pub related_category: Option<ExpenseCategory>,
    pub created_at: DateTime<Utc>,
}

impl Advice {
    /// Create a new advice record stamped `created_at`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: AdviceKind,
        title: impl Into<String>,
        message: impl Into<String>,
        impact: AdviceImpact,
        priority: AdvicePriority,
        action_items: Vec<String>,
        related_category: Option<ExpenseCategory>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AdviceId::new(),
            kind,
            title: title.into(),
            message: message.into(),
            impact,
            priority,
            action_items,
            related_category,
            created_at,
        }
    }

    /// Ranking key: priority weight first, then yearly savings
    pub fn rank_key(&self) -> (u8, i64) {
        (self.priority.weight(), self.impact.yearly_savings.cents())
    }
}
