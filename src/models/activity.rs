//! Saving activity log
//!
//! An append-only log of daily saving outcomes. More than one entry may exist
//! per calendar day; the streak engine deduplicates by date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ActivityId, GoalId};
use super::money::Money;

/// A contribution made toward a specific goal as part of an activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalContribution {
    pub goal_id: GoalId,
    pub amount: Money,
}

/// One recorded day of saving (or dissaving)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingActivity {
    pub id: ActivityId,

    /// Calendar date the activity belongs to
    pub date: NaiveDate,

    /// Net amount saved that day; negative means net spent from savings
    pub net_savings: Money,

    /// Manual override marking the day a saving day regardless of amount
    #[serde(default)]
    pub is_manual_saving_day: bool,

    #[serde(default)]
    pub goal_contributions: Vec<GoalContribution>,

    pub created_at: DateTime<Utc>,
}

impl SavingActivity {
    /// Create a new activity entry
    pub fn new(
        date: NaiveDate,
        net_savings: Money,
        is_manual_saving_day: bool,
        goal_contributions: Vec<GoalContribution>,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            date,
            net_savings,
            is_manual_saving_day,
            goal_contributions,
            created_at: Utc::now(),
        }
    }

    /// Whether this entry makes its date a saving day
    pub fn counts_as_saving_day(&self) -> bool {
        self.net_savings.is_positive() || self.is_manual_saving_day
    }
}
