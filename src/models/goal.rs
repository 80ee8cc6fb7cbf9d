//! Savings goal model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::GoalCategory;
use super::ids::GoalId;
use super::money::Money;

/// A savings goal with a target amount and deadline
///
/// `current_amount` may exceed `target_amount`: over-achievement is allowed
/// and never clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub deadline: NaiveDate,
    pub category: GoalCategory,
    pub created_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Create a new goal starting from zero saved
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        deadline: NaiveDate,
        category: GoalCategory,
    ) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
            category,
            created_at: Utc::now(),
        }
    }

    /// Record a contribution toward the goal (no clamping at the target)
    pub fn contribute(&mut self, amount: Money) {
        self.current_amount += amount;
    }

    /// Amount still needed; zero once the target is reached or exceeded
    pub fn remaining(&self) -> Money {
        let diff = self.target_amount - self.current_amount;
        if diff.is_negative() {
            Money::zero()
        } else {
            diff
        }
    }

    /// Progress toward the target as a percentage (may exceed 100)
    pub fn progress_percent(&self) -> f64 {
        if !self.target_amount.is_positive() {
            return 0.0;
        }
        self.current_amount.ratio_of(self.target_amount) * 100.0
    }

    /// Whether the goal has been reached
    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} by {}",
            self.name, self.current_amount, self.target_amount, self.deadline
        )
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Goal target must be positive"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_goal() -> SavingsGoal {
        SavingsGoal::new(
            "Vacation",
            Money::from_major(1200),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            GoalCategory::Travel,
        )
    }

    #[test]
    fn test_new_goal_starts_at_zero() {
        let goal = test_goal();
        assert!(goal.current_amount.is_zero());
        assert_eq!(goal.remaining(), Money::from_major(1200));
        assert!(!goal.is_reached());
    }

    #[test]
    fn test_contribute_accumulates() {
        let mut goal = test_goal();
        goal.contribute(Money::from_major(500));
        goal.contribute(Money::from_major(300));
        assert_eq!(goal.current_amount, Money::from_major(800));
        assert_eq!(goal.remaining(), Money::from_major(400));
    }

    #[test]
    fn test_over_achievement_not_clamped() {
        let mut goal = test_goal();
        goal.contribute(Money::from_major(1500));
        assert_eq!(goal.current_amount, Money::from_major(1500));
        assert!(goal.is_reached());
        assert_eq!(goal.remaining(), Money::zero());
        assert_eq!(goal.progress_percent(), 125.0);
    }

    #[test]
    fn test_progress_percent_zero_target() {
        let mut goal = test_goal();
        goal.target_amount = Money::zero();
        assert_eq!(goal.progress_percent(), 0.0);
    }

    #[test]
    fn test_validation() {
        let goal = test_goal();
        assert!(goal.validate().is_ok());

        let mut unnamed = test_goal();
        unnamed.name = "  ".into();
        assert_eq!(unnamed.validate(), Err(GoalValidationError::EmptyName));

        let mut zero_target = test_goal();
        zero_target.target_amount = Money::zero();
        assert_eq!(
            zero_target.validate(),
            Err(GoalValidationError::NonPositiveTarget)
        );
    }

    #[test]
    fn test_serialization() {
        let goal = test_goal();
        let json = serde_json::to_string(&goal).unwrap();
        let back: SavingsGoal = serde_json::from_str(&json).unwrap();
        assert_eq!(goal.id, back.id);
        assert_eq!(goal.target_amount, back.target_amount);
        assert_eq!(goal.deadline, back.deadline);
    }
}
