//! Monthly category budget model
//!
//! One budget per (category, month) pair. `current_spent` is derived from
//! the expenses of the same month and category; services recompute it after
//! every expense mutation rather than trusting the stored value.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::BudgetId;
use super::money::Money;
use super::month::MonthKey;

/// A spending limit for one category in one calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub category: ExpenseCategory,
    pub monthly_limit: Money,

    /// Derived: total expenses for (category, month). Recomputed, not entered.
    #[serde(default)]
    pub current_spent: Money,

    pub month: MonthKey,
}

impl Budget {
    /// Create a new budget with nothing spent yet
    pub fn new(category: ExpenseCategory, monthly_limit: Money, month: MonthKey) -> Self {
        Self {
            id: BudgetId::new(),
            category,
            monthly_limit,
            current_spent: Money::zero(),
            month,
        }
    }

    /// Amount left before the limit; negative when overspent
    pub fn remaining(&self) -> Money {
        self.monthly_limit - self.current_spent
    }

    /// Whether spending has exceeded the limit
    pub fn is_overspent(&self) -> bool {
        self.current_spent > self.monthly_limit
    }

    /// Spent as a fraction of the limit (0.0 when the limit is zero)
    pub fn utilization(&self) -> f64 {
        self.current_spent.ratio_of(self.monthly_limit)
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.monthly_limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit);
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} of {}",
            self.month, self.category, self.current_spent, self.monthly_limit
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLimit => write!(f, "Budget limit must be positive"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
