//! Monthly income model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeId;
use super::money::Money;
use super::month::MonthKey;

/// An income entry for a calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyIncome {
    pub id: IncomeId,
    pub amount: Money,
    pub source: String,
    pub month: MonthKey,

    /// Recurring income counts toward every month from `month` onward
    #[serde(default)]
    pub is_recurring: bool,

    pub created_at: DateTime<Utc>,
}

impl MonthlyIncome {
    /// Create a new income entry
    pub fn new(
        amount: Money,
        source: impl Into<String>,
        month: MonthKey,
        is_recurring: bool,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            amount,
            source: source.into(),
            month,
            is_recurring,
            created_at: Utc::now(),
        }
    }

    /// Whether this entry contributes income to `month`
    pub fn applies_to(&self, month: MonthKey) -> bool {
        if self.is_recurring {
            self.month <= month
        } else {
            self.month == month
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl fmt::Display for MonthlyIncome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.is_recurring { " (recurring)" } else { "" };
        write!(f, "{} {} from {}{}", self.month, self.amount, self.source, tag)
    }
}

/// Validation errors for income entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NonPositiveAmount,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Income amount must be positive"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}
