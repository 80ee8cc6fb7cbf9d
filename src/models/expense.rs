//! Expense model
//!
//! A single logged expense. Expenses are immutable once created; the only
//! mutation the application supports is deletion.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// A logged expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Amount spent; expected positive
    pub amount: Money,

    pub category: ExpenseCategory,

    #[serde(default)]
    pub description: String,

    /// Calendar date the expense occurred
    pub date: NaiveDate,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense dated `date`
    pub fn new(
        amount: Money,
        category: ExpenseCategory,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category,
            description: description.into(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Whether the expense falls on a Saturday or Sunday
    pub fn is_weekend(&self) -> bool {
        matches!(
            self.date.weekday(),
            chrono::Weekday::Sat | chrono::Weekday::Sun
        )
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {} ({})", self.date, self.amount, self.category, self.id)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be positive"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
