//! Income service

use crate::error::{NesteggError, NesteggResult};
use crate::models::{Money, MonthKey, MonthlyIncome};
use crate::storage::Storage;

/// Service for monthly income management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an income entry
    pub fn add(
        &self,
        amount: Money,
        source: impl Into<String>,
        month: MonthKey,
        is_recurring: bool,
    ) -> NesteggResult<MonthlyIncome> {
        let income = MonthlyIncome::new(amount, source, month, is_recurring);
        income
            .validate()
            .map_err(|e| NesteggError::Validation(e.to_string()))?;

        self.storage.income.add(income.clone())?;
        self.storage.income.save()?;
        Ok(income)
    }

    /// Income entries contributing to a month
    pub fn list_month(&self, month: MonthKey) -> NesteggResult<Vec<MonthlyIncome>> {
        self.storage.income.for_month(month)
    }

    /// Total income for a month
    pub fn total_for_month(&self, month: MonthKey) -> NesteggResult<Money> {
        self.storage.income.total_for_month(month)
    }
}
