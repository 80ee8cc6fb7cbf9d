//! Expense service
//!
//! Validates and records expenses, and keeps the derived `current_spent`
//! field of the matching budget in sync after every mutation.

use chrono::NaiveDate;

use crate::error::{NesteggError, NesteggResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money, MonthKey};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn add(
        &self,
        amount: Money,
        category: ExpenseCategory,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> NesteggResult<Expense> {
        let expense = Expense::new(amount, category, description, date);
        expense
            .validate()
            .map_err(|e| NesteggError::Validation(e.to_string()))?;

        self.storage.expenses.add(expense.clone())?;
        self.storage.expenses.save()?;
        self.refresh_budget_spent(category, MonthKey::containing(date))?;

        Ok(expense)
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> NesteggResult<()> {
        let expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| NesteggError::expense_not_found(id.to_string()))?;

        self.storage.expenses.delete(id)?;
        self.storage.expenses.save()?;
        self.refresh_budget_spent(expense.category, MonthKey::containing(expense.date))?;

        Ok(())
    }

    /// All expenses, newest first
    pub fn list(&self) -> NesteggResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses.all()?;
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    /// Expenses in a calendar month, newest first
    pub fn list_month(&self, month: MonthKey) -> NesteggResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses.in_month(month)?;
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    /// Recompute a budget's derived spend from the expense collection
    fn refresh_budget_spent(&self, category: ExpenseCategory, month: MonthKey) -> NesteggResult<()> {
        if let Some(budget) = self.storage.budgets.find_for(category, month)? {
            let spent = self
                .storage
                .expenses
                .total_for_category_month(category, month)?;
            self.storage.budgets.set_spent(budget.id, spent)?;
            self.storage.budgets.save()?;
        }
        Ok(())
    }
}
