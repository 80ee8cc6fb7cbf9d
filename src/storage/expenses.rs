//! Expense repository

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::NesteggResult;
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money, MonthKey};

use super::collection::{Collection, Identified};

impl Identified for Expense {
    type Key = ExpenseId;

    fn key(&self) -> ExpenseId {
        self.id
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    inner: Collection<Expense>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            inner: Collection::new(path),
        }
    }

    pub fn load(&self) -> NesteggResult<()> {
        self.inner.load()
    }

    pub fn save(&self) -> NesteggResult<()> {
        self.inner.save()
    }

    pub fn all(&self) -> NesteggResult<Vec<Expense>> {
        self.inner.all()
    }

    pub fn add(&self, expense: Expense) -> NesteggResult<()> {
        self.inner.add(expense)
    }

    pub fn get(&self, id: ExpenseId) -> NesteggResult<Option<Expense>> {
        self.inner.get(&id)
    }

    pub fn delete(&self, id: ExpenseId) -> NesteggResult<bool> {
        self.inner.remove(&id)
    }

    pub fn count(&self) -> NesteggResult<usize> {
        self.inner.count()
    }

    /// Expenses dated within [start, end] inclusive
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> NesteggResult<Vec<Expense>> {
        self.inner.filter(|e| e.date >= start && e.date <= end)
    }

    /// Expenses in a calendar month
    pub fn in_month(&self, month: MonthKey) -> NesteggResult<Vec<Expense>> {
        self.inner.filter(|e| month.contains(e.date))
    }

    /// Total spend within [start, end] inclusive
    pub fn total_in_range(&self, start: NaiveDate, end: NaiveDate) -> NesteggResult<Money> {
        Ok(self.in_range(start, end)?.iter().map(|e| e.amount).sum())
    }

    /// Total spend for one category within [start, end] inclusive
    pub fn total_for_category_in_range(
        &self,
        category: ExpenseCategory,
        start: NaiveDate,
        end: NaiveDate,
    ) -> NesteggResult<Money> {
        Ok(self
            .inner
            .filter(|e| e.category == category && e.date >= start && e.date <= end)?
            .iter()
            .map(|e| e.amount)
            .sum())
    }

    /// Total spend for one category in a calendar month
    pub fn total_for_category_month(
        &self,
        category: ExpenseCategory,
        month: MonthKey,
    ) -> NesteggResult<Money> {
        self.total_for_category_in_range(category, month.start_date(), month.end_date())
    }

    /// Whether any expense in the window falls on a weekend
    pub fn any_weekend_in_range(&self, start: NaiveDate, end: NaiveDate) -> NesteggResult<bool> {
        Ok(self
            .inner
            .filter(|e| e.is_weekend() && e.date >= start && e.date <= end)?
            .first()
            .is_some())
    }
}
